//! Contact form delivery.
//!
//! `SimulatedSubmitter` stands in for a backend: it waits and reports
//! success. `HttpSubmitter` posts JSON and reads `{ success, message }`.

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use mc_api_types::{ContactApiResponse, ContactSubmission, SubmitAck};
use mc_contact_core::{SubmitError, Submitter, Transport};

pub struct SimulatedSubmitter {
    delay_ms: u32,
}

#[async_trait(?Send)]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, _submission: &ContactSubmission) -> Result<SubmitAck, SubmitError> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(SubmitAck::default())
    }
}

pub struct HttpSubmitter {
    endpoint: String,
}

#[async_trait(?Send)]
impl Submitter for HttpSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitAck, SubmitError> {
        let resp = Request::post(&self.endpoint)
            .json(submission)
            .map_err(|e| SubmitError::InvalidResponse(format!("encoding payload: {e}")))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let text = resp
            .text()
            .await
            .map_err(|e| SubmitError::Network(format!("reading body: {e}")))?;

        let reply: ContactApiResponse = match serde_json::from_str(&text) {
            Ok(reply) => reply,
            Err(_) if !resp.ok() => {
                return Err(SubmitError::Network(format!(
                    "{} {}",
                    resp.status(),
                    resp.status_text()
                )));
            }
            Err(e) => return Err(SubmitError::InvalidResponse(format!("{e}: {text}"))),
        };

        if reply.success {
            Ok(SubmitAck {
                message: reply.message,
            })
        } else {
            Err(SubmitError::Rejected(reply.message))
        }
    }
}

pub fn submitter_for(transport: &Transport) -> Box<dyn Submitter> {
    match transport {
        Transport::Simulated { delay_ms } => Box::new(SimulatedSubmitter {
            delay_ms: *delay_ms,
        }),
        Transport::Http { endpoint } => Box::new(HttpSubmitter {
            endpoint: endpoint.clone(),
        }),
    }
}
