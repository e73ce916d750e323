use async_trait::async_trait;
use mc_api_types::{ContactSubmission, SubmitAck};
use thiserror::Error;
use tracing::{info, warn};

pub const GENERIC_FAILURE_MESSAGE: &str = "Erro ao enviar mensagem. Tente novamente.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("submission rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl SubmitError {
    /// Text shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected(Some(reason)) if !reason.trim().is_empty() => reason.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Delivers a validated contact form.
///
/// Futures are not `Send`: the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitAck, SubmitError>;
}

/// Runs one delivery attempt and logs its outcome.
pub async fn deliver<S>(submitter: &S, submission: &ContactSubmission) -> Result<SubmitAck, SubmitError>
where
    S: Submitter + ?Sized,
{
    info!(subject = %submission.subject, "submitting contact form");
    let outcome = submitter.submit(submission).await;
    match &outcome {
        Ok(_) => info!("contact form delivered"),
        Err(err) => warn!(error = %err, "contact form delivery failed"),
    }
    outcome
}
