use thiserror::Error;
use url::Url;

const APP_BASE: &str = "https://wa.me";
const WEB_BASE: &str = "https://web.whatsapp.com/send";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("not a wa.me link: {0}")]
    NotWhatsApp(String),
    #[error("missing phone number in {0}")]
    MissingPhone(String),
}

/// `https://wa.me/{phone}?text={percent-encoded message}`
pub fn compose_whatsapp_url(phone: &str, message: &str) -> String {
    format!("{APP_BASE}/{phone}?text={}", urlencoding::encode(message))
}

/// `https://web.whatsapp.com/send?phone={phone}&text={percent-encoded message}`
pub fn compose_whatsapp_web_url(phone: &str, message: &str) -> String {
    format!(
        "{WEB_BASE}?phone={phone}&text={}",
        urlencoding::encode(message)
    )
}

/// A decoded `wa.me` deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    pub phone: String,
    pub text: String,
}

impl WhatsAppLink {
    pub fn new(phone: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            text: text.into(),
        }
    }

    pub fn parse(href: &str) -> Result<Self, LinkError> {
        let url = Url::parse(href).map_err(|err| LinkError::InvalidUrl(format!("{href}: {err}")))?;
        if url.host_str() != Some("wa.me") {
            return Err(LinkError::NotWhatsApp(href.to_owned()));
        }

        let phone = url.path().trim_matches('/').to_owned();
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(LinkError::MissingPhone(href.to_owned()));
        }

        let text = url
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();

        Ok(Self { phone, text })
    }

    pub fn app_url(&self) -> String {
        compose_whatsapp_url(&self.phone, &self.text)
    }

    pub fn web_url(&self) -> String {
        compose_whatsapp_web_url(&self.phone, &self.text)
    }
}
