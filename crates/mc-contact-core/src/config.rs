//! Page configuration.
//!
//! Every field has a default, so a page may override only what it needs
//! through an inline JSON block.

use anyhow::{Context, Result, bail};
use mc_whatsapp::{FORM_WHATSAPP_NUMBER, WIDGET_WHATSAPP_NUMBER};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_whatsapp_number: String,
    pub widget_whatsapp_number: String,
    pub transport: Transport,
    pub timings: Timings,
    /// Scroll offset past which scrolling down tucks the floating button away.
    pub scroll_threshold_px: f64,
    /// Distance below the viewport top used to pick the current section.
    pub section_probe_offset_px: f64,
    pub message_max_length: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_whatsapp_number: FORM_WHATSAPP_NUMBER.to_owned(),
            widget_whatsapp_number: WIDGET_WHATSAPP_NUMBER.to_owned(),
            transport: Transport::default(),
            timings: Timings::default(),
            scroll_threshold_px: 200.0,
            section_probe_offset_px: 200.0,
            message_max_length: 500,
        }
    }
}

impl ContactConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: ContactConfig =
            serde_json::from_str(raw).context("parsing contact config")?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        for (label, number) in [
            ("form_whatsapp_number", &self.form_whatsapp_number),
            ("widget_whatsapp_number", &self.widget_whatsapp_number),
        ] {
            if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
                bail!("{label} must contain digits only, got {number:?}");
            }
        }
        if let Transport::Http { endpoint } = &self.transport {
            if endpoint.trim().is_empty() {
                bail!("http transport requires an endpoint");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transport {
    /// Pretend to deliver after a fixed delay.
    Simulated { delay_ms: u32 },
    /// `POST` the payload as JSON.
    Http { endpoint: String },
}

impl Default for Transport {
    fn default() -> Self {
        Transport::Simulated { delay_ms: 2_000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub banner_ms: u32,
    pub fallback_ms: u32,
    pub modal_ms: u32,
    pub tooltip_delay_ms: u32,
    pub tooltip_ms: u32,
    pub pulse_interval_ms: u32,
    pub shake_ms: u32,
    pub press_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            banner_ms: 5_000,
            fallback_ms: 10_000,
            modal_ms: 10_000,
            tooltip_delay_ms: 3_000,
            tooltip_ms: 5_000,
            pulse_interval_ms: 10_000,
            shake_ms: 500,
            press_ms: 150,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ContactConfig::from_json("{}").unwrap();
        assert_eq!(config, ContactConfig::default());
        assert_eq!(config.form_whatsapp_number, "5562932901188");
        assert_eq!(config.widget_whatsapp_number, "556232901188");
        assert_eq!(config.transport, Transport::Simulated { delay_ms: 2_000 });
    }

    #[test]
    fn partial_override() {
        let config = ContactConfig::from_json(
            r#"{
                "transport": { "kind": "http", "endpoint": "/contact" },
                "timings": { "banner_ms": 8000 }
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.transport,
            Transport::Http {
                endpoint: "/contact".into()
            }
        );
        assert_eq!(config.timings.banner_ms, 8_000);
        assert_eq!(config.timings.fallback_ms, 10_000);
    }

    #[test]
    fn rejects_formatted_phone_numbers() {
        let err = ContactConfig::from_json(r#"{ "widget_whatsapp_number": "+55 62 3290-1188" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("widget_whatsapp_number"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ContactConfig::from_json("{ transport: ").unwrap_err();
        assert!(err.to_string().contains("parsing contact config"));
    }
}
