//! Reads page overrides from `<script type="application/json" id="contact-config">`.

use crate::dom;
use mc_contact_core::ContactConfig;

const CONFIG_ELEMENT_ID: &str = "contact-config";

pub fn load() -> ContactConfig {
    let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return ContactConfig::default();
    };
    match ContactConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!("ignoring #contact-config:", format!("{err:#}"));
            ContactConfig::default()
        }
    }
}
