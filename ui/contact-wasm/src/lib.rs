//! Madeiraço contact page WASM frontend
//!
//! Contact form validation and delivery, the floating WhatsApp button,
//! quick messages, product inquiries and the desktop WhatsApp chooser.
//! Each concern lives in its own module; page features whose anchor
//! elements are absent are skipped.

pub mod analytics;
pub mod config;
pub mod contact_form;
pub mod dom;
pub mod events;
pub mod float;
pub mod modal;
pub mod products;
pub mod quick;
pub mod state;
pub mod textarea;
pub mod transport;
pub mod whatsapp;

use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    state::set_config(config::load());

    if dom::by_id("contact-form").is_some() {
        contact_form::init()?;
    }
    textarea::init();

    if dom::by_id("whatsapp-float").is_some() {
        float::init()?;
    }
    quick::init()?;
    products::init();
    float::add_status_indicators();

    // Runs last so the chooser also covers links added above.
    modal::init();

    Ok(())
}
