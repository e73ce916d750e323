//! Opening WhatsApp from buttons that are not links.

use crate::analytics;
use crate::dom;
use crate::events;
use crate::state;
use mc_contact_core::{AnalyticsEvent, ClickSource};
use mc_whatsapp::compose_whatsapp_url;
use web_sys::Element;

/// Track the click and open a chat with the store line in a new tab.
pub fn open(message: &str, source: ClickSource) {
    let url = compose_whatsapp_url(&state::config().widget_whatsapp_number, message);
    analytics::track(AnalyticsEvent::WhatsAppClick(source));
    if dom::window()
        .open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer")
        .is_err()
    {
        gloo_console::warn!("could not open", url);
    }
}

/// Briefly shrink `el` to acknowledge a press.
pub fn press(el: &Element, scale: &str) {
    dom::set_style(el, "transform", &format!("scale({scale})"));
    let el = el.clone();
    events::after(state::config().timings.press_ms, move || {
        dom::set_style(&el, "transform", "scale(1)");
    });
}
