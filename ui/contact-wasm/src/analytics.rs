//! Bridge to the page's analytics scripts.
//!
//! Google Analytics (`gtag`) and the Facebook Pixel (`fbq`) are optional
//! globals. Every event is also written to the console.

use crate::dom;
use js_sys::{Function, Reflect};
use mc_contact_core::{AnalyticsEvent, AnalyticsSink};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Serialize)]
struct GtagParams<'a> {
    event_category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<u32>,
}

#[derive(Serialize)]
struct PixelParams {
    content_name: &'static str,
    content_category: String,
}

#[derive(Clone, Copy, Default)]
pub struct PageAnalytics;

impl AnalyticsSink for PageAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        if let Some(gtag) = global_fn("gtag") {
            let params = GtagParams {
                event_category: event.category(),
                event_label: event.label(),
                value: event.value(),
            };
            if let Ok(params) = serde_wasm_bindgen::to_value(&params) {
                let _ = gtag.call3(
                    &JsValue::NULL,
                    &JsValue::from_str("event"),
                    &JsValue::from_str(event.name()),
                    &params,
                );
            }
        }

        match event {
            AnalyticsEvent::WhatsAppClick(source) => {
                if let Some(fbq) = global_fn("fbq") {
                    let params = PixelParams {
                        content_name: "WhatsApp Click",
                        content_category: source.label(),
                    };
                    if let Ok(params) = serde_wasm_bindgen::to_value(&params) {
                        let _ = fbq.call3(
                            &JsValue::NULL,
                            &JsValue::from_str("track"),
                            &JsValue::from_str("Contact"),
                            &params,
                        );
                    }
                }
                gloo_console::log!("WhatsApp click tracked:", source.label());
            }
            _ => gloo_console::log!("Form Event:", event.name()),
        }
    }
}

fn global_fn(name: &str) -> Option<Function> {
    Reflect::get(&dom::window(), &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub fn track(event: AnalyticsEvent) {
    PageAnalytics.track(&event);
}
