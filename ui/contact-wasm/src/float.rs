//! Floating WhatsApp button.
//!
//! Hover and press effects, tuck-away on downward scroll, a periodic pulse,
//! section-aware link retargeting and the after-hours tooltip.

use crate::analytics;
use crate::dom::{self, FloatElements};
use crate::events::{self, listen, on_click};
use crate::state;
use crate::whatsapp;
use gloo_timers::callback::Interval;
use mc_contact_core::{
    AnalyticsEvent, ClickSource, FloatPose, FloatWidgetModel, SectionBox, after_hours_notice,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub fn init() -> Result<(), JsValue> {
    let els = FloatElements::bind()?;
    let config = state::config();
    state::install_widget(FloatWidgetModel::new(
        config.widget_whatsapp_number,
        config.scroll_threshold_px,
        config.section_probe_offset_px,
    ));

    bind_hover(&els);
    bind_click(&els);
    bind_scroll(&els);
    start_pulse(&els, config.timings.pulse_interval_ms);
    schedule_hours_notice(&els, config.timings.tooltip_delay_ms, config.timings.tooltip_ms);
    Ok(())
}

fn bind_hover(els: &FloatElements) {
    let float = els.float.clone();
    listen(&els.float, "mouseenter", move |_: web_sys::MouseEvent| {
        dom::set_style(&float, "transform", "scale(1.1)");
        dom::set_style(&float, "box-shadow", "0 8px 30px rgba(37, 211, 102, 0.6)");
    });
    let float = els.float.clone();
    listen(&els.float, "mouseleave", move |_: web_sys::MouseEvent| {
        dom::set_style(&float, "transform", "scale(1)");
        dom::set_style(&float, "box-shadow", "0 4px 20px rgba(37, 211, 102, 0.4)");
    });
}

fn bind_click(els: &FloatElements) {
    let float = els.float.clone();
    on_click!(els.link, move |_: web_sys::MouseEvent| {
        analytics::track(AnalyticsEvent::WhatsAppClick(ClickSource::FloatingButton));
        whatsapp::press(&float, "0.9");
    });
}

/// Sections are measured on every scroll; layout may shift after load.
fn measure_sections() -> Vec<SectionBox> {
    dom::query_all("section[id]")
        .into_iter()
        .filter_map(|el| {
            let html = el.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBox::new(
                html.id(),
                f64::from(html.offset_top()),
                f64::from(html.offset_height()),
            ))
        })
        .collect()
}

fn bind_scroll(els: &FloatElements) {
    let els2 = els.clone();
    listen(&dom::window(), "scroll", move |_: web_sys::Event| {
        let scroll_top = dom::window().scroll_y().unwrap_or(0.0);
        let sections = measure_sections();
        let Some(update) = state::with_widget(|w| w.on_scroll(scroll_top, &sections)) else {
            return;
        };

        match update.pose {
            FloatPose::Tucked => {
                dom::set_style(&els2.float, "transform", "translateY(100px)");
                dom::set_style(&els2.float, "opacity", "0.7");
            }
            FloatPose::Shown => {
                dom::set_style(&els2.float, "transform", "translateY(0)");
                dom::set_style(&els2.float, "opacity", "1");
            }
        }
        let _ = els2.link.set_attribute("href", &update.href);
    });
}

/// Animations only restart when the property changes, so clear it first.
fn start_pulse(els: &FloatElements, every_ms: u32) {
    let float = els.float.clone();
    Interval::new(every_ms, move || {
        dom::set_style(&float, "animation", "none");
        let float = float.clone();
        events::after(100, move || {
            dom::set_style(&float, "animation", "pulse 2s infinite");
        });
    })
    .forget();
}

fn schedule_hours_notice(els: &FloatElements, delay_ms: u32, visible_ms: u32) {
    let float = els.float.clone();
    events::after(delay_ms, move || {
        let Some(notice) = after_hours_notice(&chrono::Local::now()) else {
            return;
        };
        let html = format!(
            r#"<div style="position: absolute; bottom: 70px; right: 0; background: #333; color: white; padding: 10px 15px; border-radius: 10px; font-size: 0.8rem; white-space: nowrap; box-shadow: 0 4px 15px rgba(0, 0, 0, 0.2); animation: fadeIn 0.3s ease;">
    <div>{title}</div>
    <div style="font-size: 0.7rem; opacity: 0.8;">{hours}</div>
    <div style="position: absolute; bottom: -5px; right: 20px; width: 0; height: 0; border-left: 5px solid transparent; border-right: 5px solid transparent; border-top: 5px solid #333;"></div>
</div>"#,
            title = notice.title,
            hours = notice.hours,
        );
        let Ok(tooltip) = dom::create_block("div", "business-hours-tooltip", &html) else {
            return;
        };
        let _ = float.append_child(&tooltip);
        events::after(visible_ms, move || tooltip.remove());
    });
}

/// Append a pulsing status dot to every WhatsApp link on the page.
pub fn add_status_indicators() {
    for link in dom::query_all(r#"a[href*="wa.me"], a[href*="whatsapp"]"#) {
        let Ok(dot) = dom::create_block("span", "whatsapp-status", r#"<i class="fas fa-circle"></i>"#)
        else {
            continue;
        };
        dom::set_style(&dot, "color", "#25D366");
        dom::set_style(&dot, "font-size", "0.6rem");
        dom::set_style(&dot, "margin-left", "0.25rem");
        dom::set_style(&dot, "animation", "pulse 2s infinite");
        let _ = link.append_child(&dot);
    }
}
