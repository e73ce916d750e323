//! Desktop chooser between the WhatsApp app and WhatsApp Web.
//!
//! Mobile browsers follow `wa.me` links directly. On desktop, clicks on
//! those links open a modal instead.

use crate::dom;
use crate::events::{self, listen, on_click};
use crate::state;
use mc_whatsapp::{WhatsAppLink, is_mobile_user_agent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, KeyboardEvent, Node};

const MODAL_CLASS: &str = "whatsapp-modal";

pub fn init() {
    let user_agent = dom::window().navigator().user_agent().unwrap_or_default();
    if is_mobile_user_agent(&user_agent) {
        return;
    }

    for el in dom::query_all(r#"a[href*="wa.me"]"#) {
        let Ok(anchor) = el.dyn_into::<HtmlAnchorElement>() else {
            continue;
        };
        let a = anchor.clone();
        on_click!(anchor, move |event: web_sys::MouseEvent| {
            // Links we cannot read keep their default behaviour.
            let Ok(link) = WhatsAppLink::parse(&a.href()) else {
                return;
            };
            event.prevent_default();
            if let Err(err) = show(&link) {
                gloo_console::error!("could not open WhatsApp chooser:", err);
            }
        });
    }

    listen(&dom::document(), "keydown", |event: KeyboardEvent| {
        if event.key() == "Escape" {
            for modal in dom::query_all(&format!(".{MODAL_CLASS}")) {
                modal.remove();
            }
        }
    });
}

fn show(link: &WhatsAppLink) -> Result<(), JsValue> {
    let html = format!(
        r#"<div class="modal-overlay" style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; z-index: 10000; animation: fadeIn 0.3s ease;">
    <div class="modal-content" style="position: relative; background: white; padding: 2rem; border-radius: 15px; max-width: 400px; text-align: center; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3); animation: scaleIn 0.3s ease;">
        <h3 style="color: #8B4513; margin-bottom: 1rem;"><i class="fab fa-whatsapp" style="color: #25D366;"></i> Abrir WhatsApp</h3>
        <p style="color: #666; margin-bottom: 2rem;">Como você gostaria de abrir o WhatsApp?</p>
        <div style="display: flex; gap: 1rem; justify-content: center;">
            <a href="{app}" target="_blank" rel="noopener" class="btn btn-primary" style="text-decoration: none;"><i class="fas fa-mobile-alt"></i> App Mobile</a>
            <a href="{web}" target="_blank" rel="noopener" class="btn btn-secondary" style="text-decoration: none;"><i class="fas fa-desktop"></i> WhatsApp Web</a>
        </div>
        <button type="button" class="close-modal" aria-label="Fechar" style="position: absolute; top: 10px; right: 15px; background: none; border: none; font-size: 1.5rem; color: #999; cursor: pointer;">&times;</button>
    </div>
</div>"#,
        app = link.app_url(),
        web = link.web_url(),
    );

    // A second click replaces the open chooser.
    for stale in dom::query_all(&format!(".{MODAL_CLASS}")) {
        stale.remove();
    }

    let modal = dom::create_block("div", MODAL_CLASS, &html)?;
    dom::document()
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&modal)?;

    if let Some(close) = dom::query_within(&modal, ".close-modal") {
        let m = modal.clone();
        on_click!(close, move |_: web_sys::MouseEvent| m.remove());
    }
    if let Some(overlay) = dom::query_within(&modal, ".modal-overlay") {
        let m = modal.clone();
        let o = overlay.clone();
        on_click!(overlay, move |event: web_sys::MouseEvent| {
            let on_overlay = event
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .is_some_and(|n| o.is_same_node(Some(&n)));
            if on_overlay {
                m.remove();
            }
        });
    }

    let m = modal.clone();
    events::after(state::config().timings.modal_ms, move || {
        if m.is_connected() {
            m.remove();
        }
    });
    Ok(())
}
