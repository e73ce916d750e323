//! "Mensagens Rápidas" panel appended to `#contato`.

use crate::dom;
use crate::events::on_click;
use crate::whatsapp;
use mc_contact_core::ClickSource;
use mc_whatsapp::QuickMessage;
use wasm_bindgen::prelude::*;

const PANEL_STYLE: &str = r#"
.quick-btn {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem;
    background: white;
    border: 2px solid #25D366;
    border-radius: 10px;
    color: #25D366;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.3s ease;
    min-width: 120px;
}
.quick-btn:hover {
    background: #25D366;
    color: white;
    transform: translateY(-2px);
    box-shadow: 0 5px 15px rgba(37, 211, 102, 0.3);
}
.quick-btn i { font-size: 1.2rem; }
@media (max-width: 768px) {
    .quick-buttons { flex-direction: column; align-items: center; }
    .quick-btn { width: 100%; max-width: 250px; }
}
"#;

fn panel_html() -> String {
    let buttons: String = QuickMessage::ALL
        .iter()
        .map(|m| {
            format!(
                r#"<button type="button" class="quick-btn" data-message="{key}"><i class="{icon}"></i> {label}</button>"#,
                key = m.key(),
                icon = m.icon(),
                label = m.label(),
            )
        })
        .collect();

    format!(
        r#"<div class="quick-messages-container" style="background: #f8f9fa; padding: 2rem; border-radius: 15px; margin-top: 2rem; text-align: center;">
    <h3 style="color: #8B4513; margin-bottom: 1rem;"><i class="fab fa-whatsapp"></i> Mensagens Rápidas</h3>
    <p style="color: #666; margin-bottom: 1.5rem;">Clique em uma das opções abaixo para enviar uma mensagem pré-definida</p>
    <div class="quick-buttons" style="display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap;">{buttons}</div>
</div>"#
    )
}

pub fn init() -> Result<(), JsValue> {
    let Some(section) = dom::by_id("contato") else {
        return Ok(());
    };

    if let Some(head) = dom::document().head() {
        let style = dom::create_element("style")?;
        style.set_text_content(Some(PANEL_STYLE));
        head.append_child(&style)?;
    }

    let panel = dom::create_block("div", "quick-messages", &panel_html())?;
    section.append_child(&panel)?;

    for btn in dom::query_all_within(&panel, ".quick-btn") {
        let el = btn.clone();
        on_click!(btn, move |_: web_sys::MouseEvent| {
            let quick = el
                .get_attribute("data-message")
                .as_deref()
                .and_then(QuickMessage::from_key);
            if let Some(quick) = quick {
                whatsapp::open(quick.text(), ClickSource::Quick(quick));
            }
            whatsapp::press(&el, "0.95");
        });
    }
    Ok(())
}
