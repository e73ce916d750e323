//! "Consultar" buttons on product cards.

use crate::dom;
use crate::events::on_click;
use crate::whatsapp;
use mc_contact_core::ClickSource;
use mc_whatsapp::product_inquiry_message;

pub fn init() {
    for btn in dom::query_all(".product-btn") {
        let el = btn.clone();
        on_click!(btn, move |event: web_sys::MouseEvent| {
            event.prevent_default();
            let Some(card) = el.closest(".product-card").ok().flatten() else {
                return;
            };
            let message = product_inquiry_message(
                &dom::text_of(&card, ".product-title"),
                &dom::text_of(&card, ".product-description"),
            );
            whatsapp::open(&message, ClickSource::ProductInquiry);
        });
    }
}
