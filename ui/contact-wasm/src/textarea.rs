//! Auto-growing textareas and the character counter under `#message`.

use crate::dom;
use crate::events::listen;
use crate::state;
use mc_contact_core::CharCounter;
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;

const COUNTER_CLASS: &str = "char-counter";

pub fn init() {
    for el in dom::query_all("textarea") {
        let Ok(textarea) = el.dyn_into::<HtmlTextAreaElement>() else {
            continue;
        };
        let ta = textarea.clone();
        listen(&textarea, "input", move |_: web_sys::Event| {
            dom::set_style(&ta, "height", "auto");
            dom::set_style(&ta, "height", &format!("{}px", ta.scroll_height()));
        });
    }

    if let Some(message) = dom::by_id_typed::<HtmlTextAreaElement>("message") {
        bind_counter(&message);
    }
}

fn bind_counter(message: &HtmlTextAreaElement) {
    let Some(parent) = message.parent_element() else {
        return;
    };
    let Ok(counter) = dom::create_element("div") else {
        return;
    };
    counter.set_class_name(COUNTER_CLASS);
    dom::set_style(&counter, "text-align", "right");
    dom::set_style(&counter, "font-size", "0.8rem");
    dom::set_style(&counter, "margin-top", "0.25rem");
    let _ = parent.append_child(&counter);

    let max_length = state::config().message_max_length;
    let _ = message.set_attribute("maxlength", &max_length.to_string());

    listen(message, "input", move |_: web_sys::Event| refresh_counter());
    refresh_counter();
}

/// Re-read `#message` and update its counter.
pub fn refresh_counter() {
    let Some(message) = dom::by_id_typed::<HtmlTextAreaElement>("message") else {
        return;
    };
    let Some(counter) = message
        .parent_element()
        .and_then(|p| dom::query_within(&p, &format!(".{COUNTER_CLASS}")))
    else {
        return;
    };

    let reading = CharCounter::new(state::config().message_max_length).read(&message.value());
    counter.set_text_content(Some(&reading.text));
    dom::set_style(&counter, "color", reading.level.color());
}
