//! DOM helpers and element bindings.
//!
//! Each page feature binds its own elements once at startup. Features whose
//! anchor element is missing from the page are skipped.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

fn collect(nl: &web_sys::NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn text_of(el: &Element, selector: &str) -> String {
    query_within(el, selector)
        .and_then(|e| e.text_content())
        .unwrap_or_default()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

/// Create an element with a class and inner HTML in one go.
pub fn create_block(tag: &str, class: &str, html: &str) -> Result<Element, JsValue> {
    let el = create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.set_inner_html(html);
    Ok(el)
}

pub fn remove_all(parent: &Element, selector: &str) {
    for el in query_all_within(parent, selector) {
        el.remove();
    }
}

pub fn scroll_into_view_centered(el: &Element) {
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

// ── Form controls ──

/// One named control of the contact form.
#[derive(Clone)]
pub enum Control {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    pub fn from_element(el: Element) -> Option<Control> {
        let el = match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Control::Input(input)),
            Err(el) => el,
        };
        let el = match el.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(Control::Select(select)),
            Err(el) => el,
        };
        el.dyn_into::<HtmlTextAreaElement>().ok().map(Control::TextArea)
    }

    pub fn element(&self) -> &Element {
        match self {
            Control::Input(el) => el.as_ref(),
            Control::Select(el) => el.as_ref(),
            Control::TextArea(el) => el.as_ref(),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Control::Input(el) => el.name(),
            Control::Select(el) => el.name(),
            Control::TextArea(el) => el.name(),
        }
    }

    pub fn value(&self) -> String {
        match self {
            Control::Input(el) => el.value(),
            Control::Select(el) => el.value(),
            Control::TextArea(el) => el.value(),
        }
    }
}

// ── Elements ──

/// References used by the contact form. Clone-friendly (JS handles).
#[derive(Clone)]
pub struct FormElements {
    pub form: HtmlFormElement,
    pub submit_btn: HtmlButtonElement,
    pub controls: Vec<Control>,
}

impl FormElements {
    /// Resolve the form, its submit button and its controls.
    pub fn bind() -> Result<FormElements, JsValue> {
        let form = by_id_typed::<HtmlFormElement>("contact-form")
            .ok_or_else(|| JsValue::from_str("missing form #contact-form"))?;
        let submit_btn = query_within(&form, r#"button[type="submit"]"#)
            .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok())
            .ok_or_else(|| JsValue::from_str("missing submit button in #contact-form"))?;
        let controls = query_all_within(&form, "input, select, textarea")
            .into_iter()
            .filter_map(Control::from_element)
            .collect();

        Ok(FormElements {
            form,
            submit_btn,
            controls,
        })
    }

    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.name() == name)
    }
}

/// References used by the floating WhatsApp button.
#[derive(Clone)]
pub struct FloatElements {
    pub float: HtmlElement,
    pub link: Element,
}

impl FloatElements {
    pub fn bind() -> Result<FloatElements, JsValue> {
        let float = by_id_typed::<HtmlElement>("whatsapp-float")
            .ok_or_else(|| JsValue::from_str("missing element #whatsapp-float"))?;
        let link = query_within(&float, "a")
            .ok_or_else(|| JsValue::from_str("missing link in #whatsapp-float"))?;
        Ok(FloatElements { float, link })
    }
}
