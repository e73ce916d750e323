//! Page state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The view models are the source of truth; renderers read them after every
//! event. Borrows must never be held across an `.await`.

use mc_contact_core::{ContactConfig, ContactFormModel, FloatWidgetModel};
use std::cell::RefCell;

thread_local! {
    static CONFIG: RefCell<ContactConfig> = RefCell::new(ContactConfig::default());
    static FORM: RefCell<Option<ContactFormModel>> = const { RefCell::new(None) };
    static WIDGET: RefCell<Option<FloatWidgetModel>> = const { RefCell::new(None) };
    static SUBMIT_LABEL: RefCell<String> = const { RefCell::new(String::new()) };
}

pub fn config() -> ContactConfig {
    CONFIG.with(|c| c.borrow().clone())
}

pub fn set_config(config: ContactConfig) {
    CONFIG.with(|c| *c.borrow_mut() = config);
}

pub fn install_form(model: ContactFormModel) {
    FORM.with(|f| *f.borrow_mut() = Some(model));
}

/// Run a closure with mutable access to the form model, if one is installed.
pub fn with_form<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut ContactFormModel) -> R,
{
    FORM.with(|s| s.borrow_mut().as_mut().map(f))
}

pub fn install_widget(model: FloatWidgetModel) {
    WIDGET.with(|w| *w.borrow_mut() = Some(model));
}

pub fn with_widget<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut FloatWidgetModel) -> R,
{
    WIDGET.with(|s| s.borrow_mut().as_mut().map(f))
}

/// Original inner HTML of the submit button, restored after loading.
pub fn submit_label() -> String {
    SUBMIT_LABEL.with(|l| l.borrow().clone())
}

pub fn set_submit_label(html: String) {
    SUBMIT_LABEL.with(|l| *l.borrow_mut() = html);
}
