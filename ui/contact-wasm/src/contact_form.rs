//! Contact form binding.
//!
//! Copies control values into the `ContactFormModel`, forwards blur, input,
//! focus and submit events, and renders field errors, the submit button,
//! banners and the WhatsApp fallback block from the model.

use crate::analytics;
use crate::dom::{self, Control, FormElements};
use crate::events::{self, listen};
use crate::state;
use crate::transport;
use mc_contact_core::{
    AnalyticsEvent, Banner, BannerKind, Completion, ContactFormModel, FallbackOffer, FieldState,
    SubmitAttempt, deliver,
};
use wasm_bindgen::prelude::*;

const ERROR_COLOR: &str = "#e74c3c";
const LOADING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Enviando..."#;

pub fn init() -> Result<(), JsValue> {
    let els = FormElements::bind()?;
    let config = state::config();

    let names: Vec<String> = els.controls.iter().map(Control::name).collect();
    state::install_form(ContactFormModel::new(names, config.form_whatsapp_number));
    state::set_submit_label(els.submit_btn.inner_html());

    label_controls(&els);
    bind_events(&els);
    Ok(())
}

fn bind_events(els: &FormElements) {
    for control in &els.controls {
        let target = control.element();

        {
            let control = control.clone();
            listen(target, "blur", move |_: web_sys::Event| {
                let name = control.name();
                let value = control.value();
                let outcome = state::with_form(|m| m.on_blur(&name, &value));
                render_control(&control);
                if matches!(outcome, Some(Err(_))) {
                    shake(&control);
                }
            });
        }
        {
            let control = control.clone();
            listen(target, "input", move |_: web_sys::Event| {
                let name = control.name();
                let value = control.value();
                let outcome = state::with_form(|m| m.on_input(&name, &value));
                render_control(&control);
                if matches!(outcome, Some(Err(_))) {
                    shake(&control);
                }
            });
        }
        listen(target, "focus", move |_: web_sys::Event| {
            if state::with_form(ContactFormModel::note_focus).unwrap_or(false) {
                analytics::track(AnalyticsEvent::FormStart);
            }
        });
    }

    let els2 = els.clone();
    listen(&els.form, "submit", move |event: web_sys::Event| {
        event.prevent_default();
        analytics::track(AnalyticsEvent::FormSubmit);
        on_submit(&els2);
    });
}

fn sync_values(els: &FormElements) {
    let values: Vec<(String, String)> = els
        .controls
        .iter()
        .map(|c| (c.name(), c.value()))
        .collect();
    state::with_form(|m| {
        for (name, value) in &values {
            m.set_value(name, value);
        }
    });
}

fn on_submit(els: &FormElements) {
    sync_values(els);
    let Some(attempt) = state::with_form(ContactFormModel::begin_submit) else {
        return;
    };
    render_fields(els);

    match attempt {
        SubmitAttempt::Busy => {}
        SubmitAttempt::Invalid { failed } => {
            for name in failed {
                if let Some(control) = els.control(&name) {
                    shake(control);
                }
            }
        }
        SubmitAttempt::Started(submission) => {
            set_loading(els, true);
            let els2 = els.clone();
            let transport = state::config().transport;
            wasm_bindgen_futures::spawn_local(async move {
                let submitter = transport::submitter_for(&transport);
                let outcome = deliver(submitter.as_ref(), &submission).await;
                let completion = state::with_form(|m| m.finish_submit(outcome)).flatten();
                set_loading(&els2, false);
                if let Some(completion) = completion {
                    render_completion(&els2, &completion);
                }
            });
        }
    }
}

// ── Rendering ──

fn render_fields(els: &FormElements) {
    for control in &els.controls {
        render_control(control);
    }
}

fn render_control(control: &Control) {
    let name = control.name();
    let Some(field) = state::with_form(|m| m.field(&name).cloned()).flatten() else {
        return;
    };
    render_field(control, &field);
}

/// Error nodes are tagged with their control's name so controls sharing a
/// wrapper never clear each other's messages.
fn error_selector(name: &str) -> String {
    format!(r#".field-error[data-field="{name}"]"#)
}

/// Sync one control's error class and message node with its field state.
/// Leaves at most one `.field-error` for the control.
fn render_field(control: &Control, field: &FieldState) {
    let el = control.element();
    let Some(parent) = el.parent_element() else {
        return;
    };

    dom::remove_class(el, "error");
    dom::set_style(el, "border-color", "");
    dom::remove_all(&parent, &error_selector(&field.name));

    let Some(error) = &field.error else {
        return;
    };
    dom::add_class(el, "error");
    dom::set_style(el, "border-color", ERROR_COLOR);

    if let Ok(node) = dom::create_element("div") {
        node.set_class_name("field-error");
        let _ = node.set_attribute("data-field", &field.name);
        node.set_text_content(Some(&error.to_string()));
        let _ = node.set_attribute("role", "alert");
        let _ = node.set_attribute("aria-live", "polite");
        dom::set_style(&node, "color", ERROR_COLOR);
        dom::set_style(&node, "font-size", "0.8rem");
        dom::set_style(&node, "margin-top", "0.25rem");
        dom::set_style(&node, "animation", "fadeIn 0.3s ease");
        let _ = parent.append_child(&node);
    }
}

fn shake(control: &Control) {
    let el = control.element().clone();
    dom::set_style(&el, "animation", "shake 0.5s ease-in-out");
    events::after(state::config().timings.shake_ms, move || {
        dom::set_style(&el, "animation", "");
    });
}

fn set_loading(els: &FormElements, loading: bool) {
    let btn = &els.submit_btn;
    if loading {
        btn.set_inner_html(LOADING_LABEL);
        btn.set_disabled(true);
        dom::set_style(btn, "opacity", "0.7");
    } else {
        btn.set_inner_html(&state::submit_label());
        btn.set_disabled(false);
        dom::set_style(btn, "opacity", "1");
    }
}

fn render_completion(els: &FormElements, completion: &Completion) {
    if completion.reset {
        els.form.reset();
        for control in &els.controls {
            if let Some(parent) = control.element().parent_element() {
                dom::remove_class(&parent, "focused");
            }
        }
        crate::textarea::refresh_counter();
    }
    render_fields(els);
    show_banner(els, &completion.banner);
    show_fallback(els, &completion.fallback);
}

fn show_banner(els: &FormElements, banner: &Banner) {
    let form: &web_sys::Element = els.form.as_ref();
    dom::remove_all(form, ".form-success, .form-error");

    let (class, icon, style) = match banner.kind {
        BannerKind::Success => (
            "form-success",
            "fas fa-check-circle",
            "background: #d4edda; color: #155724; border: 1px solid #c3e6cb;",
        ),
        BannerKind::Error => (
            "form-error",
            "fas fa-exclamation-triangle",
            "background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb;",
        ),
    };
    let html = format!(
        r#"<div style="{style} padding: 1rem; border-radius: 8px; margin-bottom: 1rem; display: flex; align-items: center; gap: 0.5rem; animation: fadeIn 0.5s ease;"><i class="{icon}"></i><span class="banner-text"></span></div>"#
    );
    let Ok(node) = dom::create_block("div", class, &html) else {
        return;
    };
    // Server-provided text goes in as text, never as markup.
    if let Some(span) = dom::query_within(&node, ".banner-text") {
        span.set_text_content(Some(&banner.text));
    }
    let _ = form.insert_before(&node, form.first_child().as_ref());
    dom::scroll_into_view_centered(&node);

    let id = banner.id;
    events::after(state::config().timings.banner_ms, move || {
        if state::with_form(|m| m.dismiss_banner(id)).unwrap_or(false) {
            node.remove();
        }
    });
}

fn show_fallback(els: &FormElements, offer: &FallbackOffer) {
    let form: &web_sys::Element = els.form.as_ref();
    dom::remove_all(form, ".whatsapp-fallback");

    let html = format!(
        r#"<div style="background: #e8f5e8; color: #2d5a2d; padding: 1rem; border-radius: 8px; border: 1px solid #c3e6cb; margin-top: 1rem; text-align: center; animation: fadeIn 0.5s ease;">
    <p style="margin-bottom: 1rem;"><i class="fab fa-whatsapp"></i> {prompt}</p>
    <a href="{url}" target="_blank" rel="noopener" class="btn btn-primary"><i class="fab fa-whatsapp"></i> Abrir no WhatsApp</a>
</div>"#,
        prompt = mc_contact_core::form::FALLBACK_PROMPT,
        url = offer.url,
    );
    let Ok(node) = dom::create_block("div", "whatsapp-fallback", &html) else {
        return;
    };
    let _ = form.append_child(&node);

    let id = offer.id;
    events::after(state::config().timings.fallback_ms, move || {
        if state::with_form(|m| m.dismiss_fallback(id)).unwrap_or(false) {
            node.remove();
        }
    });
}

/// Give every unlabeled control the text of its `<label for=…>`.
fn label_controls(els: &FormElements) {
    let form: &web_sys::Element = els.form.as_ref();
    for control in &els.controls {
        let el = control.element();
        if el.get_attribute("aria-label").is_some() {
            continue;
        }
        let id = el.id();
        if id.is_empty() {
            continue;
        }
        let label = dom::query_within(form, &format!(r#"label[for="{id}"]"#))
            .and_then(|l| l.text_content());
        if let Some(text) = label {
            let _ = el.set_attribute("aria-label", text.trim());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_selector_targets_one_control() {
        assert_eq!(error_selector("email"), r#".field-error[data-field="email"]"#);
        assert_ne!(error_selector("email"), error_selector("phone"));
    }
}
