//! Event listener wiring.
//!
//! Listeners live for the whole page, so closures are leaked with
//! `forget()`. Async work is spawned via `wasm_bindgen_futures::spawn_local`.

use gloo_timers::callback::Timeout;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

/// Attach a handler for `event` on `target`.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_err()
    {
        gloo_console::warn!("could not bind listener:", event.to_string());
    }
    cb.forget();
}

/// Helper: attach a click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        $crate::events::listen::<web_sys::MouseEvent, _>($el.as_ref(), "click", $cb)
    }};
}

pub(crate) use on_click;

/// Run `f` once after `ms` milliseconds. Fire-and-forget.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}
