//! Browser interop plumbing
//!
//! Event listeners attached from Rust via a `Closure` must live as long as
//! the listener is registered. Instead of `Closure::forget()` (which leaks
//! and leaves the listener attached forever), [`ElementEventListener`] stores
//! the closure and removes the listener on drop, tying its lifetime to the
//! owning widget.

use wasm_bindgen::prelude::*;

use crate::error::ToastError;

/// An event listener that detaches itself when dropped.
pub(crate) struct ElementEventListener {
    target: web_sys::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ElementEventListener {
    /// Attaches a listener to `target`. Removed again when the returned
    /// value is dropped.
    pub(crate) fn new(
        target: &web_sys::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target: target.clone(),
            event_name,
            callback,
        }
    }
}

impl Drop for ElementEventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Schedules `f` for the next animation frame.
///
/// Uses a self-freeing one-shot closure, so nothing leaks once the frame has
/// fired. Without a window (dead document) the callback is silently dropped;
/// whatever it would have animated no longer exists.
pub(crate) fn request_animation_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("no window; dropping animation frame callback");
        return;
    };
    let callback = Closure::once_into_js(move |_timestamp: f64| f());
    let _ = window.request_animation_frame(callback.unchecked_ref::<js_sys::Function>());
}

pub(crate) fn document() -> Result<web_sys::Document, ToastError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ToastError::NoDocument)
}
