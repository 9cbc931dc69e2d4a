//! The toast container and factory functions
//!
//! One `div#ToastBox` per document, created lazily and prepended to its
//! parent; every shown toast is appended to it (newest last). A registry of
//! strong handles keeps fire-and-forget toasts alive - their timers and
//! listeners keep running after the caller drops the returned handle - until
//! the dismissal choreography detaches the element.

use std::cell::RefCell;

use tracing::debug;
use web_sys::{Element, HtmlElement};

use crate::error::ToastError;
use crate::kind::ToastKind;
use crate::options::ToastOptions;
use crate::toast::Toast;
use crate::wasm_utils;

/// Id of the singleton container element.
pub const TOAST_BOX_ID: &str = "ToastBox";

thread_local! {
    // The event loop is single-threaded; no locking needed.
    static ACTIVE_TOASTS: RefCell<Vec<Toast>> = RefCell::new(Vec::new());
}

/// Returns the singleton toast container, creating it if the document does
/// not have one yet.
///
/// A new container is inserted as the first child of `parent` (the document
/// body when `None`). Safe to call repeatedly; a second container is never
/// created, even when later calls name a different parent.
pub fn ensure_toast_box(parent: Option<&Element>) -> Result<Element, ToastError> {
    let document = wasm_utils::document()?;
    if let Some(existing) = document.get_element_by_id(TOAST_BOX_ID) {
        return Ok(existing);
    }

    let container = document
        .create_element("div")
        .map_err(ToastError::from_js)?;
    container.set_id(TOAST_BOX_ID);

    match parent {
        Some(parent) => parent
            .prepend_with_node_1(&container)
            .map_err(ToastError::from_js)?,
        None => {
            let body = document.body().ok_or(ToastError::NoDocument)?;
            body.prepend_with_node_1(&container)
                .map_err(ToastError::from_js)?;
        }
    }

    debug!("toast container created");
    Ok(container)
}

/// Creates a toast, drops it into the container and returns the handle so
/// the caller can keep driving it (pin, re-arm, dismiss, update text).
pub fn show_toast(
    kind: ToastKind,
    text: &str,
    options: ToastOptions,
    parent: Option<&Element>,
) -> Result<Toast, ToastError> {
    let toast = Toast::new(kind, text, options)?;
    let container = ensure_toast_box(parent)?;
    container
        .append_child(&toast.element())
        .map_err(ToastError::from_js)?;
    ACTIVE_TOASTS.with(|toasts| toasts.borrow_mut().push(toast.clone()));
    Ok(toast)
}

pub fn show_success_toast(
    text: &str,
    options: ToastOptions,
    parent: Option<&Element>,
) -> Result<Toast, ToastError> {
    show_toast(ToastKind::Successful, text, options, parent)
}

pub fn show_error_toast(
    text: &str,
    options: ToastOptions,
    parent: Option<&Element>,
) -> Result<Toast, ToastError> {
    show_toast(ToastKind::Error, text, options, parent)
}

pub fn show_info_toast(
    text: &str,
    options: ToastOptions,
    parent: Option<&Element>,
) -> Result<Toast, ToastError> {
    show_toast(ToastKind::Info, text, options, parent)
}

/// Shows the persistent "processing" variant: an Info toast forced to
/// spinner + pinned + no dismiss control.
pub fn show_loader_toast(
    text: &str,
    options: ToastOptions,
    parent: Option<&Element>,
) -> Result<Toast, ToastError> {
    show_toast(ToastKind::Info, text, options.into_loader(), parent)
}

/// Drops the registry entry for a removed toast element. Called by the
/// dismissal choreography once the element is out of the document.
pub(crate) fn release(element: &HtmlElement) {
    ACTIVE_TOASTS.with(|toasts| {
        toasts.borrow_mut().retain(|toast| toast.element() != *element);
    });
}
