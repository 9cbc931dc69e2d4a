//! toastbox - ephemeral toast notifications for web documents
//!
//! Imperative DOM toast widgets: a [`Toast`](toast::Toast) owns one DOM
//! subtree and drives its own countdown, hover pause/resume, pin and
//! dismissal, while [`show_toast`](toast_box::show_toast) drops it into a
//! lazily created singleton container. The rendered class names
//! (`.Toast`, `.Toast-ProgressBar`, ...) are a stable contract for styling.
//!
//! The countdown/option logic is target-independent; everything touching the
//! document is gated to wasm.

pub mod error;
pub mod kind;
pub mod options;
pub mod progress;
#[cfg(target_arch = "wasm32")]
pub mod toast;
#[cfg(target_arch = "wasm32")]
pub mod toast_box;
#[cfg(target_arch = "wasm32")]
mod wasm_utils;

pub use error::ToastError;
pub use kind::ToastKind;
pub use options::{TextAlign, ToastButton, ToastOptions};
#[cfg(target_arch = "wasm32")]
pub use toast::{DismissHandle, Toast};
#[cfg(target_arch = "wasm32")]
pub use toast_box::{
    ensure_toast_box, show_error_toast, show_info_toast, show_loader_toast, show_success_toast,
    show_toast, TOAST_BOX_ID,
};
