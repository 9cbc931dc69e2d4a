//! Error type for toast construction

/// Errors surfaced while building or inserting a toast.
///
/// Invalid option combinations are never errors; they resolve by precedence
/// (pin state wins over a suppressed pin control). Operating on an
/// already-removed toast is a silent no-op.
#[derive(Debug, thiserror::Error)]
pub enum ToastError {
    #[error("no document available")]
    NoDocument,
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl ToastError {
    pub(crate) fn from_js(value: wasm_bindgen::JsValue) -> Self {
        ToastError::Dom(format!("{value:?}"))
    }
}
