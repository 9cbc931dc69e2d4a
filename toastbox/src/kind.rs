//! Toast kinds and their presentation data

/// The kind of a toast. Purely presentational: it selects the kind class on
/// the root element and the fallback message used when no text is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    /// A toast indicating a successful operation.
    Successful,
    /// A toast indicating an error.
    Error,
    /// A toast providing information.
    #[default]
    Info,
}

impl ToastKind {
    /// CSS class added to the root `.Toast` element.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Successful => "Success",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }

    /// Message shown when the caller passes no text.
    pub fn default_text(self) -> &'static str {
        match self {
            Self::Successful => "Operation successful",
            Self::Error => "An error occurred",
            Self::Info => "Processing...",
        }
    }

    /// Falls back to [`default_text`](Self::default_text) when `text` is
    /// empty. Empty and unset are deliberately the same case here.
    pub fn resolve_text(self, text: &str) -> &str {
        if text.is_empty() {
            self.default_text()
        } else {
            text
        }
    }
}
