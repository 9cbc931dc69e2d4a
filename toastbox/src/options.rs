//! Toast configuration
//!
//! `ToastOptions` is the construction snapshot for one toast. The widget
//! keeps it around after build because the hover pause/resume wiring
//! consults it again on every countdown restart.

use std::fmt;
use std::rc::Rc;

use crate::progress::{DEFAULT_DURATION_MS, DURATION_NEVER};

/// Text alignment for the toast text or title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    End,
    Center,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
        }
    }
}

/// An action button rendered inside the toast content region.
#[derive(Clone)]
pub struct ToastButton {
    /// Button label.
    pub text: String,
    /// Extra class appended after `Toast-Button`.
    pub style_class: Option<String>,
    /// Invoked on click.
    pub on_click: Rc<dyn Fn()>,
}

impl ToastButton {
    pub fn new(text: impl Into<String>, on_click: impl Fn() + 'static) -> Self {
        Self {
            text: text.into(),
            style_class: None,
            on_click: Rc::new(on_click),
        }
    }

    pub fn style_class(mut self, class: impl Into<String>) -> Self {
        self.style_class = Some(class.into());
        self
    }
}

impl fmt::Debug for ToastButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastButton")
            .field("text", &self.text)
            .field("style_class", &self.style_class)
            .finish_non_exhaustive()
    }
}

/// Options customizing the appearance and behavior of a toast.
///
/// All fields are optional; `ToastOptions::default()` gives a plain
/// auto-dismissing toast. Setters are chainable.
#[derive(Clone, Debug, Default)]
pub struct ToastOptions {
    /// How long before the toast auto-dismisses, in milliseconds.
    /// Unset means [`DEFAULT_DURATION_MS`]; [`DURATION_NEVER`] (-1) means
    /// the toast never auto-dismisses and starts pinned.
    pub duration: Option<i64>,
    /// Title shown above the text.
    pub title: Option<String>,
    /// Start the toast pinned (no countdown).
    pub is_pinned: bool,
    /// Hide the pin control.
    pub no_pin: bool,
    /// Hide the dismiss control.
    pub no_dismiss: bool,
    pub text_align: Option<TextAlign>,
    /// Raw CSS font-size for the text, e.g. `"20px"`.
    pub text_size: Option<String>,
    /// Raw CSS font-weight for the text, e.g. `"bold"`.
    pub text_weight: Option<String>,
    pub title_align: Option<TextAlign>,
    pub title_size: Option<String>,
    pub title_weight: Option<String>,
    /// Action buttons, rendered in order.
    pub buttons: Vec<ToastButton>,
    /// Show an indeterminate spinner next to the content.
    pub has_loader: bool,
    /// Suppress the content region entirely and show only the spinner.
    pub only_loader: bool,
    /// Disable the pause-on-hover / resume-on-leave wiring.
    pub no_pause_on_hover: bool,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, ms: i64) -> Self {
        self.duration = Some(ms);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn pinned(mut self) -> Self {
        self.is_pinned = true;
        self
    }

    pub fn no_pin(mut self) -> Self {
        self.no_pin = true;
        self
    }

    pub fn no_dismiss(mut self) -> Self {
        self.no_dismiss = true;
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn text_size(mut self, size: impl Into<String>) -> Self {
        self.text_size = Some(size.into());
        self
    }

    pub fn text_weight(mut self, weight: impl Into<String>) -> Self {
        self.text_weight = Some(weight.into());
        self
    }

    pub fn title_align(mut self, align: TextAlign) -> Self {
        self.title_align = Some(align);
        self
    }

    pub fn title_size(mut self, size: impl Into<String>) -> Self {
        self.title_size = Some(size.into());
        self
    }

    pub fn title_weight(mut self, weight: impl Into<String>) -> Self {
        self.title_weight = Some(weight.into());
        self
    }

    pub fn button(mut self, button: ToastButton) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn with_loader(mut self) -> Self {
        self.has_loader = true;
        self
    }

    pub fn only_loader(mut self) -> Self {
        self.only_loader = true;
        self
    }

    pub fn no_pause_on_hover(mut self) -> Self {
        self.no_pause_on_hover = true;
        self
    }

    /// The countdown duration with the default applied.
    pub fn resolved_duration_ms(&self) -> i64 {
        self.duration.unwrap_or(DEFAULT_DURATION_MS)
    }

    /// Whether the toast begins life pinned: explicitly, or via the
    /// never-dismiss duration sentinel.
    pub fn starts_pinned(&self) -> bool {
        self.is_pinned || self.duration == Some(DURATION_NEVER)
    }

    /// Whether the action box is rendered at all.
    ///
    /// Reads the caller-set `is_pinned`, not [`Self::starts_pinned`]: a
    /// `duration: -1` toast with `no_dismiss` renders an empty action box.
    /// Long-standing behavior, kept.
    pub fn has_action_box(&self) -> bool {
        !((self.no_pin || self.is_pinned) && self.no_dismiss)
    }

    /// Whether the pin control is rendered. A toast that is already pinned
    /// has nothing to pin, so the control is dropped without complaint even
    /// if the caller also asked for it.
    pub fn shows_pin_control(&self) -> bool {
        !(self.no_pin || self.starts_pinned())
    }

    /// Whether the dismiss control is rendered.
    pub fn shows_dismiss_control(&self) -> bool {
        !self.no_dismiss
    }

    /// Whether the content region (title/text/buttons) is rendered.
    /// `resolved_text` is the text after kind-default fallback.
    pub fn has_content(&self, resolved_text: &str) -> bool {
        (self.title.is_some() || !resolved_text.is_empty() || !self.buttons.is_empty())
            && !self.only_loader
    }

    /// Whether the body collapses to the loader-only presentation.
    pub fn loader_only(&self, has_content: bool) -> bool {
        self.only_loader || (self.has_loader && !has_content)
    }

    /// The forced configuration used by the persistent "processing" toast:
    /// spinner on, pinned, no dismiss control.
    pub fn into_loader(self) -> Self {
        Self {
            has_loader: true,
            is_pinned: true,
            no_dismiss: true,
            ..self
        }
    }
}
