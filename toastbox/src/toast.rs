//! The toast widget
//!
//! A `Toast` owns one DOM subtree and drives its own lifecycle:
//!
//! ```text
//! building -> countdown <-> paused (hover) -> dismissing -> removed
//!          \-> pinned ----------------------^
//! ```
//!
//! At most one countdown interval is ever live per toast; pinning,
//! dismissing and re-arming all cancel it first. Timer and listener handles
//! cancel on drop, so ownership of the `Inner` cell is the whole cleanup
//! story.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::ToastError;
use crate::kind::ToastKind;
use crate::options::{TextAlign, ToastOptions};
use crate::progress::{self, REMOVE_DELAY_MS};
use crate::wasm_utils::{self, ElementEventListener};

/// A handle to one on-screen toast.
///
/// Cheap to clone; all clones drive the same widget. Toasts created through
/// [`show_toast`](crate::toast_box::show_toast) stay alive until removed even
/// if every handle is dropped. A toast built directly with [`Toast::new`]
/// lives only as long as some handle does.
#[derive(Clone)]
pub struct Toast {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    element: HtmlElement,
    text_element: Option<HtmlElement>,
    progress_value: HtmlElement,
    pin_button: Option<HtmlElement>,
    is_pinned: bool,
    current_percent: Option<u32>,
    /// The live countdown. Single owner: replaced (old one canceled)
    /// whenever a new countdown starts.
    countdown: Option<Interval>,
    /// Outer delay of a scheduled dismissal.
    pending_dismiss: Option<Timeout>,
    /// Final detach timer of the leave choreography.
    removal: Option<Timeout>,
    hover_listeners: Option<(ElementEventListener, ElementEventListener)>,
    click_listeners: Vec<ElementEventListener>,
    options: ToastOptions,
}

impl Inner {
    fn set_progress_width(&self, percent: u32) {
        let _ = self
            .progress_value
            .style()
            .set_property("width", &format!("{percent}%"));
    }
}

/// Cancels the outer delay of a pending dismissal scheduled with
/// [`Toast::dismiss`]. Once the leave animation has begun the dismissal can
/// no longer be aborted.
pub struct DismissHandle {
    inner: Weak<RefCell<Inner>>,
}

impl DismissHandle {
    pub fn cancel(self) {
        if let Some(inner) = self.inner.upgrade() {
            if inner.borrow_mut().pending_dismiss.take().is_some() {
                debug!("pending dismissal canceled");
            }
        }
    }
}

impl Toast {
    /// Builds the toast's DOM subtree and, unless the options pin it,
    /// starts the auto-dismiss countdown.
    ///
    /// The element is not attached to anything yet;
    /// [`show_toast`](crate::toast_box::show_toast) is the usual way in.
    pub fn new(kind: ToastKind, text: &str, options: ToastOptions) -> Result<Toast, ToastError> {
        let document = wasm_utils::document()?;
        let resolved_text = kind.resolve_text(text).to_owned();

        debug!(kind = kind.class_name(), text = %resolved_text, "building toast");

        let element = create_el(&document, "div", "")?;
        element.set_class_name(&format!("Toast {}", kind.class_name()));

        let mut pin_button = None;
        let mut dismiss_button = None;
        if options.has_action_box() {
            let action_box = create_el(&document, "div", "Toast-ActionBox")?;
            if options.shows_pin_control() {
                let button = create_el(&document, "button", "Toast-Action Pin")?;
                append(&button, &create_el(&document, "i", "fas fa-thumbtack")?)?;
                append(&action_box, &button)?;
                pin_button = Some(button);
            }
            if options.shows_dismiss_control() {
                let button = create_el(&document, "button", "Toast-Action Dismiss")?;
                append(&button, &create_el(&document, "i", "fas fa-times")?)?;
                append(&action_box, &button)?;
                dismiss_button = Some(button);
            }
            append(&element, &action_box)?;
        }

        // The text element always exists so set_text keeps working, but it is
        // only attached when the content region is rendered.
        let text_element = create_el(&document, "p", "Toast-Text")?;
        text_element.set_text_content(Some(&resolved_text));
        apply_text_styles(
            &text_element,
            options.text_align,
            &options.text_size,
            &options.text_weight,
        );

        let has_content = options.has_content(&resolved_text);
        let body_class = if options.loader_only(has_content) {
            "Toast-Body Toast-LoaderOnly"
        } else {
            "Toast-Body"
        };
        let body = create_el(&document, "div", body_class)?;

        if options.has_loader {
            let loader_box = create_el(&document, "div", "Toast-LoaderBox")?;
            append(&loader_box, &create_el(&document, "div", "Toast-Loader")?)?;
            append(&body, &loader_box)?;
        }

        let mut click_listeners = Vec::new();
        if has_content {
            let content = create_el(&document, "div", "Toast-Content")?;
            if let Some(title) = &options.title {
                let title_element = create_el(&document, "h5", "Toast-Title")?;
                title_element.set_text_content(Some(title));
                apply_text_styles(
                    &title_element,
                    options.title_align,
                    &options.title_size,
                    &options.title_weight,
                );
                append(&content, &title_element)?;
            }
            append(&content, &text_element)?;
            if !options.buttons.is_empty() {
                let button_box = create_el(&document, "div", "Toast-ButtonBox")?;
                for spec in &options.buttons {
                    let class = match &spec.style_class {
                        Some(style) => format!("Toast-Button {style}"),
                        None => "Toast-Button".to_owned(),
                    };
                    let button = create_el(&document, "button", &class)?;
                    button.set_text_content(Some(&spec.text));
                    let on_click = Rc::clone(&spec.on_click);
                    click_listeners.push(ElementEventListener::new(&button, "click", move |_| {
                        on_click()
                    }));
                    append(&button_box, &button)?;
                }
                append(&content, &button_box)?;
            }
            append(&body, &content)?;
        }

        let progress_bar = create_el(&document, "div", "Toast-ProgressBar")?;
        let progress_value = create_el(&document, "div", "Toast-ProgressBar-Value")?;
        append(&progress_bar, &progress_value)?;
        append(&body, &progress_bar)?;
        append(&element, &body)?;

        let is_pinned = options.starts_pinned();
        let duration_ms = options.resolved_duration_ms();

        let toast = Toast {
            inner: Rc::new(RefCell::new(Inner {
                element,
                text_element: Some(text_element),
                progress_value,
                pin_button,
                is_pinned,
                current_percent: None,
                countdown: None,
                pending_dismiss: None,
                removal: None,
                hover_listeners: None,
                click_listeners,
                options,
            })),
        };

        // The controls are wired after the fact because their callbacks need
        // a (weak) handle back to the widget.
        {
            let mut inner = toast.inner.borrow_mut();
            if let Some(button) = inner.pin_button.clone() {
                let weak = Rc::downgrade(&toast.inner);
                let listener = ElementEventListener::new(&button, "click", move |_| {
                    if let Some(inner) = weak.upgrade() {
                        Toast { inner }.pin(0);
                    }
                });
                inner.click_listeners.push(listener);
            }
            if let Some(button) = dismiss_button {
                let weak = Rc::downgrade(&toast.inner);
                let listener = ElementEventListener::new(&button, "click", move |_| {
                    if let Some(inner) = weak.upgrade() {
                        Toast { inner }.dismiss(0);
                    }
                });
                inner.click_listeners.push(listener);
            }
        }

        if !is_pinned {
            toast.start_countdown(duration_ms, 0);
        }

        Ok(toast)
    }

    /// Pins the toast so it will not auto-dismiss, and force-sets the
    /// progress bar to `percent`.
    ///
    /// Cancels any running countdown and removes the pin control. Idempotent:
    /// a second call just re-sets the percent.
    pub fn pin(&self, percent: u32) {
        let mut inner = self.inner.borrow_mut();
        debug!(percent, "pinning toast");
        inner.is_pinned = true;
        inner.countdown = None;
        if let Some(button) = inner.pin_button.take() {
            button.remove();
        }
        inner.set_progress_width(percent);
    }

    /// Sets the visible progress to `percent`.
    ///
    /// This always pins: there is intentionally no way to show a percent
    /// while the countdown keeps running. Callers driving a long operation
    /// use this repeatedly, then [`dismiss`](Self::dismiss) or
    /// [`start_countdown`](Self::start_countdown) when done.
    pub fn set_percent(&self, percent: u32) {
        self.pin(percent);
    }

    /// Replaces the displayed text in place. No other side effects; a toast
    /// rendered without a text region ignores this.
    pub fn set_text(&self, text: &str) {
        let inner = self.inner.borrow();
        if let Some(text_element) = &inner.text_element {
            text_element.set_text_content(Some(text));
        }
    }

    /// Swaps the kind class on the root element.
    pub fn set_kind(&self, kind: ToastKind) {
        let inner = self.inner.borrow();
        let classes = inner.element.class_list();
        let _ = classes.remove_3(
            ToastKind::Info.class_name(),
            ToastKind::Successful.class_name(),
            ToastKind::Error.class_name(),
        );
        let _ = classes.add_1(kind.class_name());
    }

    /// Dismisses the toast after `delay_ms`.
    ///
    /// Cancels any running countdown, then runs the leave choreography: one
    /// animation frame to fix the rendered height as an explicit style, a
    /// second to add the `Bye` class and collapse height and margin, and a
    /// final delay before the element is detached. Re-dismissing replaces a
    /// still-pending delay; removal itself is idempotent.
    ///
    /// The returned handle cancels only the outer delay.
    pub fn dismiss(&self, delay_ms: u32) -> DismissHandle {
        let mut inner = self.inner.borrow_mut();
        debug!(delay_ms, "scheduling dismissal");
        inner.countdown = None;
        let weak = Rc::downgrade(&self.inner);
        inner.pending_dismiss = Some(Timeout::new(delay_ms, move || {
            if let Some(inner) = weak.upgrade() {
                begin_leave(inner);
            }
        }));
        DismissHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Starts (or restarts) the auto-dismiss countdown.
    ///
    /// Clears the pinned state, cancels any previous countdown and counts
    /// `initial_percent`..=100 over roughly `duration_ms`, advancing the
    /// progress bar each tick. Reaching 100 dismisses the toast. Unless the
    /// options disable it, hovering pauses the countdown and leaving resumes
    /// it from the frozen percent with a fresh countdown.
    pub fn start_countdown(&self, duration_ms: i64, initial_percent: u32) {
        let period = progress::tick_period_ms(duration_ms);
        let mut inner = self.inner.borrow_mut();
        debug!(duration_ms, initial_percent, period, "starting countdown");

        inner.is_pinned = false;
        inner.countdown = None;
        inner.current_percent = Some(initial_percent);
        inner.set_progress_width(initial_percent.min(100));

        let weak = Rc::downgrade(&self.inner);
        inner.countdown = Some(Interval::new(period, move || tick(&weak)));

        if !inner.options.no_pause_on_hover {
            let enter = {
                let weak = Rc::downgrade(&self.inner);
                ElementEventListener::new(&inner.element, "mouseenter", move |_| {
                    if let Some(inner) = weak.upgrade() {
                        inner.borrow_mut().countdown = None;
                    }
                })
            };
            let leave = {
                let weak = Rc::downgrade(&self.inner);
                ElementEventListener::new(&inner.element, "mouseleave", move |_| {
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    let (is_pinned, percent) = {
                        let inner = inner.borrow();
                        (inner.is_pinned, inner.current_percent.unwrap_or(0))
                    };
                    if !is_pinned {
                        Toast { inner }.start_countdown(duration_ms, percent);
                    }
                })
            };
            inner.hover_listeners = Some((enter, leave));
        }
    }

    /// Whether the toast is currently pinned.
    pub fn is_pinned(&self) -> bool {
        self.inner.borrow().is_pinned
    }

    /// Countdown progress, `None` until a countdown has started.
    pub fn current_percent(&self) -> Option<u32> {
        self.inner.borrow().current_percent
    }

    /// The root element, for styling or test access.
    pub fn element(&self) -> HtmlElement {
        self.inner.borrow().element.clone()
    }
}

/// One countdown tick: advance the progress bar, or stop and dismiss.
fn tick(weak: &Weak<RefCell<Inner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let finished = {
        let mut inner = inner.borrow_mut();
        let percent = inner.current_percent.unwrap_or(0);
        if percent >= 100 {
            inner.countdown = None;
            true
        } else {
            let percent = percent + 1;
            inner.current_percent = Some(percent);
            inner.set_progress_width(percent);
            false
        }
    };
    if finished {
        debug!("countdown complete");
        Toast { inner }.dismiss(0);
    }
}

/// The two-frame leave choreography.
///
/// The first frame pins the element's rendered height as an explicit style;
/// the second adds the leaving class and collapses height and margin, so the
/// browser has a committed start value to transition from. The element is
/// detached after the collapse has had time to play out.
fn begin_leave(inner: Rc<RefCell<Inner>>) {
    wasm_utils::request_animation_frame(move || {
        {
            let inner = inner.borrow();
            let height = inner.element.scroll_height();
            let _ = inner
                .element
                .style()
                .set_property("height", &format!("{height}px"));
        }
        wasm_utils::request_animation_frame(move || {
            {
                let borrowed = inner.borrow();
                let _ = borrowed.element.class_list().add_1("Bye");
                let style = borrowed.element.style();
                let _ = style.set_property("height", "0");
                let _ = style.set_property("margin", "0");
            }
            let weak = Rc::downgrade(&inner);
            let removal = Timeout::new(REMOVE_DELAY_MS, move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let element = inner.borrow().element.clone();
                // Removing an already-detached element is a no-op, which is
                // what makes double dismissal safe.
                element.remove();
                debug!("toast removed");
                crate::toast_box::release(&element);
            });
            inner.borrow_mut().removal = Some(removal);
        });
    });
}

fn create_el(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, ToastError> {
    let element: HtmlElement = document
        .create_element(tag)
        .map_err(ToastError::from_js)?
        .unchecked_into();
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

fn append(parent: &HtmlElement, child: &HtmlElement) -> Result<(), ToastError> {
    parent
        .append_child(child)
        .map(drop)
        .map_err(ToastError::from_js)
}

fn apply_text_styles(
    element: &HtmlElement,
    align: Option<TextAlign>,
    size: &Option<String>,
    weight: &Option<String>,
) {
    let style = element.style();
    if let Some(align) = align {
        let _ = style.set_property("text-align", align.as_str());
    }
    if let Some(size) = size {
        let _ = style.set_property("font-size", size);
    }
    if let Some(weight) = weight {
        let _ = style.set_property("font-weight", weight);
    }
}
