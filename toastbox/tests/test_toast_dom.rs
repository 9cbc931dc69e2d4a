//! Browser-side behavior tests: DOM structure contract, container
//! management, countdown/pin/hover/dismiss lifecycle.
//!
//! Run with `wasm-pack test --headless --chrome` (or `--firefox`).

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use toastbox::progress::DURATION_NEVER;
use toastbox::{
    show_loader_toast, show_toast, Toast, ToastButton, ToastKind, ToastOptions, TOAST_BOX_ID,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, HtmlElement, MouseEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Tests share one document; each starts from a container-free slate.
fn reset_dom() {
    if let Some(container) = document().get_element_by_id(TOAST_BOX_ID) {
        container.remove();
    }
}

fn query(root: &HtmlElement, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

fn progress_width(toast: &Toast) -> String {
    let value: HtmlElement = query(&toast.element(), ".Toast-ProgressBar-Value")
        .unwrap()
        .unchecked_into();
    value.style().get_property_value("width").unwrap()
}

fn hover(toast: &Toast, event_name: &str) {
    let event = MouseEvent::new(event_name).unwrap();
    toast.element().dispatch_event(&event).unwrap();
}

async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}

fn pinned_options() -> ToastOptions {
    ToastOptions::new().duration(DURATION_NEVER)
}

#[wasm_bindgen_test]
fn container_is_a_singleton_and_keeps_call_order() {
    reset_dom();

    let first = show_toast(ToastKind::Info, "one", pinned_options(), None).unwrap();
    let second = show_toast(ToastKind::Error, "two", pinned_options(), None).unwrap();

    let container = document().get_element_by_id(TOAST_BOX_ID).unwrap();
    assert_eq!(container.child_element_count(), 2);
    assert_eq!(container.first_element_child().unwrap(), *first.element());
    assert_eq!(container.last_element_child().unwrap(), *second.element());

    // Prepended: the container sits before any other body content.
    let body = document().body().unwrap();
    assert_eq!(body.first_element_child().unwrap(), container);
}

#[wasm_bindgen_test]
fn renders_kind_class_and_structure() {
    reset_dom();

    let toast = show_toast(
        ToastKind::Successful,
        "Saved",
        pinned_options().title("Library"),
        None,
    )
    .unwrap();
    let element = toast.element();

    assert!(element.class_list().contains("Toast"));
    assert!(element.class_list().contains("Success"));
    assert_eq!(
        query(&element, ".Toast-Title").unwrap().text_content(),
        Some("Library".to_owned())
    );
    assert_eq!(
        query(&element, ".Toast-Text").unwrap().text_content(),
        Some("Saved".to_owned())
    );
    assert!(query(&element, ".Toast-ProgressBar .Toast-ProgressBar-Value").is_some());
}

#[wasm_bindgen_test]
fn empty_text_renders_the_kind_default() {
    reset_dom();

    let toast = show_toast(ToastKind::Info, "", pinned_options(), None).unwrap();
    assert_eq!(
        query(&toast.element(), ".Toast-Text").unwrap().text_content(),
        Some("Processing...".to_owned())
    );
}

#[wasm_bindgen_test]
fn suppressing_both_controls_drops_the_action_box() {
    reset_dom();

    let toast = show_toast(
        ToastKind::Info,
        "quiet",
        pinned_options().no_pin().no_dismiss(),
        None,
    )
    .unwrap();
    let element = toast.element();

    assert!(query(&element, ".Toast-Action.Pin").is_none());
    assert!(query(&element, ".Toast-Action.Dismiss").is_none());
    assert!(query(&element, ".Toast-ActionBox").is_none());
}

#[wasm_bindgen_test]
fn buttons_render_in_order_and_fire() {
    reset_dom();

    let clicked = Rc::new(Cell::new(false));
    let flag = Rc::clone(&clicked);
    let options = pinned_options()
        .button(ToastButton::new("Retry", move || flag.set(true)).style_class("btn-primary"))
        .button(ToastButton::new("Ignore", || {}));
    let toast = show_toast(ToastKind::Error, "Import failed", options, None).unwrap();
    let element = toast.element();

    let buttons = element.query_selector_all(".Toast-Button").unwrap();
    assert_eq!(buttons.length(), 2);

    let first: HtmlElement = buttons.get(0).unwrap().unchecked_into();
    assert_eq!(first.text_content(), Some("Retry".to_owned()));
    assert!(first.class_list().contains("btn-primary"));

    first.click();
    assert!(clicked.get());
}

#[wasm_bindgen_test]
fn loader_toast_is_pinned_with_a_spinner() {
    reset_dom();

    let toast = show_loader_toast("", ToastOptions::default(), None).unwrap();
    let element = toast.element();

    assert!(toast.is_pinned());
    assert!(query(&element, ".Toast-LoaderBox .Toast-Loader").is_some());
    assert!(query(&element, ".Toast-Action.Dismiss").is_none());
    assert_eq!(
        query(&element, ".Toast-Text").unwrap().text_content(),
        Some("Processing...".to_owned())
    );
}

#[wasm_bindgen_test]
fn only_loader_suppresses_the_content_region() {
    reset_dom();

    let toast = show_toast(
        ToastKind::Info,
        "hidden",
        pinned_options().with_loader().only_loader(),
        None,
    )
    .unwrap();
    let element = toast.element();

    assert!(query(&element, ".Toast-Content").is_none());
    assert!(query(&element, ".Toast-LoaderBox").is_some());
    let body = query(&element, ".Toast-Body").unwrap();
    assert!(body.class_list().contains("Toast-LoaderOnly"));
}

#[wasm_bindgen_test]
fn set_percent_freezes_the_countdown() {
    reset_dom();

    let toast = show_toast(
        ToastKind::Info,
        "working",
        ToastOptions::new().duration(5000),
        None,
    )
    .unwrap();

    toast.set_percent(42);
    assert!(toast.is_pinned());
    assert_eq!(progress_width(&toast), "42%");
}

#[wasm_bindgen_test]
async fn pin_halts_percent_advancement() {
    reset_dom();

    let toast = show_toast(
        ToastKind::Info,
        "busy",
        ToastOptions::new().duration(1000),
        None,
    )
    .unwrap();

    sleep(150).await;
    toast.pin(0);
    let frozen = toast.current_percent();
    assert!(frozen.unwrap() > 0);
    assert!(query(&toast.element(), ".Toast-Action.Pin").is_none());

    sleep(300).await;
    assert_eq!(toast.current_percent(), frozen);
    assert!(toast.is_pinned());
}

#[wasm_bindgen_test]
async fn countdown_runs_to_completion_and_removes_the_toast() {
    reset_dom();

    let toast = show_toast(
        ToastKind::Info,
        "Hello",
        ToastOptions::new().duration(1000).no_pause_on_hover(),
        None,
    )
    .unwrap();
    assert!(toast.element().is_connected());

    // 100 ticks at 8ms, then the leave choreography (two frames + 500ms).
    sleep(2500).await;

    assert_eq!(toast.current_percent(), Some(100));
    assert!(!toast.element().is_connected());
    let container = document().get_element_by_id(TOAST_BOX_ID).unwrap();
    assert_eq!(container.child_element_count(), 0);
}

#[wasm_bindgen_test]
async fn hover_pauses_and_resumes_from_the_frozen_percent() {
    reset_dom();

    let toast = show_toast(
        ToastKind::Info,
        "hover me",
        ToastOptions::new().duration(3000),
        None,
    )
    .unwrap();

    sleep(300).await;
    hover(&toast, "mouseenter");
    let frozen = toast.current_percent().unwrap();
    assert!(frozen > 0);

    sleep(300).await;
    assert_eq!(toast.current_percent(), Some(frozen));

    hover(&toast, "mouseleave");
    sleep(300).await;
    let resumed = toast.current_percent().unwrap();
    assert!(resumed > frozen, "resumed at {resumed}, frozen at {frozen}");
    assert!(!toast.is_pinned());
}

#[wasm_bindgen_test]
async fn dismiss_handle_cancels_the_pending_delay() {
    reset_dom();

    let toast = show_toast(ToastKind::Info, "stay", pinned_options(), None).unwrap();

    let handle = toast.dismiss(300);
    handle.cancel();
    sleep(1200).await;
    assert!(toast.element().is_connected());

    toast.dismiss(0);
    sleep(900).await;
    assert!(!toast.element().is_connected());
}

#[wasm_bindgen_test]
async fn double_dismiss_is_harmless() {
    reset_dom();

    let toast = show_toast(ToastKind::Info, "going", pinned_options(), None).unwrap();
    toast.dismiss(0);
    toast.dismiss(0);

    sleep(900).await;
    assert!(!toast.element().is_connected());
}

#[wasm_bindgen_test]
async fn set_text_updates_in_place() {
    reset_dom();

    let toast = show_loader_toast("Importing 1 of 3", ToastOptions::default(), None).unwrap();
    toast.set_text("Importing 2 of 3");
    assert_eq!(
        query(&toast.element(), ".Toast-Text").unwrap().text_content(),
        Some("Importing 2 of 3".to_owned())
    );

    // A leaving toast gains the Bye class before it is detached.
    toast.dismiss(0);
    sleep(200).await;
    assert!(toast.element().class_list().contains("Bye"));
}
