//! toastbox demo - web demo exercising every toast variant
//!
//! A minimal web app with fixture buttons: one per toast kind, a sticky
//! pinned toast, action buttons, and a loader toast driven through
//! `set_percent` to completion. Serve with `dx serve --platform web`.

#[cfg(target_arch = "wasm32")]
mod app {
    use dioxus::prelude::*;
    use toastbox::{
        show_error_toast, show_info_toast, show_loader_toast, show_success_toast, Toast,
        ToastButton, ToastOptions,
    };

    pub const MAIN_CSS: Asset = asset!("/assets/main.css");

    fn log_failure(result: Result<Toast, toastbox::ToastError>) {
        if let Err(err) = result {
            tracing::error!(%err, "failed to show toast");
        }
    }

    #[component]
    pub fn App() -> Element {
        let mut loader = use_signal(|| None::<Toast>);
        let mut loader_percent = use_signal(|| 0u32);

        rsx! {
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            div { class: "demo",
                h1 { "toastbox demo" }
                p { "Hover a toast to pause its countdown; pin it to keep it around." }
                div { class: "demo-buttons",
                    button {
                        onclick: move |_| {
                            log_failure(show_success_toast("Album imported", ToastOptions::default(), None));
                        },
                        "Success"
                    }
                    button {
                        onclick: move |_| {
                            let options = ToastOptions::new()
                                .title("Import")
                                .button(ToastButton::new("Retry", || {
                                    log_failure(show_info_toast("Retrying...", ToastOptions::default(), None));
                                }))
                                .button(ToastButton::new("Ignore", || {}).style_class("Muted"));
                            log_failure(show_error_toast("Import failed", options, None));
                        },
                        "Error with actions"
                    }
                    button {
                        onclick: move |_| {
                            log_failure(show_info_toast("", ToastOptions::new().duration(2000), None));
                        },
                        "Quick info"
                    }
                    button {
                        onclick: move |_| {
                            let options = ToastOptions::new()
                                .duration(toastbox::progress::DURATION_NEVER)
                                .title("Sticky");
                            log_failure(show_info_toast("Dismiss me by hand", options, None));
                        },
                        "Sticky"
                    }
                    button {
                        onclick: move |_| {
                            match show_loader_toast("Syncing library", ToastOptions::default(), None) {
                                Ok(toast) => {
                                    loader_percent.set(0);
                                    loader.set(Some(toast));
                                }
                                Err(err) => tracing::error!(%err, "failed to show toast"),
                            }
                        },
                        "Start loader"
                    }
                    button {
                        onclick: move |_| {
                            let Some(toast) = loader() else {
                                return;
                            };
                            let next = (loader_percent() + 10).min(100);
                            loader_percent.set(next);
                            toast.set_percent(next);
                            toast.set_text(&format!("Syncing library ({next}%)"));
                            if next >= 100 {
                                toast.set_text("Sync complete");
                                toast.dismiss(600);
                                loader.set(None);
                            }
                        },
                        "Advance loader"
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("toastbox-demo targets the browser; run it with `dx serve --platform web`");
}
