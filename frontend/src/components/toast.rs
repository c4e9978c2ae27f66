//! Transient notification display.
//!
//! Handlers push toasts through [`push_toast`]; the [`Toaster`] renders
//! the current queue and each toast removes itself after a timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::{Toast, MAX_TOASTS, TOAST_DURATION_MS};
use crate::state::new_id;

/// Push a fire-and-forget notification.
///
/// The toast is appended to the queue (oldest entries drop off past
/// [`MAX_TOASTS`]), echoed to the console, and scheduled for dismissal
/// after [`TOAST_DURATION_MS`].
pub fn push_toast(set_toasts: WriteSignal<Vec<Toast>>, title: &str, description: &str) {
    let timestamp = js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .as_string()
        .unwrap_or_else(|| "00:00:00".to_string());

    let toast = Toast {
        id: new_id(),
        title: title.to_string(),
        description: description.to_string(),
        timestamp,
    };
    let id = toast.id.clone();

    set_toasts.update(|toasts| {
        toasts.push(toast);
        if toasts.len() > MAX_TOASTS {
            toasts.remove(0);
        }
    });

    log::info!("{}: {}", title, description);

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    });
}

/// Stacked toast cards, mounted once by the page controller.
#[component]
pub fn Toaster(
    /// Signal for the toast queue
    toasts: ReadSignal<Vec<Toast>>,
    /// Set toasts signal (for manual dismissal)
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    view! {
        <div class="toaster" id="toaster">
            <For
                each=move || toasts.get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    let dismiss = move |_| {
                        set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
                    };

                    view! {
                        <div class="toast">
                            <div class="toast-body">
                                <div class="toast-title">{toast.title.clone()}</div>
                                <div class="toast-description">{toast.description.clone()}</div>
                                <div class="toast-time">{toast.timestamp.clone()}</div>
                            </div>
                            <button class="toast-dismiss" on:click=dismiss>"✕"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
