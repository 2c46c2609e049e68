use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;

#[derive(Clone, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

#[derive(Clone, PartialEq)]
pub struct ToastMessage {
    pub message: String,
    pub toast_type: ToastType,
}

/// Handle for pushing toast notifications from any page.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    pub message: Signal<Option<ToastMessage>>,
}

impl ToastHandle {
    pub fn success(&self, message: impl Into<String>) {
        self.push(message, ToastType::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message, ToastType::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(message, ToastType::Info);
    }

    fn push(&self, message: impl Into<String>, toast_type: ToastType) {
        let mut signal = self.message;
        signal.set(Some(ToastMessage {
            message: message.into(),
            toast_type,
        }));
    }
}

/// Install the toast context at the root.
pub fn use_toast_provider() -> ToastHandle {
    let message = use_signal(|| None::<ToastMessage>);
    use_context_provider(|| ToastHandle { message })
}

/// Get the toast handle from context.
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>()
}

#[component]
pub fn Toast() -> Element {
    let mut message = use_toast().message;

    // Auto-dismiss after 5 seconds when a message is shown
    use_effect(move || {
        if message().is_some() {
            spawn(async move {
                sleep(Duration::from_secs(5)).await;
                message.set(None);
            });
        }
    });

    if let Some(toast) = message() {
        let alert_class = match toast.toast_type {
            ToastType::Success => "alert-success",
            ToastType::Error => "alert-error",
            ToastType::Info => "alert-info",
        };

        rsx! {
            div { class: "toast toast-bottom toast-end z-50",
                div {
                    class: "alert {alert_class}",
                    style: "max-width: 30vw; word-wrap: break-word; white-space: normal;",
                    span { "{toast.message}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost ml-2",
                        onclick: move |_| message.set(None),
                        "✕"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}
