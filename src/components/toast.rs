use dioxus::prelude::*;

use crate::notify::{Notice, NoticeQueue, Severity};

/// Stacked transient notifications, dismissible by the user. Holds no
/// state of its own; everything lives in the shared queue signal.
#[component]
pub fn Toasts(notices: Signal<NoticeQueue>) -> Element {
    let mut notices = notices;
    let items: Vec<Notice> = notices.read().iter().cloned().collect();

    rsx! {
        div { class: "toast-stack",
            for notice in items {
                {
                    let id = notice.id;
                    let toast_class = match notice.severity {
                        Severity::Destructive => "toast destructive",
                        Severity::Info => "toast",
                    };
                    rsx! {
                        div { class: "{toast_class}",
                            div { class: "toast-body",
                                div { class: "toast-title", "{notice.title}" }
                                if !notice.description.is_empty() {
                                    div { class: "toast-description", "{notice.description}" }
                                }
                            }
                            button {
                                class: "toast-dismiss",
                                onclick: move |_| notices.write().dismiss(id),
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}
