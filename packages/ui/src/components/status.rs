use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center py-12 text-neutral-500 text-sm",
            "{label}"
        }
    }
}

/// Inline error box with an optional retry action.
#[component]
pub fn ErrorMessage(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem] flex items-center justify-between gap-3",
            span { "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
