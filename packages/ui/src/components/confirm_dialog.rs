use dioxus::prelude::*;

use super::ModalOverlay;

/// Yes/no confirmation in a modal. Closing the overlay counts as cancel.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = false)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "p-6 flex flex-col gap-4",
                p { class: "text-neutral-800", "{message}" }
                div {
                    class: "flex justify-end gap-2",
                    button {
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Working..." } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}
