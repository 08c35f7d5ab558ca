use dioxus::prelude::*;

use super::use_login_prompt;

#[component]
pub fn Landing() -> Element {
    let prompt = use_login_prompt();

    rsx! {
        section {
            class: "flex flex-col items-center text-center gap-6 py-16",
            h1 {
                class: "text-neutral-800 font-bold text-[2.5rem]",
                "Share the snippets worth keeping"
            }
            p {
                class: "text-neutral-600 max-w-xl",
                "ClipIt is a place to save, tag and share small pieces of code. Browse what others have posted, keep your own collection, and pick a highlight theme you like."
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| prompt.open(),
                "Get started"
            }
        }
    }
}
