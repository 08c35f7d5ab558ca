use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "flex flex-col items-center gap-4 py-16",
            h1 { class: "text-neutral-800 font-bold text-xl", "Page not found" }
            p { class: "text-neutral-500 text-sm", "/{path}" }
            Link { class: "btn btn-secondary", to: Route::Root {}, "Back to ClipIt" }
        }
    }
}
