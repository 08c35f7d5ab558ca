use dioxus::prelude::*;

use crate::feed::TAG_PRESETS;

/// Row of preset tag filters above the feed.
#[component]
pub fn TagFilter(active: String, on_select: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "flex flex-wrap gap-2 mb-6",
            for tag in TAG_PRESETS {
                button {
                    key: "{tag}",
                    class: if tag.eq_ignore_ascii_case(&active) { "tag-chip active" } else { "tag-chip" },
                    onclick: move |_| on_select.call(tag.to_string()),
                    "{tag}"
                }
            }
        }
    }
}
