use api::Post;
use dioxus::prelude::*;

use crate::components::CodeBlock;
use crate::display::{age_label_now, code_preview, PREVIEW_LINES};
use crate::use_services;

/// Name shown for a post's author.
pub fn author_label(post: &Post) -> &str {
    post.author.display_name().unwrap_or("Unknown user")
}

/// Feed card: title, author, age, tags and a truncated code preview.
#[component]
pub fn PostCard(post: Post, on_open: EventHandler<String>) -> Element {
    let id = post.id.clone();
    let author = author_label(&post).to_string();
    let age = age_label_now(&post.created_at);
    let preview = code_preview(&post.code, PREVIEW_LINES);
    let language = post
        .language_or(&use_services().config.editor.default_language)
        .to_string();

    rsx! {
        article {
            class: "post-card",
            onclick: move |_| on_open.call(id.clone()),
            header {
                class: "flex items-baseline justify-between gap-2",
                h3 { class: "post-card-title", "{post.title}" }
                span { class: "text-xs text-neutral-500", "{language}" }
            }
            p {
                class: "text-xs text-neutral-500",
                "{author} · {age}"
                if post.is_edited() {
                    " · edited"
                }
            }
            if !post.description.is_empty() {
                p { class: "post-card-description", "{post.description}" }
            }
            CodeBlock { code: preview, language: language.clone() }
            div {
                class: "flex flex-wrap gap-1 mt-2",
                for tag in post.tags.iter() {
                    span { key: "{tag}", class: "tag-chip small", "#{tag}" }
                }
            }
        }
    }
}
