use dioxus::prelude::*;
use ui::components::{ErrorMessage, LoadingIndicator, PostCard};
use ui::{use_services, use_session, Failure};

use crate::Route;

/// Snippets written by the logged-in user.
#[component]
pub fn MyCode() -> Element {
    let services = use_services();
    let session = use_session();
    let nav = use_navigator();
    let author = session
        .read()
        .user()
        .map(|u| u.author_key().to_string())
        .unwrap_or_default();

    let posts = services.posts.clone();
    let mine = use_resource(use_reactive!(|(author,)| {
        let posts = posts.clone();
        async move { posts.fetch_by_author(&author).await }
    }));

    let body = match &*mine.read() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(e)) => {
            let message = Failure::for_feed(e).message("Failed to load your snippets.");
            rsx! { ErrorMessage { message } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            div {
                class: "flex flex-col items-center gap-4 py-12 text-neutral-500",
                p { "You haven't shared any code yet." }
                Link { class: "btn btn-primary", to: Route::PostCreate {}, "Share your first snippet" }
            }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "grid gap-4 md:grid-cols-2",
                for post in list.iter().cloned() {
                    PostCard {
                        key: "{post.id}",
                        post,
                        on_open: move |id: String| {
                            nav.push(Route::PostDetail { id });
                        },
                    }
                }
            }
        },
    };

    rsx! {
        section {
            class: "flex flex-col gap-4",
            h1 { class: "text-neutral-800 font-bold text-2xl", "My code" }
            {body}
        }
    }
}
