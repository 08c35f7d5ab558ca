//! Explore feed: paginated, de-duplicated, with a client-side tag filter.
//!
//! Pages are requested when the sentinel below the list scrolls into view.
//! Filtering by tag only narrows what is already loaded and pauses
//! pagination until the filter is cleared.

use dioxus::prelude::*;
use ui::components::{ErrorMessage, LoadingIndicator, PostCard, TagFilter};
use ui::{use_services, Failure, FeedPhase, FeedState, LoadTicket};

use crate::Route;

#[component]
pub fn Explore() -> Element {
    let services = use_services();
    let nav = use_navigator();
    let mut feed = use_signal(|| FeedState::new(services.config.feed.page_size));

    let load_page = use_callback(move |ticket: LoadTicket| {
        let posts = services.posts.clone();
        let page_size = feed.peek().page_size();
        spawn(async move {
            let outcome = posts
                .fetch_page(ticket.page, page_size)
                .await
                .map_err(|e| {
                    tracing::warn!("feed page {} failed: {e}", ticket.page);
                    Failure::for_feed(&e).message("Failed to load posts.")
                });
            feed.write().complete(ticket, outcome);
        });
    });

    use_hook(move || {
        let ticket = feed.write().begin_first_load();
        if let Some(ticket) = ticket {
            load_page.call(ticket);
        }
    });

    let mut load_more = move || {
        let ticket = feed.write().begin_next_load();
        if let Some(ticket) = ticket {
            load_page.call(ticket);
        }
    };

    let state = feed.read();
    let visible: Vec<api::Post> = state.visible_posts().into_iter().cloned().collect();
    let phase = state.phase().clone();
    let filtering = state.is_filtering();
    let can_continue = state.can_continue();
    let active_tag = state.tag_filter().to_string();
    drop(state);

    rsx! {
        section {
            class: "flex flex-col gap-4",
            h1 { class: "text-neutral-800 font-bold text-2xl", "Explore" }

            TagFilter {
                active: active_tag,
                on_select: move |tag: String| feed.write().set_tag_filter(tag),
            }

            if phase == FeedPhase::LoadingFirst {
                LoadingIndicator {}
            } else if visible.is_empty() && !matches!(phase, FeedPhase::Error(_)) {
                p {
                    class: "text-neutral-500 text-sm py-8 text-center",
                    if filtering { "No loaded snippets carry this tag yet." } else { "Nothing has been shared yet." }
                }
            }

            div {
                class: "grid gap-4 md:grid-cols-2",
                for post in visible {
                    PostCard {
                        key: "{post.id}",
                        post: post.clone(),
                        on_open: move |id: String| {
                            nav.push(Route::PostDetail { id });
                        },
                    }
                }
            }

            match phase {
                FeedPhase::LoadingMore => rsx! { LoadingIndicator { label: "Loading more..." } },
                FeedPhase::Error(message) => rsx! {
                    ErrorMessage {
                        message,
                        on_retry: move |_| {
                            let ticket = feed.write().retry();
                            if let Some(ticket) = ticket {
                                load_page.call(ticket);
                            }
                        },
                    }
                },
                FeedPhase::Exhausted if !filtering => rsx! {
                    p { class: "text-neutral-400 text-xs text-center py-4", "You've reached the end." }
                },
                _ => rsx! {},
            }

            if can_continue {
                div {
                    class: "feed-sentinel flex justify-center py-4",
                    onvisible: move |evt| {
                        if evt.is_intersecting().unwrap_or(false) {
                            load_more();
                        }
                    },
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| load_more(),
                        "Load more"
                    }
                }
            }
        }
    }
}
