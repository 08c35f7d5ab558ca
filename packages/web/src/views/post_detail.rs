use api::Post;
use dioxus::prelude::*;
use ui::components::{author_label, CodeBlock, ConfirmDialog, ErrorMessage, LoadingIndicator};
use ui::display::age_label_now;
use ui::{use_services, use_session, Failure};

use crate::Route;

#[component]
pub fn PostDetail(id: String) -> Element {
    let services = use_services();
    let posts = services.posts.clone();
    let post = use_resource(use_reactive!(|(id,)| {
        let posts = posts.clone();
        async move { posts.fetch_by_id(&id).await }
    }));

    let view = match &*post.read() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(e)) => {
            tracing::warn!("loading post failed: {e}");
            let message = Failure::for_detail(e).message("Failed to load the post.");
            rsx! {
                div {
                    class: "flex flex-col gap-4 items-start",
                    ErrorMessage { message }
                    Link { class: "btn btn-secondary", to: Route::Root {}, "Back to the feed" }
                }
            }
        }
        Some(Ok(post)) => rsx! {
            PostView { post: post.clone() }
        },
    };
    view
}

#[component]
fn PostView(post: Post) -> Element {
    let services = use_services();
    let session = use_session();
    let nav = use_navigator();
    let mut confirming = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let owned = post.is_owned_by(session.read().user());
    let age = age_label_now(&post.created_at);
    let author = author_label(&post).to_string();
    let language = post
        .language_or(&services.config.editor.default_language)
        .to_string();
    let id = post.id.clone();

    let delete_id = post.id.clone();
    let handle_delete = move |_| {
        let posts = services.posts.clone();
        let id = delete_id.clone();
        spawn(async move {
            deleting.set(true);
            error.set(None);
            match posts.delete(&id).await {
                Ok(_) => {
                    tracing::info!("deleted post {id}");
                    nav.replace(Route::Root {});
                }
                Err(e) => {
                    deleting.set(false);
                    confirming.set(false);
                    error.set(Some(Failure::server_or_unknown(&e).message("Failed to delete the post.")));
                }
            }
        });
    };

    rsx! {
        article {
            class: "flex flex-col gap-4",
            header {
                class: "flex items-start justify-between gap-4",
                div {
                    h1 { class: "text-neutral-800 font-bold text-2xl", "{post.title}" }
                    p {
                        class: "text-sm text-neutral-500",
                        "{author} · {age}"
                        if post.is_edited() {
                            " · edited"
                        }
                    }
                }
                if owned {
                    div {
                        class: "flex gap-2",
                        Link {
                            class: "btn btn-secondary",
                            to: Route::PostEdit { id: id.clone() },
                            ui::Icon { width: 14, height: 14, icon: ui::icons::FaPenToSquare }
                            " Edit"
                        }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| confirming.set(true),
                            ui::Icon { width: 14, height: 14, icon: ui::icons::FaTrash }
                            " Delete"
                        }
                    }
                }
            }

            if let Some(message) = error() {
                ErrorMessage { message }
            }

            if !post.description.is_empty() {
                p { class: "text-neutral-700", "{post.description}" }
            }

            CodeBlock { code: post.code.clone(), language: language.clone() }

            div {
                class: "flex flex-wrap gap-1",
                for tag in post.tags.iter() {
                    span { key: "{tag}", class: "tag-chip small", "#{tag}" }
                }
            }

            if confirming() {
                ConfirmDialog {
                    message: "Delete this snippet? This cannot be undone.",
                    confirm_label: "Delete",
                    busy: deleting(),
                    on_confirm: handle_delete,
                    on_cancel: move |_| confirming.set(false),
                }
            }
        }
    }
}
