//! Edit screen. Only the author may edit; everyone else gets a distinct
//! not-permitted state rather than the form.

use api::{Post, UpdatePostRequest};
use dioxus::prelude::*;
use ui::components::{ErrorMessage, LoadingIndicator, PostEditor};
use ui::{use_services, use_session, Failure, PostForm};

use crate::Route;

#[component]
pub fn PostEdit(id: String) -> Element {
    let services = use_services();
    let session = use_session();
    let posts = services.posts.clone();
    let post = use_resource(use_reactive!(|(id,)| {
        let posts = posts.clone();
        async move { posts.fetch_by_id(&id).await }
    }));

    let view = match &*post.read() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(e)) => {
            let message = Failure::for_detail(e).message("Failed to load the post.");
            rsx! { ErrorMessage { message } }
        }
        Some(Ok(post)) if !post.is_owned_by(session.read().user()) => rsx! {
            div {
                class: "flex flex-col gap-4 items-start",
                ErrorMessage { message: "You are not permitted to edit this post." }
                Link { class: "btn btn-secondary", to: Route::PostDetail { id: post.id.clone() }, "Back to the post" }
            }
        },
        Some(Ok(post)) => rsx! {
            EditForm { post: post.clone() }
        },
    };
    view
}

#[component]
fn EditForm(post: Post) -> Element {
    let services = use_services();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let initial = PostForm::from_post(&post, &services.config.editor.default_language);
    let id = post.id.clone();

    let handle_submit = move |form: PostForm| {
        let posts = services.posts.clone();
        let id = id.clone();
        spawn(async move {
            error.set(None);
            let request = match form.validate() {
                Ok(request) => UpdatePostRequest::from(request),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            saving.set(true);
            match posts.update(&id, &request).await {
                Ok(updated) => {
                    tracing::info!("updated post {}", updated.id);
                    nav.replace(Route::PostDetail { id: updated.id });
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(Failure::for_submit(&e).message("Failed to update the post.")));
                }
            }
        });
    };

    rsx! {
        section {
            class: "flex flex-col gap-4",
            h1 { class: "text-neutral-800 font-bold text-2xl", "Edit snippet" }
            PostEditor {
                initial,
                submit_label: "Save changes",
                busy: saving(),
                error: error(),
                on_submit: handle_submit,
                on_cancel: move |_| {
                    nav.go_back();
                },
            }
        }
    }
}
