use dioxus::prelude::*;
use ui::components::PostEditor;
use ui::{use_services, Failure, PostForm};

use crate::Route;

#[component]
pub fn PostCreate() -> Element {
    let services = use_services();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let initial = PostForm::new(services.config.editor.default_language.clone());

    let handle_submit = move |form: PostForm| {
        let posts = services.posts.clone();
        spawn(async move {
            error.set(None);
            let request = match form.validate() {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            saving.set(true);
            match posts.create(&request).await {
                Ok(post) => {
                    tracing::info!("created post {}", post.id);
                    nav.replace(Route::PostDetail { id: post.id });
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(Failure::for_submit(&e).message("Failed to create the post.")));
                }
            }
        });
    };

    rsx! {
        section {
            class: "flex flex-col gap-4",
            h1 { class: "text-neutral-800 font-bold text-2xl", "New snippet" }
            PostEditor {
                initial,
                submit_label: "Publish",
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
