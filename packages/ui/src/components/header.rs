use dioxus::prelude::*;

use crate::auth::{use_session, LogoutButton};

/// Top bar. Logged-in users get navigation and logout; everyone else a login
/// button that opens the modal via `on_login`.
#[component]
pub fn Header(on_login: EventHandler<()>) -> Element {
    let session = use_session();
    let user = session.read().user().cloned();

    rsx! {
        header {
            class: "app-header",
            Link { class: "brand", to: "/", "ClipIt" }
            nav {
                class: "flex items-center gap-4 text-sm",
                if let Some(user) = user {
                    Link { to: "/posts/new", "New snippet" }
                    Link { to: "/my-code", "My code" }
                    Link { to: "/settings", "Settings" }
                    span { class: "text-neutral-500", "{user.display_name()}" }
                    LogoutButton { class: "btn btn-secondary" }
                } else if !session.read().is_loading() {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_login.call(()),
                        "Log in"
                    }
                }
            }
        }
    }
}
