//! Email/password login with identity-provider shortcuts.

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::forms::{validate_login, LOGIN_FAILED};
use crate::services::use_services;

#[component]
pub fn LoginForm(on_success: EventHandler<()>, on_switch_to_register: EventHandler<()>) -> Element {
    let services = use_services();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let github_url = services.config.api.provider_login_url("github");
    let google_url = services.config.api.provider_login_url("google");

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = services.auth.clone();
        spawn(async move {
            error.set(None);
            let request = match validate_login(&email(), &password()) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match auth.login(&request).await {
                Ok(response) => {
                    session.write().login(response.user, response.access_token);
                    loading.set(false);
                    on_success.call(());
                }
                Err(e) => {
                    tracing::warn!("login failed: {e}");
                    loading.set(false);
                    error.set(Some(LOGIN_FAILED.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "p-6 flex flex-col gap-4",
            h2 { class: "text-neutral-800 font-bold text-xl", "Log in to ClipIt" }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Log in" }
                }
            }

            div {
                class: "flex flex-col gap-2",
                a {
                    class: "btn btn-secondary w-full",
                    href: "{github_url}",
                    crate::Icon { width: 16, height: 16, icon: crate::brand_icons::FaGithub }
                    " Continue with GitHub"
                }
                a {
                    class: "btn btn-secondary w-full",
                    href: "{google_url}",
                    crate::Icon { width: 16, height: 16, icon: crate::brand_icons::FaGoogle }
                    " Continue with Google"
                }
            }

            p {
                class: "text-sm text-neutral-600",
                "No account yet? "
                button {
                    class: "link",
                    onclick: move |_| on_switch_to_register.call(()),
                    "Sign up"
                }
            }
        }
    }
}
