//! Registration with email verification. The submit button stays disabled
//! until [`RegistrationForm::can_submit`] holds.

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::failure::Failure;
use crate::forms::{registration_failure_message, RegistrationForm};
use crate::services::use_services;

#[component]
pub fn RegisterForm(on_success: EventHandler<()>, on_switch_to_login: EventHandler<()>) -> Element {
    let services = use_services();
    let mut session = use_session();
    let mut form = use_signal(RegistrationForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let send_auth = services.auth.clone();
    let send_code = move |_| {
        let auth = send_auth.clone();
        spawn(async move {
            error.set(None);
            notice.set(None);
            if let Err(e) = form.read().check_send_code() {
                error.set(Some(e.to_string()));
                return;
            }
            let email = form.read().email().to_string();
            busy.set(true);
            match auth.send_mail(&email).await {
                Ok(_) => {
                    form.write().mark_code_sent();
                    notice.set(Some(format!("A verification code was sent to {email}.")));
                }
                Err(e) => {
                    error.set(Some(Failure::server_or_unknown(&e).message("Could not send the code. Please try again.")));
                }
            }
            busy.set(false);
        });
    };

    let verify_auth = services.auth.clone();
    let verify_code = move |_| {
        let auth = verify_auth.clone();
        spawn(async move {
            error.set(None);
            notice.set(None);
            if let Err(e) = form.read().check_verify() {
                error.set(Some(e.to_string()));
                return;
            }
            let (email, code) = {
                let form = form.read();
                (form.email().to_string(), form.code.trim().to_string())
            };
            busy.set(true);
            match auth.verify_code(&email, &code).await {
                Ok(_) => {
                    form.write().mark_verified();
                    notice.set(Some("Email verified.".to_string()));
                }
                Err(e) => {
                    error.set(Some(Failure::server_or_unknown(&e).message("Verification failed. Please check the code.")));
                }
            }
            busy.set(false);
        });
    };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = services.auth.clone();
        spawn(async move {
            error.set(None);
            let request = match form.read().validate() {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            busy.set(true);
            match auth.register_and_login(&request).await {
                Ok(response) => {
                    session.write().login(response.user, response.access_token);
                    busy.set(false);
                    on_success.call(());
                }
                Err(failure) => {
                    tracing::warn!("{failure}");
                    busy.set(false);
                    error.set(Some(registration_failure_message(&failure)));
                }
            }
        });
    };

    let code_sent = form.read().code_sent();
    let verified = form.read().verified();
    let can_submit = form.read().can_submit();

    rsx! {
        div {
            class: "p-6 flex flex-col gap-4",
            h2 { class: "text-neutral-800 font-bold text-xl", "Create your account" }

            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }
                if let Some(msg) = notice() {
                    div {
                        class: "px-2.5 py-2.5 bg-green-50 border border-green-200 rounded text-green-700 text-[0.8125rem]",
                        "{msg}"
                    }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Name",
                    value: form.read().name.clone(),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                div {
                    class: "flex gap-2",
                    input {
                        class: "input flex-1",
                        r#type: "email",
                        placeholder: "Email",
                        value: form.read().email().to_string(),
                        oninput: move |evt: FormEvent| form.write().set_email(evt.value()),
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: busy() || verified,
                        onclick: send_code,
                        if code_sent { "Resend" } else { "Send code" }
                    }
                }
                if code_sent {
                    div {
                        class: "flex gap-2",
                        input {
                            class: "input flex-1",
                            r#type: "text",
                            placeholder: "Verification code",
                            disabled: verified,
                            value: form.read().code.clone(),
                            oninput: move |evt: FormEvent| form.write().code = evt.value(),
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            disabled: busy() || verified,
                            onclick: verify_code,
                            if verified { "Verified" } else { "Verify" }
                        }
                    }
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password (min 4 characters)",
                    value: form.read().password.clone(),
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: form.read().confirm_password.clone(),
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }
                button {
                    class: "btn btn-primary w-full",
                    r#type: "submit",
                    disabled: busy() || !can_submit,
                    if busy() { "Working..." } else { "Sign up" }
                }
            }

            p {
                class: "text-sm text-neutral-600",
                "Already have an account? "
                button {
                    class: "link",
                    onclick: move |_| on_switch_to_login.call(()),
                    "Log in"
                }
            }
        }
    }
}
