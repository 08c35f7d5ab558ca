use dioxus::prelude::*;

use super::{LoginForm, ModalOverlay, RegisterForm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

/// Login dialog that can switch to registration in place.
#[component]
pub fn LoginModal(on_close: EventHandler<()>) -> Element {
    let mut mode = use_signal(|| Mode::Login);

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            match mode() {
                Mode::Login => rsx! {
                    LoginForm {
                        on_success: move |_| on_close.call(()),
                        on_switch_to_register: move |_| mode.set(Mode::Register),
                    }
                },
                Mode::Register => rsx! {
                    RegisterForm {
                        on_success: move |_| on_close.call(()),
                        on_switch_to_login: move |_| mode.set(Mode::Login),
                    }
                },
            }
        }
    }
}
