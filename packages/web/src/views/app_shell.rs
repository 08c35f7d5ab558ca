//! Layouts shared by every route.

use dioxus::prelude::*;
use ui::components::{Header, LoginModal};
use ui::RequireAuth;

use crate::Route;

/// Opens the login modal from anywhere under [`AppShell`].
#[derive(Clone, Copy)]
pub struct LoginPrompt(Signal<bool>);

impl LoginPrompt {
    pub fn open(mut self) {
        self.0.set(true);
    }
}

pub fn use_login_prompt() -> LoginPrompt {
    use_context::<LoginPrompt>()
}

#[component]
pub fn AppShell() -> Element {
    let mut open = use_signal(|| false);
    let prompt = use_context_provider(|| LoginPrompt(open));

    rsx! {
        div {
            class: "min-h-screen bg-neutral-50",
            Header { on_login: move |_| prompt.open() }
            main {
                class: "max-w-5xl mx-auto px-4 py-8",
                Outlet::<Route> {}
            }
            if open() {
                LoginModal { on_close: move |_| open.set(false) }
            }
        }
    }
}

/// Layout for routes that need a logged-in user.
#[component]
pub fn Protected() -> Element {
    rsx! {
        RequireAuth {
            Outlet::<Route> {}
        }
    }
}
