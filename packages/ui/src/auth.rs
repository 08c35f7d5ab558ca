//! Session context, route guard and logout for the UI.

use api::{SessionState, SessionStore};
use dioxus::prelude::*;

use crate::services::{use_services, AppStorage};

pub type AppSession = SessionStore<AppStorage>;

/// The session signal. Reading it subscribes the component to login and
/// logout.
pub fn use_session() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

/// Provider component that restores the stored session on mount.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let services = use_services();
    let mut session = use_signal(|| SessionStore::new(services.storage.clone()));
    use_context_provider(|| session);

    let _ = use_resource(move || {
        let auth = services.auth.clone();
        async move {
            let snapshot = session.peek().clone();
            let restored = snapshot.restore(&auth).await;
            // Ignored when a login finished while we were validating.
            session.write().apply(restored);
        }
    });

    rsx! {
        {children}
    }
}

/// What a protected route does for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Wait,
    Redirect,
    Render,
}

impl GuardDecision {
    pub fn for_state(state: &SessionState) -> Self {
        match state {
            SessionState::Loading => GuardDecision::Wait,
            SessionState::Anonymous => GuardDecision::Redirect,
            SessionState::Authenticated(_) => GuardDecision::Render,
        }
    }
}

/// Renders `children` only for an authenticated session. Anonymous visitors
/// are sent to the landing page.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let decision = GuardDecision::for_state(session.read().state());

    use_effect(move || {
        if GuardDecision::for_state(session.read().state()) == GuardDecision::Redirect {
            nav.replace("/");
        }
    });

    match decision {
        GuardDecision::Wait => rsx! {
            crate::components::LoadingIndicator {}
        },
        GuardDecision::Redirect => rsx! {},
        GuardDecision::Render => rsx! {
            {children}
        },
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let services = use_services();
    let mut session = use_session();
    let nav = use_navigator();

    let onclick = move |_| {
        let auth = services.auth.clone();
        async move {
            if let Err(e) = auth.logout().await {
                tracing::warn!("logout request failed, clearing the session anyway: {e}");
            }
            session.write().logout();
            nav.replace("/");
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            crate::Icon { width: 14, height: 14, icon: crate::icons::FaRightFromBracket }
            " {label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use api::{Session, User};

    use super::*;

    #[test]
    fn test_guard_decisions() {
        assert_eq!(GuardDecision::for_state(&SessionState::Loading), GuardDecision::Wait);
        assert_eq!(GuardDecision::for_state(&SessionState::Anonymous), GuardDecision::Redirect);
        let session = Session {
            token: "t".into(),
            user: User {
                email: "ada@example.com".into(),
                ..Default::default()
            },
        };
        assert_eq!(
            GuardDecision::for_state(&SessionState::Authenticated(session)),
            GuardDecision::Render
        );
    }
}
