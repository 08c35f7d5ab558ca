//! Landing point after an identity-provider login. The backend redirects here
//! with `?accessToken=...`; the token is checked against `/users/me` and the
//! visitor sent back to root, logged in or not.

use dioxus::prelude::*;
use ui::browser::location_search;
use ui::components::LoadingIndicator;
use ui::{finish_provider_login, use_services, use_session};

use crate::Route;

#[component]
pub fn AuthSuccess() -> Element {
    let services = use_services();
    let mut session = use_session();
    let nav = use_navigator();

    use_hook(move || {
        let auth = services.auth.clone();
        spawn(async move {
            let search = location_search();
            let outcome = finish_provider_login(search.as_deref(), &auth).await;
            outcome.apply(&mut *session.write());
            nav.replace(Route::Root {});
        });
    });

    rsx! {
        LoadingIndicator { label: "Signing you in..." }
    }
}
