use dioxus::prelude::*;
use ui::components::LoadingIndicator;
use ui::use_session;

use super::{Explore, Landing};

/// `/` shows the feed to logged-in users and the landing page to everyone else.
#[component]
pub fn Root() -> Element {
    let session = use_session();
    let (loading, logged_in) = {
        let session = session.read();
        (session.is_loading(), session.is_logged_in())
    };

    if loading {
        rsx! { LoadingIndicator {} }
    } else if logged_in {
        rsx! { Explore {} }
    } else {
        rsx! { Landing {} }
    }
}
