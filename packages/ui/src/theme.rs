//! Code-theme context. The preference outlives the session, so it is loaded
//! once from storage and never cleared on logout.

use dioxus::prelude::*;
use store::ThemePreference;

use crate::services::{use_services, AppStorage};

pub type AppThemePreference = ThemePreference<AppStorage>;

pub fn use_code_theme() -> Signal<AppThemePreference> {
    use_context::<Signal<AppThemePreference>>()
}

#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let services = use_services();
    let preference = use_signal(|| ThemePreference::load(services.storage.clone()));
    use_context_provider(|| preference);
    rsx! {
        {children}
    }
}
