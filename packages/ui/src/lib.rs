//! This crate contains all shared UI for the workspace: context providers,
//! reusable components, and the plain state machines behind the screens.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub mod browser;
pub mod display;
pub mod failure;
pub mod feed;
pub mod forms;
pub mod post_form;
pub mod provider_login;

mod services;
pub use services::{make_storage, use_services, AppAuth, AppPosts, AppStorage, Services, ServicesProvider};

mod auth;
pub use auth::{use_session, AppSession, GuardDecision, LogoutButton, RequireAuth, SessionProvider};

mod theme;
pub use theme::{use_code_theme, AppThemePreference, ThemeProvider};

pub use failure::Failure;
pub use forms::{LoginFormError, RegistrationError, RegistrationForm};
pub use feed::{FeedPhase, FeedState, LoadTicket, ALL_TAGS, TAG_PRESETS};
pub use post_form::{PostForm, PostFormError};
pub use provider_login::{finish_provider_login, ProviderLogin};
