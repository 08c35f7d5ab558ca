//! # Durable client storage
//!
//! The browser keeps three string values across reloads: the bearer token, the
//! cached user record and the highlight theme. Everything that needs them goes
//! through [`KeyValueStore`], so the same session and theme logic runs against
//! `localStorage` in the browser ([`crate::LocalStorage`]) and an in-memory map
//! in tests and on native targets ([`crate::MemoryStorage`]).
//!
//! Reads and writes are synchronous. The host runs a single event loop, so there
//! are no parallel writers to coordinate with.

/// Bearer token issued by `/users/login`, `/refresh` or an identity provider.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// JSON-serialised user record of the current session.
pub const USER_KEY: &str = "user";
/// Selected highlight theme key.
pub const CODE_THEME_KEY: &str = "codeTheme";

/// String-keyed, string-valued durable storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
