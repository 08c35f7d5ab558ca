//! # Session store
//!
//! [`SessionStore`] owns the client's view of who is logged in. A session is
//! either fully present (token and user) or fully absent; every transition below
//! writes both halves to durable storage together.
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`restore`](SessionStore::restore) | Validates a stored token with the backend and loads the canonical user. Writes nothing. |
//! | [`apply`](SessionStore::apply) | Settles a still-loading store from a [`Restored`] outcome. |
//! | [`initialize`](SessionStore::initialize) | `restore` followed by `apply`. |
//! | [`login`](SessionStore::login) | Persists token and user, becomes authenticated. |
//! | [`logout`](SessionStore::logout) | Clears storage, becomes anonymous. |
//!
//! Until the restore settles the state is [`SessionState::Loading`], so views
//! can hold off rendering logged-out UI. The store is a plain value; the UI
//! wraps it in a signal so consumers re-render on change. Because the restore
//! runs while the user may already be logging in, the outcome is applied only
//! to a store that is still loading, and a rejected token is cleared only while
//! it is still the stored one.

use store::{KeyValueStore, ACCESS_TOKEN_KEY, USER_KEY};

use super::AuthService;
use crate::http::{clear_stored_session, Transport};
use crate::models::User;

/// A validated bearer token with its user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Loading,
    Anonymous,
    Authenticated(Session),
}

/// Outcome of [`SessionStore::restore`].
#[derive(Debug, Clone, PartialEq)]
pub enum Restored {
    /// Nothing was stored.
    Anonymous,
    Valid(Session),
    /// The backend refused the stored token.
    Rejected { token: String },
}

#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    state: SessionState,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: SessionState::Loading,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Validate the stored token with the backend without touching the state.
    ///
    /// Storage is only written by the HTTP client itself, when it refreshes
    /// or loses the token along the way.
    pub async fn restore<T: Transport>(&self, auth: &AuthService<T, S>) -> Restored {
        let Some(token) = self.storage.get(ACCESS_TOKEN_KEY) else {
            tracing::debug!("no stored token");
            return Restored::Anonymous;
        };

        let validated = match auth.check_token().await {
            Ok(_) => auth.fetch_me().await,
            Err(e) => Err(e),
        };

        match validated {
            Ok(user) => {
                // check-token may have refreshed the token on the way.
                let token = self.storage.get(ACCESS_TOKEN_KEY).unwrap_or(token);
                Restored::Valid(Session { token, user })
            }
            Err(e) => {
                tracing::warn!("stored session rejected: {e}");
                let token = self.storage.get(ACCESS_TOKEN_KEY).unwrap_or(token);
                Restored::Rejected { token }
            }
        }
    }

    /// Settle a loading store from a restore outcome.
    ///
    /// Returns `false` and changes nothing when the store has already left
    /// [`SessionState::Loading`].
    pub fn apply(&mut self, restored: Restored) -> bool {
        if !self.is_loading() {
            tracing::debug!("session already settled, dropping restore outcome");
            return false;
        }
        match restored {
            Restored::Anonymous => self.state = SessionState::Anonymous,
            Restored::Valid(Session { token, user }) => self.login(user, token),
            Restored::Rejected { token } => {
                if self.storage.get(ACCESS_TOKEN_KEY).as_deref() == Some(token.as_str()) {
                    self.logout();
                } else {
                    self.state = SessionState::Anonymous;
                }
            }
        }
        true
    }

    /// Restore and apply in one step.
    pub async fn initialize<T: Transport>(&mut self, auth: &AuthService<T, S>) {
        let restored = self.restore(auth).await;
        self.apply(restored);
    }

    pub fn login(&mut self, user: User, token: String) {
        self.storage.set(ACCESS_TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(json) => self.storage.set(USER_KEY, &json),
            Err(e) => tracing::warn!("could not persist user: {e}"),
        }
        self.state = SessionState::Authenticated(Session { token, user });
    }

    pub fn logout(&mut self) {
        clear_stored_session(&self.storage);
        self.state = SessionState::Anonymous;
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use store::MemoryStorage;

    use super::*;
    use crate::http::HttpClient;
    use crate::testing::MockTransport;

    const USER: &str = r#"{"email":"ada@example.com","name":"Ada"}"#;

    fn ada() -> User {
        serde_json::from_str(USER).unwrap()
    }

    fn auth(transport: &MockTransport, storage: &MemoryStorage) -> AuthService<MockTransport, MemoryStorage> {
        AuthService::new(HttpClient::new(transport.clone(), storage.clone()))
    }

    #[tokio::test]
    async fn test_initialize_without_token_makes_no_calls() {
        let transport = MockTransport::new();
        let storage = MemoryStorage::new();
        let mut session = SessionStore::new(storage.clone());
        assert!(session.is_loading());

        session.initialize(&auth(&transport, &storage)).await;
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_login_then_reload_restores_user() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::OK, r#"{"message":"valid"}"#);
        transport.respond(StatusCode::OK, USER);
        let storage = MemoryStorage::new();

        let mut first = SessionStore::new(storage.clone());
        first.login(ada(), "tok".to_string());
        assert!(first.is_logged_in());

        let mut reloaded = SessionStore::new(storage.clone());
        reloaded.initialize(&auth(&transport, &storage)).await;
        assert_eq!(
            reloaded.state(),
            &SessionState::Authenticated(Session {
                token: "tok".to_string(),
                user: ada(),
            })
        );
        assert_eq!(transport.paths(), vec!["/users/check-token", "/users/me"]);
        assert_eq!(transport.requests()[0].bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_rejected_token_clears_everything() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::UNAUTHORIZED, "");
        transport.respond(StatusCode::UNAUTHORIZED, "");
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "stale");
        storage.set(USER_KEY, USER);

        let mut session = SessionStore::new(storage.clone());
        session.initialize(&auth(&transport, &storage)).await;
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert!(session.user().is_none());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_refreshed_token_is_kept_after_initialize() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::UNAUTHORIZED, "");
        transport.respond(StatusCode::OK, r#"{"accessToken":"fresh"}"#);
        transport.respond(StatusCode::OK, r#"{"message":"valid"}"#);
        transport.respond(StatusCode::OK, USER);
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "expired");

        let mut session = SessionStore::new(storage.clone());
        session.initialize(&auth(&transport, &storage)).await;
        match session.state() {
            SessionState::Authenticated(s) => assert_eq!(s.token, "fresh"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_logout_clears_storage() {
        let storage = MemoryStorage::new();
        let mut session = SessionStore::new(storage.clone());
        session.login(ada(), "tok".to_string());
        assert_eq!(storage.len(), 2);

        session.logout();
        assert!(!session.is_logged_in());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_login_during_restore_survives_rejection() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::UNAUTHORIZED, "");
        transport.respond(StatusCode::UNAUTHORIZED, "");
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "stale");

        let mut session = SessionStore::new(storage.clone());
        let restored = session.clone().restore(&auth(&transport, &storage)).await;
        assert_eq!(restored, Restored::Rejected { token: "stale".to_string() });

        session.login(ada(), "fresh".to_string());
        assert!(!session.apply(restored));
        assert!(session.is_logged_in());
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("fresh"));
        assert!(storage.get(USER_KEY).is_some());
    }

    #[tokio::test]
    async fn test_rejection_keeps_a_token_stored_by_someone_else() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::UNAUTHORIZED, "");
        transport.respond(StatusCode::UNAUTHORIZED, "");
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "stale");

        let mut session = SessionStore::new(storage.clone());
        let restored = session.restore(&auth(&transport, &storage)).await;

        // Another tab logs in before the outcome lands.
        SessionStore::new(storage.clone()).login(ada(), "fresh".to_string());
        assert!(session.apply(restored));
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("fresh"));
        assert!(storage.get(USER_KEY).is_some());
    }

    #[tokio::test]
    async fn test_restore_writes_nothing_on_success() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::OK, r#"{"message":"valid"}"#);
        transport.respond(StatusCode::OK, USER);
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "tok");

        let session = SessionStore::new(storage.clone());
        let restored = session.restore(&auth(&transport, &storage)).await;
        assert_eq!(
            restored,
            Restored::Valid(Session {
                token: "tok".to_string(),
                user: ada(),
            })
        );
        assert!(session.is_loading());
        assert_eq!(storage.len(), 1);
    }
}
