//! Finishing an identity-provider login.
//!
//! The backend redirects to `/auth/success?accessToken=...`. The token is
//! stored so the client can fetch the user with it, then the result is folded
//! into the session. Whatever happens, the visitor ends up back at the root.

use api::{ApiError, AuthService, Session, SessionStore, Transport};
use store::{KeyValueStore, ACCESS_TOKEN_KEY};

use crate::browser::query_param;

#[derive(Debug, Clone, PartialEq)]
pub enum ProviderLogin {
    /// The callback carried no token.
    Missing,
    Verified(Session),
    /// The backend refused the token; nothing is left in storage.
    Failed(ApiError),
}

/// Store the token from `search` and load its user.
pub async fn finish_provider_login<T: Transport, S: KeyValueStore>(
    search: Option<&str>,
    auth: &AuthService<T, S>,
) -> ProviderLogin {
    let Some(token) = search.and_then(|s| query_param(s, "accessToken")) else {
        tracing::warn!("identity-provider callback without a token");
        return ProviderLogin::Missing;
    };

    let storage = auth.client().storage();
    storage.set(ACCESS_TOKEN_KEY, &token);
    match auth.fetch_me().await {
        Ok(user) => {
            // The client may have refreshed the token while fetching the user.
            let token = storage.get(ACCESS_TOKEN_KEY).unwrap_or(token);
            ProviderLogin::Verified(Session { token, user })
        }
        Err(e) => {
            tracing::warn!("could not load user after provider login: {e}");
            if storage.get(ACCESS_TOKEN_KEY).as_deref() == Some(token.as_str()) {
                storage.remove(ACCESS_TOKEN_KEY);
            }
            ProviderLogin::Failed(e)
        }
    }
}

impl ProviderLogin {
    /// Fold the outcome into `session`. A missing token leaves it alone.
    pub fn apply<S: KeyValueStore>(self, session: &mut SessionStore<S>) {
        match self {
            ProviderLogin::Missing => {}
            ProviderLogin::Verified(Session { token, user }) => session.login(user, token),
            ProviderLogin::Failed(_) => session.logout(),
        }
    }
}
