//! # Authenticating HTTP client
//!
//! [`HttpClient`] decorates a [`Transport`] with the session policy every
//! backend call shares:
//!
//! 1. If durable storage holds a token, it is sent as a bearer credential.
//! 2. A `401` on the first attempt triggers one `POST /refresh` carrying the
//!    ambient cookie instead of the bearer token.
//! 3. A successful refresh stores the new token and replays the original request
//!    once. The replay is marked [`Attempt::Retry`], so a second `401` is
//!    returned to the caller instead of refreshing again.
//! 4. A `403` from the refresh call means the session is gone for good: the
//!    stored token and user are cleared and the [`SessionRevoked`] hook runs
//!    (the web app sends the browser back to `/`).
//! 5. Any other refresh failure, and any non-`401` failure, is returned as is.
//!
//! Concurrent requests that hit `401` together each refresh independently; the
//! last token written wins.

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{KeyValueStore, ACCESS_TOKEN_KEY, USER_KEY};

use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::RefreshResponse;

/// Endpoint exchanging the ambient refresh cookie for a new bearer token.
pub const REFRESH_PATH: &str = "/refresh";

/// Hook run after the backend refuses to refresh the session.
pub type SessionRevoked = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Attempt {
    First,
    Retry,
}

pub struct HttpClient<T, S> {
    transport: T,
    storage: S,
    send_credentials: bool,
    on_revoked: Option<SessionRevoked>,
}

impl<T: Clone, S: Clone> Clone for HttpClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            storage: self.storage.clone(),
            send_credentials: self.send_credentials,
            on_revoked: self.on_revoked.clone(),
        }
    }
}

impl<T, S> fmt::Debug for HttpClient<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("send_credentials", &self.send_credentials)
            .field("on_revoked", &self.on_revoked.is_some())
            .finish_non_exhaustive()
    }
}

/// Remove the stored token and cached user together.
pub(crate) fn clear_stored_session<S: KeyValueStore>(storage: &S) {
    storage.remove(ACCESS_TOKEN_KEY);
    storage.remove(USER_KEY);
}

impl<T: Transport, S: KeyValueStore> HttpClient<T, S> {
    pub fn new(transport: T, storage: S) -> Self {
        Self {
            transport,
            storage,
            send_credentials: true,
            on_revoked: None,
        }
    }

    /// Builder method controlling cookies on ordinary requests.
    pub fn with_credentials(mut self, send_credentials: bool) -> Self {
        self.send_credentials = send_credentials;
        self
    }

    /// Builder method installing the hook run when the refresh call returns `403`.
    pub fn on_session_revoked(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_revoked = Some(Arc::new(hook));
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request`, refreshing the session and replaying once on `401`.
    pub async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let mut attempt = Attempt::First;
        loop {
            let response = self.send_authorized(&request).await?;
            if response.status.is_success() {
                return Ok(response);
            }
            if response.status == StatusCode::UNAUTHORIZED && attempt == Attempt::First {
                tracing::debug!("{} {} returned 401, refreshing session", request.method, request.path);
                self.refresh().await?;
                attempt = Attempt::Retry;
                continue;
            }
            return Err(ApiError::from_response(response.status, &response.body));
        }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.call(HttpRequest::new(Method::GET, path)).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<R> {
        let body = serde_json::to_value(body)?;
        self.call(HttpRequest::new(Method::POST, path).with_body(body)).await
    }

    /// `POST` without a body, e.g. `/users/logout`.
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.call(HttpRequest::new(Method::POST, path)).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<R> {
        let body = serde_json::to_value(body)?;
        self.call(HttpRequest::new(Method::PUT, path).with_body(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.call(HttpRequest::new(Method::DELETE, path)).await
    }

    async fn call<R: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<R> {
        let response = self.execute(request).await?;
        decode(&response.body)
    }

    async fn send_authorized(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        let mut request = request.clone();
        request.bearer = self.storage.get(ACCESS_TOKEN_KEY);
        request.with_credentials |= self.send_credentials;
        self.transport.send(&request).await
    }

    async fn refresh(&self) -> ApiResult<String> {
        let mut request =
            HttpRequest::new(Method::POST, REFRESH_PATH).with_body(serde_json::json!({}));
        request.with_credentials = true;

        let result = match self.transport.send(&request).await {
            Ok(response) if response.status.is_success() => {
                decode::<RefreshResponse>(&response.body).map(|r| r.access_token)
            }
            Ok(response) => Err(ApiError::from_response(response.status, &response.body)),
            Err(e) => Err(e),
        };

        match result {
            Ok(token) => {
                self.storage.set(ACCESS_TOKEN_KEY, &token);
                tracing::info!("session refreshed");
                Ok(token)
            }
            Err(e) => {
                if e.is_forbidden() {
                    tracing::warn!("refresh refused, clearing session");
                    clear_stored_session(&self.storage);
                    if let Some(hook) = &self.on_revoked {
                        hook();
                    }
                } else {
                    tracing::warn!("refresh failed: {e}");
                }
                Err(e)
            }
        }
    }
}

fn decode<R: DeserializeOwned>(body: &str) -> ApiResult<R> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::models::MessageResponse;
    use crate::testing::MockTransport;
    use store::MemoryStorage;

    fn client(transport: &MockTransport, storage: &MemoryStorage) -> HttpClient<MockTransport, MemoryStorage> {
        HttpClient::new(transport.clone(), storage.clone())
    }

    #[tokio::test]
    async fn test_bearer_attached_when_token_stored() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::OK, r#"{"message":"ok"}"#);
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "tok-1");

        let res: MessageResponse = client(&transport, &storage).get("/users/me").await.unwrap();
        assert_eq!(res.message, "ok");

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].bearer.as_deref(), Some("tok-1"));
        assert!(sent[0].with_credentials);
    }

    #[tokio::test]
    async fn test_no_bearer_without_token() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::OK, "[]");
        let storage = MemoryStorage::new();

        let _: serde_json::Value = client(&transport, &storage).get("/posts").await.unwrap();
        assert!(transport.requests()[0].bearer.is_none());
    }

    #[tokio::test]
    async fn test_401_refreshes_once_and_replays() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::UNAUTHORIZED, r#"{"message":"jwt expired"}"#);
        transport.respond(StatusCode::OK, r#"{"accessToken":"tok-2"}"#);
        transport.respond(StatusCode::OK, r#"{"message":"valid"}"#);
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "tok-1");

        let res: MessageResponse = client(&transport, &storage)
            .post_empty("/users/check-token")
            .await
            .unwrap();
        assert_eq!(res.message, "valid");
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok-2"));

        let sent = transport.requests();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[1].path, REFRESH_PATH);
        assert!(sent[1].bearer.is_none());
        assert!(sent[1].with_credentials);
        assert_eq!(sent[2].path, "/users/check-token");
        assert_eq!(sent[2].bearer.as_deref(), Some("tok-2"));
    }

    #[tokio::test]
    async fn test_second_401_is_not_retried() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::UNAUTHORIZED, "");
        transport.respond(StatusCode::OK, r#"{"accessToken":"tok-2"}"#);
        transport.respond(StatusCode::UNAUTHORIZED, r#"{"message":"still no"}"#);
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "tok-1");

        let err = client(&transport, &storage)
            .get::<MessageResponse>("/users/me")
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.server_message(), Some("still no"));

        let refreshes = transport
            .requests()
            .iter()
            .filter(|r| r.path == REFRESH_PATH)
            .count();
        assert_eq!(refreshes, 1);
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_refresh_403_clears_session_and_runs_hook() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::UNAUTHORIZED, "");
        transport.respond(StatusCode::FORBIDDEN, r#"{"message":"refresh token revoked"}"#);
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "tok-1");
        storage.set(USER_KEY, r#"{"email":"ada@example.com"}"#);

        let revoked = Arc::new(AtomicUsize::new(0));
        let counter = revoked.clone();
        let client = client(&transport, &storage).on_session_revoked(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let err = client.get::<MessageResponse>("/posts/1").await.unwrap_err();
        assert!(err.is_forbidden());
        assert!(storage.get(ACCESS_TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
        assert_eq!(revoked.load(Ordering::SeqCst), 1);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_other_failure_propagates_without_clearing() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::UNAUTHORIZED, "");
        transport.respond(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":"db down"}"#);
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, "tok-1");

        let err = client(&transport, &storage)
            .get::<MessageResponse>("/posts")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.server_message(), Some("db down"));
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_non_401_error_propagates_unchanged() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::NOT_FOUND, r#"{"message":"no such post"}"#);
        let storage = MemoryStorage::new();

        let err = client(&transport, &storage)
            .get::<MessageResponse>("/posts/404")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: StatusCode::NOT_FOUND,
                message: Some("no such post".to_string()),
            }
        );
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_credentials_can_be_disabled_for_ordinary_requests() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::OK, "{}");
        let storage = MemoryStorage::new();

        let client = client(&transport, &storage).with_credentials(false);
        let _: MessageResponse = client.get("/posts").await.unwrap();
        assert!(!transport.requests()[0].with_credentials);
    }
}
