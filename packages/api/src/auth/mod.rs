//! # Authentication
//!
//! [`AuthService`] wraps the `/users/*` endpoints. Logout drops the stored
//! session and `/users/me` refreshes the cached user record. Storing a fresh
//! login is left to [`SessionStore`], which owns the higher-level session state.

mod session;

pub use session::{Restored, Session, SessionState, SessionStore};

use store::{KeyValueStore, ACCESS_TOKEN_KEY, USER_KEY};

use crate::error::{ApiError, ApiResult};
use crate::http::{clear_stored_session, HttpClient, Transport};
use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
    SendMailRequest, User, VerifyCodeRequest,
};

/// Failure of the register-then-login sequence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistrationFailure {
    #[error("registration failed: {0}")]
    Register(ApiError),
    /// The account exists but the follow-up login failed.
    #[error("account created but sign-in failed: {0}")]
    LoginAfterRegister(ApiError),
}

#[derive(Clone, Debug)]
pub struct AuthService<T, S> {
    client: HttpClient<T, S>,
}

impl<T: Transport, S: KeyValueStore> AuthService<T, S> {
    pub fn new(client: HttpClient<T, S>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &HttpClient<T, S> {
        &self.client
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        self.client.post("/users/register", request).await
    }

    /// Log in with email and password.
    ///
    /// Nothing is stored here: hand the token and user to
    /// [`SessionStore::login`], which writes both together.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let response: LoginResponse = self.client.post("/users/login", request).await?;
        tracing::info!("logged in as {}", response.user.email);
        Ok(response)
    }

    /// Tell the backend to end the session. The stored token and user are
    /// dropped even when the call fails.
    pub async fn logout(&self) -> ApiResult<MessageResponse> {
        let result = self.client.post_empty("/users/logout").await;
        clear_stored_session(self.client.storage());
        result
    }

    pub async fn check_token(&self) -> ApiResult<MessageResponse> {
        self.client.post_empty("/users/check-token").await
    }

    /// Ask the backend to email a verification code.
    pub async fn send_mail(&self, email: &str) -> ApiResult<MessageResponse> {
        let body = SendMailRequest {
            email: email.to_string(),
        };
        self.client.post("/users/send-mail", &body).await
    }

    pub async fn verify_code(&self, email: &str, code: &str) -> ApiResult<MessageResponse> {
        let body = VerifyCodeRequest {
            email: email.to_string(),
            code: code.to_string(),
        };
        self.client.post("/users/verify-code", &body).await
    }

    /// Fetch the canonical user record without caching it.
    pub async fn fetch_me(&self) -> ApiResult<User> {
        self.client.get("/users/me").await
    }

    /// Fetch the canonical user record and cache it in durable storage.
    pub async fn me(&self) -> ApiResult<User> {
        let user = self.fetch_me().await?;
        match serde_json::to_string(&user) {
            Ok(json) => self.client.storage().set(USER_KEY, &json),
            Err(e) => tracing::warn!("could not cache user: {e}"),
        }
        Ok(user)
    }

    /// Register, then log in with the same credentials.
    ///
    /// The two calls are not atomic. When the login fails the account already
    /// exists, which [`RegistrationFailure::LoginAfterRegister`] reports.
    pub async fn register_and_login(
        &self,
        request: &RegisterRequest,
    ) -> Result<LoginResponse, RegistrationFailure> {
        self.register(request)
            .await
            .map_err(RegistrationFailure::Register)?;
        let login = LoginRequest {
            email: request.email.clone(),
            password: request.password.clone(),
        };
        self.login(&login)
            .await
            .map_err(RegistrationFailure::LoginAfterRegister)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use store::MemoryStorage;

    use super::*;
    use crate::testing::MockTransport;

    const USER: &str = r#"{"email":"ada@example.com","name":"Ada"}"#;

    fn service(transport: &MockTransport, storage: &MemoryStorage) -> AuthService<MockTransport, MemoryStorage> {
        AuthService::new(HttpClient::new(transport.clone(), storage.clone()))
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            email: "ada@example.com".into(),
            name: "Ada".into(),
            password: "pa55".into(),
            code: "123456".into(),
        }
    }

    #[tokio::test]
    async fn test_login_leaves_storage_to_the_session_store() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::OK, &format!(r#"{{"accessToken":"tok","user":{USER}}}"#));
        let storage = MemoryStorage::new();

        let res = service(&transport, &storage)
            .login(&LoginRequest {
                email: "ada@example.com".into(),
                password: "pa55".into(),
            })
            .await
            .unwrap();
        assert_eq!(res.user.name, "Ada");
        assert_eq!(res.access_token, "tok");
        assert!(storage.is_empty());
        assert_eq!(transport.paths(), vec!["/users/login"]);
    }

    #[tokio::test]
    async fn test_logout_drops_session_even_on_failure() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::INTERNAL_SERVER_ERROR, "");
        let storage = MemoryStorage::new();

        // 500 is not a 401, so no refresh is attempted.
        storage.set(ACCESS_TOKEN_KEY, "tok");
        storage.set(USER_KEY, USER);
        let result = service(&transport, &storage).logout().await;
        assert!(result.is_err());
        assert!(storage.get(ACCESS_TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }

    #[tokio::test]
    async fn test_me_caches_user() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::OK, USER);
        let storage = MemoryStorage::new();

        let user = service(&transport, &storage).me().await.unwrap();
        assert_eq!(user.email, "ada@example.com");
        let cached: User = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(cached, user);
    }

    #[tokio::test]
    async fn test_verification_bodies() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::OK, r#"{"message":"sent"}"#);
        transport.respond(StatusCode::OK, r#"{"message":"verified"}"#);
        let storage = MemoryStorage::new();
        let auth = service(&transport, &storage);

        assert_eq!(auth.send_mail("ada@example.com").await.unwrap().message, "sent");
        assert_eq!(auth.verify_code("ada@example.com", "1234").await.unwrap().message, "verified");

        let sent = transport.requests();
        assert_eq!(sent[0].path, "/users/send-mail");
        assert_eq!(sent[0].body, Some(serde_json::json!({"email": "ada@example.com"})));
        assert_eq!(sent[1].body, Some(serde_json::json!({"email": "ada@example.com", "code": "1234"})));
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::CREATED, &format!(r#"{{"user":{USER}}}"#));
        transport.respond(StatusCode::OK, &format!(r#"{{"accessToken":"tok","user":{USER}}}"#));
        let storage = MemoryStorage::new();

        let login = service(&transport, &storage)
            .register_and_login(&register_request())
            .await
            .unwrap();
        assert_eq!(login.access_token, "tok");
        assert_eq!(transport.paths(), vec!["/users/register", "/users/login"]);
    }

    #[tokio::test]
    async fn test_register_failure_skips_login() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::BAD_REQUEST, r#"{"error":"Invalid code"}"#);
        let storage = MemoryStorage::new();

        let err = service(&transport, &storage)
            .register_and_login(&register_request())
            .await
            .unwrap_err();
        match err {
            RegistrationFailure::Register(e) => assert_eq!(e.server_message(), Some("Invalid code")),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(transport.paths(), vec!["/users/register"]);
    }

    #[tokio::test]
    async fn test_login_failure_after_register_is_reported() {
        let transport = MockTransport::new();
        transport.respond(StatusCode::CREATED, &format!(r#"{{"user":{USER}}}"#));
        transport.respond(StatusCode::BAD_GATEWAY, "");
        let storage = MemoryStorage::new();

        let err = service(&transport, &storage)
            .register_and_login(&register_request())
            .await
            .unwrap_err();
        assert!(matches!(err, RegistrationFailure::LoginAfterRegister(_)));
        assert!(storage.get(ACCESS_TOKEN_KEY).is_none());
    }
}
