//! # API crate: backend client for ClipIt
//!
//! Everything the browser application needs to talk to the REST backend: wire
//! models, the authenticating HTTP client, and the session store built on top.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | [`Transport`] seam, `reqwest` transport, and [`HttpClient`] with bearer injection and one-shot refresh-and-retry on `401` |
//! | [`auth`] | [`AuthService`] for the `/users/*` endpoints and [`SessionStore`] for the login lifecycle |
//! | [`posts`] | [`PostService`] for `/posts` including client-side pagination |
//! | [`models`] | `User`, `Post`, `AuthorRef` and request/response bodies, with shape-tolerant decoders |
//! | [`error`] | [`ApiError`] and [`ApiResult`] |
//!
//! ## Endpoints
//!
//! - **Users**: `register`, `login`, `logout`, `check-token`, `send-mail`, `verify-code`, `me`
//! - **Session**: `POST /refresh` (ambient cookie, called by [`HttpClient`] only)
//! - **Posts**: list, get, create, update, delete, by author

pub mod auth;
pub mod error;
pub mod http;
pub mod models;
pub mod posts;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use auth::{AuthService, RegistrationFailure, Restored, Session, SessionState, SessionStore};
pub use error::{ApiError, ApiResult};
pub use http::{HttpClient, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use models::{AuthorRef, CreatePostRequest, Post, UpdatePostRequest, User};
pub use posts::PostService;
pub use reqwest::StatusCode;
