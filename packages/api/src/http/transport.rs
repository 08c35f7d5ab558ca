//! # Transport
//!
//! [`Transport`] sends one already-authorised request and returns the raw status
//! and body. It knows nothing about tokens or retries; that policy lives in
//! [`crate::http::HttpClient`]. Tests substitute a scripted transport.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};

use crate::error::ApiResult;

/// A request relative to the backend base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Path beginning with `/`, e.g. `/posts/42`.
    pub path: String,
    pub body: Option<serde_json::Value>,
    /// Bearer credential for the `Authorization` header.
    pub bearer: Option<String>,
    /// Send ambient cookies along with the request.
    pub with_credentials: bool,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            bearer: None,
            with_credentials: false,
        }
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Async seam for sending requests to the backend.
pub trait Transport {
    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = ApiResult<HttpResponse>>;
}

/// [`Transport`] over `reqwest` (the browser `fetch` API on wasm).
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        #[cfg(target_arch = "wasm32")]
        if request.with_credentials {
            builder = builder.fetch_credentials_include();
        }

        tracing::debug!("{} {}", request.method, request.path);
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
