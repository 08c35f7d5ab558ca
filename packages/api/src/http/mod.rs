//! HTTP plumbing: the [`Transport`] seam and the authenticating [`HttpClient`].

mod client;
mod transport;

pub use client::{HttpClient, SessionRevoked, REFRESH_PATH};
pub(crate) use client::clear_stored_session;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
