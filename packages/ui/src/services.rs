//! Backend services shared through context.
//!
//! [`Services`] bundles the auth and post services over one [`HttpClient`], so
//! every view shares the same token storage and revocation hook. Storage is
//! platform-dependent:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorage`]
//! - **Elsewhere**: in-process [`store::MemoryStorage`]

use api::{AuthService, HttpClient, PostService, ReqwestTransport};
use dioxus::prelude::*;
use store::ClipitConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStorage = store::MemoryStorage;

pub type AppAuth = AuthService<ReqwestTransport, AppStorage>;
pub type AppPosts = PostService<ReqwestTransport, AppStorage>;

/// Create the platform-appropriate storage handle.
pub fn make_storage() -> AppStorage {
    AppStorage::default()
}

#[derive(Clone, Debug)]
pub struct Services {
    pub auth: AppAuth,
    pub posts: AppPosts,
    pub storage: AppStorage,
    pub config: ClipitConfig,
}

impl Services {
    pub fn new(config: ClipitConfig) -> Self {
        let storage = make_storage();
        let transport = ReqwestTransport::new(config.api.base_url.clone());
        let client = HttpClient::new(transport, storage.clone())
            .with_credentials(config.api.send_credentials)
            .on_session_revoked(|| {
                tracing::info!("session revoked, returning to the landing page");
                crate::browser::redirect_to("/");
            });
        Self {
            auth: AuthService::new(client.clone()),
            posts: PostService::new(client),
            storage,
            config,
        }
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Provides [`Services`] built from `config` to every descendant.
#[component]
pub fn ServicesProvider(config: ClipitConfig, children: Element) -> Element {
    use_context_provider(|| Services::new(config.clone()));
    rsx! {
        {children}
    }
}
