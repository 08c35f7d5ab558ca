//! Thin wrappers over `window.location`. Native builds have no location, so
//! navigation helpers log and return.

/// Full-page navigation, used where the in-app router is not reachable.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                tracing::error!("failed to navigate to {path}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect to {path} ignored outside the browser");
    }
}

/// The current query string including the leading `?`, if any.
pub fn location_search() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().search().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Value of `key` in a query string such as `?accessToken=abc&x=1`.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}
