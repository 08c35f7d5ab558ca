//! # Feed pagination state
//!
//! [`FeedState`] is the single state object behind the explore feed. Keeping the
//! phase, page counter and tag filter together means the scroll-continuation
//! check always reads one consistent snapshot.
//!
//! A load is a two-step exchange: `begin_*` hands out a [`LoadTicket`] (or `None`
//! when the request must be dropped), the caller fetches that page, and
//! [`complete`](FeedState::complete) applies the outcome. Tickets carry the
//! generation they were issued in, so a response that arrives after a retry
//! reset is ignored instead of corrupting the fresh feed.

use std::collections::HashSet;

use api::Post;

/// Tag filter value that shows every post and allows network pagination.
pub const ALL_TAGS: &str = "All";

/// Preset tag filters offered above the feed.
pub const TAG_PRESETS: [&str; 6] = [ALL_TAGS, "Frontend", "Backend", "AI", "SQL/DB", "Cloud"];

#[derive(Clone, Debug, PartialEq)]
pub enum FeedPhase {
    Idle,
    LoadingFirst,
    LoadingMore,
    Error(String),
    Exhausted,
}

/// Permission to fetch one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub page: u32,
    first: bool,
    generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    posts: Vec<Post>,
    page: u32,
    page_size: usize,
    has_more: bool,
    phase: FeedPhase,
    tag_filter: String,
    generation: u64,
}

impl FeedState {
    pub fn new(page_size: usize) -> Self {
        Self {
            posts: Vec::new(),
            page: 0,
            page_size: page_size.max(1),
            has_more: true,
            phase: FeedPhase::Idle,
            tag_filter: ALL_TAGS.to_string(),
            generation: 0,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn phase(&self) -> &FeedPhase {
        &self.phase
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn tag_filter(&self) -> &str {
        &self.tag_filter
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FeedPhase::LoadingFirst | FeedPhase::LoadingMore)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FeedPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_filtering(&self) -> bool {
        !self.tag_filter.eq_ignore_ascii_case(ALL_TAGS)
    }

    /// Whether a sentinel coming into view should fetch the next page.
    pub fn can_continue(&self) -> bool {
        self.has_more
            && !self.is_filtering()
            && matches!(self.phase, FeedPhase::Idle)
    }

    /// Start loading page 1. Dropped while another load is in flight.
    pub fn begin_first_load(&mut self) -> Option<LoadTicket> {
        if self.is_loading() {
            return None;
        }
        self.phase = FeedPhase::LoadingFirst;
        Some(LoadTicket {
            page: 1,
            first: true,
            generation: self.generation,
        })
    }

    /// Start loading the next page when [`can_continue`](Self::can_continue) allows it.
    pub fn begin_next_load(&mut self) -> Option<LoadTicket> {
        if !self.can_continue() {
            return None;
        }
        self.phase = FeedPhase::LoadingMore;
        Some(LoadTicket {
            page: self.page + 1,
            first: false,
            generation: self.generation,
        })
    }

    /// Apply the outcome of a ticketed load. Returns `false` for stale tickets.
    pub fn complete(&mut self, ticket: LoadTicket, outcome: Result<Vec<Post>, String>) -> bool {
        if ticket.generation != self.generation || !self.is_loading() {
            tracing::debug!("dropping stale page {} response", ticket.page);
            return false;
        }
        match outcome {
            Ok(page) => {
                let received = page.len();
                if ticket.first {
                    self.posts.clear();
                }
                self.append_unique(page);
                self.page = ticket.page;
                self.has_more = received >= self.page_size;
                self.phase = if self.has_more {
                    FeedPhase::Idle
                } else {
                    FeedPhase::Exhausted
                };
            }
            Err(message) => {
                self.phase = FeedPhase::Error(message);
            }
        }
        true
    }

    /// Reset everything and start over from page 1.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        self.generation += 1;
        self.posts.clear();
        self.page = 0;
        self.has_more = true;
        self.phase = FeedPhase::Idle;
        self.begin_first_load()
    }

    /// Change the client-side filter. Never triggers a fetch.
    pub fn set_tag_filter(&mut self, tag: impl Into<String>) {
        self.tag_filter = tag.into();
    }

    /// Accumulated posts matching the active tag filter.
    pub fn visible_posts(&self) -> Vec<&Post> {
        if !self.is_filtering() {
            return self.posts.iter().collect();
        }
        self.posts
            .iter()
            .filter(|post| post.has_tag(&self.tag_filter))
            .collect()
    }

    fn append_unique(&mut self, page: Vec<Post>) {
        let mut seen: HashSet<String> = self.posts.iter().map(|p| p.id.clone()).collect();
        for post in page {
            if seen.insert(post.id.clone()) {
                self.posts.push(post);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::AuthorRef;

    fn post(id: &str, tags: &[&str]) -> Post {
        Post {
            id: id.to_string(),
            title: format!("title {id}"),
            description: String::new(),
            code: "fn main() {}".to_string(),
            language: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: AuthorRef::Id("ada@example.com".to_string()),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn page(ids: &[&str]) -> Vec<Post> {
        ids.iter().map(|id| post(id, &[])).collect()
    }

    fn ids(state: &FeedState) -> Vec<&str> {
        state.posts().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_overlapping_pages_are_deduplicated_in_first_seen_order() {
        let mut state = FeedState::new(3);
        let t = state.begin_first_load().unwrap();
        assert!(state.complete(t, Ok(page(&["a", "b", "c"]))));

        let t = state.begin_next_load().unwrap();
        assert_eq!(t.page, 2);
        state.complete(t, Ok(page(&["c", "d", "a"])));
        assert_eq!(ids(&state), vec!["a", "b", "c", "d"]);

        let t = state.begin_next_load().unwrap();
        state.complete(t, Ok(page(&["e", "b", "f"])));
        assert_eq!(ids(&state), vec!["a", "b", "c", "d", "e", "f"]);
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_first_load_replaces_accumulated_posts() {
        let mut state = FeedState::new(2);
        let t = state.begin_first_load().unwrap();
        state.complete(t, Ok(page(&["a", "b"])));

        let t = state.begin_first_load().unwrap();
        state.complete(t, Ok(page(&["x", "y"])));
        assert_eq!(ids(&state), vec!["x", "y"]);
    }

    #[test]
    fn test_short_page_exhausts_feed() {
        let mut state = FeedState::new(10);
        let t = state.begin_first_load().unwrap();
        state.complete(t, Ok(page(&["a", "b"])));
        assert_eq!(state.phase(), &FeedPhase::Exhausted);
        assert!(!state.has_more());
        assert!(!state.can_continue());
        assert!(state.begin_next_load().is_none());
    }

    #[test]
    fn test_short_page_of_duplicates_still_exhausts() {
        let mut state = FeedState::new(2);
        let t = state.begin_first_load().unwrap();
        state.complete(t, Ok(page(&["a", "b"])));
        let t = state.begin_next_load().unwrap();
        state.complete(t, Ok(page(&["a"])));
        assert_eq!(state.phase(), &FeedPhase::Exhausted);
        assert_eq!(ids(&state), vec!["a", "b"]);
    }

    #[test]
    fn test_loads_are_dropped_while_in_flight() {
        let mut state = FeedState::new(2);
        let t = state.begin_first_load().unwrap();
        assert!(state.begin_first_load().is_none());
        assert!(state.begin_next_load().is_none());
        state.complete(t, Ok(page(&["a", "b"])));

        let _next = state.begin_next_load().unwrap();
        assert_eq!(state.phase(), &FeedPhase::LoadingMore);
        assert!(state.begin_next_load().is_none());
    }

    #[test]
    fn test_tag_filter_is_client_side_and_blocks_pagination() {
        let mut state = FeedState::new(3);
        let t = state.begin_first_load().unwrap();
        state.complete(
            t,
            Ok(vec![
                post("a", &["Frontend"]),
                post("b", &["backend"]),
                post("c", &["FRONTEND", "AI"]),
            ]),
        );
        let before = state.clone();

        state.set_tag_filter("frontend");
        let visible: Vec<&str> = state.visible_posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(visible, vec!["a", "c"]);
        assert!(!state.can_continue());
        assert!(state.begin_next_load().is_none());
        assert_eq!(state.posts(), before.posts());
        assert_eq!(state.phase(), before.phase());

        state.set_tag_filter(ALL_TAGS);
        assert_eq!(state.visible_posts().len(), 3);
        assert!(state.can_continue());
    }

    #[test]
    fn test_error_requires_user_retry() {
        let mut state = FeedState::new(2);
        let t = state.begin_first_load().unwrap();
        state.complete(t, Ok(page(&["a", "b"])));
        let t = state.begin_next_load().unwrap();
        state.complete(t, Err("Failed to load posts.".to_string()));
        assert_eq!(state.error(), Some("Failed to load posts."));
        assert!(!state.can_continue());

        let t = state.retry().unwrap();
        assert_eq!(t.page, 1);
        assert!(state.posts().is_empty());
        assert_eq!(state.page(), 0);
        assert!(state.has_more());
        assert_eq!(state.phase(), &FeedPhase::LoadingFirst);
    }

    #[test]
    fn test_stale_response_after_retry_is_ignored() {
        let mut state = FeedState::new(2);
        let stale = state.begin_first_load().unwrap();
        let fresh = state.retry().unwrap();

        assert!(!state.complete(stale, Ok(page(&["old"]))));
        assert!(state.is_loading());

        assert!(state.complete(fresh, Ok(page(&["new", "newer"]))));
        assert_eq!(ids(&state), vec!["new", "newer"]);
    }

    fn backend_list(count: u32) -> String {
        let items: Vec<String> = (1..=count)
            .map(|i| format!(r#"{{"_id":"{i}","title":"t{i}","code":"x","authorId":"ada@example.com"}}"#))
            .collect();
        format!("[{}]", items.join(","))
    }

    #[tokio::test]
    async fn test_scrolls_through_backend_until_short_page() {
        use api::testing::MockTransport;
        use api::{HttpClient, PostService, StatusCode};
        use store::MemoryStorage;

        let transport = MockTransport::new();
        for _ in 0..3 {
            transport.respond(StatusCode::OK, &backend_list(12));
        }
        let posts = PostService::new(HttpClient::new(transport.clone(), MemoryStorage::new()));

        let mut state = FeedState::new(5);
        let mut ticket = state.begin_first_load();
        while let Some(t) = ticket {
            let outcome = posts.fetch_page(t.page, state.page_size()).await.map_err(|e| e.to_string());
            state.complete(t, outcome);
            ticket = state.begin_next_load();
        }

        assert_eq!(state.posts().len(), 12);
        assert_eq!(state.page(), 3);
        assert_eq!(state.phase(), &FeedPhase::Exhausted);
        assert_eq!(transport.paths().len(), 3);
    }

    #[tokio::test]
    async fn test_unauthorized_feed_load_reports_login_required() {
        use api::testing::MockTransport;
        use api::{HttpClient, PostService, StatusCode};
        use store::MemoryStorage;

        use crate::failure::Failure;

        let transport = MockTransport::new();
        transport.respond(StatusCode::UNAUTHORIZED, "{}");
        transport.respond(StatusCode::UNAUTHORIZED, "{}");
        let posts = PostService::new(HttpClient::new(transport, MemoryStorage::new()));

        let mut state = FeedState::new(5);
        let t = state.begin_first_load().unwrap();
        let outcome = posts
            .fetch_page(t.page, state.page_size())
            .await
            .map_err(|e| Failure::for_feed(&e).message("Failed to load posts."));
        state.complete(t, outcome);

        assert_eq!(state.error(), Some("Login required. Please sign in again."));
    }
}
