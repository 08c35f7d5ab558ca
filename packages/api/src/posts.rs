//! # Post endpoints
//!
//! [`PostService`] wraps `/posts`. Pagination is client-side: the backend only
//! serves the full list, and [`fetch_page`](PostService::fetch_page) slices
//! page `n` (1-based) of `page_size` items out of it.

use store::KeyValueStore;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::http::{HttpClient, Transport};
use crate::models::{
    CreatePostRequest, MessageResponse, Post, PostEnvelope, PostList, UpdatePostRequest,
};

#[derive(Clone, Debug)]
pub struct PostService<T, S> {
    client: HttpClient<T, S>,
}

impl<T: Transport, S: KeyValueStore> PostService<T, S> {
    pub fn new(client: HttpClient<T, S>) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> ApiResult<Vec<Post>> {
        let list: PostList = expect_shape(self.client.get("/posts").await?, "post list")?;
        Ok(list.into_posts())
    }

    /// Page `page` (1-based) of `page_size` posts.
    pub async fn fetch_page(&self, page: u32, page_size: usize) -> ApiResult<Vec<Post>> {
        let start = page.saturating_sub(1) as usize * page_size;
        let posts = self.fetch_all().await?;
        Ok(posts.into_iter().skip(start).take(page_size).collect())
    }

    pub async fn fetch_by_id(&self, id: &str) -> ApiResult<Post> {
        let envelope: PostEnvelope = expect_shape(self.client.get(&format!("/posts/{id}")).await?, "post")?;
        Ok(envelope.into_post())
    }

    pub async fn create(&self, request: &CreatePostRequest) -> ApiResult<Post> {
        let envelope: PostEnvelope = expect_shape(self.client.post("/posts", request).await?, "post")?;
        let post = envelope.into_post();
        tracing::info!("created post {}", post.id);
        Ok(post)
    }

    pub async fn update(&self, id: &str, request: &UpdatePostRequest) -> ApiResult<Post> {
        let envelope: PostEnvelope =
            expect_shape(self.client.put(&format!("/posts/{id}"), request).await?, "post")?;
        Ok(envelope.into_post())
    }

    pub async fn delete(&self, id: &str) -> ApiResult<MessageResponse> {
        let response = self.client.delete(&format!("/posts/{id}")).await?;
        tracing::info!("deleted post {id}");
        Ok(response)
    }

    pub async fn fetch_by_author(&self, author_id: &str) -> ApiResult<Vec<Post>> {
        let list: PostList =
            expect_shape(self.client.get(&format!("/posts/author/{author_id}")).await?, "post list")?;
        Ok(list.into_posts())
    }
}

/// Decode a JSON body into one of the accepted post shapes.
fn expect_shape<R: DeserializeOwned>(body: Value, shape: &'static str) -> ApiResult<R> {
    serde_json::from_value(body).map_err(|e| {
        tracing::warn!("{shape} response matched no known shape: {e}");
        ApiError::UnexpectedShape(shape)
    })
}
