//! # Posts
//!
//! A [`Post`] is a shared code snippet. The backend is inconsistent about two
//! things, and both are normalised here rather than in the views:
//!
//! - **Author reference**: a post carries either an embedded `author` record
//!   (`{id, name, email}`) or a bare `authorId` string. Both decode into
//!   [`AuthorRef`]; a post with neither is rejected.
//! - **Envelope**: single-post endpoints answer with either the post itself or
//!   `{ "post": ... }`, and list endpoints with either an array or
//!   `{ "posts": [...] }`. [`PostEnvelope`] and [`PostList`] try each known shape
//!   and fail explicitly when none matches.

use serde::{Deserialize, Serialize};

use super::User;

/// Embedded author record.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Author {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub email: String,
}

/// Who wrote a post.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorRef {
    Embedded(Author),
    Id(String),
}

impl AuthorRef {
    pub fn display_name(&self) -> Option<&str> {
        match self {
            AuthorRef::Embedded(author) if !author.name.trim().is_empty() => Some(&author.name),
            _ => None,
        }
    }

    /// Whether `user` is the author, compared by email.
    pub fn matches(&self, user: &User) -> bool {
        match self {
            AuthorRef::Embedded(author) => author.email == user.email,
            AuthorRef::Id(id) => *id == user.email,
        }
    }
}

/// A shared code snippet.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(try_from = "RawPost")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    pub code: String,
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub author: AuthorRef,
    pub created_at: String,
    pub updated_at: String,
}

impl Post {
    /// `updatedAt` differs from `createdAt` once a post has been edited.
    pub fn is_edited(&self) -> bool {
        self.updated_at != self.created_at
    }

    /// The post's language, or `fallback` when it carries none.
    pub fn language_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(fallback)
    }

    /// Client-side ownership check gating edit and delete.
    pub fn is_owned_by(&self, user: Option<&User>) -> bool {
        user.is_some_and(|user| self.author.matches(user))
    }

    /// Case-insensitive exact tag match.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == tag.to_lowercase())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPost {
    #[serde(alias = "_id")]
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    code: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    author: Option<Author>,
    #[serde(default)]
    author_id: Option<String>,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    updated_at: String,
}

impl TryFrom<RawPost> for Post {
    type Error = String;

    fn try_from(raw: RawPost) -> Result<Self, Self::Error> {
        let author = match (raw.author, raw.author_id) {
            (Some(author), _) => AuthorRef::Embedded(author),
            (None, Some(id)) => AuthorRef::Id(id),
            (None, None) => return Err(format!("post {} has no author reference", raw.id)),
        };
        Ok(Post {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            code: raw.code,
            language: raw.language,
            tags: raw.tags,
            author,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

/// A single post, bare or wrapped in `{ "post": ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostEnvelope {
    Wrapped { post: Post },
    Bare(Post),
}

impl PostEnvelope {
    pub fn into_post(self) -> Post {
        match self {
            PostEnvelope::Wrapped { post } | PostEnvelope::Bare(post) => post,
        }
    }
}

/// A list of posts, bare or wrapped in `{ "posts": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostList {
    Bare(Vec<Post>),
    Wrapped { posts: Vec<Post> },
}

impl PostList {
    pub fn into_posts(self) -> Vec<Post> {
        match self {
            PostList::Bare(posts) | PostList::Wrapped { posts } => posts,
        }
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub tags: Vec<String>,
}

/// Body of `PUT /posts/:id`; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl From<CreatePostRequest> for UpdatePostRequest {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: Some(req.title),
            description: Some(req.description),
            code: Some(req.code),
            language: req.language,
            tags: Some(req.tags),
        }
    }
}
