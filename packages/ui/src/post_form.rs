//! # Post form
//!
//! Form state shared by the create and edit screens. Validation runs before any
//! network call; tags are committed one at a time from a separate input.

use api::{CreatePostRequest, Post};
use thiserror::Error;

pub const TITLE_MAX_CHARS: usize = 60;
pub const DESCRIPTION_MAX_CHARS: usize = 180;

/// `(value, label)` pairs offered by the language picker.
pub const LANGUAGES: [(&str, &str); 10] = [
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("python", "Python"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("sql", "SQL"),
    ("bash", "Bash"),
    ("json", "JSON"),
];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PostFormError {
    #[error("Please enter a title.")]
    MissingTitle,
    #[error("Please enter some code.")]
    MissingCode,
    #[error("Title must be at most 60 characters.")]
    TitleTooLong,
    #[error("Description must be at most 180 characters.")]
    DescriptionTooLong,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub description: String,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
    pub tag_input: String,
}

impl PostForm {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            code: String::new(),
            language: language.into(),
            tags: Vec::new(),
            tag_input: String::new(),
        }
    }

    /// Pre-populate from an existing post, using `default_language` when the
    /// post carries none.
    pub fn from_post(post: &Post, default_language: &str) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone(),
            code: post.code.clone(),
            language: post.language_or(default_language).to_string(),
            tags: post.tags.clone(),
            tag_input: String::new(),
        }
    }

    /// Commit the pending tag input. Empty and duplicate tags are ignored and
    /// leave the input untouched.
    pub fn add_tag(&mut self) -> bool {
        let tag = self.tag_input.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        self.tag_input.clear();
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Validate and build the trimmed request body.
    pub fn validate(&self) -> Result<CreatePostRequest, PostFormError> {
        let title = self.title.trim();
        let description = self.description.trim();
        let code = self.code.trim();

        if title.is_empty() {
            return Err(PostFormError::MissingTitle);
        }
        if code.is_empty() {
            return Err(PostFormError::MissingCode);
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(PostFormError::TitleTooLong);
        }
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(PostFormError::DescriptionTooLong);
        }

        let language = self.language.trim();
        Ok(CreatePostRequest {
            title: title.to_string(),
            description: description.to_string(),
            code: code.to_string(),
            language: (!language.is_empty()).then(|| language.to_string()),
            tags: self.tags.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_is_trimmed() {
        let mut form = PostForm::new("javascript");
        form.title = "  Hello ".into();
        form.code = "console.log(1)\n".into();
        let req = form.validate().unwrap();
        assert_eq!(req.title, "Hello");
        assert_eq!(req.code, "console.log(1)");
        assert_eq!(req.description, "");
        assert_eq!(req.language.as_deref(), Some("javascript"));
        assert!(req.tags.is_empty());
    }

    #[test]
    fn test_missing_fields() {
        let mut form = PostForm::new("javascript");
        form.code = "x".into();
        assert_eq!(form.validate(), Err(PostFormError::MissingTitle));

        form.title = "Hello".into();
        form.code = "   ".into();
        assert_eq!(form.validate(), Err(PostFormError::MissingCode));
    }

    #[test]
    fn test_length_limits_count_characters() {
        let mut form = PostForm::new("python");
        form.code = "pass".into();
        form.title = "가".repeat(TITLE_MAX_CHARS);
        assert!(form.validate().is_ok());

        form.title.push('x');
        assert_eq!(form.validate(), Err(PostFormError::TitleTooLong));

        form.title = "ok".into();
        form.description = "d".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert_eq!(form.validate(), Err(PostFormError::DescriptionTooLong));
    }

    #[test]
    fn test_tags_trimmed_and_deduplicated() {
        let mut form = PostForm::new("javascript");
        form.tag_input = "  rust ".into();
        assert!(form.add_tag());
        assert!(form.tag_input.is_empty());

        form.tag_input = "rust".into();
        assert!(!form.add_tag());
        assert_eq!(form.tag_input, "rust");

        form.tag_input = "   ".into();
        assert!(!form.add_tag());

        form.tag_input = "wasm".into();
        form.add_tag();
        assert_eq!(form.tags, vec!["rust", "wasm"]);

        form.remove_tag("rust");
        assert_eq!(form.tags, vec!["wasm"]);
    }

    #[test]
    fn test_from_post_falls_back_to_default_language() {
        let mut post = Post {
            id: "p1".to_string(),
            title: "Hi".to_string(),
            description: String::new(),
            code: "x".to_string(),
            language: None,
            tags: vec!["SQL".to_string()],
            author: api::AuthorRef::Id("ada@example.com".to_string()),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        };
        let form = PostForm::from_post(&post, "python");
        assert_eq!(form.language, "python");
        assert_eq!(form.tags, vec!["SQL".to_string()]);

        post.language = Some("sql".into());
        assert_eq!(PostForm::from_post(&post, "python").language, "sql");
    }
}
