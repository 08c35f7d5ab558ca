//! # User and authentication bodies
//!
//! [`User`] is the backend's user record as the client sees it. The email is the
//! unique identifier and doubles as the author identifier on posts. The password
//! is write-only: it deserialises if a backend ever echoes it, but it is never
//! serialised, so the record cached in durable storage cannot carry it.
//!
//! The remaining types are the JSON bodies of the `/users/*` and `/refresh`
//! endpoints.

use serde::{Deserialize, Serialize};

/// User record returned by `/users/me`, `/users/login` and `/users/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier, when the backend exposes one.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Identifier used for `/posts/author/:id`.
    pub fn author_key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub code: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Body of endpoints that only acknowledge, e.g. `/users/logout`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SendMailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_never_serialised() {
        let user: User = serde_json::from_str(
            r#"{"email":"ada@example.com","name":"Ada","password":"secret","createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(user.password.as_deref(), Some("secret"));

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("createdAt"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user: User = serde_json::from_str(r#"{"email":"ada@example.com"}"#).unwrap();
        assert_eq!(user.display_name(), "ada@example.com");
        assert_eq!(user.author_key(), "ada@example.com");
    }

    #[test]
    fn test_login_response_shape() {
        let res: LoginResponse = serde_json::from_str(
            r#"{"accessToken":"t0k","user":{"_id":"u1","email":"ada@example.com","name":"Ada"}}"#,
        )
        .unwrap();
        assert_eq!(res.access_token, "t0k");
        assert_eq!(res.user.author_key(), "u1");
    }
}
