//! Request and Response Models
//!
//! Candidate payloads accepted by the API, with their validation rules, and
//! small response bodies that are not record views.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::blog::NewBlog;

/// Request payload for creating a blog
///
/// Unknown fields such as a client-supplied `_id` are ignored; identifiers are
/// always assigned by the store.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(required(message = "title is required"))]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: Option<String>,

    pub author: Option<String>,

    #[validate(required(message = "url is required"))]
    #[validate(length(min = 1, message = "url is required"))]
    pub url: Option<String>,

    /// Defaults to zero when absent
    #[validate(range(min = 0, message = "likes must be a non-negative integer"))]
    pub likes: Option<i64>,
}

impl CreateBlogRequest {
    /// Normalize a validated request into the record that gets persisted
    pub fn into_new_blog(self) -> NewBlog {
        NewBlog {
            title: self.title.unwrap_or_default(),
            author: self.author,
            url: self.url.unwrap_or_default(),
            likes: self.likes.unwrap_or(0),
        }
    }
}

/// Request payload for creating a user account
#[derive(Clone, Default, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required(message = "username is required"))]
    #[validate(length(min = 3, message = "username must be at least 3 characters long"))]
    pub username: Option<String>,

    pub name: Option<String>,

    /// Plaintext password, only held until it has been hashed
    #[validate(required(message = "password is required"))]
    #[validate(length(min = 3, message = "password must be at least 3 characters long"))]
    pub password: Option<String>,
}

impl CreateUserRequest {
    /// Split a validated request into the username and the plaintext password
    pub fn into_parts(self) -> (String, Option<String>, String) {
        (
            self.username.unwrap_or_default(),
            self.name,
            self.password.unwrap_or_default(),
        )
    }
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Response for health check
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}
