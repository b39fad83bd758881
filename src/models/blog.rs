//! Blog Model
//!
//! Stored blog documents and the client-facing blog view.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Validated blog waiting to be persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

/// Blog document as it is stored in the `blogs` collection
///
/// Never serialized to clients; convert it into [`Blog`] first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    pub url: String,

    #[serde(default)]
    pub likes: i64,

    /// Revision counter kept by the store
    #[serde(rename = "__v", default)]
    pub version: i32,
}

impl BlogDocument {
    /// Build the first revision of a document under a store-assigned id
    pub fn from_new(id: ObjectId, blog: NewBlog) -> Self {
        Self {
            id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            version: 0,
        }
    }
}

/// Blog representation for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    /// Store identifier rendered as a hex string
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    pub url: String,

    pub likes: i64,
}

impl From<BlogDocument> for Blog {
    /// Rename `_id` to `id` and drop the revision counter
    fn from(document: BlogDocument) -> Self {
        Blog {
            id: document.id.to_hex(),
            title: document.title,
            author: document.author,
            url: document.url,
            likes: document.likes,
        }
    }
}
