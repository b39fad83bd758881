//! User Model
//!
//! Stored user documents and the client-facing user view.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Validated user whose password has already been hashed
#[derive(Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: String, name: Option<String>, password_hash: String) -> Self {
        Self {
            username,
            name,
            password_hash,
        }
    }
}

/// User document as it is stored in the `users` collection
///
/// This struct carries the password hash and is only used between the
/// services and the store. It's never exposed in API responses.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Unique across the collection
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// bcrypt hashed password
    #[serde(rename = "passwordHash")]
    pub password_hash: String,

    #[serde(rename = "__v", default)]
    pub version: i32,
}

impl UserDocument {
    /// Build the first revision of a document under a store-assigned id
    pub fn from_new(id: ObjectId, user: NewUser) -> Self {
        Self {
            id,
            username: user.username,
            name: user.name,
            password_hash: user.password_hash,
            version: 0,
        }
    }
}

impl fmt::Debug for UserDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDocument")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("name", &self.name)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// User representation for external API responses
///
/// There is no password field on this type, so a response built from it
/// cannot carry the hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store identifier rendered as a hex string
    pub id: String,

    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<UserDocument> for User {
    /// Convert the stored document to the public user struct
    ///
    /// Strips the password hash and the revision counter and renames `_id`.
    fn from(document: UserDocument) -> Self {
        User {
            id: document.id.to_hex(),
            username: document.username,
            name: document.name,
        }
    }
}
