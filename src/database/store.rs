//! Record Store Ports
//!
//! Traits the services use to reach durable storage, and the errors every
//! store adapter reports.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::models::{BlogDocument, NewBlog, NewUser, UserDocument};

/// Errors raised by record store adapters
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique index rejected the write
    #[error("duplicate value for unique field `{field}`")]
    DuplicateKey { field: &'static str },

    /// The store did not answer within the configured operation timeout
    #[error("record store did not answer within {0:?}")]
    Timeout(Duration),

    /// Driver or server fault
    #[error("record store error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for blog documents
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Persist a new blog under a freshly assigned id.
    async fn insert_blog(&self, blog: NewBlog) -> StoreResult<BlogDocument>;

    /// Every blog, oldest insertion first.
    async fn find_all_blogs(&self) -> StoreResult<Vec<BlogDocument>>;

    async fn find_blog_by_id(&self, id: &ObjectId) -> StoreResult<Option<BlogDocument>>;

    /// Remove a blog; returns whether a document was deleted.
    async fn delete_blog_by_id(&self, id: &ObjectId) -> StoreResult<bool>;

    /// Remove every blog and return how many were deleted.
    async fn delete_all_blogs(&self) -> StoreResult<u64>;

    /// Round-trip to the store, used by health checks.
    async fn ping(&self) -> StoreResult<()>;
}

/// Persistence for user documents
///
/// Implementations must reject a second user with the same username with
/// [`StoreError::DuplicateKey`].
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, user: NewUser) -> StoreResult<UserDocument>;

    /// Every user, oldest insertion first.
    async fn find_all_users(&self) -> StoreResult<Vec<UserDocument>>;

    async fn find_user_by_id(&self, id: &ObjectId) -> StoreResult<Option<UserDocument>>;

    /// Exact, case-sensitive username lookup.
    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<UserDocument>>;

    async fn delete_all_users(&self) -> StoreResult<u64>;
}
