//! Blog Service Implementation
//!
//! Validate, persist, fetch and delete blogs, mapping every stored document to
//! the client view before it leaves the service.

use std::sync::Arc;

use thiserror::Error;
use validator::Validate;

use crate::database::{BlogStore, StoreError};
use crate::models::{Blog, CreateBlogRequest};
use crate::utils::{
    error::AppError,
    validation::{describe_validation_errors, parse_record_id},
};

/// Custom error types for the blog service
#[derive(Error, Debug)]
pub enum BlogServiceError {
    /// No blog is stored under the requested id
    #[error("Blog not found")]
    BlogNotFound,

    /// The requested id is not a store identifier
    #[error("Malformed blog id: {0}")]
    MalformedId(String),

    /// Input validation failed with detailed error message
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Record store operation failed
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

impl From<BlogServiceError> for AppError {
    fn from(err: BlogServiceError) -> Self {
        match err {
            BlogServiceError::BlogNotFound => AppError::NotFound("blog not found".to_string()),
            BlogServiceError::MalformedId(id) => AppError::MalformedId(id),
            BlogServiceError::ValidationError(msg) => AppError::Validation(msg),
            BlogServiceError::StoreError(e) => AppError::Store(e),
        }
    }
}

/// Result type for blog service operations
pub type BlogServiceResult<T> = Result<T, BlogServiceError>;

/// Blog operations over a record store
#[derive(Clone)]
pub struct BlogService {
    store: Arc<dyn BlogStore>,
}

impl BlogService {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self { store }
    }

    /// All blogs in insertion order
    pub async fn list_blogs(&self) -> BlogServiceResult<Vec<Blog>> {
        let documents = self.store.find_all_blogs().await?;
        Ok(documents.into_iter().map(Blog::from).collect())
    }

    /// Validates and stores a new blog
    ///
    /// Nothing is written when validation fails.
    pub async fn create_blog(&self, request: CreateBlogRequest) -> BlogServiceResult<Blog> {
        request
            .validate()
            .map_err(|e| BlogServiceError::ValidationError(describe_validation_errors(&e)))?;

        let document = self.store.insert_blog(request.into_new_blog()).await?;
        log::info!("Created blog {} '{}'", document.id, document.title);

        Ok(document.into())
    }

    pub async fn get_blog(&self, id: &str) -> BlogServiceResult<Blog> {
        let object_id =
            parse_record_id(id).ok_or_else(|| BlogServiceError::MalformedId(id.to_string()))?;

        self.store
            .find_blog_by_id(&object_id)
            .await?
            .map(Blog::from)
            .ok_or(BlogServiceError::BlogNotFound)
    }

    /// Removes a blog by id
    ///
    /// Deleting an id that is not stored is not an error; the return value
    /// tells whether anything was removed.
    pub async fn delete_blog(&self, id: &str) -> BlogServiceResult<bool> {
        let object_id =
            parse_record_id(id).ok_or_else(|| BlogServiceError::MalformedId(id.to_string()))?;

        let deleted = self.store.delete_blog_by_id(&object_id).await?;
        if deleted {
            log::info!("Deleted blog {}", object_id);
        } else {
            log::debug!("Delete requested for absent blog {}", object_id);
        }

        Ok(deleted)
    }

    /// Removes every blog, returning how many were deleted
    pub async fn delete_all_blogs(&self) -> BlogServiceResult<u64> {
        let removed = self.store.delete_all_blogs().await?;
        log::info!("Deleted {} blogs", removed);
        Ok(removed)
    }

    /// Checks that the record store answers
    pub async fn health_check(&self) -> BlogServiceResult<()> {
        self.store.ping().await?;
        Ok(())
    }
}
