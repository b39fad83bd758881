//! User Service Implementation
//!
//! Core business logic for user accounts: validation, username uniqueness,
//! password hashing and mapping to the public user view.

use std::sync::Arc;

use thiserror::Error;
use tokio::task::{self, JoinError};
use validator::Validate;

use crate::database::{StoreError, UserStore};
use crate::models::{CreateUserRequest, NewUser, User};
use crate::utils::{
    error::AppError,
    security::{hash_password_with_cost, verify_password, BCRYPT_COST},
    validation::{describe_validation_errors, parse_record_id, username_taken_message},
};

/// Custom error types for the user service
#[derive(Error, Debug)]
pub enum UserServiceError {
    /// User with the specified identifier was not found
    #[error("User not found")]
    UserNotFound,

    /// The requested id is not a store identifier
    #[error("Malformed user id: {0}")]
    MalformedId(String),

    /// Attempted to create a user with a username that already exists
    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    /// Input validation failed with detailed error message
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Record store operation failed
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    /// Password hashing operation failed
    #[error("Password hashing error: {0}")]
    HashingError(#[from] bcrypt::BcryptError),

    /// The blocking task running bcrypt panicked or was cancelled
    #[error("Password hashing task failed: {0}")]
    HashingTask(#[from] JoinError),
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::UserNotFound => AppError::NotFound("user not found".to_string()),
            UserServiceError::MalformedId(id) => AppError::MalformedId(id),
            UserServiceError::UsernameTaken(username) => {
                AppError::Uniqueness(username_taken_message(&username))
            }
            UserServiceError::ValidationError(msg) => AppError::Validation(msg),
            UserServiceError::StoreError(e) => AppError::Store(e),
            UserServiceError::HashingError(e) => AppError::HashingError(e),
            UserServiceError::HashingTask(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Result type for user service operations
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// Core user service providing account creation and lookup
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,

    /// bcrypt cost factor for password hashing
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            bcrypt_cost: BCRYPT_COST,
        }
    }

    /// Use a different bcrypt cost, e.g. the minimum of 4 in tests
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Creates a new user account with the provided information
    ///
    /// The plaintext password is moved into the blocking hashing task and
    /// dropped there. The username pre-check spares a hash for obvious
    /// duplicates; the store's unique index still decides races between
    /// concurrent requests.
    pub async fn create_user(&self, request: CreateUserRequest) -> UserServiceResult<User> {
        request
            .validate()
            .map_err(|e| UserServiceError::ValidationError(describe_validation_errors(&e)))?;

        let (username, name, password) = request.into_parts();

        if self.store.find_user_by_username(&username).await?.is_some() {
            return Err(UserServiceError::UsernameTaken(username));
        }

        let cost = self.bcrypt_cost;
        let password_hash =
            task::spawn_blocking(move || hash_password_with_cost(&password, cost)).await??;

        let document = self
            .store
            .insert_user(NewUser::new(username.clone(), name, password_hash))
            .await
            .map_err(|e| match e {
                StoreError::DuplicateKey { .. } => UserServiceError::UsernameTaken(username),
                other => UserServiceError::StoreError(other),
            })?;

        log::info!("Created user {} '{}'", document.id, document.username);
        Ok(document.into())
    }

    /// All users in insertion order
    pub async fn list_users(&self) -> UserServiceResult<Vec<User>> {
        let documents = self.store.find_all_users().await?;
        Ok(documents.into_iter().map(User::from).collect())
    }

    /// Retrieves a user by their id
    pub async fn get_user(&self, id: &str) -> UserServiceResult<User> {
        let object_id =
            parse_record_id(id).ok_or_else(|| UserServiceError::MalformedId(id.to_string()))?;

        self.store
            .find_user_by_id(&object_id)
            .await?
            .map(User::from)
            .ok_or(UserServiceError::UserNotFound)
    }

    /// Checks a plaintext password against the stored hash
    ///
    /// Unknown usernames verify as `false` rather than failing, so callers
    /// cannot tell the two cases apart.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> UserServiceResult<bool> {
        let Some(document) = self.store.find_user_by_username(username).await? else {
            return Ok(false);
        };

        let password = password.to_string();
        let matches =
            task::spawn_blocking(move || verify_password(&password, &document.password_hash))
                .await??;
        Ok(matches)
    }

    /// Removes every user, returning how many were deleted
    pub async fn delete_all_users(&self) -> UserServiceResult<u64> {
        let removed = self.store.delete_all_users().await?;
        log::info!("Deleted {} users", removed);
        Ok(removed)
    }
}
