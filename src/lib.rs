//! Bloglist Service Library
//!
//! A small HTTP service for a shared list of blog links, with user accounts
//! whose passwords are stored only as bcrypt hashes. Records live in MongoDB,
//! or in an in-memory store for tests and local experiments.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bloglist_service::{
//!     api::{create_app, AppState},
//!     config::AppConfig,
//!     database::StoreConnection,
//!     service::{BlogService, UserService},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let connection = StoreConnection::open(&config.database).await?;
//!
//!     let state = AppState::new(
//!         BlogService::new(connection.blogs()),
//!         UserService::new(connection.users()),
//!     );
//!
//!     let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
//!     axum::serve(listener, create_app(state)).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Router Builder
//!
//! ```rust,no_run
//! use bloglist_service::api::RouterBuilder;
//!
//! // Read-only mirror of the list
//! let readonly = RouterBuilder::with_readonly_routes().build();
//!
//! // Blog list without the user endpoints
//! let blogs_only = RouterBuilder::new()
//!     .health_check(true)
//!     .list_blogs(true)
//!     .create_blog(true)
//!     .get_blog(true)
//!     .delete_blog(true)
//!     .build();
//! ```
//!
//! # Architecture
//!
//! - **API Layer**: HTTP handlers and configurable route definitions
//! - **Service Layer**: validation, uniqueness and password hashing
//! - **Models**: stored documents, public views and request bodies
//! - **Database**: store traits with MongoDB and in-memory implementations
//! - **Utils**: error mapping, hashing and validation helpers

/// HTTP API layer with handlers and configurable routing
pub mod api;

/// Configuration loaded from the environment
pub mod config;

/// Record store traits, backends and connection management
pub mod database;

/// Data models and request/response structures
pub mod models;

/// Business logic for blogs and users
pub mod service;

/// Shared utilities for security, validation, and error handling
pub mod utils;

// Re-export commonly used types for convenient access
pub use api::{create_app, create_routes, AppState, RouterBuilder};
pub use config::{env, AppConfig, DatabaseConfig, ServerConfig, StoreBackend};
pub use database::{BlogStore, MemoryStore, MongoStore, StoreConnection, StoreError, UserStore};
pub use models::{Blog, CreateBlogRequest, CreateUserRequest, User};
pub use service::{BlogService, UserService};
pub use utils::error::{AppError, AppResult, ErrorResponse};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
