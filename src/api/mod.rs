//! API Layer
//!
//! HTTP API endpoints and request handling for the bloglist service.

pub mod blog_handlers;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod user_handlers;

// Re-export commonly used types
pub use handlers::AppState;
pub use middleware::request_logger;
pub use routes::{create_app, create_app_with, create_routes, RouterBuilder, API_ROOT};
