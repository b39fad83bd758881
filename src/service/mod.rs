//! Service Layer
//!
//! Business logic for blogs and users, independent of the HTTP transport.

pub mod blog;
pub mod user;

// Re-export services
pub use blog::BlogService;
pub use user::UserService;
