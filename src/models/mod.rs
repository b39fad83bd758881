//! Data Models Module
//!
//! Stored documents, client views, and request types for blogs and users.
//! Conversions from documents to views live next to each record type.

pub mod blog;
pub mod requests;
pub mod user;

// Re-export commonly used types
pub use blog::*;
pub use requests::*;
pub use user::*;
