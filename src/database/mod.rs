//! Database Module
//!
//! Record store ports, their MongoDB and in-memory adapters, and the
//! connection handle that ties them together.

pub mod connection;
pub mod memory;
pub mod mongo;
pub mod store;

// Re-export commonly used types
pub use connection::StoreConnection;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{BlogStore, StoreError, StoreResult, UserStore};
