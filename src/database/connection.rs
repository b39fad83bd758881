//! Store Connection Management
//!
//! Opens the configured record store once at startup and hands out the
//! store ports the services are built from.

use std::sync::Arc;

use super::memory::MemoryStore;
use super::mongo::MongoStore;
use super::store::{BlogStore, StoreResult, UserStore};
use crate::config::{DatabaseConfig, StoreBackend};

/// Process-wide handle to the record store
///
/// Created once in `main`, shared through the services, and closed with
/// [`StoreConnection::shutdown`] when the server stops.
#[derive(Clone)]
pub struct StoreConnection {
    blogs: Arc<dyn BlogStore>,
    users: Arc<dyn UserStore>,
    mongo: Option<MongoStore>,
}

impl StoreConnection {
    /// Open the store selected by the configuration
    ///
    /// For MongoDB this also ensures the unique username index, which is the
    /// first round-trip to the server.
    pub async fn open(config: &DatabaseConfig) -> StoreResult<Self> {
        match config.backend {
            StoreBackend::MongoDb => {
                let store = MongoStore::connect(config).await?;
                store.ensure_indexes().await?;
                log::info!(
                    "Connected to MongoDB database '{}'",
                    config.database_name
                );
                Ok(Self::from_mongo(store))
            }
            StoreBackend::Memory => {
                log::warn!("Using the in-memory record store, data is lost on exit");
                Ok(Self::in_memory())
            }
        }
    }

    pub fn from_mongo(store: MongoStore) -> Self {
        let shared = Arc::new(store.clone());
        Self {
            blogs: shared.clone(),
            users: shared,
            mongo: Some(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::new()))
    }

    /// Share an existing in-memory store, so callers can inspect it directly
    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            blogs: store.clone(),
            users: store,
            mongo: None,
        }
    }

    pub fn blogs(&self) -> Arc<dyn BlogStore> {
        self.blogs.clone()
    }

    pub fn users(&self) -> Arc<dyn UserStore> {
        self.users.clone()
    }

    /// Close the underlying client, if there is one
    pub async fn shutdown(self) {
        if let Some(mongo) = self.mongo {
            mongo.shutdown().await;
            log::info!("MongoDB connection closed");
        }
    }
}
