//! MongoDB Record Store
//!
//! Store adapter over the official MongoDB driver. Blogs and users live in
//! their own collections; the unique index on `users.username` is the final
//! authority on username uniqueness.

use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::{ClientOptions, IndexOptions},
    Client, Collection, Database, IndexModel,
};

use super::store::{BlogStore, StoreError, StoreResult, UserStore};
use crate::config::DatabaseConfig;
use crate::models::{BlogDocument, NewBlog, NewUser, UserDocument};

pub const BLOG_COLLECTION: &str = "blogs";
pub const USER_COLLECTION: &str = "users";
pub const USERNAME_INDEX: &str = "username_unique";

/// Server error code for unique index violations
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Application name reported to the server in the connection handshake
const APP_NAME: &str = "bloglist-service";

#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    database: Database,
    blogs: Collection<BlogDocument>,
    users: Collection<UserDocument>,
    operation_timeout: Duration,
}

impl MongoStore {
    /// Connect to the configured deployment
    ///
    /// The driver connects lazily, so this only fails on a malformed URI or
    /// options; use [`MongoStore::ensure_indexes`] to make the first round-trip.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(config.active_uri()).await?;
        options.app_name = Some(APP_NAME.to_string());
        options.connect_timeout = Some(config.connect_timeout());
        options.server_selection_timeout = Some(config.connect_timeout());
        options.max_pool_size = Some(config.max_pool_size);

        let client = Client::with_options(options)?;
        Ok(Self::new(client, &config.database_name, config.operation_timeout()))
    }

    pub fn new(client: Client, database_name: &str, operation_timeout: Duration) -> Self {
        let database = client.database(database_name);
        Self {
            blogs: database.collection(BLOG_COLLECTION),
            users: database.collection(USER_COLLECTION),
            client,
            database,
            operation_timeout,
        }
    }

    /// Create the unique username index if it does not exist yet
    pub async fn ensure_indexes(&self) -> StoreResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(USERNAME_INDEX.to_string())
                    .build(),
            )
            .build();

        self.bounded(self.users.create_index(index)).await?;
        log::info!("Ensured unique index {} on {}", USERNAME_INDEX, USER_COLLECTION);
        Ok(())
    }

    /// Close every pooled connection
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }

    /// Run a driver operation under the configured timeout
    async fn bounded<T, F>(&self, operation: F) -> StoreResult<T>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        match tokio::time::timeout(self.operation_timeout, operation).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StoreError::Timeout(self.operation_timeout)),
        }
    }
}

/// Whether a driver error is a unique index violation
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl BlogStore for MongoStore {
    async fn insert_blog(&self, blog: NewBlog) -> StoreResult<BlogDocument> {
        let document = BlogDocument::from_new(ObjectId::new(), blog);
        self.bounded(self.blogs.insert_one(&document)).await?;
        Ok(document)
    }

    async fn find_all_blogs(&self) -> StoreResult<Vec<BlogDocument>> {
        // ObjectIds from one process increase monotonically, so sorting on
        // _id yields insertion order.
        self.bounded(async {
            let cursor = self.blogs.find(doc! {}).sort(doc! { "_id": 1 }).await?;
            cursor.try_collect::<Vec<BlogDocument>>().await
        })
        .await
    }

    async fn find_blog_by_id(&self, id: &ObjectId) -> StoreResult<Option<BlogDocument>> {
        self.bounded(self.blogs.find_one(doc! { "_id": *id })).await
    }

    async fn delete_blog_by_id(&self, id: &ObjectId) -> StoreResult<bool> {
        let result = self.bounded(self.blogs.delete_one(doc! { "_id": *id })).await?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_all_blogs(&self) -> StoreResult<u64> {
        let result = self.bounded(self.blogs.delete_many(doc! {})).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.bounded(self.database.run_command(doc! { "ping": 1 }))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<UserDocument> {
        let document = UserDocument::from_new(ObjectId::new(), user);
        self.bounded(self.users.insert_one(&document))
            .await
            .map_err(|error| match error {
                StoreError::Database(ref cause) if is_duplicate_key(cause) => {
                    StoreError::DuplicateKey { field: "username" }
                }
                other => other,
            })?;
        Ok(document)
    }

    async fn find_all_users(&self) -> StoreResult<Vec<UserDocument>> {
        self.bounded(async {
            let cursor = self.users.find(doc! {}).sort(doc! { "_id": 1 }).await?;
            cursor.try_collect::<Vec<UserDocument>>().await
        })
        .await
    }

    async fn find_user_by_id(&self, id: &ObjectId) -> StoreResult<Option<UserDocument>> {
        self.bounded(self.users.find_one(doc! { "_id": *id })).await
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<UserDocument>> {
        self.bounded(self.users.find_one(doc! { "username": username }))
            .await
    }

    async fn delete_all_users(&self) -> StoreResult<u64> {
        let result = self.bounded(self.users.delete_many(doc! {})).await?;
        Ok(result.deleted_count)
    }
}
