//! In-Process Record Store
//!
//! A store adapter that keeps documents in memory. It preserves insertion
//! order and applies the same username uniqueness rule as the MongoDB index,
//! which makes it suitable for tests and for running without a database.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::store::{BlogStore, StoreError, StoreResult, UserStore};
use crate::models::{BlogDocument, NewBlog, NewUser, UserDocument};

#[derive(Debug, Default)]
pub struct MemoryStore {
    blogs: RwLock<Vec<BlogDocument>>,
    users: RwLock<Vec<UserDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn insert_blog(&self, blog: NewBlog) -> StoreResult<BlogDocument> {
        let document = BlogDocument::from_new(ObjectId::new(), blog);
        self.blogs.write().await.push(document.clone());
        Ok(document)
    }

    async fn find_all_blogs(&self) -> StoreResult<Vec<BlogDocument>> {
        Ok(self.blogs.read().await.clone())
    }

    async fn find_blog_by_id(&self, id: &ObjectId) -> StoreResult<Option<BlogDocument>> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().find(|blog| &blog.id == id).cloned())
    }

    async fn delete_blog_by_id(&self, id: &ObjectId) -> StoreResult<bool> {
        let mut blogs = self.blogs.write().await;
        let before = blogs.len();
        blogs.retain(|blog| &blog.id != id);
        Ok(blogs.len() < before)
    }

    async fn delete_all_blogs(&self) -> StoreResult<u64> {
        let mut blogs = self.blogs.write().await;
        let removed = blogs.len() as u64;
        blogs.clear();
        Ok(removed)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<UserDocument> {
        // Check and insert under one write lock, like a unique index would.
        let mut users = self.users.write().await;
        if users.iter().any(|existing| existing.username == user.username) {
            return Err(StoreError::DuplicateKey { field: "username" });
        }

        let document = UserDocument::from_new(ObjectId::new(), user);
        users.push(document.clone());
        Ok(document)
    }

    async fn find_all_users(&self) -> StoreResult<Vec<UserDocument>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_user_by_id(&self, id: &ObjectId) -> StoreResult<Option<UserDocument>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| &user.id == id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<UserDocument>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn delete_all_users(&self) -> StoreResult<u64> {
        let mut users = self.users.write().await;
        let removed = users.len() as u64;
        users.clear();
        Ok(removed)
    }
}
