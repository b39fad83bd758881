//! Shared fixtures for the API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use bloglist_service::{
    api::{create_app, AppState},
    database::{BlogStore, MemoryStore, StoreConnection, UserStore},
    models::{Blog, NewBlog, NewUser, User},
    service::{BlogService, UserService},
    utils::security::hash_password_with_cost,
};

/// Lowest cost bcrypt accepts, keeps the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

/// Application over a fresh in-memory store
pub fn test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let connection = StoreConnection::from_memory(store.clone());

    let state = AppState::new(
        BlogService::new(connection.blogs()),
        UserService::new(connection.users()).with_bcrypt_cost(TEST_BCRYPT_COST),
    );

    TestApp {
        router: create_app(state),
        store,
    }
}

pub fn initial_blogs() -> Vec<NewBlog> {
    vec![
        NewBlog {
            title: "React patterns".to_string(),
            author: Some("Michael Chan".to_string()),
            url: "https://reactpatterns.com/".to_string(),
            likes: 7,
        },
        NewBlog {
            title: "Go To Statement Considered Harmful".to_string(),
            author: Some("Edsger W. Dijkstra".to_string()),
            url: "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html"
                .to_string(),
            likes: 5,
        },
    ]
}

/// Store the initial blogs one after another, so their order is fixed
pub async fn seed_blogs(store: &MemoryStore) {
    for blog in initial_blogs() {
        store.insert_blog(blog).await.unwrap();
    }
}

/// Store `root` with a hash of `sekret`
pub async fn seed_root_user(store: &MemoryStore) {
    let password_hash = hash_password_with_cost("sekret", TEST_BCRYPT_COST).unwrap();
    store
        .insert_user(NewUser::new(
            "root".to_string(),
            Some("Superuser".to_string()),
            password_hash,
        ))
        .await
        .unwrap();
}

pub async fn blogs_in_db(store: &MemoryStore) -> Vec<Blog> {
    store
        .find_all_blogs()
        .await
        .unwrap()
        .into_iter()
        .map(Blog::from)
        .collect()
}

pub async fn users_in_db(store: &MemoryStore) -> Vec<User> {
    store
        .find_all_users()
        .await
        .unwrap()
        .into_iter()
        .map(User::from)
        .collect()
}

/// Response parts the tests assert on
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Value,
}

impl TestResponse {
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|value| value.starts_with("application/json"))
    }

    pub fn error_message(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

/// Send one request through the router and decode the body as JSON
///
/// Empty bodies decode to `Value::Null`.
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        content_type,
        body,
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::GET, uri, None).await
}

pub async fn post(router: &Router, uri: &str, body: Value) -> TestResponse {
    send(router, Method::POST, uri, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::DELETE, uri, None).await
}
