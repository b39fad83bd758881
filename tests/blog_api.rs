mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{blogs_in_db, delete, get, initial_blogs, post, seed_blogs, test_app};

const CANONICAL_URL: &str = "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html";

#[tokio::test]
async fn blogs_are_returned_as_json() {
    let app = test_app();
    seed_blogs(&app.store).await;

    let response = get(&app.router, "/api/blogs").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.is_json());
}

#[tokio::test]
async fn all_blogs_are_returned() {
    let app = test_app();
    seed_blogs(&app.store).await;

    let response = get(&app.router, "/api/blogs").await;

    let blogs = response.body.as_array().unwrap();
    assert_eq!(blogs.len(), initial_blogs().len());
}

#[tokio::test]
async fn blogs_are_listed_in_insertion_order() {
    let app = test_app();
    seed_blogs(&app.store).await;

    let response = get(&app.router, "/api/blogs").await;

    assert_eq!(response.body[0]["title"], "React patterns");
    assert_eq!(response.body[1]["title"], "Go To Statement Considered Harmful");
}

#[tokio::test]
async fn empty_store_lists_no_blogs() {
    let app = test_app();

    let response = get(&app.router, "/api/blogs").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn identifier_is_named_id() {
    let app = test_app();
    seed_blogs(&app.store).await;

    let response = get(&app.router, "/api/blogs").await;

    let first = &response.body[0];
    assert!(first["id"].is_string());
    assert!(first.get("_id").is_none());
    assert!(first.get("__v").is_none());
}

#[tokio::test]
async fn a_valid_blog_can_be_added() {
    let app = test_app();
    seed_blogs(&app.store).await;

    let response = post(
        &app.router,
        "/api/blogs",
        json!({
            "title": "Canonical string reduction",
            "author": "Edsger W. Dijkstra",
            "url": CANONICAL_URL,
            "likes": 12
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.is_json());
    assert_eq!(response.body["likes"], 12);

    let blogs_at_end = blogs_in_db(&app.store).await;
    assert_eq!(blogs_at_end.len(), initial_blogs().len() + 1);
    assert!(blogs_at_end
        .iter()
        .any(|blog| blog.title == "Canonical string reduction"));
}

#[tokio::test]
async fn client_supplied_identifiers_are_ignored() {
    let app = test_app();

    let response = post(
        &app.router,
        "/api/blogs",
        json!({
            "_id": "5a422b3a1b54a676234d17f9",
            "title": "Canonical string reduction",
            "author": "Edsger W. Dijkstra",
            "url": CANONICAL_URL,
            "likes": 12,
            "__v": 0
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_ne!(response.body["id"], "5a422b3a1b54a676234d17f9");
}

#[tokio::test]
async fn missing_likes_defaults_to_zero() {
    let app = test_app();

    let response = post(
        &app.router,
        "/api/blogs",
        json!({
            "title": "Canonical string reduction",
            "author": "Edsger W. Dijkstra",
            "url": CANONICAL_URL
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["likes"], 0);
}

#[tokio::test]
async fn blog_without_url_is_rejected() {
    let app = test_app();
    seed_blogs(&app.store).await;

    let response = post(
        &app.router,
        "/api/blogs",
        json!({
            "title": "First class tests",
            "author": "Robert C. Martin",
            "likes": 10
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("url is required"));
    assert_eq!(blogs_in_db(&app.store).await.len(), initial_blogs().len());
}

#[tokio::test]
async fn blog_without_title_is_rejected() {
    let app = test_app();

    let response = post(
        &app.router,
        "/api/blogs",
        json!({ "author": "Robert C. Martin", "url": "http://blog.cleancoder.com/" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("title is required"));
    assert!(blogs_in_db(&app.store).await.is_empty());
}

#[tokio::test]
async fn negative_likes_are_rejected() {
    let app = test_app();

    let response = post(
        &app.router,
        "/api/blogs",
        json!({ "title": "Type wars", "url": "http://blog.cleancoder.com/", "likes": -1 }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response
        .error_message()
        .contains("likes must be a non-negative integer"));
}

#[tokio::test]
async fn non_integer_likes_are_rejected() {
    let app = test_app();

    let response = post(
        &app.router,
        "/api/blogs",
        json!({ "title": "Type wars", "url": "http://blog.cleancoder.com/", "likes": "many" }),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(blogs_in_db(&app.store).await.is_empty());
}

#[tokio::test]
async fn a_specific_blog_can_be_viewed() {
    let app = test_app();
    seed_blogs(&app.store).await;
    let blog_to_view = blogs_in_db(&app.store).await.remove(0);

    let response = get(&app.router, &format!("/api/blogs/{}", blog_to_view.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.is_json());
    assert_eq!(response.body, serde_json::to_value(&blog_to_view).unwrap());
}

#[tokio::test]
async fn viewing_a_missing_blog_returns_404() {
    let app = test_app();

    let response = get(&app.router, "/api/blogs/5a422b3a1b54a676234d17f9").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_returns_400() {
    let app = test_app();

    let response = get(&app.router, "/api/blogs/not-an-id").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "malformatted id");
}

#[tokio::test]
async fn a_blog_can_be_deleted() {
    let app = test_app();
    seed_blogs(&app.store).await;
    let blog_to_delete = blogs_in_db(&app.store).await.remove(0);

    let response = delete(&app.router, &format!("/api/blogs/{}", blog_to_delete.id)).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let blogs_at_end = blogs_in_db(&app.store).await;
    assert_eq!(blogs_at_end.len(), initial_blogs().len() - 1);
    assert!(!blogs_at_end
        .iter()
        .any(|blog| blog.title == blog_to_delete.title));
}

#[tokio::test]
async fn deleting_a_missing_blog_still_returns_204() {
    let app = test_app();
    seed_blogs(&app.store).await;

    let response = delete(&app.router, "/api/blogs/5a422b3a1b54a676234d17f9").await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(blogs_in_db(&app.store).await.len(), initial_blogs().len());
}

#[tokio::test]
async fn deleting_with_malformed_id_returns_400() {
    let app = test_app();

    let response = delete(&app.router, "/api/blogs/12345").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "malformatted id");
}

#[tokio::test]
async fn unknown_endpoint_returns_404() {
    let app = test_app();

    let response = get(&app.router, "/api/nothing-here").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "unknown endpoint");
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let app = test_app();

    let response = get(&app.router, "/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["version"], bloglist_service::VERSION);
}

#[tokio::test]
async fn created_blog_is_identical_by_id_and_in_list() {
    let app = test_app();
    seed_blogs(&app.store).await;

    let created = post(
        &app.router,
        "/api/blogs",
        json!({
            "title": "Canonical string reduction",
            "author": "Edsger W. Dijkstra",
            "url": CANONICAL_URL,
            "likes": 12
        }),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_str().unwrap();

    let fetched = get(&app.router, &format!("/api/blogs/{}", id)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);

    let listed = get(&app.router, "/api/blogs").await;
    let blogs = listed.body.as_array().unwrap();
    assert_eq!(blogs.len(), initial_blogs().len() + 1);
    assert_eq!(blogs.last(), Some(&created.body));
}
