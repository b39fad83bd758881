//! Blog Handlers
//!
//! HTTP adapters for the blog collection endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::handlers::AppState,
    models::{Blog, CreateBlogRequest},
    utils::error::AppResult,
};

/// List every blog
pub async fn list_blogs(State(state): State<AppState>) -> AppResult<Json<Vec<Blog>>> {
    let blogs = state.blog_service.list_blogs().await?;
    Ok(Json(blogs))
}

/// Create a new blog
///
/// Body decoding errors are reported like validation errors, as a 400 with
/// an `error` message.
pub async fn create_blog(
    State(state): State<AppState>,
    payload: Result<Json<CreateBlogRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Blog>)> {
    let Json(request) = payload?;
    let blog = state.blog_service.create_blog(request).await?;
    Ok((StatusCode::CREATED, Json(blog)))
}

/// Get a blog by id
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Blog>> {
    let blog = state.blog_service.get_blog(&id).await?;
    Ok(Json(blog))
}

/// Delete a blog by id
///
/// Answers 204 whether or not the blog existed.
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.blog_service.delete_blog(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
