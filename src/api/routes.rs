//! API Route Definitions
//!
//! This module defines the HTTP routes and their handlers using a builder, so
//! deployments can expose only the endpoints they need (for example a
//! read-only mirror of the blog list).

use axum::{
    middleware::from_fn,
    routing::{delete, get, post},
    Router,
};

use super::blog_handlers::{create_blog, delete_blog, get_blog, list_blogs};
use super::handlers::{health_check, unknown_endpoint, AppState};
use super::middleware::request_logger;
use super::user_handlers::{create_user, get_user, list_users};

/// Path prefix every API route is mounted under
pub const API_ROOT: &str = "/api";

/// Builder for creating API routes with configurable endpoints
#[derive(Default)]
pub struct RouterBuilder {
    /// Whether to enable the health check endpoint (GET /health)
    health_check: bool,
    /// Whether to enable the blog list endpoint (GET /blogs)
    list_blogs: bool,
    /// Whether to enable blog creation (POST /blogs)
    create_blog: bool,
    /// Whether to enable blog retrieval (GET /blogs/{id})
    get_blog: bool,
    /// Whether to enable blog deletion (DELETE /blogs/{id})
    delete_blog: bool,
    /// Whether to enable user creation (POST /users)
    create_user: bool,
    /// Whether to enable the user list endpoint (GET /users)
    list_users: bool,
    /// Whether to enable user retrieval (GET /users/{id})
    get_user: bool,
}

impl RouterBuilder {
    /// Creates a new router builder with all routes disabled by default
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router builder with all routes enabled
    pub fn with_all_routes() -> Self {
        Self {
            health_check: true,
            list_blogs: true,
            create_blog: true,
            get_blog: true,
            delete_blog: true,
            create_user: true,
            list_users: true,
            get_user: true,
        }
    }

    /// Creates a router builder with only the read endpoints
    pub fn with_readonly_routes() -> Self {
        Self {
            health_check: true,
            list_blogs: true,
            get_blog: true,
            list_users: true,
            get_user: true,
            ..Self::default()
        }
    }

    /// Creates a router with only the health check, for monitoring
    pub fn with_minimal_routes() -> Self {
        Self {
            health_check: true,
            ..Self::default()
        }
    }

    pub fn health_check(mut self, enabled: bool) -> Self {
        self.health_check = enabled;
        self
    }

    pub fn list_blogs(mut self, enabled: bool) -> Self {
        self.list_blogs = enabled;
        self
    }

    pub fn create_blog(mut self, enabled: bool) -> Self {
        self.create_blog = enabled;
        self
    }

    pub fn get_blog(mut self, enabled: bool) -> Self {
        self.get_blog = enabled;
        self
    }

    pub fn delete_blog(mut self, enabled: bool) -> Self {
        self.delete_blog = enabled;
        self
    }

    pub fn create_user(mut self, enabled: bool) -> Self {
        self.create_user = enabled;
        self
    }

    pub fn list_users(mut self, enabled: bool) -> Self {
        self.list_users = enabled;
        self
    }

    pub fn get_user(mut self, enabled: bool) -> Self {
        self.get_user = enabled;
        self
    }

    /// Builds the Axum router with the configured routes
    ///
    /// Paths are relative; [`create_app`] mounts them under [`API_ROOT`].
    pub fn build(self) -> Router<AppState> {
        let mut router = Router::new();

        if self.health_check {
            router = router.route("/health", get(health_check));
        }

        if self.list_blogs {
            router = router.route("/blogs", get(list_blogs));
        }

        if self.create_blog {
            router = router.route("/blogs", post(create_blog));
        }

        if self.get_blog {
            router = router.route("/blogs/{id}", get(get_blog));
        }

        if self.delete_blog {
            router = router.route("/blogs/{id}", delete(delete_blog));
        }

        if self.create_user {
            router = router.route("/users", post(create_user));
        }

        if self.list_users {
            router = router.route("/users", get(list_users));
        }

        if self.get_user {
            router = router.route("/users/{id}", get(get_user));
        }

        router
    }
}

/// Creates all API routes
pub fn create_routes() -> Router<AppState> {
    RouterBuilder::with_all_routes().build()
}

/// Mounts the given routes under [`API_ROOT`] with request logging and the
/// unknown-endpoint fallback, and attaches the state
pub fn create_app_with(builder: RouterBuilder, state: AppState) -> Router {
    Router::new()
        .nest(API_ROOT, builder.build())
        .fallback(unknown_endpoint)
        .layer(from_fn(request_logger))
        .with_state(state)
}

/// The complete application with every route enabled
pub fn create_app(state: AppState) -> Router {
    create_app_with(RouterBuilder::with_all_routes(), state)
}
