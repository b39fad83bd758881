//! Bloglist Server
//!
//! Loads configuration from the environment (and `.env` if present), opens
//! the record store, and serves the full API until interrupted.

use dotenv::dotenv;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use bloglist_service::{
    api::{create_app, AppState},
    config::AppConfig,
    database::StoreConnection,
    service::{BlogService, UserService},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Load configuration from environment
    let config = AppConfig::from_env()?;
    config.validate()?;

    // RUST_LOG wins over LOG_LEVEL when both are set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.server.log_level.as_str()),
    )
    .init();

    log::info!("Starting Bloglist Service v{}", bloglist_service::VERSION);
    log::info!("Record store: {:?}", config.database);

    let connection = StoreConnection::open(&config.database).await?;

    let app_state = AppState::new(
        BlogService::new(connection.blogs()),
        UserService::new(connection.users()),
    );

    let app = create_app(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .into_inner(),
    );

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!("Server running on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    connection.shutdown().await;
    log::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
