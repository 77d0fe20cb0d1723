//! Business Card Manager API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use business_card_manager::infrastructure::driven_adapters::config::{AppConfig, LoggingConfig};
use business_card_manager::infrastructure::driven_adapters::{database, ImagePhotoEncoder, PostgresBusinessCardRepository};
use business_card_manager::infrastructure::driving_adapters::api_rest::{self, AppState};

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "business_card_manager=debug,tower_http=debug".into());

    let (json, pretty) = if logging.json {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    tracing_subscriber::registry().with(filter).with(json).with(pretty).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    init_tracing(&config.logging);
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create adapters
    let repository = Arc::new(PostgresBusinessCardRepository::new(pool));
    let photo_encoder = Arc::new(ImagePhotoEncoder::new(config.photo.clone()));

    // Create application state
    let app_state = AppState::new(Arc::new(config.clone()), repository, photo_encoder);

    // Build router
    let app = api_rest::router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
