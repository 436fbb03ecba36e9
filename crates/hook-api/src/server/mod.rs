//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use hook_common::{AppConfig, AppError, AppResult};
use hook_db::{create_pool, ensure_schema, PgEventRepository};
use hook_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Connect the event store and create AppState
pub async fn create_app_state(config: &AppConfig) -> AppResult<AppState> {
    info!("Connecting to PostgreSQL...");
    let db_config = hook_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let event_repo = Arc::new(PgEventRepository::new(pool));
    let service_context = ServiceContext::new(event_repo);

    Ok(AppState::new(service_context))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.server.address();

    // Create app state
    let state = create_app_state(&config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &addr).await
}
