mod auth;
mod health;
mod middlewares;
mod shift;
mod swagger;
mod view;
use crate::database;
use health::health_checker_handler;
use tracing::info;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{session::SessionStore, AppState, Config};

use axum::{routing::get, Router};
use dotenv::dotenv;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the full application: environment, logging, database, bootstrap
/// seed, router. Returns the router together with the address to bind.
pub async fn make_app() -> Result<(Router, SocketAddr), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
    let config = Config::init();
    info!("Opening SQLite database at {}...", config.db_url);
    let sqlx_db_connection = database::connect_sqlx(&config.db_url).await;
    let db = database::ShiftDatabase::new(sqlx_db_connection);
    db.bootstrap().await?;
    info!("Tables ready, branch and admin accounts seeded");

    let state = Arc::new(AppState {
        db,
        sessions: SessionStore::new(),
    });
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    Ok((build_router(state), addr))
}

/// Assembles the router over already-initialized state. Split out of
/// [make_app] so integration tests can drive the same routes against an
/// in-memory database.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(health_checker_handler))
        .route("/api/health", get(health_checker_handler))
        .route("/api/view", get(view::current_view_handler))
        .nest("/api/auth", auth::auth_routes(state.clone()))
        .nest("/api/shift", shift::shift_routes(state.clone()))
        .merge(swagger::build_documentation())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
