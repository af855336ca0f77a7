//! Spark Runs Backend
//!
//! Roster service for informal running meetups: browse, filter, join and
//! create runs, with the roster mirrored to a SQLite key-value store.

mod api;
mod config;
mod db;
mod errors;
mod export;
mod models;
mod notice;
mod roster;
mod session;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::KvStore;
use session::Session;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Spark Runs Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let store = KvStore::new(pool);

    // Load the roster once; from here on the session owns it
    let session = Session::open(store, config.notice_ttl, config.public_url.clone()).await?;

    let state = AppState {
        session: Arc::new(Mutex::new(session)),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Events
        .route("/events", get(api::list_events).post(api::create_event))
        .route("/events/{id}", get(api::get_event))
        .route("/events/{id}/toggle", post(api::toggle_participation))
        .route("/events/{id}/share", get(api::share_event))
        .route("/events/{id}/calendar", get(api::download_calendar))
        .route("/paces", get(api::list_paces))
        // Session
        .route("/session", get(api::get_session))
        .route("/session/viewer", put(api::set_viewer))
        .route("/reset", post(api::reset_roster));

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
