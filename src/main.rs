//! UPI Fraud Check Server
//!
//! Web front-end for a pre-trained UPI transaction fraud classifier.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    UPI FRAUD CHECK                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────┐  ┌──────────────────────┐ │
//! │  │  Pages    │  │  Predict     │  │  Static assets       │ │
//! │  │  (Axum)   │  │  (Form)      │  │  (ServeDir)          │ │
//! │  └───────────┘  └──────┬───────┘  └──────────────────────┘ │
//! │                        ▼                                    │
//! │               ┌─────────────────┐                          │
//! │               │  Classifier     │  loaded once, read-only  │
//! │               │  (RandomForest) │                          │
//! │               └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod inference;
mod handlers;
mod templates;
mod error;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inference::Classifier;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "upi_fraud_check=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("UPI Fraud Check starting...");
    tracing::info!("Model: {}", config.model_path.display());
    tracing::info!("Static files: {}", config.static_dir.display());

    // No model, no service
    let model = inference::load_model(&config.model_path)
        .with_context(|| format!("Failed to load model from {}", config.model_path.display()))?;

    let state = AppState {
        classifier: Arc::new(model),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = config.bind_addr();
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/developers", get(handlers::pages::developers))
        .route("/predict", post(handlers::predict::predict))
        .route("/health", get(handlers::health::check))
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
