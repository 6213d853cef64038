pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::MemStore;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::services::dictionary::{DictionaryClient, DictionarySource};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<MemStore>>,
    pub dictionary: Arc<dyn DictionarySource>,
}

impl AppState {
    pub fn new(store: MemStore, dictionary: impl DictionarySource + 'static) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            dictionary: Arc::new(dictionary),
        }
    }

    /// Lock the store. Guards must be dropped before the next `.await`.
    pub fn store(&self) -> Result<MutexGuard<'_, MemStore>> {
        self.store
            .lock()
            .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))
    }
}

/// Build the full router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Progress and history
        .route("/api/user-progress", get(routes::progress::get))
        .route("/api/search-history", get(routes::history::recent))
        .route("/api/words-over-time", get(routes::history::words_over_time))
        // Words
        .route("/api/word-of-the-day", get(routes::words::word_of_the_day))
        .route("/api/words/search", post(routes::words::search))
        .route("/api/words/save", post(routes::words::save))
        .route("/api/words/lookup", get(routes::words::lookup))
        // Saved words
        .route("/api/saved-words", get(routes::saved_words::list))
        .route("/api/saved-words/:word_id", delete(routes::saved_words::remove))
        // Quizzes
        .route(
            "/api/quizzes",
            get(routes::quizzes::list).post(routes::quizzes::create),
        )
        // Settings
        .route("/api/user-settings", get(routes::settings::get))
        .route("/api/user-settings/:user_id", patch(routes::settings::update))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(&config.log_level);

    let store = if config.seed_demo_data {
        tracing::info!("Seeding demo data...");
        MemStore::with_demo_data()
    } else {
        MemStore::new()
    };

    tracing::info!(
        "Using dictionary at {} (timeout {:?})",
        config.dictionary_url,
        config.dictionary_timeout
    );
    let dictionary = DictionaryClient::new(&config.dictionary_url, config.dictionary_timeout)?;

    let state = AppState::new(store, dictionary);
    let app = app(state);

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
