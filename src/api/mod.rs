pub mod assistant;
pub mod chat;
pub mod health;
pub mod market;
pub mod trade;

use crate::assistant::Assistant;
use crate::chat::ChatRelay;
use crate::orchestration::SharedController;
use axum::{
    routing::{get, post},
    Router,
};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

/// Controller type served by the binary.
pub type AppController = SharedController<ChaCha8Rng>;

#[derive(Clone)]
pub struct AppState {
    pub controller: AppController,
    pub relay: Arc<ChatRelay>,
    pub assistant: Arc<RwLock<Assistant>>,
}

impl AppState {
    pub fn new(controller: AppController, relay: ChatRelay) -> Self {
        Self {
            controller,
            relay: Arc::new(relay),
            assistant: Arc::new(RwLock::new(Assistant::new())),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(assistant::root))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/market", get(market::get_market))
        .route("/v1/market/chart", get(market::get_chart))
        .route("/v1/market/blocks", get(market::get_blocks))
        .route("/v1/market/resize", post(market::resize))
        .route("/v1/buy", post(trade::buy))
        .route("/v1/sell", post(trade::sell))
        .route("/v1/convert", post(trade::convert))
        .route("/v1/chat", post(chat::send))
        .route("/generate", post(assistant::generate))
        .route("/learn", post(assistant::learn))
        .layer(cors)
        .with_state(state)
}
