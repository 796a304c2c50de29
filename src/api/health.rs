use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::domain::Decimal;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Liveness: the process is up and routing.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse {
    pub status: &'static str,
    pub price: Decimal,
    pub price_samples: usize,
    pub transactions: usize,
    pub blocks: usize,
}

/// Readiness: the market controller answers and the price walk has produced
/// at least one sample. Before the first price tick the service reports
/// `starting`.
pub async fn ready(State(state): State<AppState>) -> Json<ReadyResponse> {
    let controller = state.controller.lock().await;
    let sim = controller.simulator();
    let price_samples = sim.price_history().len();

    Json(ReadyResponse {
        status: if price_samples > 0 { "ready" } else { "starting" },
        price: sim.price(),
        price_samples,
        transactions: sim.transactions().len(),
        blocks: sim.blocks().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatRelay, MockChatBackend};
    use crate::domain::TimeMs;
    use crate::engine::{FixedClock, MarketParams, MarketSimulator};
    use crate::orchestration::MarketController;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::sync::Arc;

    fn state() -> AppState {
        let sim = MarketSimulator::new(
            MarketParams::default(),
            ChaCha8Rng::seed_from_u64(7),
            Arc::new(FixedClock::new(TimeMs::new(0))),
        );
        let controller = MarketController::new(sim, 800).into_shared();
        AppState::new(controller, ChatRelay::new(Arc::new(MockChatBackend::answering("ok"))))
    }

    #[tokio::test]
    async fn test_health_names_service() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "aurasim");
    }

    #[tokio::test]
    async fn test_ready_after_first_price_tick() {
        let state = state();
        let Json(body) = ready(State(state.clone())).await;
        assert_eq!(body.status, "starting");
        assert_eq!(body.price, Decimal::from_scaled(87, 2));

        state.controller.lock().await.on_price_tick();
        let Json(body) = ready(State(state)).await;
        assert_eq!(body.status, "ready");
        assert_eq!(body.price_samples, 1);
        assert_eq!(body.blocks, 0);
    }
}
