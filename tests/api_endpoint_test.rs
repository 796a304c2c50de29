use aurasim::api::{self, AppState};
use aurasim::chat::{ChatRelay, MockChatBackend};
use aurasim::domain::{Decimal, TimeMs};
use aurasim::engine::{FixedClock, MarketParams, MarketSimulator};
use aurasim::orchestration::MarketController;
use axum::http::StatusCode;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tower::util::ServiceExt;

fn setup_test_app() -> (axum::Router, AppState) {
    let sim = MarketSimulator::new(
        MarketParams::default(),
        ChaCha8Rng::seed_from_u64(42),
        Arc::new(FixedClock::new(TimeMs::new(1_705_000_000_000))),
    );
    let controller = MarketController::new(sim, 800).into_shared();
    let relay = ChatRelay::new(Arc::new(MockChatBackend::answering("Resposta simulada")));
    let state = AppState::new(controller, relay);
    (api::create_router(state.clone()), state)
}

async fn request(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = axum::http::Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = setup_test_app();
    let (status, body) = request(app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "aurasim");
}

#[tokio::test]
async fn test_ready_reports_market_state() {
    let (app, state) = setup_test_app();
    let (status, body) = request(app.clone(), "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "starting");

    state.controller.lock().await.on_price_tick();
    let (_, body) = request(app, "GET", "/ready", None).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["priceSamples"], 1);
    assert_eq!(body["transactions"], 0);
}

#[tokio::test]
async fn test_initial_market_snapshot() {
    let (app, _) = setup_test_app();
    let (status, body) = request(app, "GET", "/v1/market", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["priceText"], "$ 0.87");
    assert_eq!(body["balanceText"], "1000.00 AURA");
    assert_eq!(body["changeText"], "0.00 (Estável)");
    assert_eq!(body["trend"], "stable");
    assert!(body["transactions"].as_array().unwrap().is_empty());
    assert!(body["blocks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_buy_updates_balance_and_feed() {
    let (app, _) = setup_test_app();
    let (status, body) = request(
        app.clone(),
        "POST",
        "/v1/buy",
        Some(serde_json::json!({"amount": "87"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["executed"], true);
    assert_eq!(body["transaction"]["kind"], "user-buy");
    assert_eq!(body["transaction"]["amount"], 100.0);
    assert_eq!(body["balance"], 1100.0);

    let (_, market) = request(app, "GET", "/v1/market", None).await;
    assert_eq!(market["balanceText"], "1100.00 AURA");
    assert_eq!(market["transactions"][0]["amountText"], "+ 100.00 AURA");
    assert_eq!(market["transactions"][0]["style"], "positive");
}

#[tokio::test]
async fn test_buy_with_invalid_amount_does_nothing() {
    let (app, state) = setup_test_app();
    let (status, body) = request(
        app,
        "POST",
        "/v1/buy",
        Some(serde_json::json!({"amount": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["executed"], false);
    assert!(body.get("transaction").is_none());

    let controller = state.controller.lock().await;
    assert!(controller.simulator().transactions().is_empty());
}

#[tokio::test]
async fn test_buy_that_would_overflow_balance_is_not_executed() {
    let (app, state) = setup_test_app();
    let huge = serde_json::json!({"amount": "60000000000000000000000000000"});

    let (status, body) = request(app.clone(), "POST", "/v1/buy", Some(huge.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["executed"], true);

    let (status, body) = request(app, "POST", "/v1/buy", Some(huge)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["executed"], false);

    let controller = state.controller.lock().await;
    assert_eq!(controller.simulator().transactions().len(), 1);
}

#[tokio::test]
async fn test_buy_parses_numeric_prefix_and_exponent() {
    let (app, state) = setup_test_app();
    let (_, body) = request(
        app.clone(),
        "POST",
        "/v1/buy",
        Some(serde_json::json!({"amount": "87abc"})),
    )
    .await;
    assert_eq!(body["executed"], true);
    assert_eq!(body["transaction"]["amount"], 100.0);

    let (_, body) = request(
        app,
        "POST",
        "/v1/convert",
        Some(serde_json::json!({"amount": "8.7e1"})),
    )
    .await;
    assert_eq!(body["aura"], "100.00");

    let controller = state.controller.lock().await;
    assert_eq!(controller.simulator().balance(), Decimal::from(1100));
}

#[tokio::test]
async fn test_sell_over_balance_is_conflict() {
    let (app, state) = setup_test_app();
    let (status, body) = request(
        app,
        "POST",
        "/v1/sell",
        Some(serde_json::json!({"amount": 5000})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Saldo insuficiente para a venda.");

    let controller = state.controller.lock().await;
    assert_eq!(controller.simulator().balance(), Decimal::from(1000));
    assert!(controller.simulator().transactions().is_empty());
}

#[tokio::test]
async fn test_sell_within_balance() {
    let (app, _) = setup_test_app();
    let (status, body) = request(
        app,
        "POST",
        "/v1/sell",
        Some(serde_json::json!({"amount": 250})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction"]["kind"], "user-sell");
    assert_eq!(body["transaction"]["from"], "Você");
    assert_eq!(body["balance"], 750.0);
}

#[tokio::test]
async fn test_convert() {
    let (app, _) = setup_test_app();
    let (_, body) = request(
        app.clone(),
        "POST",
        "/v1/convert",
        Some(serde_json::json!({"amount": 87})),
    )
    .await;
    assert_eq!(body["aura"], "100.00");

    let (_, body) = request(
        app,
        "POST",
        "/v1/convert",
        Some(serde_json::json!({"amount": -3})),
    )
    .await;
    assert_eq!(body["aura"], "0.00");
}

#[tokio::test]
async fn test_blocks_and_resize() {
    let (app, state) = setup_test_app();
    {
        let mut controller = state.controller.lock().await;
        controller.on_block_tick();
        controller.on_block_tick();
    }

    let (_, body) = request(app.clone(), "GET", "/v1/market/blocks", None).await;
    assert_eq!(body["blocks"].as_array().unwrap().len(), 2);
    assert_eq!(body["blocks"][0]["id"], 2);
    assert_eq!(body["canvas"]["width"], 800);

    let (status, body) = request(
        app.clone(),
        "POST",
        "/v1/market/resize",
        Some(serde_json::json!({"width": 400})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["canvas"]["width"], 400);
    assert_eq!(body["canvas"]["height"], 150);
    let first_tile = body["canvas"]["ops"]
        .as_array()
        .unwrap()
        .iter()
        .find(|op| op["op"] == "fillRect")
        .unwrap();
    assert_eq!(first_tile["x"], 320.0);

    let (status, _) = request(
        app,
        "POST",
        "/v1/market/resize",
        Some(serde_json::json!({"width": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chart_follows_price_ticks() {
    let (app, state) = setup_test_app();
    {
        let mut controller = state.controller.lock().await;
        for _ in 0..3 {
            controller.on_price_tick();
        }
    }
    let (_, body) = request(app, "GET", "/v1/market/chart", None).await;
    assert_eq!(body["labels"], serde_json::json!([0, 1, 2]));
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_chat_endpoint_uses_relay() {
    let (app, _) = setup_test_app();
    let (status, body) = request(
        app.clone(),
        "POST",
        "/v1/chat",
        Some(serde_json::json!({"text": "O que é blockchain?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["messages"][0]["sender"], "user");
    assert_eq!(body["messages"][1]["sender"], "ai");
    assert_eq!(body["messages"][1]["text"], "Resposta simulada");

    let (_, body) = request(
        app,
        "POST",
        "/v1/chat",
        Some(serde_json::json!({"text": "   "})),
    )
    .await;
    assert!(body["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_and_learn() {
    let (app, _) = setup_test_app();
    let (status, body) = request(
        app.clone(),
        "POST",
        "/generate",
        Some(serde_json::json!({"prompt": "quem e pele"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert!(body["response"].as_str().unwrap().starts_with("Pelé"));

    let (_, body) = request(
        app.clone(),
        "POST",
        "/learn",
        Some(serde_json::json!({"new_info": "Quem e Pele"})),
    )
    .await;
    assert_eq!(body["status"], "success");

    let (_, body) = request(
        app,
        "POST",
        "/generate",
        Some(serde_json::json!({"prompt": "quem e pele", "language": "pt"})),
    )
    .await;
    assert_eq!(
        body["response"],
        "Já analisei essa informação. O que mais você precisa?"
    );
}
