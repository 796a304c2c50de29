use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::domain::{Block, Decimal};
use crate::engine::Trend;
use crate::error::AppError;
use crate::render::{PriceChart, RecordingCanvas, TransactionView};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketResponse {
    pub price: Decimal,
    pub price_text: String,
    pub change_text: String,
    pub trend: Trend,
    pub balance: Decimal,
    pub balance_text: String,
    pub chart: PriceChart,
    pub transactions: Vec<TransactionView>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Serialize)]
pub struct BlocksResponse {
    pub blocks: Vec<Block>,
    pub canvas: RecordingCanvas,
}

#[derive(Debug, Deserialize)]
pub struct ResizeRequest {
    pub width: u32,
}

pub async fn get_market(State(state): State<AppState>) -> Json<MarketResponse> {
    let controller = state.controller.lock().await;
    let sim = controller.simulator();
    let view = controller.view();

    Json(MarketResponse {
        price: sim.price(),
        price_text: view.price.price.clone(),
        change_text: view.price.change.clone(),
        trend: view.price.trend,
        balance: sim.balance(),
        balance_text: view.balance.clone(),
        chart: view.chart.clone(),
        transactions: view.transactions.clone(),
        blocks: sim.blocks(),
    })
}

pub async fn get_chart(State(state): State<AppState>) -> Json<PriceChart> {
    let controller = state.controller.lock().await;
    Json(controller.view().chart.clone())
}

pub async fn get_blocks(State(state): State<AppState>) -> Json<BlocksResponse> {
    let controller = state.controller.lock().await;
    Json(BlocksResponse {
        blocks: controller.simulator().blocks(),
        canvas: controller.view().canvas.clone(),
    })
}

/// The container changed size; redraw the chain at the new width.
pub async fn resize(
    State(state): State<AppState>,
    Json(req): Json<ResizeRequest>,
) -> Result<Json<BlocksResponse>, AppError> {
    if req.width == 0 {
        return Err(AppError::BadRequest("width must be positive".into()));
    }

    let mut controller = state.controller.lock().await;
    controller.resize(req.width);
    Ok(Json(BlocksResponse {
        blocks: controller.simulator().blocks(),
        canvas: controller.view().canvas.clone(),
    }))
}
