use serde::Serialize;

use crate::domain::Decimal;

/// Consumer of the bounded price history, redrawn on every price tick.
pub trait ChartRenderer {
    fn render(&mut self, history: &[Decimal]);
}

/// Line-chart dataset: one point per retained price, labelled by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceChart {
    pub label: &'static str,
    pub labels: Vec<usize>,
    pub data: Vec<f64>,
}

impl PriceChart {
    pub fn new() -> Self {
        Self {
            label: "Preço (USD)",
            labels: Vec::new(),
            data: Vec::new(),
        }
    }
}

impl ChartRenderer for PriceChart {
    fn render(&mut self, history: &[Decimal]) {
        self.labels = (0..history.len()).collect();
        self.data = history.iter().map(Decimal::to_f64).collect();
    }
}
