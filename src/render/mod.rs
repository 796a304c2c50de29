//! View state derived from the market: ticker text, chart dataset,
//! transaction feed rows and the block-chain canvas.

pub mod blockchain;
pub mod canvas;
pub mod chart;
pub mod display;

pub use blockchain::draw_blockchain;
pub use canvas::{Canvas, DrawOp, RecordingCanvas};
pub use chart::{ChartRenderer, PriceChart};
pub use display::{PriceDisplay, TransactionView, TxStyle};

use crate::domain::{Block, Decimal, Transaction};
use crate::engine::{PriceTick, DISPLAY_LIMIT};

/// Everything the widget currently shows.
#[derive(Debug, Clone)]
pub struct MarketView {
    pub price: PriceDisplay,
    pub balance: String,
    pub chart: PriceChart,
    pub transactions: Vec<TransactionView>,
    pub canvas: RecordingCanvas,
    container_width: u32,
}

impl MarketView {
    pub fn new(container_width: u32, price: Decimal, balance: Decimal) -> Self {
        let mut view = Self {
            price: PriceDisplay::initial(price),
            balance: display::balance_text(balance),
            chart: PriceChart::new(),
            transactions: Vec::new(),
            canvas: RecordingCanvas::new(container_width, blockchain::CANVAS_HEIGHT),
            container_width,
        };
        view.render_blocks(&[]);
        view
    }

    pub fn container_width(&self) -> u32 {
        self.container_width
    }

    pub fn render_price(&mut self, tick: &PriceTick, history: &[Decimal]) {
        self.price = PriceDisplay::from_tick(tick);
        self.chart.render(history);
    }

    pub fn render_balance(&mut self, balance: Decimal) {
        self.balance = display::balance_text(balance);
    }

    /// Render the newest entries; `transactions` is newest first.
    pub fn render_transactions<'a, I>(&mut self, transactions: I)
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        self.transactions = transactions
            .into_iter()
            .take(DISPLAY_LIMIT)
            .map(TransactionView::from)
            .collect();
    }

    pub fn render_blocks(&mut self, blocks: &[Block]) {
        draw_blockchain(&mut self.canvas, self.container_width, blocks);
    }

    /// Container changed size: remember it and redraw the chain.
    pub fn resize(&mut self, width: u32, blocks: &[Block]) {
        self.container_width = width;
        self.render_blocks(blocks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Side, TimeMs};
    use crate::engine::TransactionLog;

    #[test]
    fn test_feed_shows_five_newest() {
        let mut log = TransactionLog::default();
        for i in 0..8 {
            log.record_user(Side::Buy, Decimal::from(i + 1), TimeMs::new(i));
        }
        let mut view = MarketView::new(800, Decimal::from(1), Decimal::from(1));
        view.render_transactions(log.iter());
        assert_eq!(view.transactions.len(), 5);
        assert_eq!(view.transactions[0].amount_text, "+ 8.00 AURA");
    }

    #[test]
    fn test_resize_updates_width() {
        let mut view = MarketView::new(800, Decimal::from(1), Decimal::from(1));
        view.resize(320, &[]);
        assert_eq!(view.container_width(), 320);
        assert_eq!(view.canvas.width(), 320);
    }

    #[test]
    fn test_initial_ticker() {
        let view = MarketView::new(800, Decimal::from_scaled(87, 2), Decimal::from(1000));
        assert_eq!(view.price.price, "$ 0.87");
        assert_eq!(view.price.change, "0.00 (Estável)");
        assert_eq!(view.balance, "1000.00 AURA");
    }
}
