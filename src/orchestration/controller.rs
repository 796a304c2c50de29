use std::sync::Arc;

use rand::Rng;
use tokio::sync::Mutex;

use crate::domain::{Block, Decimal, Transaction};
use crate::engine::{MarketSimulator, PriceTick, TradeError};
use crate::render::MarketView;

/// Controller shared between the scheduler and request handlers.
pub type SharedController<R> = Arc<Mutex<MarketController<R>>>;

/// Owns the simulator and its view. Every handler mutates state and then
/// re-renders the part of the view it affected.
#[derive(Debug)]
pub struct MarketController<R> {
    sim: MarketSimulator<R>,
    view: MarketView,
}

impl<R: Rng> MarketController<R> {
    pub fn new(sim: MarketSimulator<R>, container_width: u32) -> Self {
        let view = MarketView::new(container_width, sim.price(), sim.balance());
        Self { sim, view }
    }

    pub fn into_shared(self) -> SharedController<R> {
        Arc::new(Mutex::new(self))
    }

    pub fn on_price_tick(&mut self) -> PriceTick {
        let tick = self.sim.price_tick();
        self.view.render_price(&tick, &self.sim.price_history());
        tick
    }

    pub fn on_transaction_tick(&mut self) -> Transaction {
        let tx = self.sim.transaction_tick();
        self.view.render_transactions(self.sim.transactions().iter());
        tx
    }

    pub fn on_block_tick(&mut self) -> Block {
        let block = self.sim.block_tick();
        self.view.render_blocks(&self.sim.blocks());
        block
    }

    pub fn buy(&mut self, brl: Decimal) -> Option<Transaction> {
        let tx = self.sim.buy(brl)?;
        self.render_wallet();
        Some(tx)
    }

    pub fn sell(&mut self, aura: Decimal) -> Result<Transaction, TradeError> {
        let tx = self.sim.sell(aura)?;
        self.render_wallet();
        Ok(tx)
    }

    pub fn convert(&self, brl: Decimal) -> Decimal {
        self.sim.convert(brl)
    }

    pub fn resize(&mut self, width: u32) {
        let blocks = self.sim.blocks();
        self.view.resize(width, &blocks);
    }

    fn render_wallet(&mut self) {
        self.view.render_balance(self.sim.balance());
        self.view.render_transactions(self.sim.transactions().iter());
    }

    pub fn simulator(&self) -> &MarketSimulator<R> {
        &self.sim
    }

    pub fn view(&self) -> &MarketView {
        &self.view
    }
}
