use std::sync::Arc;

use rand::Rng;

use crate::domain::{Block, Decimal, Side, Transaction};

use super::blocks::BlockFeed;
use super::clock::Clock;
use super::ledger::{TransactionLog, DEFAULT_RETENTION};
use super::price::{PriceProcess, PriceTick};
use super::wallet::{TradeError, Wallet};

/// Starting conditions for a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketParams {
    pub initial_price: Decimal,
    pub initial_balance: Decimal,
    pub tx_retention: usize,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            initial_price: Decimal::from_scaled(87, 2),
            initial_balance: Decimal::from_scaled(100_000, 2),
            tx_retention: DEFAULT_RETENTION,
        }
    }
}

/// All mutable market state, driven by an injected random source and clock.
///
/// Every operation runs to completion synchronously; callers that share the
/// simulator across tasks wrap it in a lock.
#[derive(Debug)]
pub struct MarketSimulator<R> {
    price: PriceProcess,
    log: TransactionLog,
    feed: BlockFeed,
    wallet: Wallet,
    rng: R,
    clock: Arc<dyn Clock>,
}

impl<R: Rng> MarketSimulator<R> {
    pub fn new(params: MarketParams, rng: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            price: PriceProcess::new(params.initial_price),
            log: TransactionLog::new(params.tx_retention),
            feed: BlockFeed::new(),
            wallet: Wallet::new(params.initial_balance),
            rng,
            clock,
        }
    }

    /// Advance the price walk by one step.
    pub fn price_tick(&mut self) -> PriceTick {
        let tick = self.price.tick(&mut self.rng);
        tracing::debug!(price = %tick.price, change = %tick.change, "price tick");
        tick
    }

    /// Fabricate one transfer between random wallets.
    pub fn transaction_tick(&mut self) -> Transaction {
        let now = self.clock.now();
        let tx = self.log.record_simulated(&mut self.rng, now);
        tracing::debug!(id = tx.id, amount = %tx.amount, "simulated transaction");
        tx
    }

    /// Fabricate one block.
    pub fn block_tick(&mut self) -> Block {
        let now = self.clock.now();
        let block = self.feed.mine(&mut self.rng, now);
        tracing::debug!(id = block.id, hash = %block.hash, miner = %block.mined_by, "block mined");
        block
    }

    /// Buy AURA with `brl` at the current price.
    ///
    /// Non-positive amounts are ignored and return `None`, as does a credit
    /// that would overflow the balance.
    pub fn buy(&mut self, brl: Decimal) -> Option<Transaction> {
        if !brl.is_positive() {
            return None;
        }
        let aura = brl.checked_div(self.price.price())?;
        if self.wallet.credit(aura).is_none() {
            tracing::warn!(brl = %brl, balance = %self.wallet.balance(), "buy rejected: balance overflow");
            return None;
        }
        let tx = self.log.record_user(Side::Buy, aura, self.clock.now());
        tracing::info!(brl = %brl, aura = %aura, balance = %self.wallet.balance(), "buy executed");
        Some(tx)
    }

    /// Sell `aura` from the wallet. Requires `0 < aura <= balance`.
    pub fn sell(&mut self, aura: Decimal) -> Result<Transaction, TradeError> {
        if let Err(e) = self.wallet.debit(aura) {
            tracing::warn!(requested = %aura, balance = %self.wallet.balance(), "sell rejected");
            return Err(e);
        }
        let tx = self.log.record_user(Side::Sell, aura, self.clock.now());
        tracing::info!(aura = %aura, balance = %self.wallet.balance(), "sell executed");
        Ok(tx)
    }

    /// AURA obtainable for `brl` at the current price, rounded to cents.
    /// Read-only; non-positive input yields zero.
    pub fn convert(&self, brl: Decimal) -> Decimal {
        if !brl.is_positive() {
            return Decimal::zero();
        }
        brl.checked_div(self.price.price())
            .map(|aura| aura.round_dp(2))
            .unwrap_or_default()
    }

    pub fn price(&self) -> Decimal {
        self.price.price()
    }

    /// Recent prices, oldest first.
    pub fn price_history(&self) -> Vec<Decimal> {
        self.price.history()
    }

    pub fn balance(&self) -> Decimal {
        self.wallet.balance()
    }

    pub fn transactions(&self) -> &TransactionLog {
        &self.log
    }

    /// Blocks in the feed, newest first.
    pub fn blocks(&self) -> Vec<Block> {
        self.feed.blocks()
    }
}
