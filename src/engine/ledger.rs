use std::collections::VecDeque;

use rand::Rng;

use crate::domain::{Decimal, Side, TimeMs, Transaction, TxKind};

/// Number of transactions shown in the feed.
pub const DISPLAY_LIMIT: usize = 5;

/// Default number of transactions kept in memory.
pub const DEFAULT_RETENTION: usize = 500;

/// Newest-first transaction log with bounded retention.
#[derive(Debug, Clone)]
pub struct TransactionLog {
    entries: VecDeque<Transaction>,
    retention: usize,
    last_id: i64,
}

impl TransactionLog {
    pub fn new(retention: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            retention: retention.max(DISPLAY_LIMIT),
            last_id: 0,
        }
    }

    /// Time-based id, bumped past the previous one when the clock has not moved.
    fn next_id(&mut self, now: TimeMs) -> i64 {
        let id = now.as_ms().max(self.last_id + 1);
        self.last_id = id;
        id
    }

    fn push(&mut self, tx: Transaction) -> Transaction {
        self.entries.push_front(tx.clone());
        self.entries.truncate(self.retention);
        tx
    }

    /// Fabricate a transfer between two random wallets for 10.00..60.00 AURA.
    pub fn record_simulated<R: Rng>(&mut self, rng: &mut R, now: TimeMs) -> Transaction {
        let from = format!("AuraWallet-{}", rng.gen_range(0..1000));
        let to = format!("AuraWallet-{}", rng.gen_range(0..1000));
        let cents: i64 = rng.gen_range(1000..6000);

        let tx = Transaction {
            id: self.next_id(now),
            kind: TxKind::Simulated,
            from,
            to,
            amount: Decimal::from_scaled(cents, 2),
            time: now,
        };
        self.push(tx)
    }

    /// Record a user trade. Callers guarantee `amount > 0`.
    pub fn record_user(&mut self, side: Side, amount: Decimal, now: TimeMs) -> Transaction {
        let id = self.next_id(now);
        self.push(Transaction::user(id, side, amount, now))
    }

    /// The `n` most recent records, newest first.
    pub fn recent(&self, n: usize) -> Vec<Transaction> {
        self.entries.iter().take(n).cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn retention(&self) -> usize {
        self.retention
    }
}

impl Default for TransactionLog {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION)
    }
}
