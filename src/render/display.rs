//! Text shown in the price ticker, wallet and transaction feed.

use serde::Serialize;

use crate::domain::{Decimal, Transaction, TxKind};
use crate::engine::{PriceTick, Trend};

pub fn price_text(price: Decimal) -> String {
    format!("$ {}", price.to_fixed(2))
}

pub fn balance_text(balance: Decimal) -> String {
    format!("{} AURA", balance.to_fixed(2))
}

pub fn change_text(change: Decimal, trend: Trend) -> String {
    match trend {
        Trend::Rising => format!("+{} (Subindo)", change.to_fixed(2)),
        Trend::Falling => format!("{} (Descendo)", change.to_fixed(2)),
        Trend::Stable => "0.00 (Estável)".to_string(),
    }
}

/// Price ticker contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceDisplay {
    pub price: String,
    pub change: String,
    pub trend: Trend,
}

impl PriceDisplay {
    /// Ticker before any move has been observed.
    pub fn initial(price: Decimal) -> Self {
        Self {
            price: price_text(price),
            change: change_text(Decimal::zero(), Trend::Stable),
            trend: Trend::Stable,
        }
    }

    pub fn from_tick(tick: &PriceTick) -> Self {
        Self {
            price: price_text(tick.price),
            change: change_text(tick.change, tick.trend),
            trend: tick.trend,
        }
    }
}

/// Colour treatment of a feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStyle {
    Neutral,
    Positive,
    Negative,
}

/// One rendered row of the transaction feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub id: i64,
    pub kind: TxKind,
    pub style: TxStyle,
    pub amount_text: String,
    pub from_text: String,
    pub to_text: String,
    pub time_text: String,
}

impl From<&Transaction> for TransactionView {
    fn from(tx: &Transaction) -> Self {
        let amount = tx.amount.to_fixed(2);
        let (style, amount_text) = match tx.kind {
            TxKind::UserBuy => (TxStyle::Positive, format!("+ {} AURA", amount)),
            TxKind::UserSell => (TxStyle::Negative, format!("- {} AURA", amount)),
            TxKind::Simulated => (TxStyle::Neutral, format!("{} AURA", amount)),
        };

        Self {
            id: tx.id,
            kind: tx.kind,
            style,
            amount_text,
            from_text: format!("De: {}", tx.from),
            to_text: format!("Para: {}", tx.to),
            time_text: tx.time.to_clock_string(),
        }
    }
}
