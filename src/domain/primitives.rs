//! Domain primitives: TimeMs, Side, TxKind.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Time in milliseconds since Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeMs(pub i64);

impl TimeMs {
    /// Create a TimeMs from milliseconds.
    pub fn new(ms: i64) -> Self {
        TimeMs(ms)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        TimeMs(Utc::now().timestamp_millis())
    }

    /// Get the underlying milliseconds value.
    pub fn as_ms(&self) -> i64 {
        self.0
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }

    /// Local wall-clock time as `HH:MM:SS`.
    pub fn to_clock_string(&self) -> String {
        self.to_datetime()
            .map(|dt| dt.with_timezone(&Local).format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }
}

/// Direction of a user trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// BRL in, AURA credited.
    Buy,
    /// AURA debited, BRL out.
    Sell,
}

impl Side {
    /// The transaction kind recorded for this side.
    pub fn tx_kind(&self) -> TxKind {
        match self {
            Side::Buy => TxKind::UserBuy,
            Side::Sell => TxKind::UserSell,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Origin of a transaction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxKind {
    /// Fabricated by the transaction tick.
    #[serde(rename = "simulated")]
    Simulated,
    /// User bought AURA with BRL.
    #[serde(rename = "user-buy")]
    UserBuy,
    /// User sold AURA for BRL.
    #[serde(rename = "user-sell")]
    UserSell,
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxKind::Simulated => write!(f, "simulated"),
            TxKind::UserBuy => write!(f, "user-buy"),
            TxKind::UserSell => write!(f, "user-sell"),
        }
    }
}
