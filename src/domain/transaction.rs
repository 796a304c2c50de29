use serde::{Deserialize, Serialize};

use super::{Decimal, Side, TimeMs, TxKind};

/// Counterparty label for the BRL side of a user trade.
pub const BRL_LABEL: &str = "BRL";
/// Counterparty label for the user's own wallet.
pub const USER_LABEL: &str = "Você";

/// A transaction record, simulated or user-initiated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub kind: TxKind,
    pub from: String,
    pub to: String,
    pub amount: Decimal,
    pub time: TimeMs,
}

impl Transaction {
    /// A user trade. Buys move BRL into the user's wallet; sells pay out to BRL.
    pub fn user(id: i64, side: Side, amount: Decimal, time: TimeMs) -> Self {
        let (from, to) = match side {
            Side::Buy => (BRL_LABEL, USER_LABEL),
            Side::Sell => (USER_LABEL, BRL_LABEL),
        };
        Self {
            id,
            kind: side.tx_kind(),
            from: from.to_string(),
            to: to.to_string(),
            amount,
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_counterparties() {
        let buy = Transaction::user(1, Side::Buy, Decimal::from(5), TimeMs::new(0));
        assert_eq!((buy.from.as_str(), buy.to.as_str()), ("BRL", "Você"));
        assert_eq!(buy.kind, TxKind::UserBuy);

        let sell = Transaction::user(2, Side::Sell, Decimal::from(5), TimeMs::new(0));
        assert_eq!((sell.from.as_str(), sell.to.as_str()), ("Você", "BRL"));
        assert_eq!(sell.kind, TxKind::UserSell);
    }
}
