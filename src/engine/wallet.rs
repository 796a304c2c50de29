use thiserror::Error;

use crate::domain::Decimal;

/// User-facing text for a rejected sell.
pub const INSUFFICIENT_BALANCE_MESSAGE: &str = "Saldo insuficiente para a venda.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeError {
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },
}

/// The user's AURA balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    balance: Decimal,
}

impl Wallet {
    pub fn new(balance: Decimal) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add `amount` to the balance. Returns `None` and leaves the balance
    /// untouched when the sum would overflow.
    pub fn credit(&mut self, amount: Decimal) -> Option<Decimal> {
        self.balance = self.balance.checked_add(amount)?;
        Some(self.balance)
    }

    /// Debit `amount` if `0 < amount <= balance`; otherwise leave the balance untouched.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), TradeError> {
        if !amount.is_positive() || amount > self.balance {
            return Err(TradeError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}
