//! Domain types for the AuraCoin market simulation.
//!
//! This module provides:
//! - Exact money handling via the Decimal wrapper
//! - Domain primitives: TimeMs, Side, TxKind
//! - Transaction and Block records

pub mod block;
pub mod decimal;
pub mod primitives;
pub mod transaction;

pub use block::Block;
pub use decimal::Decimal;
pub use primitives::{Side, TimeMs, TxKind};
pub use transaction::{Transaction, BRL_LABEL, USER_LABEL};
