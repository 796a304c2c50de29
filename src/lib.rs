pub mod api;
pub mod assistant;
pub mod chat;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;
pub mod render;

pub use chat::{ChatBackend, ChatError, ChatRelay, HttpChatBackend, MockChatBackend};
pub use config::Config;
pub use domain::{Block, Decimal, Side, TimeMs, Transaction, TxKind};
pub use engine::{MarketParams, MarketSimulator, TradeError};
pub use error::AppError;
pub use orchestration::{MarketController, Scheduler, SharedController, TickIntervals};
