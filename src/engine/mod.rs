//! Pure, deterministic market simulation.
//!
//! Nothing in here touches timers, locks or I/O. Randomness and time are
//! injected so every tick can be replayed from a seed.

pub mod blocks;
pub mod clock;
pub mod ledger;
pub mod price;
pub mod simulator;
pub mod wallet;

pub use blocks::{BlockFeed, FEED_CAP};
pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::{TransactionLog, DEFAULT_RETENTION, DISPLAY_LIMIT};
pub use price::{price_floor, PriceProcess, PriceTick, Trend, HISTORY_CAP};
pub use simulator::{MarketParams, MarketSimulator};
pub use wallet::{TradeError, Wallet, INSUFFICIENT_BALANCE_MESSAGE};
