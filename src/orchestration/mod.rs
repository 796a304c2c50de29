pub mod controller;
pub mod scheduler;

pub use controller::{MarketController, SharedController};
pub use scheduler::{Scheduler, TickIntervals};
