use std::collections::VecDeque;

use rand::Rng;
use serde::Serialize;

use crate::domain::Decimal;

/// Maximum number of prices kept for the chart.
pub const HISTORY_CAP: usize = 20;

/// Largest absolute perturbation per tick, in millionths (0.05).
pub const MAX_STEP_MICROS: i64 = 50_000;

/// Lowest price the walk can reach (0.01).
pub fn price_floor() -> Decimal {
    Decimal::from_scaled(1, 2)
}

/// Direction of the last price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

/// Outcome of one price tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceTick {
    pub previous: Decimal,
    pub price: Decimal,
    pub change: Decimal,
    pub trend: Trend,
}

/// Bounded uniform random walk over the AURA price.
#[derive(Debug, Clone)]
pub struct PriceProcess {
    price: Decimal,
    history: VecDeque<Decimal>,
}

impl PriceProcess {
    pub fn new(initial: Decimal) -> Self {
        let floor = price_floor();
        Self {
            price: if initial < floor { floor } else { initial },
            history: VecDeque::with_capacity(HISTORY_CAP + 1),
        }
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Oldest first.
    pub fn history(&self) -> Vec<Decimal> {
        self.history.iter().copied().collect()
    }

    /// Draw a perturbation in `[-0.05, 0.05]` and apply it.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> PriceTick {
        let micros = rng.gen_range(-MAX_STEP_MICROS..=MAX_STEP_MICROS);
        self.apply(Decimal::from_scaled(micros, 6))
    }

    /// Apply a perturbation of any size, flooring at 0.01.
    pub fn apply(&mut self, perturbation: Decimal) -> PriceTick {
        let previous = self.price;
        let floor = price_floor();
        let candidate = previous + perturbation;
        self.price = if candidate < floor { floor } else { candidate };

        self.history.push_back(self.price);
        while self.history.len() > HISTORY_CAP {
            self.history.pop_front();
        }

        let change = self.price - previous;
        let trend = if change.is_positive() {
            Trend::Rising
        } else if change.is_negative() {
            Trend::Falling
        } else {
            Trend::Stable
        };

        PriceTick {
            previous,
            price: self.price,
            change,
            trend,
        }
    }
}
