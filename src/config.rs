use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::chat::http::DEFAULT_CHAT_URL;
use crate::domain::Decimal;
use crate::engine::{price_floor, MarketParams, DEFAULT_RETENTION, DISPLAY_LIMIT};
use crate::orchestration::TickIntervals;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub chat_api_url: String,
    pub price_tick_ms: u64,
    pub tx_tick_ms: u64,
    pub block_tick_ms: u64,
    pub initial_price: Decimal,
    pub initial_balance: Decimal,
    pub tx_retention: usize,
    pub sim_seed: Option<u64>,
    pub canvas_width: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            chat_api_url: DEFAULT_CHAT_URL.to_string(),
            price_tick_ms: 5_000,
            tx_tick_ms: 10_000,
            block_tick_ms: 15_000,
            initial_price: Decimal::from_scaled(87, 2),
            initial_balance: Decimal::from_scaled(100_000, 2),
            tx_retention: DEFAULT_RETENTION,
            sim_seed: None,
            canvas_width: 800,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let port = parse_or(&env_map, "PORT", defaults.port, "must be a valid u16")?;

        let chat_api_url = env_map
            .get("CHAT_API_URL")
            .cloned()
            .unwrap_or(defaults.chat_api_url);

        let price_tick_ms = parse_period(&env_map, "PRICE_TICK_MS", defaults.price_tick_ms)?;
        let tx_tick_ms = parse_period(&env_map, "TX_TICK_MS", defaults.tx_tick_ms)?;
        let block_tick_ms = parse_period(&env_map, "BLOCK_TICK_MS", defaults.block_tick_ms)?;

        let initial_price = parse_or(
            &env_map,
            "INITIAL_PRICE",
            defaults.initial_price,
            "must be a decimal",
        )?;
        if initial_price < price_floor() {
            return Err(ConfigError::InvalidValue(
                "INITIAL_PRICE".to_string(),
                "must be at least 0.01".to_string(),
            ));
        }

        let initial_balance = parse_or(
            &env_map,
            "INITIAL_BALANCE",
            defaults.initial_balance,
            "must be a decimal",
        )?;
        if initial_balance.is_negative() {
            return Err(ConfigError::InvalidValue(
                "INITIAL_BALANCE".to_string(),
                "must not be negative".to_string(),
            ));
        }

        let tx_retention = parse_or(
            &env_map,
            "TX_RETENTION",
            defaults.tx_retention,
            "must be a valid usize",
        )?;
        if tx_retention < DISPLAY_LIMIT {
            return Err(ConfigError::InvalidValue(
                "TX_RETENTION".to_string(),
                format!("must be at least {}", DISPLAY_LIMIT),
            ));
        }

        let sim_seed = match env_map.get("SIM_SEED") {
            Some(s) => Some(s.parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue("SIM_SEED".to_string(), "must be a valid u64".to_string())
            })?),
            None => None,
        };

        let canvas_width = parse_or(
            &env_map,
            "CANVAS_WIDTH",
            defaults.canvas_width,
            "must be a valid u32",
        )?;

        Ok(Config {
            port,
            chat_api_url,
            price_tick_ms,
            tx_tick_ms,
            block_tick_ms,
            initial_price,
            initial_balance,
            tx_retention,
            sim_seed,
            canvas_width,
        })
    }

    pub fn market_params(&self) -> MarketParams {
        MarketParams {
            initial_price: self.initial_price,
            initial_balance: self.initial_balance,
            tx_retention: self.tx_retention,
        }
    }

    pub fn tick_intervals(&self) -> TickIntervals {
        TickIntervals {
            price: Duration::from_millis(self.price_tick_ms),
            transactions: Duration::from_millis(self.tx_tick_ms),
            blocks: Duration::from_millis(self.block_tick_ms),
        }
    }
}

fn parse_or<T: FromStr>(
    env_map: &HashMap<String, String>,
    key: &str,
    default: T,
    reason: &str,
) -> Result<T, ConfigError> {
    match env_map.get(key) {
        Some(s) => s
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue(key.to_string(), reason.to_string())),
        None => Ok(default),
    }
}

fn parse_period(
    env_map: &HashMap<String, String>,
    key: &str,
    default: u64,
) -> Result<u64, ConfigError> {
    let ms = parse_or(env_map, key, default, "must be a valid u64")?;
    if ms == 0 {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(ms)
}
