use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::domain::{Decimal, Transaction};
use crate::error::AppError;

/// Amount typed into a form field. Accepts a JSON number or string; anything
/// unparseable behaves like an empty field.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    #[serde(default)]
    pub amount: serde_json::Value,
}

impl AmountRequest {
    /// The amount, or zero when missing or unparseable.
    ///
    /// Strings are read the way a browser form field is: the longest leading
    /// number counts and trailing text is ignored, so `"12abc"` is 12 and
    /// `"1e3"` is 1000.
    pub fn amount(&self) -> Decimal {
        match &self.amount {
            serde_json::Value::Number(n) => parse_leading_number(&n.to_string()),
            serde_json::Value::String(s) => parse_leading_number(s),
            _ => Decimal::zero(),
        }
    }
}

/// Largest exponent magnitude a `Decimal` can absorb.
const MAX_EXPONENT: u32 = 28;

/// Parse the numeric prefix of `text`: optional sign, digits, optional
/// fraction, optional exponent. Returns zero when no digits lead the text or
/// the value is out of range, including exponents beyond ±28.
fn parse_leading_number(text: &str) -> Decimal {
    let bytes = text.trim_start().as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut number = String::new();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        if bytes[i] == b'-' {
            number.push('-');
        }
        i += 1;
    }

    let int_end = digits_from(i);
    let int_part = &bytes[i..int_end];
    i = int_end;

    let mut frac_part: &[u8] = &[];
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_end = digits_from(i + 1);
        frac_part = &bytes[i + 1..frac_end];
        i = frac_end;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return Decimal::zero();
    }
    number.push_str(if int_part.is_empty() {
        "0"
    } else {
        std::str::from_utf8(int_part).unwrap_or("0")
    });
    if !frac_part.is_empty() {
        number.push('.');
        number.push_str(std::str::from_utf8(frac_part).unwrap_or("0"));
    }

    // An exponent counts only when at least one digit follows it.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        let negative = j < bytes.len() && bytes[j] == b'-';
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            let exponent = std::str::from_utf8(&bytes[j..exp_end])
                .ok()
                .and_then(|e| e.parse::<u32>().ok())
                .filter(|e| *e <= MAX_EXPONENT);
            let Some(exponent) = exponent else {
                return Decimal::zero();
            };
            number.push('e');
            if negative {
                number.push('-');
            }
            number.push_str(&exponent.to_string());
            return Decimal::from_scientific(&number).unwrap_or_default();
        }
    }

    Decimal::from_str_canonical(&number).unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub struct TradeResponse {
    pub executed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
    pub balance: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub aura: String,
}

pub async fn buy(
    State(state): State<AppState>,
    Json(req): Json<AmountRequest>,
) -> Json<TradeResponse> {
    let mut controller = state.controller.lock().await;
    let transaction = controller.buy(req.amount());

    Json(TradeResponse {
        executed: transaction.is_some(),
        transaction,
        balance: controller.simulator().balance(),
    })
}

pub async fn sell(
    State(state): State<AppState>,
    Json(req): Json<AmountRequest>,
) -> Result<Json<TradeResponse>, AppError> {
    let mut controller = state.controller.lock().await;
    let transaction = controller.sell(req.amount())?;

    Ok(Json(TradeResponse {
        executed: true,
        transaction: Some(transaction),
        balance: controller.simulator().balance(),
    }))
}

pub async fn convert(
    State(state): State<AppState>,
    Json(req): Json<AmountRequest>,
) -> Json<ConvertResponse> {
    let controller = state.controller.lock().await;
    Json(ConvertResponse {
        aura: controller.convert(req.amount()).to_fixed(2),
    })
}
