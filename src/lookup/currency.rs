//! Currency conversion over fixed rates
//!
//! Rates are approximate and keyed per USD; there is no live feed. The
//! cross rate between two non-USD currencies goes through USD.

use serde::Serialize;

/// Approximate units per 1 USD
const USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("CHF", 0.88),
    ("JPY", 149.50),
    ("CNY", 7.24),
    ("KRW", 1320.0),
    ("THB", 36.50),
    ("IDR", 15600.0),
    ("VND", 24500.0),
    ("INR", 83.20),
    ("SGD", 1.34),
    ("MYR", 4.70),
    ("PHP", 56.00),
    ("AUD", 1.52),
    ("NZD", 1.64),
    ("CAD", 1.36),
    ("MXN", 17.10),
    ("BRL", 4.95),
    ("TRY", 32.00),
    ("EGP", 47.00),
    ("ZAR", 18.60),
    ("AED", 3.67),
];

/// A completed conversion, in the shape the API returns
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub original_amount: f64,
    pub from_currency: String,
    pub converted_amount: f64,
    pub to_currency: String,
    pub exchange_rate: f64,
}

/// Units of `code` per 1 USD, if the currency is known
pub fn rate(code: &str) -> Option<f64> {
    let upper = code.to_uppercase();
    USD_RATES
        .iter()
        .find(|(known, _)| *known == upper)
        .map(|(_, units)| *units)
}

/// Convert an amount between two known currencies
///
/// Returns None when either code is unknown; amounts and the effective
/// rate are rounded to 2 and 4 decimals respectively.
pub fn convert(amount: f64, from: &str, to: &str) -> Option<Conversion> {
    let from_rate = rate(from)?;
    let to_rate = rate(to)?;
    let exchange_rate = to_rate / from_rate;
    Some(Conversion {
        original_amount: round_to(amount, 2),
        from_currency: from.to_uppercase(),
        converted_amount: round_to(amount * exchange_rate, 2),
        to_currency: to.to_uppercase(),
        exchange_rate: round_to(exchange_rate, 4),
    })
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
