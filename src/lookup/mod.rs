//! Static lookup tables
//!
//! Deterministic, offline answers: currency conversion over fixed per-USD
//! rates and a destination-to-currency keyword map. Configuration data,
//! not advisory logic - no model call is ever involved here.

mod currency;
mod destination_currency;

pub use currency::{convert, rate, Conversion};
pub use destination_currency::{currency_for, CurrencyInfo};
