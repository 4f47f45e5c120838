//! Destination to currency mapping
//!
//! Lowercase keyword containment over the destination text; first match
//! wins, USD is the default. Approximate by design - "Paris, France"
//! matches on either word.

use serde::Serialize;

/// Currency code plus display symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
}

const KEYWORDS: &[(&str, CurrencyInfo)] = &[
    ("thailand", CurrencyInfo { code: "THB", symbol: "฿" }),
    ("bangkok", CurrencyInfo { code: "THB", symbol: "฿" }),
    ("phuket", CurrencyInfo { code: "THB", symbol: "฿" }),
    ("japan", CurrencyInfo { code: "JPY", symbol: "¥" }),
    ("tokyo", CurrencyInfo { code: "JPY", symbol: "¥" }),
    ("kyoto", CurrencyInfo { code: "JPY", symbol: "¥" }),
    ("osaka", CurrencyInfo { code: "JPY", symbol: "¥" }),
    ("indonesia", CurrencyInfo { code: "IDR", symbol: "Rp" }),
    ("bali", CurrencyInfo { code: "IDR", symbol: "Rp" }),
    ("vietnam", CurrencyInfo { code: "VND", symbol: "₫" }),
    ("hanoi", CurrencyInfo { code: "VND", symbol: "₫" }),
    ("india", CurrencyInfo { code: "INR", symbol: "₹" }),
    ("goa", CurrencyInfo { code: "INR", symbol: "₹" }),
    ("china", CurrencyInfo { code: "CNY", symbol: "¥" }),
    ("korea", CurrencyInfo { code: "KRW", symbol: "₩" }),
    ("seoul", CurrencyInfo { code: "KRW", symbol: "₩" }),
    ("singapore", CurrencyInfo { code: "SGD", symbol: "S$" }),
    ("malaysia", CurrencyInfo { code: "MYR", symbol: "RM" }),
    ("philippines", CurrencyInfo { code: "PHP", symbol: "₱" }),
    ("france", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("paris", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("italy", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("rome", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("spain", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("barcelona", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("germany", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("berlin", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("portugal", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("lisbon", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("greece", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("netherlands", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("amsterdam", CurrencyInfo { code: "EUR", symbol: "€" }),
    ("london", CurrencyInfo { code: "GBP", symbol: "£" }),
    ("england", CurrencyInfo { code: "GBP", symbol: "£" }),
    ("scotland", CurrencyInfo { code: "GBP", symbol: "£" }),
    ("united kingdom", CurrencyInfo { code: "GBP", symbol: "£" }),
    ("switzerland", CurrencyInfo { code: "CHF", symbol: "CHF" }),
    ("zurich", CurrencyInfo { code: "CHF", symbol: "CHF" }),
    ("australia", CurrencyInfo { code: "AUD", symbol: "A$" }),
    ("sydney", CurrencyInfo { code: "AUD", symbol: "A$" }),
    ("new zealand", CurrencyInfo { code: "NZD", symbol: "NZ$" }),
    ("queenstown", CurrencyInfo { code: "NZD", symbol: "NZ$" }),
    ("canada", CurrencyInfo { code: "CAD", symbol: "C$" }),
    ("vancouver", CurrencyInfo { code: "CAD", symbol: "C$" }),
    ("banff", CurrencyInfo { code: "CAD", symbol: "C$" }),
    ("mexico", CurrencyInfo { code: "MXN", symbol: "MX$" }),
    ("cancun", CurrencyInfo { code: "MXN", symbol: "MX$" }),
    ("brazil", CurrencyInfo { code: "BRL", symbol: "R$" }),
    ("turkey", CurrencyInfo { code: "TRY", symbol: "₺" }),
    ("istanbul", CurrencyInfo { code: "TRY", symbol: "₺" }),
    ("egypt", CurrencyInfo { code: "EGP", symbol: "E£" }),
    ("south africa", CurrencyInfo { code: "ZAR", symbol: "R" }),
    ("dubai", CurrencyInfo { code: "AED", symbol: "AED" }),
];

const DEFAULT: CurrencyInfo = CurrencyInfo { code: "USD", symbol: "$" };

/// Currency for a free-text destination, defaulting to USD
pub fn currency_for(destination: &str) -> CurrencyInfo {
    let lower = destination.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, info)| *info)
        .unwrap_or(DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_matches() {
        assert_eq!(currency_for("Bangkok Thailand").code, "THB");
        assert_eq!(currency_for("Kyoto, Japan").code, "JPY");
        assert_eq!(currency_for("PARIS").code, "EUR");
    }

    #[test]
    fn test_unknown_defaults_to_usd() {
        let info = currency_for("Atlantis");
        assert_eq!(info.code, "USD");
        assert_eq!(info.symbol, "$");
    }

    #[test]
    fn test_every_mapped_code_has_a_rate() {
        for (_, info) in KEYWORDS {
            assert!(
                crate::lookup::rate(info.code).is_some(),
                "no conversion rate for {}",
                info.code
            );
        }
    }
}
