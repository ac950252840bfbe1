//! ISO 4217 currency lookup by ISO-2 country code.

use crate::country::iso3166;
use crate::models::EURO_AREA;

const DEFAULT_CURRENCY: &str = "USD";

pub trait CurrencyResolver: Send + Sync {
    /// Currency code for `iso_alpha_2`, or `None` when it is unknown.
    fn lookup(&self, iso_alpha_2: &str) -> Option<String>;

    /// Currency code for `iso_alpha_2`, falling back to "USD". Never fails.
    fn currency_for(&self, iso_alpha_2: &str) -> String {
        self.lookup(iso_alpha_2)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
    }
}

/// Currency from the ISO 3166-1 table; euro-area members map to EUR.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticCurrencyResolver;

impl CurrencyResolver for StaticCurrencyResolver {
    fn lookup(&self, iso_alpha_2: &str) -> Option<String> {
        let code = iso_alpha_2.trim().to_ascii_uppercase();
        if EURO_AREA.contains(&code.as_str()) {
            return Some("EUR".to_string());
        }
        iso3166::by_alpha2(&code)
            .and_then(|row| row.currency)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_lookup() {
        let resolver = StaticCurrencyResolver;
        assert_eq!(resolver.lookup("DE").as_deref(), Some("EUR"));
        assert_eq!(resolver.lookup("hr").as_deref(), Some("EUR"));
        assert_eq!(resolver.lookup("BR").as_deref(), Some("BRL"));
        assert_eq!(resolver.lookup("GB").as_deref(), Some("GBP"));
        assert_eq!(resolver.lookup("KZ").as_deref(), Some("KZT"));
        assert_eq!(resolver.lookup("LK").as_deref(), Some("LKR"));
        assert_eq!(resolver.lookup("EC").as_deref(), Some("USD"));
    }

    #[test]
    fn test_unknown_currency_is_none() {
        let resolver = StaticCurrencyResolver;
        assert_eq!(resolver.lookup("XX"), None);
        assert_eq!(resolver.lookup("AQ"), None);
        assert_eq!(resolver.lookup(""), None);
    }

    #[test]
    fn test_currency_for_falls_back_to_usd() {
        let resolver = StaticCurrencyResolver;
        assert_eq!(resolver.currency_for("KZ"), "KZT");
        assert_eq!(resolver.currency_for("XX"), "USD");
    }

    #[test]
    fn test_euro_area_overrides_legacy_currency() {
        assert_eq!(StaticCurrencyResolver.lookup("BG").as_deref(), Some("EUR"));
    }

    #[test]
    fn test_every_country_with_a_currency_has_a_code() {
        for row in iso3166::COUNTRIES {
            let currency = StaticCurrencyResolver.lookup(row.alpha2);
            assert_eq!(currency.is_some(), row.currency.is_some(), "{}", row.alpha2);
            if let Some(code) = currency {
                assert_eq!(code.len(), 3, "{}", row.alpha2);
            }
        }
    }
}
