//! Country identity resolution from free-form input.
//!
//! The built-in resolver covers every ISO 3166-1 entry. Names, alpha-2,
//! alpha-3 and numeric codes all resolve, as do the formal ISO names and a
//! set of common aliases. The lookup index is built once via `lazy_static`.

pub(crate) mod iso3166;

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::CountryIdentity;
use iso3166::{IsoCountry, COUNTRIES};

/// Maps a country name, ISO code or alias to an identity.
///
/// `None` means the input is not a known country; callers surface that as
/// [`IndicatorError::InvalidCountry`](crate::errors::IndicatorError::InvalidCountry).
pub trait CountryResolver: Send + Sync {
    fn resolve(&self, input: &str) -> Option<CountryIdentity>;
}

/// Alias -> alpha-3. Aliases go through [`normalize_input`] before indexing.
const ALIASES: &[(&str, &str)] = &[
    // Formal ISO 3166-1 names
    ("Bolivia, Plurinational State of", "BOL"),
    ("Brunei Darussalam", "BRN"),
    ("Congo", "COG"),
    ("Congo, The Democratic Republic of the", "COD"),
    ("Falkland Islands (Malvinas)", "FLK"),
    ("Holy See (Vatican City State)", "VAT"),
    ("Iran, Islamic Republic of", "IRN"),
    ("Korea, Democratic People's Republic of", "PRK"),
    ("Korea, Republic of", "KOR"),
    ("Lao People's Democratic Republic", "LAO"),
    ("Micronesia, Federated States of", "FSM"),
    ("Moldova, Republic of", "MDA"),
    ("Palestine, State of", "PSE"),
    ("Russian Federation", "RUS"),
    ("Syrian Arab Republic", "SYR"),
    ("Taiwan, Province of China", "TWN"),
    ("Tanzania, United Republic of", "TZA"),
    ("Türkiye", "TUR"),
    ("Venezuela, Bolivarian Republic of", "VEN"),
    ("Viet Nam", "VNM"),
    ("Virgin Islands, British", "VGB"),
    ("Virgin Islands, U.S.", "VIR"),
    // Common names and spellings
    ("USA", "USA"),
    ("US", "USA"),
    ("America", "USA"),
    ("United States of America", "USA"),
    ("UK", "GBR"),
    ("Great Britain", "GBR"),
    ("Britain", "GBR"),
    ("England", "GBR"),
    ("United Mexican States", "MEX"),
    ("Holland", "NLD"),
    ("The Netherlands", "NLD"),
    ("Czech Republic", "CZE"),
    ("Korea", "KOR"),
    ("Republic of Korea", "KOR"),
    ("Turkiye", "TUR"),
    ("UAE", "ARE"),
    ("People's Republic of China", "CHN"),
    ("PRC", "CHN"),
    ("Swiss Confederation", "CHE"),
    ("Hellas", "GRC"),
    ("Ivory Coast", "CIV"),
    ("Cote d'Ivoire", "CIV"),
    ("Cape Verde", "CPV"),
    ("Swaziland", "SWZ"),
    ("Burma", "MMR"),
    ("East Timor", "TLS"),
    ("Macedonia", "MKD"),
    ("DRC", "COD"),
    ("DR Congo", "COD"),
    ("Congo-Kinshasa", "COD"),
    ("Congo-Brazzaville", "COG"),
    ("Vatican", "VAT"),
    ("Vatican City", "VAT"),
    ("Macau", "MAC"),
    ("Aland Islands", "ALA"),
    ("Curacao", "CUW"),
    ("Reunion", "REU"),
    ("Saint Barthelemy", "BLM"),
];

lazy_static! {
    static ref INDEX: HashMap<String, usize> = build_index();
}

fn build_index() -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(COUNTRIES.len() * 4 + ALIASES.len());
    for (position, row) in COUNTRIES.iter().enumerate() {
        index.insert(normalize_input(row.name), position);
        index.insert(row.alpha2.to_ascii_lowercase(), position);
        index.insert(row.alpha3.to_ascii_lowercase(), position);
        index.insert(row.numeric.to_string(), position);
    }
    for (alias, alpha3) in ALIASES {
        if let Some(position) = COUNTRIES.iter().position(|row| row.alpha3 == *alpha3) {
            index.insert(normalize_input(alias), position);
        }
    }
    index
}

/// Trim, lowercase, collapse inner whitespace and drop dots ("U.S.A." -> "usa").
pub fn normalize_input(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| word.replace('.', "").to_lowercase())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolver backed by the built-in ISO 3166-1 table.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinCountryResolver;

impl BuiltinCountryResolver {
    /// Every ISO 3166-1 country, in table order.
    pub fn all(&self) -> impl Iterator<Item = CountryIdentity> {
        COUNTRIES.iter().map(to_identity)
    }
}

impl CountryResolver for BuiltinCountryResolver {
    fn resolve(&self, input: &str) -> Option<CountryIdentity> {
        let key = normalize_input(input);
        if key.is_empty() {
            return None;
        }
        INDEX.get(&key).map(|&position| to_identity(&COUNTRIES[position]))
    }
}

fn to_identity(row: &IsoCountry) -> CountryIdentity {
    CountryIdentity::new(row.name, row.alpha2, row.alpha3, row.numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_name_code_and_alias() {
        let resolver = BuiltinCountryResolver;
        for input in ["Germany", "  germany ", "DE", "deu", "276"] {
            assert_eq!(resolver.resolve(input).unwrap().iso_alpha_3, "DEU", "{}", input);
        }
        assert_eq!(resolver.resolve("U.S.").unwrap().iso_alpha_3, "USA");
        assert_eq!(resolver.resolve("U.S.A.").unwrap().iso_alpha_3, "USA");
        assert_eq!(resolver.resolve("UK").unwrap().iso_alpha_2, "GB");
        assert_eq!(resolver.resolve("Holland").unwrap().iso_alpha_3, "NLD");
        assert_eq!(
            resolver.resolve("United   Mexican States").unwrap().name,
            "Mexico"
        );
    }

    #[test]
    fn test_every_iso_entry_resolves_by_name_and_codes() {
        let resolver = BuiltinCountryResolver;
        assert_eq!(COUNTRIES.len(), 249);
        for row in COUNTRIES {
            let expected = to_identity(row);
            for input in [row.name, row.alpha2, row.alpha3, row.numeric] {
                assert_eq!(resolver.resolve(input).as_ref(), Some(&expected), "{}", input);
            }
            let lower = row.alpha3.to_ascii_lowercase();
            assert_eq!(resolver.resolve(&lower).as_ref(), Some(&expected), "{}", lower);
        }
    }

    #[test]
    fn test_countries_outside_major_economies_resolve() {
        let resolver = BuiltinCountryResolver;
        let cases = [
            ("Kazakhstan", "KAZ"),
            ("Sri Lanka", "LKA"),
            ("Iran", "IRN"),
            ("Ethiopia", "ETH"),
            ("Uzbekistan", "UZB"),
            ("KAZ", "KAZ"),
            ("LK", "LKA"),
            ("Ghana", "GHA"),
        ];
        for (input, alpha3) in cases {
            assert_eq!(resolver.resolve(input).unwrap().iso_alpha_3, alpha3, "{}", input);
        }
    }

    #[test]
    fn test_formal_iso_names_resolve() {
        let resolver = BuiltinCountryResolver;
        assert_eq!(resolver.resolve("Iran, Islamic Republic of").unwrap().name, "Iran");
        assert_eq!(resolver.resolve("Korea, Republic of").unwrap().iso_alpha_2, "KR");
        assert_eq!(
            resolver.resolve("Korea, Democratic People's Republic of").unwrap().iso_alpha_2,
            "KP"
        );
        assert_eq!(resolver.resolve("Viet Nam").unwrap().name, "Vietnam");
        assert_eq!(resolver.resolve("Congo").unwrap().iso_alpha_3, "COG");
        assert_eq!(resolver.resolve("Türkiye").unwrap().iso_alpha_3, "TUR");
        assert_eq!(resolver.resolve("cote d'ivoire").unwrap().iso_alpha_3, "CIV");
    }

    #[test]
    fn test_every_alias_targets_a_table_row() {
        for (alias, alpha3) in ALIASES {
            assert!(
                COUNTRIES.iter().any(|row| row.alpha3 == *alpha3),
                "alias {} -> {}",
                alias,
                alpha3
            );
        }
    }

    #[test]
    fn test_unknown_country_is_none() {
        let resolver = BuiltinCountryResolver;
        assert!(resolver.resolve("Narnia").is_none());
        assert!(resolver.resolve("").is_none());
        assert!(resolver.resolve("   ").is_none());
        assert!(resolver.resolve("XX").is_none());
    }

    #[test]
    fn test_identity_fields() {
        let brazil = BuiltinCountryResolver.resolve("brazil").unwrap();
        assert_eq!(brazil, CountryIdentity::new("Brazil", "BR", "BRA", "076"));
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        let mut seen = std::collections::HashSet::new();
        for row in COUNTRIES {
            assert!(seen.insert(row.alpha2), "duplicate {}", row.alpha2);
            assert!(seen.insert(row.alpha3), "duplicate {}", row.alpha3);
            assert!(seen.insert(row.numeric), "duplicate {}", row.numeric);
        }
    }

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("  United \t Kingdom "), "united kingdom");
        assert_eq!(normalize_input("U.S."), "us");
    }
}
