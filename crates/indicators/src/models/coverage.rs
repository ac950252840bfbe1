//! Provider country coverage restrictions.

/// EU member states, EEA/EFTA reporters and the UK (Eurostat geo coverage).
pub const EU_EEA_UK: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR", "HR", "HU", "IE",
    "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK", "IS", "LI", "NO",
    "CH", "GB",
];

/// Euro area members (ECB monetary policy applies).
pub const EURO_AREA: &[&str] = &[
    "AT", "BE", "BG", "CY", "DE", "EE", "ES", "FI", "FR", "GR", "HR", "IE", "IT", "LT", "LU",
    "LV", "MT", "NL", "PT", "SI", "SK",
];

/// Countries a provider can answer for.
///
/// Uses static slices for zero-allocation in `coverage()`.
/// Default = "supports every country".
#[derive(Clone, Copy, Debug, Default)]
pub struct Coverage {
    /// If Some, only these ISO alpha-2 codes are supported.
    pub country_allow: Option<&'static [&'static str]>,
}

#[inline]
fn slice_contains(list: &[&'static str], value: &str) -> bool {
    list.iter().any(|&x| x.eq_ignore_ascii_case(value))
}

impl Coverage {
    /// Check if this coverage includes the given ISO alpha-2 code.
    pub fn supports(&self, iso_alpha_2: &str) -> bool {
        self.country_allow
            .map_or(true, |allow| slice_contains(allow, iso_alpha_2))
    }

    pub const fn global() -> Self {
        Self {
            country_allow: None,
        }
    }

    /// European statistical system reporters.
    pub const fn eu_eea_uk() -> Self {
        Self {
            country_allow: Some(EU_EEA_UK),
        }
    }

    pub const fn euro_area() -> Self {
        Self {
            country_allow: Some(EURO_AREA),
        }
    }
}
