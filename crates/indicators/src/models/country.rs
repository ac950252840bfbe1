use serde::{Deserialize, Serialize};

/// Resolved identity of a country.
///
/// Produced by a [`CountryResolver`](crate::country::CountryResolver) from a free-form
/// name, an ISO code or an alias. Immutable once resolved.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryIdentity {
    pub name: String,
    pub iso_alpha_2: String,
    pub iso_alpha_3: String,
    /// Three-digit ISO 3166-1 numeric code, zero padded ("076").
    pub iso_numeric: String,
}

impl CountryIdentity {
    pub fn new(
        name: impl Into<String>,
        iso_alpha_2: impl Into<String>,
        iso_alpha_3: impl Into<String>,
        iso_numeric: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            iso_alpha_2: iso_alpha_2.into(),
            iso_alpha_3: iso_alpha_3.into(),
            iso_numeric: iso_numeric.into(),
        }
    }
}
