// crates/locprep-core/src/countries.rs

//! Static country tables used while normalizing GeoNames rows.
//!
//! All tables are built once on first access and never mutated.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// ISO 3166-1 alpha-2 codes of the 27 EU member states.
pub static EU_COUNTRIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IE", "IT",
        "LV", "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE",
    ]
    .into_iter()
    .collect()
});

/// EU members plus EEA and neighbouring countries.
///
/// `UK` is listed instead of the ISO code `GB`, matching the codes used by
/// the downstream application.
pub static EXTENDED_EUROPEAN_COUNTRIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = EU_COUNTRIES.clone();
    set.extend([
        "NO", "IS", "LI", "CH", "UK", "UA", "RS", "ME", "MK", "AL", "BA", "XK", "TR",
    ]);
    set
});

/// Display names for the country codes the application cares about.
pub static COUNTRY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("SE", "Sweden"),
        ("NO", "Norway"),
        ("DK", "Denmark"),
        ("FI", "Finland"),
        ("DE", "Germany"),
        ("FR", "France"),
        ("GB", "United Kingdom"),
        ("UK", "United Kingdom"),
        ("ES", "Spain"),
        ("IT", "Italy"),
        ("NL", "Netherlands"),
        ("BE", "Belgium"),
        ("PL", "Poland"),
        ("CZ", "Czech Republic"),
        ("AT", "Austria"),
        ("CH", "Switzerland"),
        ("HU", "Hungary"),
        ("RO", "Romania"),
        ("BG", "Bulgaria"),
        ("GR", "Greece"),
        ("EL", "Greece"),
        ("PT", "Portugal"),
        ("IE", "Ireland"),
        ("LT", "Lithuania"),
        ("LV", "Latvia"),
        ("EE", "Estonia"),
        ("SK", "Slovakia"),
        ("SI", "Slovenia"),
        ("HR", "Croatia"),
        ("CY", "Cyprus"),
        ("LU", "Luxembourg"),
        ("MT", "Malta"),
        ("IS", "Iceland"),
        ("LI", "Liechtenstein"),
        ("UA", "Ukraine"),
        ("RS", "Serbia"),
        ("ME", "Montenegro"),
        ("MK", "North Macedonia"),
        ("AL", "Albania"),
        ("BA", "Bosnia and Herzegovina"),
        ("XK", "Kosovo"),
        ("TR", "Turkey"),
    ])
});

/// Resolves a country code to its display name.
///
/// Unknown codes resolve to `""` so that rows from unmapped countries are
/// still emitted.
///
/// # Examples
/// ```rust
/// use locprep_core::country_name;
///
/// assert_eq!(country_name("SE"), "Sweden");
/// assert_eq!(country_name("ZZ"), "");
/// ```
pub fn country_name(code: &str) -> &'static str {
    COUNTRY_NAMES.get(code).copied().unwrap_or("")
}

/// Which countries survive normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountryFilter {
    /// Every row passes.
    #[default]
    All,
    /// Only the 27 EU member states.
    EuOnly,
    /// EU members plus EEA and neighbouring countries.
    ExtendedEurope,
}

impl CountryFilter {
    pub fn allows(&self, country_code: &str) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::EuOnly => EU_COUNTRIES.contains(country_code),
            CountryFilter::ExtendedEurope => EXTENDED_EUROPEAN_COUNTRIES.contains(country_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_set_contains_every_eu_member() {
        assert_eq!(EU_COUNTRIES.len(), 27);
        assert!(EU_COUNTRIES.is_subset(&EXTENDED_EUROPEAN_COUNTRIES));
        assert_eq!(EXTENDED_EUROPEAN_COUNTRIES.len(), 40);
    }

    #[test]
    fn filter_modes() {
        assert!(CountryFilter::All.allows("US"));
        assert!(!CountryFilter::ExtendedEurope.allows("US"));
        assert!(CountryFilter::ExtendedEurope.allows("NO"));
        assert!(!CountryFilter::EuOnly.allows("NO"));
        assert!(CountryFilter::EuOnly.allows("SE"));
    }

    #[test]
    fn aliases_share_names() {
        assert_eq!(country_name("GB"), country_name("UK"));
        assert_eq!(country_name("EL"), "Greece");
        assert_eq!(country_name(""), "");
    }
}
