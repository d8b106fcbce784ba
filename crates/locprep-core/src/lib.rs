// crates/locprep-core/src/lib.rs

//! # locprep-core
//!
//! Prepares the city/location reference dataset for import into the
//! `locations` table. Two independent pipelines live here:
//!
//! - [`dedup`] collapses repeated `(city, region, country_code)` rows of an
//!   existing CSV into one canonical row each.
//! - [`geonames`] turns the GeoNames `cities15000` dump into rows matching
//!   the application's schema.
//!
//! The [`loader`] module holds the I/O glue (download, unzip, local files).

pub mod countries;
pub mod dedup;
pub mod error;
pub mod geonames;
pub mod loader;
pub mod model;

// Re-exports
pub use crate::countries::{country_name, CountryFilter};
pub use crate::dedup::{deduplicate, dedup_file, DedupInput, DedupOutcome, DedupReport};
pub use crate::error::{PrepError, Result};
pub use crate::geonames::{normalize, parse_line, write_locations, GeonamesEntry};
pub use crate::model::{GroupKey, LocationRecord, LOCATION_COLUMNS};
