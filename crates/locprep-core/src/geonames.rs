// crates/locprep-core/src/geonames.rs

//! # GeoNames normalization
//!
//! Parses the tab-separated `cities15000.txt` dump and maps every line onto a
//! [`LocationRecord`]. The dump has 19 positional columns:
//!
//! | idx | column            | idx | column          |
//! |-----|-------------------|-----|-----------------|
//! | 0   | geonameid         | 10  | admin1 code     |
//! | 1   | name              | 11  | admin2 code     |
//! | 2   | asciiname         | 12  | admin3 code     |
//! | 3   | alternatenames    | 13  | admin4 code     |
//! | 4   | latitude          | 14  | population      |
//! | 5   | longitude         | 15  | elevation       |
//! | 6   | feature class     | 16  | dem             |
//! | 7   | feature code      | 17  | timezone        |
//! | 8   | country code      | 18  | modification date |
//! | 9   | cc2               |     |                 |

use crate::countries::CountryFilter;
use crate::error::Result;
use crate::loader::common_io;
use crate::model::{timestamp_now, LocationRecord, LOCATION_COLUMNS};
use chrono::NaiveDateTime;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Number of columns in a complete GeoNames line.
pub const GEONAMES_COLUMNS: usize = 19;

/// Typed view of the GeoNames columns this crate uses.
#[derive(Debug, Clone, PartialEq)]
pub struct GeonamesEntry {
    pub geoname_id: Option<u64>,
    pub name: String,
    pub ascii_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub feature_class: String,
    pub feature_code: String,
    pub country_code: String,
    pub admin1_code: String,
    pub population: Option<u64>,
    pub timezone: String,
    pub modification_date: String,
}

/// Parses one line of the dump.
///
/// Returns `None` for lines with fewer than [`GEONAMES_COLUMNS`] fields.
/// Empty or unparsable numeric fields become `None`, never zero.
///
/// # Examples
/// ```rust
/// use locprep_core::parse_line;
///
/// assert!(parse_line("2673730\tStockholm\tStockholm").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<GeonamesEntry> {
    let fields: Vec<&str> = line.trim_end_matches('\r').split('\t').collect();
    if fields.len() < GEONAMES_COLUMNS {
        return None;
    }

    Some(GeonamesEntry {
        geoname_id: parse_opt(fields[0]),
        name: fields[1].to_owned(),
        ascii_name: fields[2].to_owned(),
        latitude: parse_opt(fields[4]),
        longitude: parse_opt(fields[5]),
        feature_class: fields[6].to_owned(),
        feature_code: fields[7].to_owned(),
        country_code: fields[8].to_owned(),
        admin1_code: fields[10].to_owned(),
        population: parse_opt(fields[14]),
        timezone: fields[17].to_owned(),
        modification_date: fields[18].to_owned(),
    })
}

fn parse_opt<T: FromStr>(s: &str) -> Option<T> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

/// Converts the whole dump into import rows.
///
/// The "Remote" placeholder is always appended last, even for empty input.
pub fn normalize(text: &str, filter: CountryFilter) -> Vec<LocationRecord> {
    normalize_at(text, filter, timestamp_now())
}

/// Like [`normalize`] with an explicit creation timestamp.
pub fn normalize_at(text: &str, filter: CountryFilter, now: NaiveDateTime) -> Vec<LocationRecord> {
    info!(?filter, "processing GeoNames data");

    let mut rows = Vec::new();
    let mut malformed = 0usize;
    let mut filtered = 0usize;

    for (lineno, line) in text.lines().enumerate() {
        let Some(entry) = parse_line(line) else {
            if !line.trim().is_empty() {
                debug!(line = lineno + 1, "skipping truncated line");
                malformed += 1;
            }
            continue;
        };

        if !filter.allows(&entry.country_code) {
            filtered += 1;
            continue;
        }

        rows.push(LocationRecord::from_entry(&entry, now));
    }

    rows.push(LocationRecord::remote(now));

    info!(
        locations = rows.len(),
        malformed, filtered, "processed GeoNames data"
    );
    rows
}

/// Writes import rows with the fixed 13-column header, creating the parent
/// directory if needed. An existing file is overwritten.
pub fn write_locations(path: impl AsRef<Path>, rows: &[LocationRecord]) -> Result<()> {
    let path = path.as_ref();
    info!(path = %path.display(), rows = rows.len(), "writing locations");

    let mut writer = common_io::create_csv_writer(path)?;
    writer.write_record(LOCATION_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
