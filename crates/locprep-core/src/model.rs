// crates/locprep-core/src/model.rs
use crate::countries::country_name;
use crate::geonames::GeonamesEntry;
use chrono::{NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Column order of the `locations` import file.
pub const LOCATION_COLUMNS: [&str; 13] = [
    "id",
    "city",
    "region",
    "country_code",
    "country_name",
    "latitude",
    "longitude",
    "population",
    "geoname_id",
    "is_remote_friendly",
    "is_active",
    "created_at",
    "updated_at",
];

/// City name of the synthetic remote-work location.
pub const REMOTE_CITY: &str = "Remote";
/// Country the remote-work location is filed under.
pub const REMOTE_COUNTRY_CODE: &str = "SE";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Identity used to detect duplicate locations.
///
/// Region is frequently blank in the source data, so two distinct towns of
/// the same name in one country share a key and get merged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub city: String,
    pub region: String,
    pub country_code: String,
}

impl GroupKey {
    pub fn new(city: &str, region: &str, country_code: &str) -> Self {
        Self {
            city: city.to_owned(),
            region: region.to_owned(),
            country_code: country_code.to_owned(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.region.is_empty() {
            write!(f, "{}, {}", self.city, self.country_code)
        } else {
            write!(f, "{}, {}, {}", self.city, self.region, self.country_code)
        }
    }
}

/// One row of the `locations` import file.
///
/// Field order is the CSV column order ([`LOCATION_COLUMNS`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    pub id: Uuid,
    pub city: String,
    pub region: String,
    pub country_code: String,
    pub country_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub population: Option<u64>,
    pub geoname_id: Option<u64>,
    pub is_remote_friendly: bool,
    pub is_active: bool,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: NaiveDateTime,
}

impl LocationRecord {
    /// Builds an active, non-remote location from a parsed GeoNames line.
    ///
    /// Region stays empty: admin1 codes are not resolved to names.
    pub fn from_entry(entry: &GeonamesEntry, now: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            city: entry.name.clone(),
            region: String::new(),
            country_code: entry.country_code.clone(),
            country_name: country_name(&entry.country_code).to_owned(),
            latitude: entry.latitude,
            longitude: entry.longitude,
            population: entry.population,
            geoname_id: entry.geoname_id,
            is_remote_friendly: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// The non-geographic "Remote" placeholder appended to every import.
    pub fn remote(now: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            city: REMOTE_CITY.to_owned(),
            region: String::new(),
            country_code: REMOTE_COUNTRY_CODE.to_owned(),
            country_name: country_name(REMOTE_COUNTRY_CODE).to_owned(),
            latitude: None,
            longitude: None,
            population: None,
            geoname_id: Some(0),
            is_remote_friendly: true,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Current local time truncated to whole seconds.
pub fn timestamp_now() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    // CSV carries second precision
    now.with_nanosecond(0).unwrap_or(now)
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format(TIMESTAMP_FORMAT))
}
