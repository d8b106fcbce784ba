// crates/locprep-core/src/dedup.rs

//! # Deduplication
//!
//! Collapses rows of a locations CSV that share a [`GroupKey`] into one
//! canonical row each. Within a group the row with the largest population
//! wins; equal populations fall back to the smallest `geoname_id`, and a row
//! without an id loses every such tie.
//!
//! Columns other than `latitude`/`longitude` pass through untouched.

use crate::error::{PrepError, Result};
use crate::loader::common_io;
use crate::model::GroupKey;
use csv::StringRecord;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Columns removed from every output row.
pub const DROPPED_COLUMNS: [&str; 2] = ["latitude", "longitude"];

/// How many of the most-duplicated groups the report lists.
pub const TOP_DUPLICATES: usize = 10;

/// A fully loaded input CSV.
#[derive(Debug, Clone)]
pub struct DedupInput {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
}

impl DedupInput {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "reading locations");
        let reader = common_io::open_csv_reader(path)?;
        Self::from_csv(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_csv(
            csv::ReaderBuilder::new()
                .has_headers(true)
                .flexible(true)
                .from_reader(reader),
        )
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers = reader.headers()?.clone();
        let rows = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { headers, rows })
    }
}

/// Positions of the columns the grouping and ranking need.
#[derive(Debug, Clone, Copy)]
struct Columns {
    city: usize,
    region: usize,
    country_code: usize,
    population: usize,
    geoname_id: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| PrepError::MissingColumn(name.to_owned()))
        };
        Ok(Self {
            city: find("city")?,
            region: find("region")?,
            country_code: find("country_code")?,
            population: find("population")?,
            geoname_id: find("geoname_id")?,
        })
    }

    fn key(&self, row: &StringRecord) -> GroupKey {
        let get = |idx| row.get(idx).unwrap_or_default();
        GroupKey::new(get(self.city), get(self.region), get(self.country_code))
    }
}

/// Population as used for ranking: blank or non-numeric counts as zero.
pub fn parse_population(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

/// External id as used for tie-breaking: blank or non-numeric is absent.
pub fn parse_geoname_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// A row competing to become the canonical record of its group.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub population: u64,
    pub geoname_id: Option<u64>,
    pub row: &'a StringRecord,
}

/// Orders candidates best-first.
///
/// Population descending, then `geoname_id` ascending with missing ids last.
pub fn rank(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.population
        .cmp(&a.population)
        .then_with(|| match (a.geoname_id, b.geoname_id) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Picks the best-ranked candidate. Full ties keep the earliest row.
pub fn select_canonical<'c, 'a>(candidates: &'c [Candidate<'a>]) -> Option<&'c Candidate<'a>> {
    candidates.iter().min_by(|a, b| rank(a, b))
}

/// Counters and examples printed after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupReport {
    pub total_entries: usize,
    pub unique_entries: usize,
    pub duplicates_removed: usize,
    pub groups_with_duplicates: usize,
    /// Most-duplicated groups, by occurrence count descending.
    pub top_duplicates: Vec<(GroupKey, usize)>,
}

impl fmt::Display for DedupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original entries: {}", self.total_entries)?;
        writeln!(f, "Unique entries: {}", self.unique_entries)?;
        writeln!(f, "Duplicate entries removed: {}", self.duplicates_removed)?;
        writeln!(f, "Cities with duplicates: {}", self.groups_with_duplicates)?;

        if self.duplicates_removed > 0 {
            writeln!(f)?;
            writeln!(f, "Examples of duplicated cities:")?;
            for (key, count) in &self.top_duplicates {
                writeln!(f, "  {key}: {count} occurrences")?;
            }
        }
        Ok(())
    }
}

/// Result of a deduplication run, ready to be written.
#[derive(Debug, Clone)]
pub struct DedupOutcome {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
    pub report: DedupReport,
}

impl DedupOutcome {
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!(path = %path.display(), rows = self.rows.len(), "writing deduplicated locations");

        let mut writer = common_io::create_csv_writer(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Keeps one row per `(city, region, country_code)`.
///
/// Output rows follow the order in which each group first appeared.
pub fn deduplicate(input: &DedupInput) -> Result<DedupOutcome> {
    let columns = Columns::resolve(&input.headers)?;

    let kept: Vec<usize> = input
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !DROPPED_COLUMNS.contains(h))
        .map(|(i, _)| i)
        .collect();
    let project = |record: &StringRecord| -> StringRecord {
        kept.iter()
            .map(|&i| record.get(i).unwrap_or_default())
            .collect()
    };

    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupKey, Vec<Candidate<'_>>)> = Vec::new();

    for row in &input.rows {
        let key = columns.key(row);
        let candidate = Candidate {
            population: parse_population(row.get(columns.population).unwrap_or_default()),
            geoname_id: parse_geoname_id(row.get(columns.geoname_id).unwrap_or_default()),
            row,
        };
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(candidate);
    }

    let mut rows = Vec::with_capacity(groups.len());
    for (key, candidates) in &groups {
        if let Some(best) = select_canonical(candidates) {
            if candidates.len() > 1 {
                debug!(
                    %key,
                    count = candidates.len(),
                    population = best.population,
                    geoname_id = ?best.geoname_id,
                    "collapsed duplicates"
                );
            }
            rows.push(project(best.row));
        }
    }

    let report = build_report(&groups, input.rows.len(), rows.len());
    info!(
        total = report.total_entries,
        unique = report.unique_entries,
        removed = report.duplicates_removed,
        "deduplication complete"
    );

    Ok(DedupOutcome {
        headers: project(&input.headers),
        rows,
        report,
    })
}

fn build_report(groups: &[(GroupKey, Vec<Candidate<'_>>)], total: usize, unique: usize) -> DedupReport {
    let mut counts: Vec<(GroupKey, usize)> = groups
        .iter()
        .filter(|(_, c)| c.len() > 1)
        .map(|(k, c)| (k.clone(), c.len()))
        .collect();
    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let groups_with_duplicates = counts.len();
    counts.truncate(TOP_DUPLICATES);

    DedupReport {
        total_entries: total,
        unique_entries: unique,
        duplicates_removed: total - unique,
        groups_with_duplicates,
        top_duplicates: counts,
    }
}

/// Reads `input`, deduplicates it and writes the result to `output`.
pub fn dedup_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<DedupReport> {
    let data = DedupInput::from_path(input)?;
    let outcome = deduplicate(&data)?;
    outcome.write(output)?;
    Ok(outcome.report)
}
