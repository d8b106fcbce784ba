// crates/locprep-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer: downloading the GeoNames archive, pulling the
//! dump out of it, and reading/writing local files.

pub mod common_io;

#[cfg(feature = "archive")]
mod archive;
#[cfg(feature = "fetch")]
mod fetch;

#[cfg(feature = "archive")]
pub use archive::extract_entry;
#[cfg(feature = "fetch")]
pub use fetch::{fetch_archive, fetch_geonames};

use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Where the GeoNames dump of cities with population > 15000 is published.
pub const GEONAMES_URL: &str = "https://download.geonames.org/export/dump/cities15000.zip";

/// Name of the text file inside [`GEONAMES_URL`].
pub const DEFAULT_ENTRY: &str = "cities15000.txt";

/// Derives the dump file name inside an archive from the archive URL or path.
///
/// GeoNames publishes `<name>.zip` containing `<name>.txt`.
///
/// # Examples
/// ```rust
/// use locprep_core::loader::entry_name_for;
///
/// assert_eq!(entry_name_for("https://example.org/dump/cities500.zip"), "cities500.txt");
/// assert_eq!(entry_name_for("https://example.org/"), "cities15000.txt");
/// ```
pub fn entry_name_for(location: &str) -> String {
    let file = location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    match file.strip_suffix(".zip") {
        Some(stem) if !stem.is_empty() => format!("{stem}.txt"),
        _ => DEFAULT_ENTRY.to_owned(),
    }
}

/// Reads a gazetteer dump from disk.
///
/// A `.zip` file is opened as an archive and its dump entry extracted; any
/// other file is read as UTF-8 text.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading local source");

    let is_zip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

    if is_zip {
        #[cfg(feature = "archive")]
        {
            let bytes = common_io::read_bytes(path)?;
            let entry = entry_name_for(&path.to_string_lossy());
            return extract_entry(&bytes, &entry);
        }
        #[cfg(not(feature = "archive"))]
        {
            return Err(crate::error::PrepError::InvalidData(
                "zip source requested but 'archive' disabled".into(),
            ));
        }
    }

    common_io::read_text(path)
}
