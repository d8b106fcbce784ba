// crates/locprep-core/src/loader/fetch.rs
use super::{entry_name_for, extract_entry};
use crate::error::Result;
use tracing::info;

/// Downloads `url` into memory.
///
/// Single attempt: non-2xx statuses and transport failures are returned as
/// errors.
pub fn fetch_archive(url: &str) -> Result<Vec<u8>> {
    info!(url, "downloading");
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let bytes = response.bytes()?;
    info!(bytes = bytes.len(), "download complete");
    Ok(bytes.to_vec())
}

/// Downloads a GeoNames archive and returns the text of its dump entry.
pub fn fetch_geonames(url: &str) -> Result<String> {
    let bytes = fetch_archive(url)?;
    extract_entry(&bytes, &entry_name_for(url))
}
