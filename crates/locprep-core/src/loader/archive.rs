// crates/locprep-core/src/loader/archive.rs
use crate::error::{PrepError, Result};
use std::io::{Cursor, Read};
use tracing::info;
use zip::result::ZipError;
use zip::ZipArchive;

/// Upper bound on the buffer reserved up front for an entry.
const MAX_CAPACITY_HINT: usize = 64 << 20;

/// Reads the single entry `name` from an in-memory zip archive as UTF-8 text.
pub fn extract_entry(bytes: &[u8], name: &str) -> Result<String> {
    info!(entry = name, "extracting from archive");

    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut file = archive.by_name(name).map_err(|e| match e {
        ZipError::FileNotFound => PrepError::NotFound(format!("archive has no entry '{name}'")),
        other => PrepError::from(other),
    })?;

    let mut text = String::with_capacity(capacity_hint(file.size()));
    file.read_to_string(&mut text)?;

    info!(bytes = text.len(), "extraction complete");
    Ok(text)
}

/// Buffer to reserve for an entry whose header claims `declared` bytes.
/// The header is untrusted, so the reservation is capped.
fn capacity_hint(declared: u64) -> usize {
    usize::try_from(declared)
        .unwrap_or(MAX_CAPACITY_HINT)
        .min(MAX_CAPACITY_HINT)
}
