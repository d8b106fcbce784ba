// crates/locprep-core/src/loader/common_io.rs
use crate::error::{PrepError, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

pub fn open_csv_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| {
        PrepError::NotFound(format!("Input not found at {}: {}", path.display(), e))
    })?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}

/// Opens `path` for CSV output with CRLF record endings. The caller writes
/// the header row itself.
pub fn create_csv_writer(path: &Path) -> Result<csv::Writer<BufWriter<File>>> {
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    Ok(csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(BufWriter::new(file)))
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        PrepError::NotFound(format!("Source not found at {}: {}", path.display(), e))
    })
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        PrepError::NotFound(format!("Source not found at {}: {}", path.display(), e))
    })
}
