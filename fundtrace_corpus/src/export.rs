//! Output table serialization.
//!
//! The table is serialized in memory, then written to a sibling temp file
//! and renamed into place. A failed run never leaves a partial table behind.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use fundtrace_core::{Error, Result, TransactionRecord};
use sha2::{Digest, Sha256};
use tracing::info;

/// Header of the exported table, in column order.
pub const OUTPUT_COLUMNS: [&str; 4] = ["doc_id", "amount", "entities", "context"];

/// What was written by [`write_records`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
    /// Hex SHA-256 of the file contents.
    pub sha256: String,
}

/// Serialize records to CSV bytes, header first, in the given order.
pub fn to_csv_bytes(records: &[TransactionRecord]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))
}

/// Write the output table to `path`, replacing any previous table.
pub fn write_records(path: &Path, records: &[TransactionRecord]) -> Result<ExportSummary> {
    let bytes = to_csv_bytes(records)?;
    let sha256 = format!("{:x}", Sha256::digest(&bytes));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, &bytes)?;
    std::fs::rename(&tmp, path)?;

    info!(
        "Wrote {} records to {} (sha256 {sha256})",
        records.len(),
        path.display()
    );

    Ok(ExportSummary {
        path: path.to_path_buf(),
        rows: records.len(),
        sha256,
    })
}

/// Read a table produced by [`write_records`].
pub fn read_records(path: &Path) -> Result<Vec<TransactionRecord>> {
    if !path.exists() {
        return Err(Error::DataUnavailable {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }
    Ok(records)
}
