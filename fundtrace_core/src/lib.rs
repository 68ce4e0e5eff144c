#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use serde::{Deserialize, Serialize};

pub mod detect;
pub mod entity;
mod error;
pub mod pipeline;
pub mod record;
pub mod segment;

pub use detect::{DEFAULT_AMOUNT_PATTERN, DetectorConfig, Signal, SignalDetector, default_keywords};
pub use entity::{EntityLabel, EntityMentions, EntityRecognizer};
pub use error::{Error, Result};
pub use pipeline::{Pipeline, PipelineOptions, ScanReport, ScanStats};
pub use record::{CONTEXT_LIMIT, RecordBuilder};
pub use segment::lines;

/// A single source document from the corpus.
///
/// `id` is the record index in the source table and is stable across runs
/// for an unchanged input file. `text` is never absent: missing values are
/// coerced to the empty string at ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: u64,
    pub text: String,
}

impl Document {
    #[must_use]
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// One candidate financial mention, as written to the output table.
///
/// Field order matches the exported column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub doc_id: u64,
    pub amount: String,
    pub entities: String,
    pub context: String,
}
