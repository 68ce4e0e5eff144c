#![warn(
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

//! Tabular input and output for the extraction pipeline.

pub mod export;
pub mod loader;
pub mod summary;

pub use export::{ExportSummary, OUTPUT_COLUMNS, read_records, write_records};
pub use loader::{Corpus, CorpusLoader, DEFAULT_TEXT_COLUMN};
pub use summary::{
    EntityCount, Summary, UNKNOWN_ENTITY, filter_by_entity, primary_entity, summarize, top_entities,
    unique_entities,
};
