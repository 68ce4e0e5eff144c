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

//! Rule-based named-entity recognition for candidate lines.
//!
//! The recognizer is driven by a JSON model file holding gazetteers and
//! lexical cues. It is loaded once at startup and shared read-only.

pub mod model;
pub mod recognizer;
mod token;

pub use model::EntityModel;
pub use recognizer::RuleRecognizer;
