//! End-to-end tests: CSV corpus in, transaction table out.
//!
//! These tests verify that:
//! - Candidate lines need both an amount and a keyword
//! - Null text and malformed rows do not stop a run
//! - Output is ordered, truncated, and byte-identical across runs

use std::path::{Path, PathBuf};

use fundtrace_core::{
    CONTEXT_LIMIT, Pipeline, PipelineOptions, SignalDetector, TransactionRecord,
};
use fundtrace_corpus::{CorpusLoader, read_records, write_records};
use fundtrace_nlp::{EntityModel, RuleRecognizer};

const SCENARIO_A: &str = "Wire transfer of $50,000 to Harvard University approved by J. Epstein.";

fn long_line() -> String {
    let mut line = String::from("Payment of $1,000,000 approved. ");
    while line.len() < 260 {
        line.push_str("padding words ");
    }
    line
}

fn corpus_csv() -> String {
    format!(
        "id,text\n\
         1,\"{SCENARIO_A}\nThe weather was $50 today.\"\n\
         2,He requested a retainer fee but no amount was specified.\n\
         3,\n\
         4,broken,row,here\n\
         5,\"  donation of $2 million from Leon Black  \nsecond: grant $10k to MIT\"\n\
         6,\"{}\"\n",
        long_line()
    )
}

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn write_corpus(dir: &Path) -> PathBuf {
    let path = dir.join("corpus.csv");
    std::fs::write(&path, corpus_csv()).expect("corpus should be written");
    path
}

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn run(input: &Path, output: &Path, parallel: bool) -> Vec<TransactionRecord> {
    let corpus = CorpusLoader::default().load(input).expect("corpus should load");
    let detector = SignalDetector::with_defaults().expect("detector should build");
    let recognizer = RuleRecognizer::from_model(&EntityModel::default());
    let pipeline = Pipeline::new(
        &detector,
        &recognizer,
        PipelineOptions {
            parallel,
            ..PipelineOptions::default()
        },
    );
    let report = pipeline.scan(&corpus.documents);
    write_records(output, &report.records).expect("table should be written");
    read_records(output).expect("table should be read")
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_scenarios_end_to_end() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let input = write_corpus(dir.path());
    let records = run(&input, &dir.path().join("out.csv"), false);

    let summary: Vec<(u64, &str)> = records
        .iter()
        .map(|r| (r.doc_id, r.amount.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, "$50,000"),
            (4, "$2 million"),
            (4, "$10k"),
            (5, "$1,000,000"),
        ]
    );

    let a = &records[0];
    assert_eq!(a.entities, "Harvard University, J. Epstein");
    assert_eq!(a.context, SCENARIO_A);

    assert_eq!(records[1].entities, "Leon Black");
    assert_eq!(records[1].context, "donation of $2 million from Leon Black");
    assert_eq!(records[2].entities, "MIT");

    let long = long_line();
    let expected: String = long.trim().chars().take(CONTEXT_LIMIT).collect();
    assert_eq!(records[3].context, expected);
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_output_invariants() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let input = write_corpus(dir.path());
    let records = run(&input, &dir.path().join("out.csv"), true);
    let detector = SignalDetector::with_defaults().expect("detector should build");

    for pair in records.windows(2) {
        assert!(pair[0].doc_id <= pair[1].doc_id);
    }
    for record in &records {
        assert!(record.context.chars().count() <= CONTEXT_LIMIT);
        if record.context.chars().count() < CONTEXT_LIMIT {
            assert!(detector.detect(&record.context).is_some());
        }
    }
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let input = write_corpus(dir.path());
    let first_path = dir.path().join("first.csv");
    let second_path = dir.path().join("second.csv");

    run(&input, &first_path, false);
    run(&input, &second_path, true);
    run(&input, &second_path, true);

    let first = std::fs::read(&first_path).expect("first table");
    let second = std::fs::read(&second_path).expect("second table");
    assert_eq!(first, second);
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_sample_limit_bounds_documents() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let input = write_corpus(dir.path());
    let corpus = CorpusLoader::new("text", Some(1))
        .load(&input)
        .expect("corpus should load");
    assert_eq!(corpus.documents.len(), 1);
    assert_eq!(corpus.documents[0].id, 0);
}
