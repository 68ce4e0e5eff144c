//! Single-pass extraction pipeline.
//!
//! Documents are scanned independently: segment into lines, detect
//! candidates, run the recognizer on candidates only, build records. When
//! run in parallel the per-document results are collected in input order,
//! so the output is identical to a sequential run.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::detect::SignalDetector;
use crate::entity::EntityRecognizer;
use crate::record::RecordBuilder;
use crate::segment::lines;
use crate::{Document, TransactionRecord};

/// Runtime knobs for a scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Spread documents across the rayon pool.
    pub parallel: bool,
    /// Per-document time budget, checked before each line. A document over
    /// budget contributes nothing.
    pub document_timeout: Option<Duration>,
    /// Drop repeated entity surface forms within a record.
    pub dedup_entities: bool,
}

/// Counters collected during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub documents: usize,
    /// Lines visited, up to the point a document ran out of time.
    pub lines: usize,
    /// Detector hits, including those in documents later dropped by the timeout.
    pub candidate_lines: usize,
    /// Records emitted.
    pub records: usize,
    pub timed_out: usize,
}

/// Result of scanning a corpus.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Records ordered by `doc_id`, then by line position.
    pub records: Vec<TransactionRecord>,
    pub stats: ScanStats,
}

#[derive(Debug, Default)]
struct DocumentOutcome {
    records: Vec<TransactionRecord>,
    lines: usize,
    candidates: usize,
    timed_out: bool,
}

pub struct Pipeline<'a> {
    detector: &'a SignalDetector,
    recognizer: &'a dyn EntityRecognizer,
    builder: RecordBuilder,
    options: PipelineOptions,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub const fn new(
        detector: &'a SignalDetector,
        recognizer: &'a dyn EntityRecognizer,
        options: PipelineOptions,
    ) -> Self {
        Self {
            detector,
            recognizer,
            builder: RecordBuilder::new(options.dedup_entities),
            options,
        }
    }

    /// Process one line. `None` when the line is not a candidate.
    #[must_use]
    pub fn scan_line(&self, doc_id: u64, line: &str) -> Option<TransactionRecord> {
        let signal = self.detector.detect(line)?;
        let mentions = self.recognizer.recognize(line);
        debug!(
            "doc {doc_id}: {} with {} org(s), {} person(s)",
            signal.amount,
            mentions.organizations.len(),
            mentions.persons.len()
        );
        Some(self.builder.build(doc_id, &signal.amount, &mentions, line))
    }

    /// Process every line of a document, in order.
    #[must_use]
    pub fn scan_document(&self, document: &Document) -> Vec<TransactionRecord> {
        self.process_document(document).records
    }

    fn process_document(&self, document: &Document) -> DocumentOutcome {
        let started = Instant::now();
        let mut outcome = DocumentOutcome::default();

        for line in lines(&document.text) {
            if let Some(budget) = self.options.document_timeout {
                if started.elapsed() > budget {
                    warn!(
                        "Document {} exceeded {}ms budget, skipping",
                        document.id,
                        budget.as_millis()
                    );
                    outcome.records.clear();
                    outcome.timed_out = true;
                    break;
                }
            }

            outcome.lines += 1;
            let Some(record) = self.scan_line(document.id, line) else {
                continue;
            };
            outcome.candidates += 1;
            outcome.records.push(record);
        }

        outcome
    }

    /// Scan a corpus and return its records in document order.
    #[must_use]
    pub fn scan(&self, documents: &[Document]) -> ScanReport {
        let outcomes: Vec<DocumentOutcome> = if self.options.parallel {
            documents
                .par_iter()
                .map(|doc| self.process_document(doc))
                .collect()
        } else {
            documents
                .iter()
                .map(|doc| self.process_document(doc))
                .collect()
        };

        let mut report = ScanReport::default();
        report.stats.documents = documents.len();

        for outcome in outcomes {
            report.stats.lines += outcome.lines;
            report.stats.candidate_lines += outcome.candidates;
            if outcome.timed_out {
                report.stats.timed_out += 1;
            }
            report.records.extend(outcome.records);
        }
        report.stats.records = report.records.len();

        info!(
            "Scanned {} documents ({} lines): {} candidate lines, {} records, {} timed out",
            report.stats.documents,
            report.stats.lines,
            report.stats.candidate_lines,
            report.stats.records,
            report.stats.timed_out
        );

        report
    }
}
