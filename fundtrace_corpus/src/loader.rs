//! Corpus loading.
//!
//! Reads a CSV file with a header row into an ordered list of documents.
//! Rows that do not parse (wrong field count, invalid UTF-8) are skipped.
//! A document's id is its record index in the file, so ids do not shift
//! when an earlier row is dropped.

use std::io::Read;
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder};
use fundtrace_core::{Document, Error, Result};
use tracing::{debug, info, warn};

/// Column read when none is configured.
pub const DEFAULT_TEXT_COLUMN: &str = "text";

/// Documents read from a corpus file.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Documents in file order.
    pub documents: Vec<Document>,
    /// Rows dropped because they failed to parse.
    pub skipped_rows: usize,
}

#[derive(Debug, Clone)]
pub struct CorpusLoader {
    text_column: String,
    sample_limit: Option<usize>,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_COLUMN, None)
    }
}

impl CorpusLoader {
    #[must_use]
    pub fn new(text_column: impl Into<String>, sample_limit: Option<usize>) -> Self {
        Self {
            text_column: text_column.into(),
            sample_limit,
        }
    }

    /// Load the corpus at `path`.
    ///
    /// A missing file is [`Error::DataUnavailable`]; the corpus must be
    /// fetched before a scan.
    pub fn load(&self, path: &Path) -> Result<Corpus> {
        if !path.exists() {
            return Err(Error::DataUnavailable {
                path: path.to_path_buf(),
            });
        }

        info!("Loading corpus from {}", path.display());
        let file = std::fs::File::open(path)?;
        self.read_from(file)
    }

    /// Load from any reader. The first row is the header.
    ///
    /// Rows with fewer fields than the header are kept and their missing
    /// fields read as empty. Rows with more fields are skipped.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Corpus> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?;
        let width = headers.len();
        let column = headers.iter().position(|h| h.trim() == self.text_column);
        if column.is_none() {
            warn!(
                "Text column '{}' not found; every document will be empty",
                self.text_column
            );
        }

        let mut corpus = Corpus::default();

        for (index, result) in (0_u64..).zip(reader.records()) {
            if self
                .sample_limit
                .is_some_and(|limit| corpus.documents.len() >= limit)
            {
                break;
            }

            let record = match result {
                Ok(record) => record,
                Err(e) if matches!(e.kind(), ErrorKind::Io(_)) => return Err(e.into()),
                Err(e) => {
                    debug!("Skipping malformed row {index}: {e}");
                    corpus.skipped_rows += 1;
                    continue;
                }
            };
            if record.len() > width {
                debug!(
                    "Skipping malformed row {index}: expected {width} fields, found {}",
                    record.len()
                );
                corpus.skipped_rows += 1;
                continue;
            }

            let text = column.and_then(|c| record.get(c)).unwrap_or_default();
            corpus.documents.push(Document::new(index, text));
        }

        info!(
            "Loaded {} documents ({} malformed rows skipped{})",
            corpus.documents.len(),
            corpus.skipped_rows,
            self.sample_limit
                .map(|l| format!(", sample limit {l}"))
                .unwrap_or_default()
        );

        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn load(csv: &str, loader: &CorpusLoader) -> Corpus {
        loader.read_from(csv.as_bytes()).expect("corpus should load")
    }

    #[test]
    fn test_reads_text_column_in_order() {
        let corpus = load("id,text\n1,alpha\n2,\"beta\nline two\"\n", &CorpusLoader::default());
        assert_eq!(
            corpus.documents,
            vec![
                Document::new(0, "alpha"),
                Document::new(1, "beta\nline two"),
            ]
        );
        assert_eq!(corpus.skipped_rows, 0);
    }

    #[test]
    fn test_missing_value_is_empty_string() {
        let corpus = load("id,text\n1,\n", &CorpusLoader::default());
        assert_eq!(corpus.documents, vec![Document::new(0, "")]);
    }

    #[test]
    fn test_malformed_row_skipped_and_ids_stable() {
        let csv = "id,text\n1,first\n2,bad,extra\n3,third\n";
        let corpus = load(csv, &CorpusLoader::default());
        assert_eq!(
            corpus.documents,
            vec![Document::new(0, "first"), Document::new(2, "third")]
        );
        assert_eq!(corpus.skipped_rows, 1);
    }

    #[test]
    fn test_short_row_kept_with_empty_fields() {
        let csv = "id,text,source\n1,wire fee $500 paid\n2,grant $9,x\n3\n";
        let corpus = load(csv, &CorpusLoader::default());
        assert_eq!(
            corpus.documents,
            vec![
                Document::new(0, "wire fee $500 paid"),
                Document::new(1, "grant $9"),
                Document::new(2, ""),
            ]
        );
        assert_eq!(corpus.skipped_rows, 0);
    }

    #[test]
    fn test_custom_text_column() {
        let corpus = load("body,other\nhello,x\n", &CorpusLoader::new("body", None));
        assert_eq!(corpus.documents[0].text, "hello");
    }

    #[test]
    fn test_absent_text_column_yields_empty_documents() {
        let corpus = load("id,content\n1,hello\n", &CorpusLoader::default());
        assert_eq!(corpus.documents, vec![Document::new(0, "")]);
    }

    #[test]
    fn test_sample_limit_counts_documents() {
        let csv = "text\na\nb\nc\nd\n";
        let corpus = load(csv, &CorpusLoader::new(DEFAULT_TEXT_COLUMN, Some(2)));
        assert_eq!(corpus.documents.len(), 2);
        assert_eq!(corpus.documents[1].id, 1);
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let err = CorpusLoader::default().load(Path::new("/nonexistent/corpus.csv"));
        assert!(matches!(err, Err(Error::DataUnavailable { .. })));
    }
}
