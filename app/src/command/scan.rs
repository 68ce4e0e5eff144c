use std::path::PathBuf;

use fundtrace_config::Config;
use fundtrace_core::{Pipeline, PipelineOptions, SignalDetector};
use fundtrace_corpus::{CorpusLoader, write_records};
use fundtrace_nlp::RuleRecognizer;
use tracing::info;

/// Input parameters for the Scan command strategy.
#[derive(Debug, Clone, Default)]
pub struct ScanInput {
    pub config: Option<PathBuf>,
    /// Corpus override.
    pub input: Option<PathBuf>,
    /// Output table override.
    pub output: Option<PathBuf>,
    /// Sample limit override.
    pub limit: Option<usize>,
    /// Model file override.
    pub model: Option<PathBuf>,
    /// Force single-threaded processing.
    pub sequential: bool,
}

impl ScanInput {
    /// Overlay command-line flags on the loaded config.
    fn apply_to(&self, config: &mut Config) {
        if self.limit.is_some() {
            config.corpus.sample_limit = self.limit;
        }
        if self.model.is_some() {
            config.entities.model_path.clone_from(&self.model);
        }
        if self.sequential {
            config.pipeline.parallel = false;
        }
    }
}

/// Strategy for running the extraction pipeline.
///
/// Startup failures (bad config, missing model, missing corpus) abort
/// before any document is processed. The output table is only written once
/// the whole corpus has been scanned.
#[derive(Debug, Clone, Copy)]
pub struct ScanStrategy;

impl super::CommandStrategy for ScanStrategy {
    type Input = ScanInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = super::load_config(input.config.as_deref())?;
        input.apply_to(&mut config);
        config.validate()?;

        let input_path = super::resolve(input.input, &config.corpus.input_path);
        let output_path = super::resolve(input.output, &config.export.output_path);
        let model_path = config.model_path()?;

        let detector = SignalDetector::new(&config.detector)?;
        info!("Keywords: {}", detector.keywords().join(", "));

        let recognizer = RuleRecognizer::load(&model_path)?;

        match config.corpus.sample_limit {
            Some(limit) => info!("Sample limit: first {limit} documents"),
            None => info!("Sample limit: none, scanning the full corpus"),
        }

        let options = PipelineOptions {
            parallel: config.pipeline.parallel,
            document_timeout: config.pipeline.document_timeout(),
            dedup_entities: config.entities.dedup,
        };
        let loader = CorpusLoader::new(config.corpus.text_column, config.corpus.sample_limit);

        let summary = tokio::task::spawn_blocking(move || -> anyhow::Result<_> {
            let corpus = loader.load(&input_path)?;
            let pipeline = Pipeline::new(&detector, &recognizer, options);
            let report = pipeline.scan(&corpus.documents);
            Ok(write_records(&output_path, &report.records)?)
        })
        .await??;

        println!("Found {} candidate transactions.", summary.rows);
        println!("Saved to {}", summary.path.display());
        println!("sha256 {}", summary.sha256);
        Ok(())
    }
}
