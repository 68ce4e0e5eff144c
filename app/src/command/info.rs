use std::path::PathBuf;

use fundtrace_config::Config;

/// Strategy for displaying the effective configuration.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.as_deref())?;

        println!("=== fundtrace Configuration ===\n");

        println!("Corpus:");
        println!("  Input: {}", config.corpus.input_path.display());
        println!("  Text Column: {}", config.corpus.text_column);
        match config.corpus.sample_limit {
            Some(limit) => println!("  Sample Limit: {limit} documents"),
            None => println!("  Sample Limit: (none - full corpus)"),
        }
        println!();

        println!("Detector:");
        println!("  Keywords: {}", config.detector.keywords.join(", "));
        println!(
            "  Amount Pattern: {}",
            config
                .detector
                .amount_pattern
                .as_deref()
                .unwrap_or(fundtrace_core::DEFAULT_AMOUNT_PATTERN)
        );
        println!();

        println!("Entities:");
        let model_path = config.model_path()?;
        let status = if model_path.exists() {
            "installed"
        } else {
            "missing - run 'fundtrace init --model'"
        };
        println!("  Model: {} ({status})", model_path.display());
        println!("  Dedup: {}", config.entities.dedup);
        println!();

        println!("Pipeline:");
        println!("  Parallel: {}", config.pipeline.parallel);
        match config.pipeline.document_timeout_ms {
            Some(ms) => println!("  Document Timeout: {ms}ms"),
            None => println!("  Document Timeout: (none)"),
        }
        println!();

        println!("Export:");
        println!("  Output: {}", config.export.output_path.display());
        println!("  Summary Top N: {}", config.summary.top_n);

        Ok(())
    }
}
