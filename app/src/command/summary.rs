use std::path::PathBuf;

use fundtrace_config::SummaryConfig;
use fundtrace_corpus::{read_records, summarize};

#[derive(Debug, Clone, Default)]
pub struct SummaryInput {
    pub config: Option<PathBuf>,
    /// Table override; defaults to the configured output path.
    pub input: Option<PathBuf>,
    /// Case-insensitive entity filter.
    pub search: Option<String>,
    /// Top-N override.
    pub top: Option<usize>,
}

/// Strategy for summarizing an exported transaction table.
#[derive(Debug, Clone, Copy)]
pub struct SummaryStrategy;

impl super::CommandStrategy for SummaryStrategy {
    type Input = SummaryInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.config.as_deref())?;
        let path = super::resolve(input.input, &config.export.output_path);
        let top_n = input
            .top
            .unwrap_or(config.summary.top_n)
            .clamp(SummaryConfig::MIN_TOP_N, SummaryConfig::MAX_TOP_N);

        let records = read_records(&path)?;
        let summary = summarize(&records, input.search.as_deref(), top_n);

        println!("Transactions Found: {}", summary.transactions);
        println!("Unique Entities Involved: {}", summary.unique_entities);
        println!();
        println!("Top {top_n} entities:");

        let width = summary
            .top
            .iter()
            .map(|c| c.entity.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &summary.top {
            println!("  {:<width$}  {}", entry.entity, entry.count);
        }

        Ok(())
    }
}
