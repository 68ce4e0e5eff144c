use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

// Detector settings live in fundtrace_core so the pipeline owns its own defaults
use fundtrace_core::DetectorConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub entities: EntitiesConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    #[serde(default = "CorpusConfig::default_input_path")]
    pub input_path: PathBuf,
    #[serde(default = "CorpusConfig::default_text_column")]
    pub text_column: String,
    /// Number of documents to scan; `None` scans the whole corpus.
    #[serde(default)]
    pub sample_limit: Option<usize>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            input_path: Self::default_input_path(),
            text_column: Self::default_text_column(),
            sample_limit: None,
        }
    }
}

impl CorpusConfig {
    fn default_input_path() -> PathBuf {
        PathBuf::from("data/epstein_full_text.csv")
    }

    fn default_text_column() -> String {
        "text".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct EntitiesConfig {
    /// Recognizer model file; defaults to `~/fundtrace/model.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_path: Option<PathBuf>,
    /// Drop repeated entity mentions within one record.
    #[serde(default)]
    pub dedup: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    #[serde(default = "PipelineConfig::default_parallel")]
    pub parallel: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_timeout_ms: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parallel: Self::default_parallel(),
            document_timeout_ms: None,
        }
    }
}

impl PipelineConfig {
    const fn default_parallel() -> bool {
        true
    }

    #[must_use]
    pub fn document_timeout(&self) -> Option<Duration> {
        self.document_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    #[serde(default = "ExportConfig::default_output_path")]
    pub output_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: Self::default_output_path(),
        }
    }
}

impl ExportConfig {
    fn default_output_path() -> PathBuf {
        PathBuf::from("data/clean_transactions.csv")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    #[serde(default = "SummaryConfig::default_top_n")]
    pub top_n: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            top_n: Self::default_top_n(),
        }
    }
}

impl SummaryConfig {
    pub const MIN_TOP_N: usize = 5;
    pub const MAX_TOP_N: usize = 100;

    const fn default_top_n() -> usize {
        20
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("fundtrace"))
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn default_model_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("model.json"))
    }

    /// Model path from the config, falling back to the default location.
    pub fn model_path(&self) -> anyhow::Result<PathBuf> {
        match &self.entities.model_path {
            Some(path) => Ok(path.clone()),
            None => Self::default_model_path(),
        }
    }

    /// Load a config file. The file must exist.
    ///
    /// The result is not validated: apply command-line overrides, then call
    /// [`Config::validate`].
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'fundtrace init' to create config.",
                path.display()
            );
        }

        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the config at `path`, or the default location when `None`.
    ///
    /// A missing file at the default location means built-in defaults; an
    /// explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        let default_path = Self::default_path()?;
        if default_path.exists() {
            info!("Loaded config from {}", default_path.display());
            Self::load_from(&default_path)
        } else {
            info!("No config at {}, using defaults", default_path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.corpus.sample_limit == Some(0) {
            anyhow::bail!("corpus.sample_limit must be positive; omit it to scan the full corpus");
        }
        if self.corpus.text_column.trim().is_empty() {
            anyhow::bail!("corpus.text_column must not be empty");
        }
        if self.detector.keywords.iter().all(|k| k.trim().is_empty()) {
            anyhow::bail!("detector.keywords must contain at least one keyword");
        }
        Ok(())
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write the config template to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, template)?;
        Ok(())
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        Self::ensure_config_dir()?;
        let config_path = Self::default_path()?;
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Fetch the corpus CSV into corpus.input_path");
        println!("   2. Run 'fundtrace init --model' if no entity model is installed");
        println!("   3. Run 'fundtrace scan' to extract transactions");
        println!();
        println!("🔧 Configuration options:");
        println!("   - corpus.sample_limit: documents to scan (null = whole corpus)");
        println!("   - detector.keywords: financial-intent keywords for candidate lines");
        println!("   - entities.dedup: drop repeated entity mentions within a record");
        println!("   - pipeline.document_timeout_ms: skip documents slower than this");
        println!();
        Ok(config_path)
    }
}
