use std::path::PathBuf;

use fundtrace_config::Config;
use fundtrace_nlp::EntityModel;

#[derive(Debug, Clone)]
pub struct InitInput {
    /// Config file to create; the default location when `None`.
    pub config: Option<PathBuf>,
    /// Install the default entity model instead of the config file.
    pub model: bool,
}

/// Strategy for creating the config file or the default entity model.
///
/// Neither file is overwritten if it already exists.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = InitInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        if input.model {
            let config = super::load_config(input.config.as_deref())?;
            let model_path = config.model_path()?;
            if model_path.exists() {
                anyhow::bail!(
                    "Entity model already exists at: {}. Please edit it directly.",
                    model_path.display()
                );
            }
            EntityModel::default().save(&model_path)?;
            println!("✅ Installed default entity model at: {}", model_path.display());
            return Ok(());
        }

        match input.config {
            Some(path) => {
                Config::write_template(&path)?;
                println!("✅ Created config file at: {}", path.display());
            }
            None => {
                Config::create_config()?;
            }
        }
        Ok(())
    }
}
