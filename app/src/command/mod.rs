//! Static strategy pattern for CLI commands.
//!
//! Each command is its own strategy type with its own input type, so
//! dispatch is resolved at compile time.

use std::path::{Path, PathBuf};

use fundtrace_config::Config;

mod info;
mod init;
mod scan;
mod summary;
mod version;

pub use info::InfoStrategy;
pub use init::{InitInput, InitStrategy};
pub use scan::{ScanInput, ScanStrategy};
pub use summary::{SummaryInput, SummaryStrategy};
pub use version::VersionStrategy;

/// Contract shared by all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Run the command.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Load the config named on the command line, or the default one.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    Config::load(path)
}

/// Pick a CLI override over the configured value.
fn resolve(override_path: Option<PathBuf>, configured: &Path) -> PathBuf {
    override_path.unwrap_or_else(|| configured.to_path_buf())
}
