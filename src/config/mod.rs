pub mod toml_config;

pub use toml_config::DrillConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Arguments shared by both drill binaries.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
pub struct CliArgs {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (logged to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliArgs {
    /// Loads the config file when one was given, defaults otherwise.
    pub fn load_config(&self) -> Result<DrillConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                DrillConfig::from_file(path)
            }
            None => Ok(DrillConfig::default()),
        }
    }
}
