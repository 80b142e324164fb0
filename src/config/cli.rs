use crate::config::toml_config::TomlConfig;
use crate::core::{ConfigProvider, ErrorPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Command-line settings. The input (`./deps.txt`) and output (stdout) are fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "dep-artifacts")]
#[command(about = "Wrap dependency coordinates from ./deps.txt in <artifact> blocks")]
pub struct CliConfig {
    /// What to do when ./deps.txt cannot be opened or read [default: report]
    #[arg(long, value_enum)]
    pub on_input_error: Option<ErrorPolicy>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    pub log_filter: Option<String>,
}

impl CliConfig {
    /// Fills anything not given on the command line from the settings file.
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        if self.on_input_error.is_none() && file.on_input_error().is_some() {
            self.on_input_error = Some(file.error_policy());
        }
        self.verbose |= file.verbose();
        if self.log_filter.is_none() {
            self.log_filter = file.log_filter().map(str::to_string);
        }
        self
    }
}

impl ConfigProvider for CliConfig {
    fn error_policy(&self) -> ErrorPolicy {
        self.on_input_error.unwrap_or_default()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
