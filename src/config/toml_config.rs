use crate::core::{ConfigProvider, ErrorPolicy};
use crate::utils::error::{ArtifactError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const POLICIES: [&str; 2] = ["report", "fail"];

/// Optional settings file. There are deliberately no input or output keys:
/// the tool always reads `./deps.txt` and writes to stdout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub error_handling: Option<ErrorHandlingConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorHandlingConfig {
    pub on_input_error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    /// `EnvFilter` directive, e.g. `dep_artifacts=trace`.
    pub filter: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ArtifactError::ConfigError {
            message: format!("Cannot read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ArtifactError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn on_input_error(&self) -> Option<&str> {
        self.error_handling
            .as_ref()
            .and_then(|e| e.on_input_error.as_deref())
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.filter.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn error_policy(&self) -> ErrorPolicy {
        match self.on_input_error() {
            Some("fail") => ErrorPolicy::Fail,
            _ => ErrorPolicy::Report,
        }
    }

    fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(policy) = self.on_input_error() {
            validate_one_of("error_handling.on_input_error", policy, &POLICIES)?;
        }
        if let Some(filter) = self.log_filter() {
            validate_non_empty_string("logging.filter", filter)?;
        }
        Ok(())
    }
}
