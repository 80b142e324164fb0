use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read input {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl ArtifactError {
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Input {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Input { .. } => ErrorCategory::Input,
            Self::Output(_) => ErrorCategory::Output,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Exit status the binary reports when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Input { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("Input file {} does not exist", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Input file {} is not readable", path.display())
                }
                _ => format!("Could not read {}: {}", path.display(), source),
            },
            Self::Output(e) => format!("Could not write fragments: {}", e),
            Self::ConfigError { message } => message.clone(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Run the dependency report into ./deps.txt in the current directory first"
            }
            ErrorCategory::Output => "Check that stdout is still open (e.g. the pipe reader did not exit)",
            ErrorCategory::Configuration => "Fix the flagged setting and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ArtifactError>;
