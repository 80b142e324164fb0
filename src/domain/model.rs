use serde::{Deserialize, Serialize};
use std::fmt;

/// Dependency scope suffixes recognized in a listing line, in search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeMarker {
    Compile,
    Runtime,
}

impl ScopeMarker {
    pub const SEARCH_ORDER: [ScopeMarker; 2] = [ScopeMarker::Compile, ScopeMarker::Runtime];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeMarker::Compile => ":compile",
            ScopeMarker::Runtime => ":runtime",
        }
    }
}

/// Text of a listing line preceding its scope marker, e.g. `org.foo:bar:jar:1.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCoordinate(String);

impl ArtifactCoordinate {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What to do when the input cannot be opened or read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Print the diagnostic and finish with a success status.
    #[default]
    Report,
    /// Print the diagnostic and finish with a failure status.
    Fail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub fragments_written: usize,
    pub lines_skipped: usize,
    /// Set when an input error ended the pass early under [`ErrorPolicy::Report`].
    pub aborted: bool,
}
