use crate::domain::model::{ArtifactCoordinate, ErrorPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Sequential, newline-stripped lines of a dependency listing.
#[async_trait]
pub trait LineSource: Send {
    /// Where the lines come from, for diagnostics.
    fn location(&self) -> &Path;

    /// Next line, or `None` at end of input.
    async fn next_line(&mut self) -> Result<Option<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn error_policy(&self) -> ErrorPolicy;
    fn verbose(&self) -> bool;
}

/// Per-line extract and transform steps; the engine owns reading and writing.
pub trait Pipeline: Send + Sync {
    fn extract(&self, line: &str) -> Option<ArtifactCoordinate>;
    fn transform(&self, coordinate: &ArtifactCoordinate) -> String;
}
