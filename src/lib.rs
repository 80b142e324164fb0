pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileLineSource, ReaderLineSource};
pub use config::TomlConfig;
pub use core::{etl::EtlEngine, pipeline::ArtifactPipeline};
pub use domain::model::{ArtifactCoordinate, ErrorPolicy, RunSummary, ScopeMarker};
pub use utils::error::{ArtifactError, Result};

/// Dependency listing read by the binary, relative to the working directory.
pub const INPUT_PATH: &str = "./deps.txt";
