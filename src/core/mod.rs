pub mod etl;
pub mod filter;
pub mod pipeline;
pub mod template;

pub use crate::domain::model::{ArtifactCoordinate, ErrorPolicy, RunSummary, ScopeMarker};
pub use crate::domain::ports::{ConfigProvider, LineSource, Pipeline};
pub use crate::utils::error::Result;
