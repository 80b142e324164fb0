use crate::core::filter::LineFilter;
use crate::core::template::FragmentTemplate;
use crate::core::{ArtifactCoordinate, Pipeline};

/// Dependency-listing lines in, `<artifact>` fragments out.
#[derive(Debug, Clone, Default)]
pub struct ArtifactPipeline {
    filter: LineFilter,
    template: FragmentTemplate,
}

impl ArtifactPipeline {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pipeline for ArtifactPipeline {
    fn extract(&self, line: &str) -> Option<ArtifactCoordinate> {
        self.filter.extract(line)
    }

    fn transform(&self, coordinate: &ArtifactCoordinate) -> String {
        self.template.render(coordinate)
    }
}
