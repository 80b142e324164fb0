use crate::domain::model::{ArtifactCoordinate, ScopeMarker};

/// Leading text the build tool's logger puts in front of each listing entry.
pub const INFO_PREFIX: &str = "[INFO]    ";

/// Picks artifact coordinates out of dependency-listing lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFilter;

impl LineFilter {
    pub fn new() -> Self {
        Self
    }

    /// Removes [`INFO_PREFIX`] once, and only when the line starts with it.
    pub fn strip_prefix<'a>(&self, line: &'a str) -> &'a str {
        line.strip_prefix(INFO_PREFIX).unwrap_or(line)
    }

    /// First occurrence of `:compile`, else first occurrence of `:runtime`.
    pub fn find_marker(&self, line: &str) -> Option<(usize, ScopeMarker)> {
        ScopeMarker::SEARCH_ORDER
            .iter()
            .find_map(|marker| line.find(marker.as_str()).map(|index| (index, *marker)))
    }

    pub fn extract(&self, line: &str) -> Option<ArtifactCoordinate> {
        let line = self.strip_prefix(line);
        let (index, marker) = self.find_marker(line)?;

        // A marker at 0 leaves an empty coordinate; such lines are dropped. A line
        // holding a marker is never blank, so only the index check can reject here;
        // the blank check stays as part of the documented skip rule.
        if index == 0 || line.trim().is_empty() {
            return None;
        }

        tracing::trace!(scope = ?marker, index, "scope marker found");
        Some(ArtifactCoordinate::new(&line[..index]))
    }
}
