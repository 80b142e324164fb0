use crate::domain::model::ArtifactCoordinate;
use crate::utils::error::{ArtifactError, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt};

const HEAD: &str = "<artifact>\n<id>";
const TAIL: &str = "</id>\n<override>true</override>\n<source>true</source>\n<instructions>\n<_noee>true</_noee>\n</instructions>\n</artifact>\n";

/// The fixed `<artifact>` block wrapped around each coordinate.
///
/// The coordinate is inserted verbatim; no escaping is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentTemplate;

impl FragmentTemplate {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, coordinate: &ArtifactCoordinate) -> String {
        let id = coordinate.as_str();
        let mut fragment = String::with_capacity(HEAD.len() + id.len() + TAIL.len());
        fragment.push_str(HEAD);
        fragment.push_str(id);
        fragment.push_str(TAIL);
        fragment
    }

    /// Writes one rendered fragment and flushes the sink.
    pub async fn write_to<W>(&self, sink: &mut W, fragment: &str) -> Result<()>
    where
        W: AsyncWrite + Unpin + Send,
    {
        sink.write_all(fragment.as_bytes())
            .await
            .map_err(ArtifactError::Output)?;
        sink.flush().await.map_err(ArtifactError::Output)
    }
}
