use crate::core::template::FragmentTemplate;
use crate::core::{ErrorPolicy, LineSource, Pipeline, RunSummary};
use crate::utils::error::{ArtifactError, Result};
use tokio::io::AsyncWrite;

/// Drives one pass over a line source, writing a fragment per qualifying line.
pub struct EtlEngine<S: LineSource, P: Pipeline> {
    source: S,
    pipeline: P,
    writer: FragmentTemplate,
}

impl<S: LineSource, P: Pipeline> EtlEngine<S, P> {
    pub fn new(source: S, pipeline: P) -> Self {
        Self {
            source,
            pipeline,
            writer: FragmentTemplate::new(),
        }
    }

    /// Processes every line in order. The first input error ends the pass;
    /// fragments written before it stay written.
    pub async fn run<W>(&mut self, sink: &mut W) -> Result<RunSummary>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let mut summary = RunSummary::default();
        self.pass(sink, &mut summary).await?;
        Ok(summary)
    }

    /// Like [`run`](Self::run), but an input error is reported to stderr and,
    /// under [`ErrorPolicy::Report`], turned into an aborted summary.
    pub async fn run_with_policy<W>(&mut self, sink: &mut W, policy: ErrorPolicy) -> Result<RunSummary>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let mut summary = RunSummary::default();
        match self.pass(sink, &mut summary).await {
            Ok(()) => Ok(summary),
            Err(e @ ArtifactError::Input { .. }) => {
                report(&e);
                match policy {
                    ErrorPolicy::Report => {
                        summary.aborted = true;
                        Ok(summary)
                    }
                    ErrorPolicy::Fail => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }

    async fn pass<W>(&mut self, sink: &mut W, summary: &mut RunSummary) -> Result<()>
    where
        W: AsyncWrite + Unpin + Send,
    {
        tracing::debug!("Reading dependency listing from {}", self.source.location().display());

        while let Some(line) = self.source.next_line().await? {
            summary.lines_read += 1;

            match self.pipeline.extract(&line) {
                Some(coordinate) => {
                    tracing::trace!(line = summary.lines_read, %coordinate, "emitting artifact");
                    let fragment = self.pipeline.transform(&coordinate);
                    self.writer.write_to(sink, &fragment).await?;
                    summary.fragments_written += 1;
                }
                None => {
                    tracing::trace!(line = summary.lines_read, "skipped");
                    summary.lines_skipped += 1;
                }
            }
        }

        tracing::debug!(
            "Read {} lines, wrote {} fragments, skipped {}",
            summary.lines_read,
            summary.fragments_written,
            summary.lines_skipped
        );
        Ok(())
    }
}

/// Prints the error and its source chain to stderr.
fn report(error: &ArtifactError) {
    tracing::error!("❌ {}", error);
    eprintln!("❌ {}", error.user_friendly_message());

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("    caused by: {}", cause);
        source = cause.source();
    }
}
