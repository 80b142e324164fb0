use crate::domain::ports::LineSource;
use crate::utils::error::{ArtifactError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Split};

/// Turns one `\n`-terminated segment into a line: drops a trailing `\r` and
/// replaces bytes that are not UTF-8 with U+FFFD.
fn decode_line(mut segment: Vec<u8>) -> String {
    if segment.last() == Some(&b'\r') {
        segment.pop();
    }
    match String::from_utf8(segment) {
        Ok(line) => line,
        Err(e) => {
            tracing::debug!("Replacing invalid UTF-8 in listing line: {}", e.utf8_error());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Reads lines from a file, opening it on the first read.
///
/// The handle is released when the source is dropped, on every exit path of
/// the engine loop.
#[derive(Debug)]
pub struct FileLineSource {
    path: PathBuf,
    lines: Option<Split<BufReader<File>>>,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lines: None,
        }
    }
}

#[async_trait]
impl LineSource for FileLineSource {
    fn location(&self) -> &Path {
        &self.path
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        if self.lines.is_none() {
            tracing::debug!("Opening {}", self.path.display());
            let file = File::open(&self.path)
                .await
                .map_err(|e| ArtifactError::input(&self.path, e))?;
            self.lines = Some(BufReader::new(file).split(b'\n'));
        }
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };

        let segment = lines
            .next_segment()
            .await
            .map_err(|e| ArtifactError::input(&self.path, e))?;
        Ok(segment.map(decode_line))
    }
}

/// Lines from any buffered async reader; `location` labels it in diagnostics.
pub struct ReaderLineSource<R> {
    location: PathBuf,
    lines: Split<R>,
}

impl<R: AsyncBufRead + Unpin + Send> ReaderLineSource<R> {
    pub fn new(location: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            location: location.into(),
            lines: reader.split(b'\n'),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> LineSource for ReaderLineSource<R> {
    fn location(&self) -> &Path {
        &self.location
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        let segment = self
            .lines
            .next_segment()
            .await
            .map_err(|e| ArtifactError::input(&self.location, e))?;
        Ok(segment.map(decode_line))
    }
}
