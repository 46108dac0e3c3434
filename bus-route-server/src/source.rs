//! Restartable line sources for route data.
//!
//! The loader reads its input twice: once for the header and once for the
//! route lines. A [`LineSource`] buffers the whole input up front so every
//! pass observes exactly the same lines, even if the underlying file changes
//! in the meantime. The size limits on route data keep the buffer bounded.

use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Errors that can occur while obtaining route data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// No route file was configured
    #[error("no route file configured")]
    NotConfigured,

    /// The path does not exist
    #[error("route file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The path exists but is a directory or other non-regular file
    #[error("route file is not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// Reading failed part way through
    #[error("failed to read route data from {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },

    /// The data was read but a line is not valid UTF-8
    #[error("route data from {origin} is not valid UTF-8 at line {line}")]
    InvalidEncoding { origin: String, line: usize },
}

impl SourceError {
    /// Returns true when no route data could be obtained at all.
    ///
    /// Data that was read but turned out malformed is not unavailable.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, SourceError::InvalidEncoding { .. })
    }
}

/// A fully buffered, ordered sequence of text lines.
///
/// Iterating with [`LineSource::lines`] always starts from the first line, so
/// the source can be consumed any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSource {
    lines: Vec<String>,
}

impl LineSource {
    /// Build a source from already split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a source from in-memory text, splitting on `\n` or `\r\n`.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Buffer every line of a reader.
    ///
    /// `origin` names the reader in error messages. A line that is not
    /// valid UTF-8 is reported as [`SourceError::InvalidEncoding`].
    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, SourceError> {
        let mut lines = Vec::new();
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            match line {
                Ok(line) => lines.push(line),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    return Err(SourceError::InvalidEncoding {
                        origin: origin.to_string(),
                        line: idx + 1,
                    });
                }
                Err(source) => {
                    return Err(SourceError::Io {
                        origin: origin.to_string(),
                        source,
                    });
                }
            }
        }
        Ok(Self { lines })
    }

    /// Buffer every line of a file.
    ///
    /// A missing path and a path that is not a regular file are reported
    /// separately from read failures.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(SourceError::Io {
                    origin: path.display().to_string(),
                    source,
                });
            }
        };
        if !metadata.is_file() {
            return Err(SourceError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let file = std::fs::File::open(path).map_err(|source| SourceError::Io {
            origin: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Iterate over the lines from the beginning.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Iterate over the lines that contain something other than whitespace.
    pub fn non_blank_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines().filter(|line| !is_blank(line))
    }

    /// Total number of lines, blank ones included.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the source holds no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[String] {
        &self.lines
    }
}

/// A line is blank when it holds nothing but whitespace.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
