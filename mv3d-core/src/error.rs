//! Error types for mesh loading
//!
//! Every failure is terminal for the load that produced it. Transforms have no
//! error conditions and never return these.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh loading operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while loading a mesh
#[derive(Error, Debug)]
pub enum Error {
    /// No parser in the chain claims the file's extension
    #[error("no parser for this file type: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A parser claimed the file but it could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A vertex or face line has the wrong shape.
    ///
    /// Also covers an `f` line with no index tokens at all, which is reported
    /// here rather than as an [`InvalidFaceIndex`](Self::InvalidFaceIndex).
    #[error("malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// A face index is zero or falls outside the vertex buffer
    #[error("invalid face index {index} on line {line} (mesh has {vertex_count} vertices)")]
    InvalidFaceIndex {
        line: usize,
        index: i64,
        vertex_count: usize,
    },

    /// Buffers handed to [`GeometryBuffer::from_parts`](crate::GeometryBuffer::from_parts) do not fit together
    #[error("invalid geometry buffer: {0}")]
    InvalidBuffer(String),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedLine {
            line,
            reason: reason.into(),
        }
    }
}
