//! @dose
//! purpose: Error taxonomy for mokujin. Every failure the library can surface is a
//!     MokujinError, and every MokujinError maps onto one of three kinds: NotFound,
//!     InvalidInput or Io.
//!
//! when-editing:
//!     - !New variants must be classified in kind()
//!     - Copy wraps another MokujinError, so its kind is the inner kind
//!
//! gotchas:
//!     - A source that cannot be stat'ed is NotFound, not Io, even if the cause is permissions

use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MokujinError>;

/// Coarse classification of a [`MokujinError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Io,
}

#[derive(Error, Debug)]
pub enum MokujinError {
    #[error("{} not found: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("templates directory not found{}", searched_lines(.searched))]
    TemplatesNotFound { searched: Vec<PathBuf> },

    #[error("{} is not a regular file", .path.display())]
    InvalidInput { path: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {name}: {source}")]
    Copy {
        name: String,
        #[source]
        source: Box<MokujinError>,
    },
}

impl MokujinError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::TemplatesNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::Io { .. } => ErrorKind::Io,
            Self::Copy { source, .. } => source.kind(),
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn io_at(action: &str, path: &Path, source: io::Error) -> Self {
        Self::io(format!("cannot {} {}", action, path.display()), source)
    }
}

fn searched_lines(searched: &[PathBuf]) -> String {
    let mut out = String::new();
    for path in searched {
        let _ = write!(out, "\n   Searched in: {}", path.display());
    }
    out
}
