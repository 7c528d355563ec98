use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no start marker found")]
    StartMarkerNotFound,

    #[error("no end marker found after offset {start}")]
    EndMarkerNotFound { start: usize },
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for a missing SOI or EOI marker, false for I/O failures.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StartMarkerNotFound | Self::EndMarkerNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
