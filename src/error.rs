//! Error types for the build pipeline

use std::path::{Path, PathBuf};

/// Errors that abort a build.
///
/// Every variant is fatal: the pipeline has no recovery path, and a failed
/// run may leave a partially written output tree behind.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("{file}: expected 2 front-matter delimiters, found {found}")]
    Delimiter { file: String, found: usize },

    #[error("{file}: invalid front matter: {source}")]
    FrontMatter {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{file}: cannot parse date {date:?}")]
    InvalidDate { file: String, date: String },

    #[error("template not found: {0:?}")]
    MissingTemplate(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn config(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

/// Small helpers so call sites can keep the path attached to I/O failures.
pub(crate) mod fs {
    use super::{Error, Result};
    use std::path::Path;

    pub fn read_to_string(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }

    pub fn write(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        std::fs::write(path, contents).map_err(|e| Error::io(path, e))
    }

    pub fn create_dir_all(path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| Error::io(path, e))
    }

    pub fn remove_dir_all(path: &Path) -> Result<()> {
        std::fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
    }

    pub fn copy(from: &Path, to: &Path) -> Result<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| Error::io(from, e))
    }
}
