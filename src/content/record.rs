//! Content record model

use std::path::Path;

use super::FrontMatter;
use crate::error::{fs, Error, Result};

/// One content file: its metadata and its markdown body
#[derive(Debug, Clone)]
pub struct ContentRecord {
    /// Full file name including the extension, e.g. `20240301-intro.md`
    pub filename: String,

    /// Parsed metadata block
    pub meta: FrontMatter,

    /// Raw markdown body
    pub body: String,
}

impl ContentRecord {
    /// Parse a record from raw file contents
    pub fn parse(filename: &str, content: &str) -> Result<Self> {
        let (meta, body) = FrontMatter::parse(content, filename)?;
        Ok(Self {
            filename: filename.to_string(),
            meta,
            body: body.to_string(),
        })
    }

    /// Read and parse a content file
    pub fn load(path: &Path) -> Result<Self> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                Error::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a UTF-8 file name"),
                )
            })?;
        let content = fs::read_to_string(path)?;
        Self::parse(filename, &content)
    }
}

/// Output name of a content file: everything before the first `.`
pub fn stem(filename: &str) -> &str {
    filename.split('.').next().unwrap_or(filename)
}
