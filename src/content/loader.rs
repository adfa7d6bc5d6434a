//! Content loader - discovers and parses content files

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::ContentRecord;
use crate::error::{Error, Result};
use crate::Site;

/// Extension of content files
pub const CONTENT_EXTENSION: &str = "md";

/// Loads content from the site's content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Parse every content file.
    ///
    /// The first malformed file aborts the load.
    pub fn load_records(&self) -> Result<Vec<ContentRecord>> {
        let files = list_content_files(&self.site.content_dir)?;
        tracing::debug!("Found {} content files", files.len());

        files.iter().map(|path| ContentRecord::load(path)).collect()
    }
}

/// List content files in `dir`, newest-looking first.
///
/// Only the top level is scanned. Entries are listed in file name order and
/// the listing is reversed, so date-prefixed names come out newest first.
pub fn list_content_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::io(dir, e.into()))?;
        let path = entry.path();
        if entry.file_type().is_file() && is_content_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.reverse();
    Ok(files)
}

/// Check if a file is a content (markdown) file
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == CONTENT_EXTENSION)
        .unwrap_or(false)
}
