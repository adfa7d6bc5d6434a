//! postpress: a small static blog generator
//!
//! Content files carry a JSON front-matter block and a markdown body. Every
//! build indexes them into `posts.json`, then fills a fixed set of HTML
//! templates to produce the home page, the "all posts" page, one page per
//! post and a few static pages.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod templates;

pub use error::{Error, Result};

use chrono::Datelike;
use std::path::{Path, PathBuf};

/// Config file names, in lookup order
pub const CONFIG_FILES: [&str; 2] = ["config.json", "config.toml"];

/// Subfolders created in the output directory
pub const OUTPUT_FOLDERS: [&str; 5] = ["css", "images", "javascript", "pages", "posts"];

/// A site: configuration plus every resolved directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown content
    pub content_dir: PathBuf,
    /// HTML templates
    pub templates_dir: PathBuf,
    /// Static assets copied into the output
    pub assets_dir: PathBuf,
    /// Generated site
    pub output_dir: PathBuf,
    /// Build data (content index, base template)
    pub data_dir: PathBuf,
    /// Year shown in the footer
    pub year: i32,
}

impl Site {
    /// Load the site in `base_dir`. The config file is required.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = CONFIG_FILES
            .iter()
            .map(|name| base_dir.join(name))
            .find(|path| path.exists())
            .unwrap_or_else(|| base_dir.join(CONFIG_FILES[0]));

        let config = config::SiteConfig::load(&config_path)?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Resolve directories for an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        Self {
            content_dir: base_dir.join(&config.paths.content),
            templates_dir: base_dir.join(&config.paths.templates),
            assets_dir: base_dir.join(&config.paths.assets),
            output_dir: base_dir.join(&config.paths.output),
            data_dir: base_dir.join(&config.paths.data),
            year: chrono::Local::now().year(),
            config,
            base_dir,
        }
    }

    /// Location of the persisted content index
    pub fn index_path(&self) -> PathBuf {
        self.data_dir.join(content::index::INDEX_FILE)
    }

    /// Build the static site
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Remove generated output and build data
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
