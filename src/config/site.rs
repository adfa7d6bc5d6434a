//! Site configuration (config.json / config.toml)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{fs, Error, Result};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site identity; `main.author` is the only mandatory setting
    pub main: MainConfig,

    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub posts: PostsConfig,
    #[serde(default)]
    pub markup: MarkupConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub index: IndexConfig,

    /// Capitalize every word of post titles
    #[serde(default = "default_true")]
    pub titlecase: bool,

    /// Single-instance pages built from `template_<name>.html`
    #[serde(default = "default_static_pages")]
    pub static_pages: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_static_pages() -> Vec<String> {
    vec!["about".to_string(), "extras".to_string()]
}

impl SiteConfig {
    /// Build a configuration with defaults everywhere except the author
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            main: MainConfig {
                author: author.into(),
                title: String::new(),
                url: String::new(),
                description: String::new(),
            },
            paths: PathsConfig::default(),
            home: HomeConfig::default(),
            posts: PostsConfig::default(),
            markup: MarkupConfig::default(),
            assets: AssetsConfig::default(),
            index: IndexConfig::default(),
            titlecase: true,
            static_pages: default_static_pages(),
        }
    }

    /// Load configuration from a file.
    ///
    /// `.toml` files are read as TOML, anything else as JSON. A missing file
    /// or a malformed document is fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let config: SiteConfig = if is_toml {
            toml::from_str(&content).map_err(|e| Error::config(path, e.to_string()))?
        } else {
            serde_json::from_str(&content).map_err(|e| Error::config(path, e.to_string()))?
        };

        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Host that relative image sources are rewritten under
    pub fn image_host(&self) -> &str {
        self.markup.image_host.as_deref().unwrap_or(&self.main.url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainConfig {
    pub author: String,
    #[serde(default)]
    pub title: String,
    /// Base URL prepended to every generated link
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// Directory layout, relative to the site base directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub content: String,
    pub templates: String,
    pub assets: String,
    pub output: String,
    pub data: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            templates: "templates".to_string(),
            assets: "assets".to_string(),
            output: "build".to_string(),
            data: "data".to_string(),
        }
    }
}

/// Home page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub latest_count: usize,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self { latest_count: 7 }
    }
}

/// "All posts" page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    pub top_tags: usize,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self { top_tags: 10 }
    }
}

/// Post-processing applied to rendered markdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    pub link_class: String,
    pub image_class: String,
    pub image_host: Option<String>,
    pub video_width: String,
    pub video_height: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            link_class: "has-text-danger".to_string(),
            image_class: "images-centre".to_string(),
            image_host: None,
            video_width: "90%".to_string(),
            video_height: "430".to_string(),
        }
    }
}

/// Stylesheets and scripts linked from the main template
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub css: Vec<String>,
    pub javascript: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Descending file name; relies on `YYYYMMDD-slug.md` naming
    #[default]
    Filename,
    /// Descending parsed `date`, file name breaks ties
    Date,
}

/// Content index configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub sort_by: SortBy,
}
