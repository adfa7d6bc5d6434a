//! Content module - content files, the content index and markdown rendering

mod frontmatter;
pub mod index;
pub mod loader;
mod markdown;
pub mod record;

pub use frontmatter::{FrontMatter, DELIMITER};
pub use index::ContentIndex;
pub use markdown::MarkdownRenderer;
pub use record::ContentRecord;
