//! Configuration module

mod site;

pub use site::AssetsConfig;
pub use site::HomeConfig;
pub use site::IndexConfig;
pub use site::MainConfig;
pub use site::MarkupConfig;
pub use site::PathsConfig;
pub use site::PostsConfig;
pub use site::SiteConfig;
pub use site::SortBy;
