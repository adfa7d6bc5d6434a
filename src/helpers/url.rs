//! URL helper functions

use crate::config::SiteConfig;
use crate::content::record::stem;

/// Join a site-relative path onto the configured base URL
///
/// # Examples
/// ```ignore
/// url_for(&config, "posts/intro.html") // -> https://example.com/posts/intro.html
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    format!(
        "{}/{}",
        config.main.url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// URL of the page generated for a content file
pub fn post_url(config: &SiteConfig, filename: &str) -> String {
    url_for(config, &format!("posts/{}.html", stem(filename)))
}
