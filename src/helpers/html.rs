//! HTML helper functions

use super::url::url_for;
use crate::config::SiteConfig;
use crate::content::FrontMatter;

/// Generate a CSS link tag for a file under `css/`
///
/// # Examples
/// ```ignore
/// css(&config, "style.css") // -> <link rel="stylesheet" href="/css/style.css">
/// ```
pub fn css(config: &SiteConfig, file: &str) -> String {
    if file.starts_with("http://") || file.starts_with("https://") {
        return format!(r#"<link rel="stylesheet" href="{}">"#, file);
    }
    format!(
        r#"<link rel="stylesheet" href="{}">"#,
        url_for(config, &format!("css/{}", file))
    )
}

/// Generate a script tag for a file under `javascript/`
///
/// # Examples
/// ```ignore
/// js(&config, "app.js") // -> <script src="/javascript/app.js"></script>
/// ```
pub fn js(config: &SiteConfig, file: &str) -> String {
    if file.starts_with("http://") || file.starts_with("https://") {
        return format!(r#"<script src="{}"></script>"#, file);
    }
    format!(
        r#"<script src="{}"></script>"#,
        url_for(config, &format!("javascript/{}", file))
    )
}

/// Link tags for every configured stylesheet
pub fn stylesheets(config: &SiteConfig) -> String {
    config
        .assets
        .css
        .iter()
        .map(|f| css(config, f))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Script tags for every configured script
pub fn scripts(config: &SiteConfig) -> String {
    config
        .assets
        .javascript
        .iter()
        .map(|f| js(config, f))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Site footer
pub fn footer(config: &SiteConfig, year: i32) -> String {
    format!("<p>&copy; {} {}</p>", year, config.main.author)
}

/// Title-case a string the way Python's `str.title()` does.
///
/// A cased letter is upper-cased when it follows an uncased character and
/// lower-cased otherwise, so `"HTML"` becomes `"Html"` and `"(small)"`
/// becomes `"(Small)"`.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_cased = false;

    for c in s.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && !prev_cased {
            result.extend(c.to_uppercase());
        } else if cased {
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
        prev_cased = cased;
    }

    result
}

/// Post title as shown on pages, honoring `titlecase`
pub fn display_title(config: &SiteConfig, meta: &FrontMatter) -> String {
    if config.titlecase {
        title_case(meta.title())
    } else {
        meta.title().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::new("Ada");
        config.main.url = "https://example.com".to_string();
        config
    }

    #[test]
    fn test_css() {
        let config = test_config();
        assert_eq!(
            css(&config, "style.css"),
            r#"<link rel="stylesheet" href="https://example.com/css/style.css">"#
        );
        assert!(css(&config, "https://cdn.x/a.css").contains(r#"href="https://cdn.x/a.css""#));
    }

    #[test]
    fn test_js() {
        let config = test_config();
        assert_eq!(
            js(&config, "app.js"),
            r#"<script src="https://example.com/javascript/app.js"></script>"#
        );
    }

    #[test]
    fn test_stylesheets_joined() {
        let mut config = test_config();
        config.assets.css = vec!["a.css".to_string(), "b.css".to_string()];
        assert_eq!(stylesheets(&config).lines().count(), 2);
        assert_eq!(scripts(&config), "");
    }

    #[test]
    fn test_footer() {
        assert_eq!(footer(&test_config(), 2024), "<p>&copy; 2024 Ada</p>");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello rust world"), "Hello Rust World");
        assert_eq!(title_case("using HTML in 2024"), "Using Html In 2024");
        assert_eq!(title_case("it's a (small) test"), "It'S A (Small) Test");
        assert_eq!(title_case("2nd try-again"), "2Nd Try-Again");
    }
}
