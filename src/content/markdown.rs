//! Markdown rendering and HTML post-processing
//!
//! Code blocks are left as `<pre><code class="language-x">` for the
//! client-side highlighter; nothing is highlighted here.

use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use regex::{Captures, Regex};

use crate::config::SiteConfig;

lazy_static! {
    static ref IMG_SRC: Regex = Regex::new(r#"<img src="([^"]*)""#).unwrap();
    static ref YOUTUBE: Regex = Regex::new(r"<yt>\s*([^<]*?)\s*</yt>").unwrap();
}

const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/";

/// Markdown renderer with the site's link, image and video rewrites
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    link_class: String,
    image_class: String,
    image_host: String,
    video_width: String,
    video_height: String,
}

impl MarkdownRenderer {
    /// Create a renderer from the site configuration
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            link_class: config.markup.link_class.clone(),
            image_class: config.markup.image_class.clone(),
            image_host: config.image_host().trim_end_matches('/').to_string(),
            video_width: config.markup.video_width.clone(),
            video_height: config.markup.video_height.clone(),
        }
    }

    /// Render markdown to HTML and apply the rewrites
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;
        let parser = Parser::new_ext(markdown, options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        self.post_process(&html_output)
    }

    /// Style links, absolutize images and expand `<yt>` embeds
    pub fn post_process(&self, html: &str) -> String {
        let html = html.replace(
            "<a href=",
            &format!(r#"<a class="{}" href="#, self.link_class),
        );

        let html = IMG_SRC.replace_all(&html, |caps: &Captures| {
            format!(
                r#"<img class="{}" src="{}""#,
                self.image_class,
                self.absolute_image_url(&caps[1])
            )
        });

        YOUTUBE
            .replace_all(&html, |caps: &Captures| {
                format!(
                    r#"<iframe width="{}" height="{}" src="{}{}" frameborder="0" allowfullscreen></iframe>"#,
                    self.video_width, self.video_height, YOUTUBE_EMBED, &caps[1]
                )
            })
            .into_owned()
    }

    fn absolute_image_url(&self, src: &str) -> String {
        if src.starts_with("http://") || src.starts_with("https://") || src.starts_with("//") {
            src.to_string()
        } else {
            format!("{}/{}", self.image_host, src.trim_start_matches('/'))
        }
    }
}
