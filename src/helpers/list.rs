//! List helpers: article lists, featured cards, tag cloud and archive

use indexmap::IndexMap;

use super::html::display_title;
use super::url::post_url;
use crate::config::SiteConfig;
use crate::content::{ContentIndex, FrontMatter};

/// Gap between date and title on the home page
const HOME_GAP: &str = "&emsp;";
/// Gap between date and title on the posts page
const ARCHIVE_GAP: &str = "&emsp; ";

/// One `<li>` line linking to a post
fn article_item(config: &SiteConfig, gap: &str, filename: &str, meta: &FrontMatter) -> String {
    format!(
        r#"<li><span class="tag">{}</span> {}<a class="{}" href="{}">{}</a></li>"#,
        meta.date(),
        gap,
        config.markup.link_class,
        post_url(config, filename),
        display_title(config, meta)
    )
}

/// The `count` first entries of the index as list items
pub fn latest_articles(config: &SiteConfig, index: &ContentIndex, count: usize) -> String {
    index
        .iter()
        .take(count)
        .map(|(filename, meta)| article_item(config, HOME_GAP, filename, meta))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A card for every featured entry, in index order
pub fn featured_articles(config: &SiteConfig, index: &ContentIndex) -> String {
    index
        .iter()
        .filter(|(_, meta)| meta.is_featured())
        .map(|(filename, meta)| {
            format!(
                r#"<div class="cell">
  <div class="card">
    <header class="card-header">
      <p class="card-header-title">{}</p>
    </header>
    <div class="card-content">
      <div class="content">{}</div>
    </div>
    <footer class="card-footer">
      <a href="{}" class="card-footer-item {}">Read more</a>
    </footer>
  </div>
</div>"#,
                display_title(config, meta),
                meta.summary(),
                post_url(config, filename),
                config.markup.link_class
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tag frequencies, most common first.
///
/// Equal counts keep the order in which the tags were first seen while
/// walking the index. Duplicate tags inside one entry count each time.
pub fn tag_counts(index: &ContentIndex) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for (_, meta) in index.iter() {
        for tag in meta.tags() {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    // sort_by is stable, so first-seen order survives among ties
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

/// Tag cloud of the `limit` most common tags
pub fn top_tags(index: &ContentIndex, limit: usize) -> String {
    tag_counts(index)
        .into_iter()
        .take(limit)
        .map(|(tag, count)| format!(r#"<tag class="button is-danger">{} {}</tag>"#, tag, count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Archive key of a content file: its first four characters
pub fn archive_key(filename: &str) -> String {
    filename.chars().take(4).collect()
}

/// Every post, grouped by archive key.
///
/// Groups appear in the order their first post is met in the index and are
/// not re-sorted.
pub fn posts_by_year(config: &SiteConfig, index: &ContentIndex) -> String {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for (filename, meta) in index.iter() {
        groups
            .entry(archive_key(filename))
            .or_default()
            .push(article_item(config, ARCHIVE_GAP, filename, meta));
    }

    let mut html = Vec::new();
    for (year, items) in groups {
        html.push(format!(
            r#"<h3 class="has-text-left has-text-centered-mobile">{}</h3>
<div class="block has-text-left">
  <ul>"#,
            year
        ));
        html.extend(items);
        html.push("  </ul>\n</div>".to_string());
    }
    html.join("\n")
}
