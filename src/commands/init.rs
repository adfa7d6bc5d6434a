//! Initialize a new site

use std::path::Path;

use crate::config::SiteConfig;
use crate::error::{fs, Result};
use crate::templates;

/// Initialize a new site in the given directory.
///
/// Existing files are left untouched.
pub fn init_site(target_dir: &Path, author: &str) -> Result<()> {
    let config = SiteConfig::new(author);

    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(&target_dir.join(&config.paths.content))?;
    let templates_dir = target_dir.join(&config.paths.templates);
    fs::create_dir_all(&templates_dir)?;
    for folder in ["css", "images", "javascript"] {
        fs::create_dir_all(&target_dir.join(&config.paths.assets).join(folder))?;
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    write_new(&target_dir.join("config.json"), &config_json)?;

    for (name, source) in templates::defaults() {
        write_new(&templates_dir.join(name), source)?;
    }

    // Create a sample post
    let today = chrono::Local::now().date_naive();
    let sample_post = format!(
        r#"-----
{{
  "title": "hello world",
  "date": "{}",
  "tags": ["meta"],
  "readTime": "1 min",
  "featured": true,
  "summary": "The first post of this site."
}}
-----
Welcome! This post lives in `content/` and was created by `postpress init`.

## Writing posts

Every post starts with a JSON block between two delimiter lines. Name files
`YYYYMMDD-slug.md` so the newest post sorts first.

```rust
fn main() {{
    println!("code blocks are highlighted in the browser");
}}
```
"#,
        today.format("%Y-%m-%d")
    );
    let post_name = format!("{}-hello-world.md", today.format("%Y%m%d"));
    write_new(
        &target_dir.join(&config.paths.content).join(post_name),
        &sample_post,
    )?;

    Ok(())
}

fn write_new(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        tracing::warn!("{:?} already exists, keeping it", path);
        return Ok(());
    }
    fs::write(path, contents)
}
