//! End-to-end builds of a scaffolded site

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use postpress::commands::init::init_site;
use postpress::content::ContentIndex;
use postpress::{Error, Site};

fn post(title: &str, date: &str, tags: &[&str], featured: Option<bool>) -> String {
    let mut meta = serde_json::json!({
        "title": title,
        "date": date,
        "tags": tags,
        "readTime": "3 min",
        "summary": format!("summary of {}", title),
    });
    if let Some(f) = featured {
        meta["featured"] = serde_json::Value::Bool(f);
    }
    format!(
        "-----\n{}\n-----\n# {}\n\nSee [the docs](https://docs.rs).\n\n![pic](/images/pic.png)\n",
        serde_json::to_string_pretty(&meta).unwrap(),
        title
    )
}

/// A scaffolded site whose sample post is replaced by `posts`
fn site_with_posts(posts: &[(&str, String)]) -> (tempfile::TempDir, Site) {
    let dir = tempfile::tempdir().unwrap();
    init_site(dir.path(), "Ada").unwrap();

    let content = dir.path().join("content");
    for entry in fs::read_dir(&content).unwrap() {
        fs::remove_file(entry.unwrap().path()).unwrap();
    }
    for (name, text) in posts {
        fs::write(content.join(name), text).unwrap();
    }

    let site = Site::new(dir.path()).unwrap();
    (dir, site)
}

fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            (
                e.path().strip_prefix(root).unwrap().to_path_buf(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect()
}

fn read(site: &Site, relative: &str) -> String {
    fs::read_to_string(site.output_dir.join(relative)).unwrap()
}

#[test]
fn test_full_build_writes_every_page() {
    let (_dir, site) = site_with_posts(&[
        ("20240101-a.md", post("first post", "2024-01-01", &["go", "rust"], Some(true))),
        ("20240301-b.md", post("second post", "2024-03-01", &["go"], Some(false))),
        ("20231201-c.md", post("older post", "2023-12-01", &["rust", "rust"], None)),
        ("notes.txt", "not content".to_string()),
    ]);

    site.build().unwrap();

    for page in [
        "index.html",
        "pages/posts.html",
        "pages/about.html",
        "pages/extras.html",
        "posts/20240101-a.html",
        "posts/20240301-b.html",
        "posts/20231201-c.html",
    ] {
        assert!(site.output_dir.join(page).is_file(), "missing {}", page);
    }
    assert!(!site.output_dir.join("posts/notes.html").exists());
    assert!(site.data_dir.join("custom_main.html").is_file());

    // One index entry per content file, newest file name first
    let index = ContentIndex::load(&site.index_path()).unwrap();
    let names: Vec<_> = index.filenames().collect();
    assert_eq!(names, vec!["20240301-b.md", "20240101-a.md", "20231201-c.md"]);

    // Post page
    let page = read(&site, "posts/20240101-a.html");
    assert!(page.contains("First Post"));
    assert!(page.contains("go, rust"));
    assert!(page.contains("3 min"));
    assert!(page.contains(r#"<a class="has-text-danger" href="https://docs.rs">"#));
    assert!(page.contains(r#"<img class="images-centre" src="/images/pic.png""#));
    assert!(page.contains("hljs.highlightAll();"));
    assert!(page.contains("<p>&copy; "));
    assert!(!page.contains("{{placeholder_"));

    // Posts page: tag cloud and yearly groups
    let posts = read(&site, "pages/posts.html");
    let rust = posts.find(">rust 3</tag>").unwrap();
    let go = posts.find(">go 2</tag>").unwrap();
    assert!(rust < go);
    assert!(posts.find(">2024</h3>").unwrap() < posts.find(">2023</h3>").unwrap());
}

#[test]
fn test_home_lists_featured_posts_only() {
    let (_dir, site) = site_with_posts(&[
        ("20240101-yes.md", post("picked", "2024-01-01", &[], Some(true))),
        ("20240201-no.md", post("skipped", "2024-02-01", &[], Some(false))),
        ("20240301-absent.md", post("unmarked", "2024-03-01", &[], None)),
    ]);
    site.build().unwrap();

    let home = read(&site, "index.html");
    assert_eq!(home.matches("Read more").count(), 1);
    assert!(home.contains("summary of picked"));
    assert!(!home.contains("summary of skipped"));
    assert!(!home.contains("summary of unmarked"));

    // All three are recent enough for the latest list
    assert_eq!(home.matches(r#"<span class="tag">"#).count(), 3);
}

#[test]
fn test_non_boolean_featured_still_builds() {
    let odd = "-----\n{\"date\":\"2024-02-01\",\"title\":\"odd\",\"tags\":[],\"featured\":\"yes\",\"summary\":42}\n-----\nbody\n";
    let (_dir, site) = site_with_posts(&[
        ("20240101-a.md", post("kept", "2024-01-01", &[], Some(true))),
        ("20240201-odd.md", odd.to_string()),
    ]);
    site.build().unwrap();

    let home = read(&site, "index.html");
    assert_eq!(home.matches("Read more").count(), 1);
    assert!(!home.contains("summary of odd"));
    assert!(site.output_dir.join("posts/20240201-odd.html").is_file());

    // The index keeps the block as written
    let index = fs::read_to_string(site.index_path()).unwrap();
    assert!(index.contains(r#""20240201-odd.md":{"date":"2024-02-01","title":"odd","tags":[],"featured":"yes","summary":42}"#));
}

#[test]
fn test_title_with_token_is_not_substituted() {
    let (_dir, mut site) = site_with_posts(&[(
        "20240101-tricky.md",
        post("about {{placeholder_content}}", "2024-01-01", &[], Some(true)),
    )]);
    site.config.titlecase = false;
    site.build().unwrap();

    let page = read(&site, "posts/20240101-tricky.html");
    assert!(page.contains("about {{placeholder_content}}"));
    let home = read(&site, "index.html");
    assert!(home.contains("about {{placeholder_content}}"));
}

#[test]
fn test_builds_are_deterministic() {
    let (_dir, site) = site_with_posts(&[
        ("20240101-a.md", post("a", "2024-01-01", &["x", "y"], Some(true))),
        ("20240301-b.md", post("b", "2024-03-01", &["y"], None)),
    ]);
    fs::write(site.assets_dir.join("css").join("site.css"), "body{}").unwrap();

    site.build().unwrap();
    let first = snapshot(&site.output_dir);
    let first_index = fs::read(site.index_path()).unwrap();

    site.build().unwrap();
    assert_eq!(first, snapshot(&site.output_dir));
    assert_eq!(first_index, fs::read(site.index_path()).unwrap());
    assert!(first.contains_key(Path::new("css/site.css")));
}

#[test]
fn test_stale_output_is_removed() {
    let (_dir, site) = site_with_posts(&[("20240101-a.md", post("a", "2024-01-01", &[], None))]);
    site.build().unwrap();

    fs::remove_file(site.content_dir.join("20240101-a.md")).unwrap();
    site.build().unwrap();
    assert!(!site.output_dir.join("posts/20240101-a.html").exists());
    assert!(ContentIndex::load(&site.index_path()).unwrap().is_empty());
}

#[test]
fn test_bad_front_matter_aborts_build() {
    let (_dir, site) = site_with_posts(&[(
        "20240101-broken.md",
        "-----\n{\"title\": \"x\"}\nno closing delimiter".to_string(),
    )]);
    assert!(matches!(site.build(), Err(Error::Delimiter { found: 1, .. })));
}

#[test]
fn test_missing_template_aborts_build() {
    let (_dir, site) = site_with_posts(&[("20240101-a.md", post("a", "2024-01-01", &[], None))]);
    fs::remove_file(site.templates_dir.join("template_extras.html")).unwrap();
    assert!(matches!(site.build(), Err(Error::MissingTemplate(_))));
}

#[test]
fn test_missing_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(Site::new(dir.path()), Err(Error::Io { .. })));
}
