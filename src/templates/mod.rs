//! HTML templates with `{{placeholder_x}}` slots
//!
//! A template is parsed once into literal text and slots. Values are spliced
//! in as literal text and never re-scanned, so generated HTML that happens to
//! contain a token is written out verbatim instead of being substituted
//! again.
//!
//! The default templates written by `postpress init` are embedded here.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

const TOKEN_OPEN: &str = "{{placeholder_";
const TOKEN_CLOSE: &str = "}}";

/// Template names, resolved to `template_<name>.html`
pub const MAIN: &str = "main";
pub const HOME: &str = "home";
pub const POSTS_LIST: &str = "page_posts";
pub const POST: &str = "individual_post";

/// Every placeholder a template may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Footer,
    Author,
    Year,
    SiteTitle,
    Css,
    Javascript,
    Content,
    LatestArticles,
    FeaturedArticles,
    TopTags,
    AllPosts,
    PostTitle,
    PostDate,
    PostTags,
    PostReadtime,
    PostContent,
}

impl Placeholder {
    pub const ALL: [Placeholder; 16] = [
        Placeholder::Footer,
        Placeholder::Author,
        Placeholder::Year,
        Placeholder::SiteTitle,
        Placeholder::Css,
        Placeholder::Javascript,
        Placeholder::Content,
        Placeholder::LatestArticles,
        Placeholder::FeaturedArticles,
        Placeholder::TopTags,
        Placeholder::AllPosts,
        Placeholder::PostTitle,
        Placeholder::PostDate,
        Placeholder::PostTags,
        Placeholder::PostReadtime,
        Placeholder::PostContent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Footer => "footer",
            Placeholder::Author => "author",
            Placeholder::Year => "year",
            Placeholder::SiteTitle => "site_title",
            Placeholder::Css => "css",
            Placeholder::Javascript => "javascript",
            Placeholder::Content => "content",
            Placeholder::LatestArticles => "latest_articles",
            Placeholder::FeaturedArticles => "featured_articles",
            Placeholder::TopTags => "top_tags",
            Placeholder::AllPosts => "all_posts",
            Placeholder::PostTitle => "post_title",
            Placeholder::PostDate => "post_date",
            Placeholder::PostTags => "post_tags",
            Placeholder::PostReadtime => "post_readtime",
            Placeholder::PostContent => "post_content",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The literal token, e.g. `{{placeholder_content}}`
    pub fn token(self) -> String {
        format!("{}{}{}", TOKEN_OPEN, self.name(), TOKEN_CLOSE)
    }
}

/// Values to substitute, keyed by placeholder
#[derive(Debug, Clone, Default)]
pub struct Values {
    map: HashMap<Placeholder, String>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.set(placeholder, value);
        self
    }

    pub fn set(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        self.map.insert(placeholder, value.into());
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.map.get(&placeholder).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Placeholder),
}

/// A parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source. Tokens naming an unknown placeholder stay
    /// literal text.
    pub fn parse(source: &str) -> Self {
        let mut template = Template {
            segments: Vec::new(),
        };
        let mut rest = source;

        while let Some(start) = rest.find(TOKEN_OPEN) {
            let after = &rest[start + TOKEN_OPEN.len()..];
            let slot = after.find(TOKEN_CLOSE).and_then(|end| {
                Placeholder::from_name(&after[..end]).map(|p| (p, end + TOKEN_CLOSE.len()))
            });

            match slot {
                Some((placeholder, consumed)) => {
                    template.push_literal(&rest[..start]);
                    template.segments.push(Segment::Slot(placeholder));
                    rest = &after[consumed..];
                }
                None => {
                    template.push_literal(&rest[..start + TOKEN_OPEN.len()]);
                    rest = after;
                }
            }
        }
        template.push_literal(rest);
        template
    }

    /// Load `template_<name>.html` from a templates directory
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(format!("template_{}.html", name));
        match std::fs::read_to_string(&path) {
            Ok(source) => Ok(Self::parse(&source)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::MissingTemplate(path))
            }
            Err(e) => Err(Error::io(&path, e)),
        }
    }

    fn push_literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(Segment::Literal(prev)) => prev.push_str(text),
            _ => self.segments.push(Segment::Literal(text.to_string())),
        }
    }

    /// Placeholders still open in this template, in order of appearance
    pub fn slots(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Slot(p) => Some(*p),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute the given values, keeping every other slot open
    pub fn fill(&self, values: &Values) -> Template {
        let mut out = Template {
            segments: Vec::with_capacity(self.segments.len()),
        };
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_literal(text),
                Segment::Slot(p) => match values.get(*p) {
                    Some(value) => out.push_literal(value),
                    None => out.segments.push(Segment::Slot(*p)),
                },
            }
        }
        out
    }

    /// Splice another template into every occurrence of `slot`.
    ///
    /// The inner template's own slots stay open and can be filled later.
    pub fn embed(&self, slot: Placeholder, inner: &Template) -> Template {
        let mut out = Template {
            segments: Vec::with_capacity(self.segments.len() + inner.segments.len()),
        };
        for segment in &self.segments {
            match segment {
                Segment::Slot(p) if *p == slot => {
                    for inner_segment in &inner.segments {
                        match inner_segment {
                            Segment::Literal(text) => out.push_literal(text),
                            Segment::Slot(q) => out.segments.push(Segment::Slot(*q)),
                        }
                    }
                }
                Segment::Literal(text) => out.push_literal(text),
                Segment::Slot(p) => out.segments.push(Segment::Slot(*p)),
            }
        }
        out
    }

    /// Insert `text` right after every occurrence of `marker` in the
    /// template's own markup
    pub fn inject_after(&self, marker: &str, text: &str) -> Template {
        let replacement = format!("{}{}", marker, text);
        Template {
            segments: self
                .segments
                .iter()
                .map(|segment| match segment {
                    Segment::Literal(s) => Segment::Literal(s.replace(marker, &replacement)),
                    Segment::Slot(p) => Segment::Slot(*p),
                })
                .collect(),
        }
    }

    /// Render to a string. Slots without a value are written as their token.
    pub fn render(&self, values: &Values) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(p) => match values.get(*p) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&p.token()),
                },
            }
        }
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Values::new()))
    }
}

/// Default templates written by `postpress init`, as (file name, source)
pub fn defaults() -> Vec<(&'static str, &'static str)> {
    vec![
        ("template_main.html", include_str!("default/template_main.html")),
        ("template_home.html", include_str!("default/template_home.html")),
        ("template_about.html", include_str!("default/template_about.html")),
        ("template_extras.html", include_str!("default/template_extras.html")),
        (
            "template_page_posts.html",
            include_str!("default/template_page_posts.html"),
        ),
        (
            "template_individual_post.html",
            include_str!("default/template_individual_post.html"),
        ),
    ]
}
