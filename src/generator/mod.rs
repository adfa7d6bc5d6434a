//! Generator module - builds every HTML page from the content index

use std::path::Path;

use crate::content::record::stem;
use crate::content::{ContentIndex, ContentRecord, FrontMatter, MarkdownRenderer};
use crate::error::{fs, Result};
use crate::helpers;
use crate::templates::{self, Placeholder, Template, Values};
use crate::Site;

/// File name of the main template with site-wide chrome filled in
pub const BASE_TEMPLATE_FILE: &str = "custom_main.html";

/// Inserted after `<script>` on post pages to start highlight.js
const HIGHLIGHT_CALL: &str = "\n\t\thljs.highlightAll();\n";

/// Static site generator
pub struct Generator<'a> {
    site: &'a Site,
    base: Template,
    renderer: MarkdownRenderer,
}

impl<'a> Generator<'a> {
    /// Create a new generator; loads the main template
    pub fn new(site: &'a Site) -> Result<Self> {
        let main = Template::load(&site.templates_dir, templates::MAIN)?;
        Ok(Self {
            site,
            base: base_template(site, &main),
            renderer: MarkdownRenderer::new(&site.config),
        })
    }

    /// The shared page skeleton
    pub fn base(&self) -> &Template {
        &self.base
    }

    /// Write the page skeleton to the data directory
    pub fn save_base(&self) -> Result<()> {
        let path = self.site.data_dir.join(BASE_TEMPLATE_FILE);
        fs::write(&path, self.base.to_string())?;
        tracing::debug!("Wrote base template: {:?}", path);
        Ok(())
    }

    /// Generate the entire site
    pub fn generate(&self, index: &ContentIndex) -> Result<()> {
        self.generate_home(index)?;
        self.generate_posts_page(index)?;
        self.generate_post_pages(index)?;
        self.generate_static_pages()?;
        Ok(())
    }

    /// Landing page: latest articles and featured cards
    pub fn generate_home(&self, index: &ContentIndex) -> Result<()> {
        let config = &self.site.config;
        let home = self.load(templates::HOME)?;

        let values = Values::new()
            .with(
                Placeholder::LatestArticles,
                helpers::latest_articles(config, index, config.home.latest_count),
            )
            .with(
                Placeholder::FeaturedArticles,
                helpers::featured_articles(config, index),
            );

        let html = self.base.embed(Placeholder::Content, &home).render(&values);
        self.write(Path::new("index.html"), &html)?;
        tracing::info!("Generated home page");
        Ok(())
    }

    /// "All posts" page: tag cloud and yearly archive
    pub fn generate_posts_page(&self, index: &ContentIndex) -> Result<()> {
        let config = &self.site.config;
        let posts_list = self.load(templates::POSTS_LIST)?;

        let values = Values::new()
            .with(
                Placeholder::TopTags,
                helpers::top_tags(index, config.posts.top_tags),
            )
            .with(Placeholder::AllPosts, helpers::posts_by_year(config, index));

        let html = self
            .base
            .embed(Placeholder::Content, &posts_list)
            .render(&values);
        self.write(&Path::new("pages").join("posts.html"), &html)?;
        tracing::info!("Generated posts page");
        Ok(())
    }

    /// One page per index entry
    pub fn generate_post_pages(&self, index: &ContentIndex) -> Result<()> {
        let post = self.load(templates::POST)?;
        let page = self
            .base
            .inject_after("<script>", HIGHLIGHT_CALL)
            .embed(Placeholder::Content, &post);

        for (filename, meta) in index.iter() {
            self.generate_post(&page, filename, meta)?;
        }

        tracing::info!("Generated {} post pages", index.len());
        Ok(())
    }

    fn generate_post(&self, page: &Template, filename: &str, meta: &FrontMatter) -> Result<()> {
        // Metadata comes from the index, the body from the file itself
        let record = ContentRecord::load(&self.site.content_dir.join(filename))?;
        let body = self.renderer.render(&record.body);

        let values = Values::new()
            .with(
                Placeholder::PostTitle,
                helpers::display_title(&self.site.config, meta),
            )
            .with(Placeholder::PostDate, meta.date())
            .with(Placeholder::PostTags, meta.tags().join(", "))
            .with(Placeholder::PostReadtime, meta.read_time_label())
            .with(Placeholder::PostContent, body);

        let output = Path::new("posts").join(format!("{}.html", stem(filename)));
        self.write(&output, &page.render(&values))
    }

    /// Single-instance pages such as about and extras
    pub fn generate_static_pages(&self) -> Result<()> {
        for name in &self.site.config.static_pages {
            let content = self.load(name)?;
            let html = self
                .base
                .embed(Placeholder::Content, &content)
                .render(&Values::new());
            self.write(&Path::new("pages").join(format!("{}.html", name)), &html)?;
        }

        tracing::info!(
            "Generated {} static pages",
            self.site.config.static_pages.len()
        );
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Template> {
        Template::load(&self.site.templates_dir, name)
    }

    fn write(&self, relative: &Path, html: &str) -> Result<()> {
        let path = self.site.output_dir.join(relative);
        fs::write(&path, html)?;
        tracing::debug!("Generated: {:?}", path);
        Ok(())
    }
}

/// Fill the site-wide chrome of the main template.
///
/// `content` and any page-specific slots stay open.
pub fn base_template(site: &Site, main: &Template) -> Template {
    let config = &site.config;
    main.fill(
        &Values::new()
            .with(Placeholder::Footer, helpers::footer(config, site.year))
            .with(Placeholder::Author, config.main.author.as_str())
            .with(Placeholder::Year, site.year.to_string())
            .with(Placeholder::SiteTitle, config.main.title.as_str())
            .with(Placeholder::Css, helpers::stylesheets(config))
            .with(Placeholder::Javascript, helpers::scripts(config)),
    )
}
