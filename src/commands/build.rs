//! Build the static site

use std::path::Path;
use walkdir::WalkDir;

use crate::content::loader::ContentLoader;
use crate::content::ContentIndex;
use crate::error::{fs, Error, Result};
use crate::generator::Generator;
use crate::{Site, OUTPUT_FOLDERS};

/// Asset folders copied verbatim into the output
const ASSET_FOLDERS: [&str; 3] = ["css", "images", "javascript"];

/// Run the full pipeline: setup, index, pages
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    setup_site(site)?;

    // Index
    let records = ContentLoader::new(site).load_records()?;
    tracing::info!("Loaded {} content files", records.len());

    let index = ContentIndex::build(&records, site.config.index.sort_by)?;
    let index_path = site.index_path();
    index.save(&index_path)?;

    // Pages are built from the persisted index
    let index = ContentIndex::load(&index_path)?;
    let generator = Generator::new(site)?;
    generator.save_base()?;
    generator.generate(&index)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Recreate the output tree from scratch and copy static assets
pub fn setup_site(site: &Site) -> Result<()> {
    check_output_dir(site)?;

    if site.output_dir.exists() {
        fs::remove_dir_all(&site.output_dir)?;
        tracing::debug!("Cleared {:?}", site.output_dir);
    }

    for folder in OUTPUT_FOLDERS {
        fs::create_dir_all(&site.output_dir.join(folder))?;
    }
    fs::create_dir_all(&site.data_dir)?;

    for folder in ASSET_FOLDERS {
        copy_assets(&site.assets_dir.join(folder), &site.output_dir.join(folder))?;
    }

    Ok(())
}

/// The output tree is deleted on every build; refuse to point it at sources
fn check_output_dir(site: &Site) -> Result<()> {
    let sources = [
        &site.base_dir,
        &site.content_dir,
        &site.templates_dir,
        &site.assets_dir,
        &site.data_dir,
    ];
    if sources.iter().any(|dir| dir.starts_with(&site.output_dir)) {
        return Err(Error::config(
            &site.output_dir,
            "output directory must not contain the site sources",
        ));
    }
    Ok(())
}

fn copy_assets(from: &Path, to: &Path) -> Result<()> {
    if !from.is_dir() {
        tracing::debug!("No assets in {:?}, skipping", from);
        return Ok(());
    }

    let mut copied = 0;
    for entry in WalkDir::new(from).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::io(from, e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(from).unwrap_or(entry.path());
        let dest = to.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)?;
        copied += 1;
    }

    tracing::debug!("Copied {} files from {:?}", copied, from);
    Ok(())
}
