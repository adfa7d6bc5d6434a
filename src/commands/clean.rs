//! Clean the output and data directories

use crate::error::{fs, Result};
use crate::Site;

/// Delete the generated site and the build data
pub fn run(site: &Site) -> Result<()> {
    for dir in [&site.output_dir, &site.data_dir] {
        if dir.exists() {
            fs::remove_dir_all(dir)?;
            tracing::info!("Deleted: {:?}", dir);
        }
    }

    Ok(())
}
