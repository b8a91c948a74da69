//! Publishing the branded bundle into the releases directory.

use crate::{
    bundler::{Result, utils::fs, workspace::WorkDirs},
    metadata::AppManifest,
};
use std::path::PathBuf;

/// Copies the staged bundle to `<releases>/<name>_<version>`, replacing any
/// previous output of the same name.
pub async fn copy_to_releases(dirs: &WorkDirs, manifest: &AppManifest) -> Result<PathBuf> {
    let destination = dirs.releases().join(manifest.release_name());

    fs::remove_path(&destination).await?;

    log::info!("Copying release to {}", destination.display());
    fs::copy_dir(dirs.ready_app(), &destination).await?;

    Ok(destination)
}
