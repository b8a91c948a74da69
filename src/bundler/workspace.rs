//! Working directories for a release run.

use crate::{
    bundler::{Result, Settings, utils::fs},
    metadata::AppManifest,
};
use std::path::{Path, PathBuf};

/// Directory handles resolved once at the start of a release.
#[derive(Debug, Clone)]
pub struct WorkDirs {
    project: PathBuf,
    tmp: PathBuf,
    releases: PathBuf,
    ready_app: PathBuf,
}

impl WorkDirs {
    /// Empties (or creates) the scratch directory, ensures the releases
    /// directory exists and resolves the staged bundle path inside scratch.
    pub async fn prepare(settings: &Settings, manifest: &AppManifest) -> Result<Self> {
        let tmp = settings.tmp_dir().to_path_buf();
        let releases = settings.releases_dir().to_path_buf();

        fs::create_dir_all(&tmp, true).await?;
        fs::create_dir_all(&releases, false).await?;

        let ready_app = tmp.join(manifest.app_bundle_name());
        log::debug!(
            "Scratch {} (staging {}), releases {}",
            tmp.display(),
            ready_app.display(),
            releases.display()
        );

        Ok(Self {
            project: settings.project_dir().to_path_buf(),
            tmp,
            releases,
            ready_app,
        })
    }

    /// Project root.
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// Scratch directory.
    pub fn tmp(&self) -> &Path {
        &self.tmp
    }

    /// Releases directory.
    pub fn releases(&self) -> &Path {
        &self.releases
    }

    /// Staged bundle root (`<tmp>/<productName>.app`).
    pub fn ready_app(&self) -> &Path {
        &self.ready_app
    }

    /// Path inside the staged bundle.
    pub fn in_app(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.ready_app.join(relative)
    }
}
