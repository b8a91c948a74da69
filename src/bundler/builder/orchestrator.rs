//! Main release orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that runs the macOS
//! release steps strictly in order over a staged copy of the runtime.

use crate::{
    bundler::{
        Result, Settings,
        error::{Context, ErrorExt},
        platform::macos::{app, archive, dmg, release, runtime},
        utils::fs,
        workspace::WorkDirs,
    },
    metadata::{AppManifest, load_manifest},
};
use std::{fmt, path::PathBuf};

use super::checksum::calculate_sha256;

/// One step of the release sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStep {
    /// Copy the prebuilt runtime bundle into scratch.
    CopyRuntime,
    /// Remove the runtime's default app and icon.
    CleanupRuntime,
    /// Pack the build output into `app.asar`.
    PackageApp,
    /// Write branded Info.plist files and copy the icon.
    Finalize,
    /// Rename helpers and executables to the product name.
    RenameApp,
    /// Copy the branded bundle into the releases directory.
    CopyRelease,
    /// Build the disk image.
    PackDmg,
}

impl ReleaseStep {
    /// Every step, in execution order.
    pub const ALL: [ReleaseStep; 7] = [
        ReleaseStep::CopyRuntime,
        ReleaseStep::CleanupRuntime,
        ReleaseStep::PackageApp,
        ReleaseStep::Finalize,
        ReleaseStep::RenameApp,
        ReleaseStep::CopyRelease,
        ReleaseStep::PackDmg,
    ];

    /// Human-readable description used in progress output and errors.
    pub fn description(&self) -> &'static str {
        match self {
            ReleaseStep::CopyRuntime => "copying runtime",
            ReleaseStep::CleanupRuntime => "removing default runtime resources",
            ReleaseStep::PackageApp => "packing application archive",
            ReleaseStep::Finalize => "writing bundle metadata",
            ReleaseStep::RenameApp => "renaming executables",
            ReleaseStep::CopyRelease => "copying release bundle",
            ReleaseStep::PackDmg => "packaging DMG",
        }
    }
}

impl fmt::Display for ReleaseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Disk image produced by a release.
#[derive(Debug, Clone)]
pub struct DmgArtifact {
    /// `<releases>/<name>_<version>.dmg`
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256.
    pub checksum: String,
}

/// Outputs of a completed release.
#[derive(Debug, Clone)]
pub struct ReleaseArtifacts {
    /// Manifest the release was built from.
    pub manifest: AppManifest,
    /// `<releases>/<name>_<version>` bundle tree.
    pub release_dir: PathBuf,
    /// Disk image, absent when a best-effort DMG build failed.
    pub dmg: Option<DmgArtifact>,
}

/// Outputs accumulated while steps run.
#[derive(Debug, Default)]
struct StepOutputs {
    release_dir: Option<PathBuf>,
    dmg: Option<PathBuf>,
}

/// Main release orchestrator.
///
/// Loads the manifest, prepares the working directories, runs every
/// [`ReleaseStep`] one after another and stops at the first failure. The
/// scratch directory is removed afterwards whether or not the steps
/// succeeded, unless [`Settings::keep_temp`] is set.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_osx::bundler::{Bundler, SettingsBuilder};
///
/// # async fn example() -> kodegen_bundler_osx::bundler::Result<()> {
/// let settings = SettingsBuilder::new().project_dir(".").build()?;
/// let artifacts = Bundler::new(settings).release().await?;
/// println!("{}", artifacts.release_dir.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the full release.
    pub async fn release(&self) -> Result<ReleaseArtifacts> {
        self.release_with_progress(|_| {}).await
    }

    /// Runs the full release, calling `on_step` before each step starts.
    pub async fn release_with_progress<F>(&self, mut on_step: F) -> Result<ReleaseArtifacts>
    where
        F: FnMut(ReleaseStep),
    {
        let manifest = load_manifest(self.settings.manifest_path()).await?;
        log::info!(
            "Releasing {} {} ({})",
            manifest.product_name,
            manifest.version,
            manifest.identifier
        );

        let dirs = WorkDirs::prepare(&self.settings, &manifest).await?;

        let outcome = self.run_steps(&dirs, &manifest, &mut on_step).await;
        let cleanup = self.clean_clutter(&dirs).await;

        let outputs = match (outcome, cleanup) {
            (Ok(outputs), Ok(())) => outputs,
            (Ok(_), Err(e)) => return Err(e),
            (Err(e), Ok(())) => return Err(e),
            (Err(e), Err(cleanup_err)) => {
                log::error!("Cleanup after failed release also failed: {}", cleanup_err);
                return Err(e);
            }
        };

        let release_dir = outputs
            .release_dir
            .context("release step finished without a release directory")?;

        let dmg = match outputs.dmg {
            Some(path) => {
                let size = tokio::fs::metadata(&path)
                    .await
                    .fs_context("reading artifact metadata", &path)?
                    .len();
                let checksum = calculate_sha256(&path).await?;
                Some(DmgArtifact {
                    path,
                    size,
                    checksum,
                })
            }
            None => None,
        };

        Ok(ReleaseArtifacts {
            manifest,
            release_dir,
            dmg,
        })
    }

    async fn run_steps<F>(
        &self,
        dirs: &WorkDirs,
        manifest: &AppManifest,
        on_step: &mut F,
    ) -> Result<StepOutputs>
    where
        F: FnMut(ReleaseStep),
    {
        let mut outputs = StepOutputs::default();

        for step in ReleaseStep::ALL {
            on_step(step);
            log::debug!("Step: {}", step);
            self.run_step(step, dirs, manifest, &mut outputs)
                .await
                .context(step.description())?;
        }

        Ok(outputs)
    }

    async fn run_step(
        &self,
        step: ReleaseStep,
        dirs: &WorkDirs,
        manifest: &AppManifest,
        outputs: &mut StepOutputs,
    ) -> Result<()> {
        let settings = &self.settings;

        match step {
            ReleaseStep::CopyRuntime => runtime::copy_runtime(settings, dirs).await,
            ReleaseStep::CleanupRuntime => runtime::cleanup_runtime(dirs).await,
            ReleaseStep::PackageApp => archive::package_app(settings, dirs).await.map(|_| ()),
            ReleaseStep::Finalize => app::finalize(settings, dirs, manifest).await,
            ReleaseStep::RenameApp => app::rename_app(dirs, manifest).await,
            ReleaseStep::CopyRelease => {
                outputs.release_dir = Some(release::copy_to_releases(dirs, manifest).await?);
                Ok(())
            }
            ReleaseStep::PackDmg => {
                outputs.dmg = dmg::pack_to_dmg(settings, dirs, manifest).await?;
                Ok(())
            }
        }
    }

    /// Removes the scratch directory unless it should be kept.
    async fn clean_clutter(&self, dirs: &WorkDirs) -> Result<()> {
        if self.settings.keep_temp() {
            log::info!("Keeping scratch directory {}", dirs.tmp().display());
            return Ok(());
        }

        log::debug!("Removing scratch directory {}", dirs.tmp().display());
        fs::remove_dir_all(dirs.tmp()).await
    }
}
