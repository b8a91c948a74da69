//! Core Settings struct and implementations.

use super::{DmgSettings, MacOsSettings};
use std::path::{Path, PathBuf};

/// Main settings for release operations.
///
/// Central configuration for the bundler, constructed via [`SettingsBuilder`].
/// All paths are resolved against the project directory at build time.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_osx::bundler::SettingsBuilder;
///
/// # fn example() -> kodegen_bundler_osx::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_dir("./my-electron-app")
///     .keep_temp(true)
///     .build()?;
/// assert!(settings.tmp_dir().ends_with("tmp"));
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
/// - [`MacOsSettings`] - Runtime and template locations
/// - [`DmgSettings`] - Disk image configuration
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Project root every other path is relative to.
    project_dir: PathBuf,

    /// Product manifest (`app/package.json`).
    manifest_path: PathBuf,

    /// Application build output packed into `app.asar`.
    build_dir: PathBuf,

    /// Scratch area, emptied at start and removed at the end.
    tmp_dir: PathBuf,

    /// Release output area, persisted across runs.
    releases_dir: PathBuf,

    /// Runtime bundle and template locations.
    macos: MacOsSettings,

    /// Disk image configuration.
    dmg: DmgSettings,

    /// Explicit `asar` executable.
    asar_command: Option<PathBuf>,

    /// Explicit `appdmg` executable.
    appdmg_command: Option<PathBuf>,

    /// Leave the scratch area in place after the run.
    keep_temp: bool,
}

impl Settings {
    /// Returns the project root.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Returns the product manifest path.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Returns the application build output directory.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Returns the scratch directory.
    pub fn tmp_dir(&self) -> &Path {
        &self.tmp_dir
    }

    /// Returns the releases directory.
    pub fn releases_dir(&self) -> &Path {
        &self.releases_dir
    }

    /// Returns the macOS bundle settings.
    pub fn macos(&self) -> &MacOsSettings {
        &self.macos
    }

    /// Returns the DMG settings.
    pub fn dmg(&self) -> &DmgSettings {
        &self.dmg
    }

    /// Returns the explicit `asar` executable, if one was configured.
    pub fn asar_command(&self) -> Option<&Path> {
        self.asar_command.as_deref()
    }

    /// Returns the explicit `appdmg` executable, if one was configured.
    pub fn appdmg_command(&self) -> Option<&Path> {
        self.appdmg_command.as_deref()
    }

    /// Whether the scratch area survives the run.
    pub fn keep_temp(&self) -> bool {
        self.keep_temp
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        project_dir: PathBuf,
        manifest_path: PathBuf,
        build_dir: PathBuf,
        tmp_dir: PathBuf,
        releases_dir: PathBuf,
        macos: MacOsSettings,
        dmg: DmgSettings,
        asar_command: Option<PathBuf>,
        appdmg_command: Option<PathBuf>,
        keep_temp: bool,
    ) -> Self {
        Self {
            project_dir,
            manifest_path,
            build_dir,
            tmp_dir,
            releases_dir,
            macos,
            dmg,
            asar_command,
            appdmg_command,
            keep_temp,
        }
    }
}
