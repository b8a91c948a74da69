//! Builder for constructing Settings.

use super::{
    DmgFailureMode, DmgSettings, MacOsSettings, Settings,
    macos::{DEFAULT_RESOURCES_DIR, DEFAULT_RUNTIME_PATH},
};
use std::path::{Path, PathBuf};

const DEFAULT_MANIFEST_PATH: &str = "app/package.json";
const DEFAULT_BUILD_DIR: &str = "build";
const DEFAULT_TMP_DIR: &str = "tmp";
const DEFAULT_RELEASES_DIR: &str = "releases";

/// Builder for constructing [`Settings`].
///
/// Every path except `project_dir` has a project-relative default matching the
/// conventional Electron project layout. `project_dir` is made absolute
/// against the current directory. Relative overrides resolve against it;
/// absolute overrides are used as given.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_osx::bundler::{DmgFailureMode, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_osx::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_dir("/work/myapp")
///     .runtime_path("vendor/Electron.app")
///     .dmg_failure_mode(DmgFailureMode::BestEffort)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_dir: Option<PathBuf>,
    manifest_path: Option<PathBuf>,
    runtime_path: Option<PathBuf>,
    build_dir: Option<PathBuf>,
    resources_dir: Option<PathBuf>,
    tmp_dir: Option<PathBuf>,
    releases_dir: Option<PathBuf>,
    asar_command: Option<PathBuf>,
    appdmg_command: Option<PathBuf>,
    dmg_failure_mode: DmgFailureMode,
    keep_temp: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the product manifest.
    ///
    /// Default: `app/package.json`
    pub fn manifest_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.manifest_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the prebuilt runtime bundle.
    ///
    /// Default: `node_modules/electron-prebuilt/dist/Electron.app`
    pub fn runtime_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.runtime_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the application build output directory.
    ///
    /// Default: `build`
    pub fn build_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the macOS resources directory.
    ///
    /// Default: `resources/osx`
    pub fn resources_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.resources_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the scratch directory.
    ///
    /// Default: `tmp`
    pub fn tmp_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.tmp_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the releases directory.
    ///
    /// Default: `releases`
    pub fn releases_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.releases_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Uses this `asar` executable instead of searching for one.
    pub fn asar_command(mut self, path: Option<PathBuf>) -> Self {
        self.asar_command = path;
        self
    }

    /// Uses this `appdmg` executable instead of searching for one.
    pub fn appdmg_command(mut self, path: Option<PathBuf>) -> Self {
        self.appdmg_command = path;
        self
    }

    /// Sets failure handling for the DMG step.
    ///
    /// Default: [`DmgFailureMode::Strict`]
    pub fn dmg_failure_mode(mut self, mode: DmgFailureMode) -> Self {
        self.dmg_failure_mode = mode;
        self
    }

    /// Keeps the scratch directory after the run.
    ///
    /// Default: false
    pub fn keep_temp(mut self, keep: bool) -> Self {
        self.keep_temp = keep;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_dir` is missing or the current directory
    /// needed to make it absolute cannot be read.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::{Context, ErrorExt};
        use path_absolutize::Absolutize;

        let project_dir = self.project_dir.context("project_dir is required")?;
        // appdmg resolves config paths against the config file, not the cwd
        let project_dir = project_dir
            .absolutize()
            .fs_context("resolving project directory", &project_dir)?
            .into_owned();
        let resolve = |value: Option<PathBuf>, default: &str| {
            project_dir.join(value.unwrap_or_else(|| PathBuf::from(default)))
        };

        let resources_dir = resolve(self.resources_dir, DEFAULT_RESOURCES_DIR);
        let macos = MacOsSettings {
            runtime_path: resolve(self.runtime_path, DEFAULT_RUNTIME_PATH),
            resources_dir: resources_dir.clone(),
        };
        let dmg = DmgSettings::in_resources(&resources_dir, self.dmg_failure_mode);

        Ok(Settings::new(
            project_dir.clone(),
            resolve(self.manifest_path, DEFAULT_MANIFEST_PATH),
            resolve(self.build_dir, DEFAULT_BUILD_DIR),
            resolve(self.tmp_dir, DEFAULT_TMP_DIR),
            resolve(self.releases_dir, DEFAULT_RELEASES_DIR),
            macos,
            dmg,
            self.asar_command,
            self.appdmg_command,
            self.keep_temp,
        ))
    }
}
