//! macOS platform-specific settings.

use std::path::{Path, PathBuf};

/// Prebuilt runtime location inside a project, relative to the project root.
pub const DEFAULT_RUNTIME_PATH: &str = "node_modules/electron-prebuilt/dist/Electron.app";

/// macOS resources (plist templates, icons, appdmg config), relative to the project root.
pub const DEFAULT_RESOURCES_DIR: &str = "resources/osx";

/// macOS application bundle (.app) configuration.
///
/// Describes where the prebuilt runtime bundle lives and where the templates
/// used to brand it are kept.
///
/// # See Also
///
/// - [`DmgSettings`] - DMG disk image configuration
#[derive(Clone, Debug)]
pub struct MacOsSettings {
    /// Prebuilt runtime bundle copied as the starting point of the release.
    pub runtime_path: PathBuf,

    /// Directory holding `Info.plist`, `helper_apps/`, `icon.icns` and the
    /// DMG resources.
    pub resources_dir: PathBuf,
}

impl MacOsSettings {
    /// Root `Info.plist` template.
    pub fn info_plist_template(&self) -> PathBuf {
        self.resources_dir.join("Info.plist")
    }

    /// `Info.plist` template for the helper with the given suffix
    /// (`" EH"`, `" NP"` or `""`).
    pub fn helper_plist_template(&self, suffix: &str) -> PathBuf {
        self.resources_dir
            .join("helper_apps")
            .join(format!("Info{suffix}.plist"))
    }

    /// Application icon copied into the bundle unmodified.
    pub fn icon(&self) -> PathBuf {
        self.resources_dir.join("icon.icns")
    }
}

/// What to do when the disk image tool fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DmgFailureMode {
    /// A failed DMG build fails the release.
    #[default]
    Strict,
    /// A failed DMG build is logged and the release still completes,
    /// reporting no disk image.
    BestEffort,
}

/// macOS DMG disk image configuration.
///
/// # See Also
///
/// - [`MacOsSettings`] - macOS app bundle configuration
#[derive(Clone, Debug)]
pub struct DmgSettings {
    /// appdmg JSON template (`{{productName}}`, `{{appPath}}`, `{{dmgIcon}}`,
    /// `{{dmgBackground}}` placeholders).
    pub config_template: PathBuf,

    /// Volume icon referenced from the rendered config.
    pub icon: PathBuf,

    /// Window background referenced from the rendered config.
    pub background: PathBuf,

    /// Failure handling for the appdmg step.
    ///
    /// Default: [`DmgFailureMode::Strict`]
    pub failure_mode: DmgFailureMode,
}

impl DmgSettings {
    /// Default DMG layout inside a resources directory.
    pub fn in_resources(resources_dir: &Path, failure_mode: DmgFailureMode) -> Self {
        Self {
            config_template: resources_dir.join("appdmg.json"),
            icon: resources_dir.join("dmg-icon.icns"),
            background: resources_dir.join("dmg-background.png"),
            failure_mode,
        }
    }
}
