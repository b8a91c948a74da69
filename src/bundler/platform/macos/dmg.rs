//! macOS DMG disk image creation via appdmg.
//!
//! The appdmg JSON template in the resources directory describes the volume
//! (title, icon, background, window contents). It is rendered with the staged
//! bundle path and written to scratch, then handed to `appdmg`.

use crate::{
    bundler::{
        DmgFailureMode, Error, Result, Settings,
        builder::tool_detection::{APPDMG, resolve_tool},
        error::ErrorExt,
        template::{TemplateVars, render_checked},
        utils::{fs, process::run_tool},
        workspace::WorkDirs,
    },
    metadata::AppManifest,
};
use std::path::{Path, PathBuf};

/// Rendered appdmg config inside scratch.
pub const DMG_CONFIG_NAME: &str = "appdmg.json";

/// Bundle project as DMG disk image
///
/// # Process
/// 1. Render the appdmg config with `productName`, `appPath`, `dmgIcon`, `dmgBackground`
/// 2. Write it to `<tmp>/appdmg.json`
/// 3. Remove `<releases>/<name>_<version>.dmg` if present
/// 4. Run `appdmg <config> <dmg>`
///
/// # Returns
/// The DMG path, or `None` when the build failed under
/// [`DmgFailureMode::BestEffort`].
pub async fn pack_to_dmg(
    settings: &Settings,
    dirs: &WorkDirs,
    manifest: &AppManifest,
) -> Result<Option<PathBuf>> {
    let dmg_settings = settings.dmg();
    let dmg_path = dirs.releases().join(manifest.dmg_file_name());

    let config = write_dmg_config(settings, dirs, manifest).await?;

    fs::remove_path(&dmg_path).await?;

    log::info!("Packaging to DMG file...");

    match build_dmg(settings, dirs, &config, &dmg_path).await {
        Ok(()) => {
            log::info!("DMG file ready! {}", dmg_path.display());
            Ok(Some(dmg_path))
        }
        Err(e) if dmg_settings.failure_mode == DmgFailureMode::BestEffort => {
            log::error!("DMG creation failed, continuing without a disk image: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Renders the appdmg template into scratch and returns its path.
pub async fn write_dmg_config(
    settings: &Settings,
    dirs: &WorkDirs,
    manifest: &AppManifest,
) -> Result<PathBuf> {
    let dmg_settings = settings.dmg();
    let template_path = &dmg_settings.config_template;

    let template = tokio::fs::read_to_string(template_path)
        .await
        .fs_context("reading appdmg template", template_path)?;

    let vars = TemplateVars::new()
        .with("productName", &manifest.product_name)
        .with("appPath", path_str(dirs.ready_app())?)
        .with("dmgIcon", path_str(&dmg_settings.icon)?)
        .with("dmgBackground", path_str(&dmg_settings.background)?);

    let config = dirs.tmp().join(DMG_CONFIG_NAME);
    fs::write_file(&config, &render_checked(&template, &vars, template_path)).await?;

    Ok(config)
}

async fn build_dmg(settings: &Settings, dirs: &WorkDirs, config: &Path, dmg: &Path) -> Result<()> {
    let appdmg = resolve_tool(APPDMG, settings.appdmg_command(), dirs.project())?;

    run_tool(APPDMG, &appdmg, [config.as_os_str(), dmg.as_os_str()]).await?;

    if !dmg.is_file() {
        return Err(Error::GenericError(format!(
            "{} finished but {} was not created",
            APPDMG,
            dmg.display()
        )));
    }

    Ok(())
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        Error::GenericError(format!(
            "Invalid path (contains non-UTF8 characters): {}",
            path.display()
        ))
    })
}
