//! Packing the application build into `app.asar`.

use crate::bundler::{
    Error, Result, Settings,
    builder::tool_detection::{ASAR, resolve_tool},
    utils::process::run_tool,
    workspace::WorkDirs,
};
use std::path::PathBuf;

/// Archive location inside the staged bundle.
pub const APP_ARCHIVE: &str = "Contents/Resources/app.asar";

/// Packs the build output directory into the staged bundle's `app.asar`.
///
/// Runs `asar pack <build> <archive>`. Any archiver failure, including the
/// archive not appearing afterwards, fails the step.
pub async fn package_app(settings: &Settings, dirs: &WorkDirs) -> Result<PathBuf> {
    let build_dir = settings.build_dir();
    if !build_dir.is_dir() {
        return Err(Error::GenericError(format!(
            "build output {} does not exist",
            build_dir.display()
        )));
    }

    let asar = resolve_tool(ASAR, settings.asar_command(), dirs.project())?;
    let archive = dirs.in_app(APP_ARCHIVE);

    log::info!("Packing {} -> {}", build_dir.display(), archive.display());
    run_tool(
        ASAR,
        &asar,
        [
            std::ffi::OsStr::new("pack"),
            build_dir.as_os_str(),
            archive.as_os_str(),
        ],
    )
    .await?;

    if !archive.is_file() {
        return Err(Error::GenericError(format!(
            "{} finished but {} was not created",
            ASAR,
            archive.display()
        )));
    }

    Ok(archive)
}
