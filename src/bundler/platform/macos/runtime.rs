//! Staging the prebuilt runtime bundle.

use crate::bundler::{
    Result, Settings,
    error::Context,
    utils::fs,
    workspace::WorkDirs,
};

/// Default resources shipped with the runtime that must not reach a release.
pub const UNWANTED_RESOURCES: [&str; 2] = [
    "Contents/Resources/default_app",
    "Contents/Resources/atom.icns",
];

/// Copies the prebuilt runtime bundle to the staged bundle path.
///
/// Symlinks inside the runtime's frameworks are preserved.
pub async fn copy_runtime(settings: &Settings, dirs: &WorkDirs) -> Result<()> {
    let runtime = &settings.macos().runtime_path;
    log::info!(
        "Copying runtime {} -> {}",
        runtime.display(),
        dirs.ready_app().display()
    );

    fs::copy_dir(runtime, dirs.ready_app())
        .await
        .with_context(|| format!("copying runtime bundle {}", runtime.display()))
}

/// Removes the runtime's default app and icon from the staged bundle.
///
/// Paths already absent are skipped.
pub async fn cleanup_runtime(dirs: &WorkDirs) -> Result<()> {
    for relative in UNWANTED_RESOURCES {
        let path = dirs.in_app(relative);
        log::debug!("Removing {}", path.display());
        fs::remove_path(&path).await?;
    }
    Ok(())
}
