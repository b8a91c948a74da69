//! Branding the staged .app bundle: Info.plist files, icon, executable names.

use crate::{
    bundler::{
        Result, Settings,
        error::ErrorExt,
        template::{TemplateVars, render_checked},
        utils::fs,
        workspace::WorkDirs,
    },
    metadata::AppManifest,
};
use std::path::Path;

/// Name the runtime ships its executables and helpers under.
pub const RUNTIME_NAME: &str = "Electron";

/// Suffixes of the helper `Info<suffix>.plist` templates.
pub const HELPER_PLIST_SUFFIXES: [&str; 3] = [" EH", " NP", ""];

/// Suffixes of the helper bundles and executables, in rename order.
pub const HELPER_SUFFIXES: [&str; 3] = [" Helper EH", " Helper NP", " Helper"];

/// Writes the branded Info.plist files and copies the application icon.
///
/// The root plist receives `productName`, `identifier` and `version`; each
/// helper plist receives `productName` and `identifier`. Helpers are still
/// under their runtime names at this point.
pub async fn finalize(settings: &Settings, dirs: &WorkDirs, manifest: &AppManifest) -> Result<()> {
    let macos = settings.macos();

    let root_template = macos.info_plist_template();
    let vars = TemplateVars::new()
        .with("productName", &manifest.product_name)
        .with("identifier", &manifest.identifier)
        .with("version", &manifest.version);
    render_to(&root_template, &vars, &dirs.in_app("Contents/Info.plist")).await?;

    for suffix in HELPER_PLIST_SUFFIXES {
        let template = macos.helper_plist_template(suffix);
        let vars = TemplateVars::new()
            .with("productName", &manifest.product_name)
            .with("identifier", &manifest.identifier);
        let dest = dirs.in_app(format!(
            "Contents/Frameworks/{RUNTIME_NAME} Helper{suffix}.app/Contents/Info.plist"
        ));
        render_to(&template, &vars, &dest).await?;
    }

    fs::copy_file(&macos.icon(), &dirs.in_app("Contents/Resources/icon.icns")).await?;

    Ok(())
}

async fn render_to(template: &Path, vars: &TemplateVars, dest: &Path) -> Result<()> {
    let source = tokio::fs::read_to_string(template)
        .await
        .fs_context("reading template", template)?;
    log::debug!("Rendering {} -> {}", template.display(), dest.display());
    fs::write_file(dest, &render_checked(&source, vars, template)).await
}

/// Renames helper executables, helper bundles and the main executable from
/// the runtime's name to the product name.
///
/// For each helper the executable is renamed first, while its bundle still has
/// the runtime name, then the bundle directory itself.
pub async fn rename_app(dirs: &WorkDirs, manifest: &AppManifest) -> Result<()> {
    let product = &manifest.product_name;

    for suffix in HELPER_SUFFIXES {
        let bundle = dirs.in_app(format!("Contents/Frameworks/{RUNTIME_NAME}{suffix}.app"));
        let executable = bundle.join(format!("Contents/MacOS/{RUNTIME_NAME}{suffix}"));

        fs::rename_in_place(&executable, &format!("{product}{suffix}")).await?;
        fs::rename_in_place(&bundle, &format!("{product}{suffix}.app")).await?;
    }

    fs::rename_in_place(&dirs.in_app(format!("Contents/MacOS/{RUNTIME_NAME}")), product).await?;

    log::info!("Renamed executables and helpers to {}", product);
    Ok(())
}
