//! External tool detection and availability checking.
//!
//! The release pipeline drives two npm-distributed tools: `asar` for packing
//! the application and `appdmg` for the disk image. They are looked up in
//! order: explicit override, `PATH`, then the project's `node_modules/.bin`.

use crate::bundler::{Error, Result};
use std::path::{Path, PathBuf};

/// Archive packer for `app.asar`.
pub const ASAR: &str = "asar";

/// Disk image builder.
pub const APPDMG: &str = "appdmg";

/// Resolves the executable for `tool`.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] if an explicit override does not exist or
/// the tool is neither on `PATH` nor installed in the project.
pub fn resolve_tool(tool: &str, explicit: Option<&Path>, project_dir: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            log::debug!("Using {} from override: {}", tool, path.display());
            return Ok(path.to_path_buf());
        }
        log::warn!("{} override {} does not exist", tool, path.display());
        return Err(Error::ToolNotFound {
            tool: tool.to_string(),
        });
    }

    match which::which(tool) {
        Ok(path) => {
            log::debug!("Found {} at: {}", tool, path.display());
            return Ok(path);
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", tool, e);
        }
    }

    let local = project_dir.join("node_modules").join(".bin").join(tool);
    if local.is_file() {
        log::debug!("Found project-local {} at: {}", tool, local.display());
        return Ok(local);
    }

    Err(Error::ToolNotFound {
        tool: tool.to_string(),
    })
}
