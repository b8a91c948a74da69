//! Running external tools with a uniform result.

use crate::bundler::{Error, Result};
use std::{ffi::OsStr, path::Path, process::Output};

/// Runs `program` with `args` to completion and maps any failure to an error.
///
/// A spawn failure becomes [`Error::CommandFailed`]; a non-zero exit becomes
/// [`Error::ToolFailed`] carrying the trimmed stderr (or stdout when stderr
/// is empty, since some npm tools report there). No timeout is applied.
pub async fn run_tool<I, S>(tool: &str, program: &Path, args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<_> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
    log::debug!("Running {} {:?}", program.display(), args);

    let output = tokio::process::Command::new(program)
        .args(&args)
        .output()
        .await
        .map_err(|error| Error::CommandFailed {
            command: program.display().to_string(),
            error,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stderr = if stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        };
        return Err(Error::ToolFailed {
            tool: tool.to_string(),
            status: output.status,
            stderr,
        });
    }

    Ok(output)
}
