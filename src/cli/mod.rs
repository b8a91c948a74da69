//! Command line interface for the macOS release bundler.
//!
//! Parses arguments, runs the release and reports the artifacts.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::{
    bundler::Bundler,
    error::{CliError, Result},
};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Runs a release for already-parsed arguments and returns the exit code.
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(args);
    let output = config.output();
    let settings = args.to_settings()?;

    output.banner(settings.project_dir());

    let bundler = Bundler::new(settings);
    let artifacts = bundler
        .release_with_progress(|step| output.step(step))
        .await?;

    output.report(&artifacts);

    Ok(0)
}
