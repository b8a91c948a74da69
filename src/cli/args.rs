//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap,
//! with validation and conversion into bundler settings.

use crate::bundler::{DmgFailureMode, Settings, SettingsBuilder};
use clap::Parser;
use std::path::PathBuf;

/// macOS release bundler for Electron applications
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_osx",
    version,
    about = "Packages an Electron app into a branded macOS .app and .dmg",
    long_about = "Copies the prebuilt Electron.app runtime, packs the app build into app.asar,
writes branded Info.plist files, renames executables to the product name, and
publishes releases/<name>_<version>/ and releases/<name>_<version>.dmg.

Product naming comes from app/package.json (name, productName, identifier, version).

Usage:
  kodegen_bundler_osx
  kodegen_bundler_osx --project-dir ../myapp --releases /srv/releases
  kodegen_bundler_osx --appdmg ./node_modules/.bin/appdmg --best-effort-dmg

Exit code 0 = release bundle (and, unless --best-effort-dmg, the DMG) exists."
)]
pub struct Args {
    /// Project root containing app/, build/, resources/osx/ and node_modules/
    #[arg(short = 'p', long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Prebuilt runtime bundle (default: node_modules/electron-prebuilt/dist/Electron.app)
    #[arg(long, value_name = "PATH")]
    pub runtime: Option<PathBuf>,

    /// Output directory for release bundles and disk images (default: releases)
    #[arg(long, value_name = "DIR")]
    pub releases: Option<PathBuf>,

    /// asar executable used to pack the app build
    #[arg(long, value_name = "PATH", env = "ASAR_PATH")]
    pub asar: Option<PathBuf>,

    /// appdmg executable used to build the disk image
    #[arg(long, value_name = "PATH", env = "APPDMG_PATH")]
    pub appdmg: Option<PathBuf>,

    /// Log disk image failures instead of failing the release
    #[arg(long)]
    pub best_effort_dmg: bool,

    /// Keep the scratch directory after the run
    #[arg(long)]
    pub keep_temp: bool,

    /// Show each step as it runs
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.project_dir.is_dir() {
            return Err(format!(
                "Project directory does not exist: {}",
                self.project_dir.display()
            ));
        }

        Ok(())
    }

    /// Builds bundler settings from the arguments.
    pub fn to_settings(&self) -> crate::bundler::Result<Settings> {
        let mut builder = SettingsBuilder::new()
            .project_dir(&self.project_dir)
            .asar_command(self.asar.clone())
            .appdmg_command(self.appdmg.clone())
            .keep_temp(self.keep_temp)
            .dmg_failure_mode(if self.best_effort_dmg {
                DmgFailureMode::BestEffort
            } else {
                DmgFailureMode::Strict
            });

        if let Some(runtime) = &self.runtime {
            builder = builder.runtime_path(runtime);
        }
        if let Some(releases) = &self.releases {
            builder = builder.releases_dir(releases);
        }

        builder.build()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}
