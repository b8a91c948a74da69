//! # Kodegen Bundler OSX
//!
//! Packages a prebuilt Electron runtime and an application build into a
//! branded macOS `.app` bundle and `.dmg` installer.
//!
//! ## Usage
//!
//! ```bash
//! kodegen_bundler_osx                          # release the project in the current directory
//! kodegen_bundler_osx --project-dir ../myapp   # release another project
//! kodegen_bundler_osx --best-effort-dmg        # keep the bundle even if appdmg fails
//! ```
//!
//! It can be used both as a CLI tool and as a library dependency.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use bundler::{Bundler, ReleaseArtifacts, Settings, SettingsBuilder};
pub use error::{BundlerError, CliError, Result};
pub use metadata::AppManifest;
