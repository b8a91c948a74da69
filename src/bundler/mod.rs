//! Release bundling for prebuilt Electron applications on macOS.
//!
//! The [`Bundler`] runs a fixed sequence of [`ReleaseStep`]s over a scratch
//! copy of the runtime bundle and publishes the result as
//! `releases/<name>_<version>/` plus `releases/<name>_<version>.dmg`.
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_osx::bundler::{Bundler, SettingsBuilder};
//!
//! # async fn example() -> kodegen_bundler_osx::bundler::Result<()> {
//! let settings = SettingsBuilder::new().project_dir(".").build()?;
//! let artifacts = Bundler::new(settings).release().await?;
//!
//! println!("Release bundle: {}", artifacts.release_dir.display());
//! if let Some(dmg) = &artifacts.dmg {
//!     println!("DMG: {} ({})", dmg.path.display(), dmg.checksum);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod template;
pub mod utils;
pub mod workspace;

pub use builder::{Bundler, DmgArtifact, ReleaseArtifacts, ReleaseStep};
pub use error::{Error, Result};
pub use settings::{DmgFailureMode, DmgSettings, MacOsSettings, Settings, SettingsBuilder};
pub use workspace::WorkDirs;
