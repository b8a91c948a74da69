//! macOS release steps for a prebuilt Electron runtime.
//!
//! - `runtime` - copy the runtime bundle into scratch and strip its defaults
//! - `archive` - pack the application build into `app.asar`
//! - `app` - write branded Info.plist files, copy the icon, rename executables
//! - `release` - copy the branded bundle into the releases directory
//! - `dmg` - build the disk image with appdmg

pub mod app;
pub mod archive;
pub mod dmg;
pub mod release;
pub mod runtime;
