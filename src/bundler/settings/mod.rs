//! Configuration structures for release operations.
//!
//! This module provides the settings consumed by the release pipeline:
//! project layout, macOS runtime and DMG options, external tool overrides,
//! and the builder used to construct them.

mod builder;
mod core;
mod macos;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use macos::{DmgFailureMode, DmgSettings, MacOsSettings};
