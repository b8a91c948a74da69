//! Platform-specific release steps.

pub mod macos;
