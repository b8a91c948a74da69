//! Shared helpers for filesystem and process work.

pub mod fs;
pub mod process;
