//! Release orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs the release
//! steps in order and collects the resulting artifacts.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for the disk image
//! - [`orchestrator`] - Main [`Bundler`] struct and the step sequence
//! - [`tool_detection`] - External tool lookup (`asar`, `appdmg`)

pub mod checksum;
mod orchestrator;
pub mod tool_detection;

pub use orchestrator::{Bundler, DmgArtifact, ReleaseArtifacts, ReleaseStep};
