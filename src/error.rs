//! Top-level error types for the release CLI.
//!
//! This module defines the errors surfaced to users, with recovery suggestions.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Bundler errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error;

        let mut bundler_error = match self {
            BundlerError::Bundler(e) => e,
            BundlerError::Cli(_) => {
                return vec!["Run with --help to see the accepted arguments".to_string()];
            }
        };

        // Suggestions depend on the innermost cause
        while let Error::Context(_, inner) = bundler_error {
            bundler_error = inner.as_ref();
        }

        match bundler_error {
            Error::ToolNotFound { tool } => vec![
                format!("Install {tool} with: npm install -g {tool}"),
                format!("Or point at an existing binary with --{tool} <PATH>"),
            ],
            Error::ToolFailed { tool, .. } if tool == "appdmg" => vec![
                "appdmg only runs on macOS; check resources/osx/appdmg.json".to_string(),
                "Use --best-effort-dmg to keep the release bundle when the DMG fails".to_string(),
            ],
            Error::Manifest { path, .. } => vec![format!(
                "{} needs non-empty name, productName, identifier and version",
                path.display()
            )],
            Error::Fs { path, .. } => vec![format!("Check that {} exists and is writable", path.display())],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
