//! Kodegen Bundler OSX - macOS release packaging for Electron applications.
//!
//! This binary copies a prebuilt runtime, brands it with the product manifest,
//! and produces `releases/<name>_<version>/` and `releases/<name>_<version>.dmg`.

use kodegen_bundler_osx::cli;
use kodegen_bundler_osx::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            OutputManager::new(false, false).fatal(&e);
            process::exit(1);
        }
    }
}
