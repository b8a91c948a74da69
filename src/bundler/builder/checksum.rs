//! Artifact checksum calculation.
//!
//! This module provides SHA256 checksum calculation for release artifacts.

use crate::{bail, bundler::Result, bundler::error::ErrorExt};
use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

/// Calculates SHA256 checksum of a file.
///
/// Reads the file in 8KB chunks so large disk images are never held in memory.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash (64 characters)
/// * `Err` - If the path cannot be read or is not a regular file
pub async fn calculate_sha256(path: &std::path::Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading artifact metadata", path)?;

    if !metadata.is_file() {
        bail!("Artifact is not a file: {}", path.display())
    }

    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for hashing", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashes_known_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.dmg");
        std::fs::write(&path, "abc").unwrap();

        assert_eq!(
            calculate_sha256(&path).await.unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn rejects_directories() {
        let dir = tempfile::tempdir().unwrap();
        let err = calculate_sha256(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }
}
