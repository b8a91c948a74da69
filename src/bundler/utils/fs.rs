//! File system utilities for bundling.
//!
//! Provides idempotent file operations with automatic directory creation,
//! symlink preservation, and path-aware error context.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    io::{self},
    path::Path,
};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(Error::Fs {
            context: "removing directory",
            path: path.to_path_buf(),
            error: e,
        }),
    }
}

/// Removes whatever is at `path` (file, symlink or directory tree).
///
/// Absent paths are not an error.
pub async fn remove_path(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e).fs_context("inspecting path", path),
    };

    if metadata.is_dir() {
        remove_dir_all(path).await
    } else {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).fs_context("removing file", path),
        }
    }
}

/// Renames `from` to a new file name in the same directory.
///
/// Returns the new path.
pub async fn rename_in_place(from: &Path, new_name: &str) -> Result<std::path::PathBuf> {
    let parent = from.parent().ok_or_else(|| {
        Error::GenericError(format!("{} has no parent directory", from.display()))
    })?;
    let to = parent.join(new_name);

    log::debug!("Renaming {} -> {}", from.display(), to.display());
    fs::rename(from, &to).await.fs_context("renaming", from)?;

    Ok(to)
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", from)?;
    Ok(())
}

/// Writes `contents` to `path`, creating parent directories as needed.
pub async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(dest_dir) = path.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::write(path, contents)
        .await
        .fs_context("writing file", path)
}

/// Recursively copies a directory from one path to another, creating any
/// parent directories of the destination path as necessary.
///
/// Preserves symlinks on platforms that support them, which keeps the
/// framework layout of macOS bundles intact.
/// Fails if the source path is not a directory or doesn't exist.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_dir() {
        return Err(Error::GenericError(format!("{from:?} is not a Directory")));
    }

    // Clone paths for move into blocking closure
    let from = from.to_path_buf();
    let to = to.to_path_buf();

    // Offload blocking work to dedicated thread pool
    tokio::task::spawn_blocking(move || {
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent).fs_context("creating directory", parent)?;
        }

        for entry in walkdir::WalkDir::new(&from) {
            let entry = entry?;
            debug_assert!(entry.path().starts_with(&from));
            let rel_path = entry.path().strip_prefix(&from)?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_symlink() {
                let target =
                    std::fs::read_link(entry.path()).fs_context("reading symlink", entry.path())?;
                let linked = if entry.path().is_dir() {
                    symlink_dir(&target, &dest_path)
                } else {
                    symlink_file(&target, &dest_path)
                };
                linked.fs_context("creating symlink", &dest_path)?;
            } else if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
            } else {
                std::fs::copy(entry.path(), &dest_path).fs_context("copying file", entry.path())?;
            }
        }

        Ok::<(), Error>(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("Directory copy task panicked: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_dir_all_with_erase_empties_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("tmp");
        std::fs::create_dir_all(target.join("leftover")).unwrap();
        std::fs::write(target.join("stale.txt"), "x").unwrap();

        create_dir_all(&target, true).await.unwrap();

        assert!(target.is_dir());
        assert_eq!(std::fs::read_dir(&target).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn create_dir_all_with_erase_handles_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/tmp");

        create_dir_all(&target, true).await.unwrap();

        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn remove_path_handles_files_dirs_and_absence() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("atom.icns");
        let tree = dir.path().join("default_app");
        std::fs::write(&file, "icon").unwrap();
        std::fs::create_dir_all(tree.join("inner")).unwrap();
        std::fs::write(tree.join("inner/index.js"), "js").unwrap();

        remove_path(&file).await.unwrap();
        remove_path(&tree).await.unwrap();
        remove_path(&file).await.unwrap();
        remove_path(&dir.path().join("never-existed")).await.unwrap();

        assert!(!file.exists());
        assert!(!tree.exists());
    }

    #[tokio::test]
    async fn rename_in_place_keeps_parent() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("Electron");
        std::fs::write(&from, "bin").unwrap();

        let to = rename_in_place(&from, "MyApp").await.unwrap();

        assert_eq!(to, dir.path().join("MyApp"));
        assert!(to.exists());
        assert!(!from.exists());
    }

    #[tokio::test]
    async fn rename_in_place_reports_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = rename_in_place(&dir.path().join("Electron"), "MyApp")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fs { context: "renaming", .. }));
    }

    #[tokio::test]
    async fn copy_dir_copies_tree() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("Electron.app");
        std::fs::create_dir_all(src.join("Contents/MacOS")).unwrap();
        std::fs::write(src.join("Contents/MacOS/Electron"), "bin").unwrap();

        let dst = dir.path().join("out/MyApp.app");
        copy_dir(&src, &dst).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(dst.join("Contents/MacOS/Electron")).unwrap(),
            "bin"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn copy_dir_preserves_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("Framework.framework");
        std::fs::create_dir_all(src.join("Versions/A")).unwrap();
        std::fs::write(src.join("Versions/A/lib"), "lib").unwrap();
        std::os::unix::fs::symlink("A", src.join("Versions/Current")).unwrap();

        let dst = dir.path().join("copy.framework");
        copy_dir(&src, &dst).await.unwrap();

        let link = dst.join("Versions/Current");
        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_link(&link).unwrap(), Path::new("A"));
    }

    #[tokio::test]
    async fn copy_dir_rejects_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_dir(&dir.path().join("missing.app"), &dir.path().join("out"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Contents/Info.plist");

        write_file(&path, "<plist/>").await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "<plist/>");
    }
}
