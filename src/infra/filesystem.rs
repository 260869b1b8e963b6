//! Filesystem operations
//!
//! Directory create/remove/move wrappers with typed errors.

use std::path::Path;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a directory and all its contents
pub fn remove_dir_all(path: &Path) -> Result<(), FilesystemError> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}

/// Move a directory tree, replacing any existing content at `to`.
///
/// Tries a rename first and falls back to copy-then-remove when source
/// and destination are on different filesystems.
pub fn move_dir(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    let to_err = |e: std::io::Error| FilesystemError::MoveDir {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error: e.to_string(),
    };

    if to.exists() {
        std::fs::remove_dir_all(to).map_err(to_err)?;
    }
    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent).map_err(to_err)?;
    }

    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }

    // Cross-device move
    copy_tree(from, to)?;
    std::fs::remove_dir_all(from).map_err(to_err)?;
    Ok(())
}

/// Recursively copy a directory tree, preserving symlinks.
fn copy_tree(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    let to_err = |error: String| FilesystemError::MoveDir {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error,
    };

    for entry in walkdir::WalkDir::new(from) {
        let entry = entry.map_err(|e| to_err(e.to_string()))?;
        let rel = entry
            .path()
            .strip_prefix(from)
            .expect("walkdir yields paths under its root");
        let dest = to.join(rel);
        let file_type = entry.file_type();
        if file_type.is_dir() {
            std::fs::create_dir_all(&dest).map_err(|e| to_err(e.to_string()))?;
        } else if file_type.is_symlink() {
            recreate_symlink(entry.path(), &dest).map_err(|e| to_err(e.to_string()))?;
        } else {
            std::fs::copy(entry.path(), &dest).map_err(|e| to_err(e.to_string()))?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn recreate_symlink(src: &Path, dest: &Path) -> std::io::Result<()> {
    let target = std::fs::read_link(src)?;
    std::os::unix::fs::symlink(target, dest)
}

#[cfg(not(unix))]
fn recreate_symlink(src: &Path, dest: &Path) -> std::io::Result<()> {
    // Links are flattened when the host cannot recreate them
    std::fs::copy(src, dest).map(|_| ())
}
