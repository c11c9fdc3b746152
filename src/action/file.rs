//! Filesystem operations (list, rename, delete, copy, mkdir)

use std::path::{Path, PathBuf};

use crate::core::{sort_entries, DirEntry, EntryKind};
use crate::error::{Result, TermdirError};

/// List a directory in display order.
///
/// Symlinks are classified by their target, so a link to a directory can be
/// entered like one. Dangling links list as files.
pub fn list_directory(path: &Path, show_hidden: bool) -> Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !show_hidden && name.starts_with('.') {
            continue;
        }
        let kind = if entry.path().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        entries.push(DirEntry { name, kind });
    }
    sort_entries(&mut entries);
    Ok(entries)
}

/// Create a new directory
pub fn create_dir(parent: &Path, name: &str) -> Result<PathBuf> {
    validate_name(parent, name)?;
    let path = parent.join(name);
    std::fs::create_dir(&path)?;
    Ok(path)
}

/// Rename a file or directory within its parent
pub fn rename(path: &Path, new_name: &str) -> Result<PathBuf> {
    let parent = path.parent().unwrap_or(Path::new(""));
    validate_name(parent, new_name)?;
    let new_path = parent.join(new_name);
    if new_path.symlink_metadata().is_ok() {
        return Err(TermdirError::path(new_path, "Already exists"));
    }
    std::fs::rename(path, &new_path)?;
    Ok(new_path)
}

/// Delete a file or directory (recursively)
pub fn remove(path: &Path) -> Result<()> {
    let metadata = std::fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        std::fs::remove_dir_all(path)?;
    } else {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Copy a file or directory into `dest_dir`, keeping its base name.
///
/// On a name collision the copy gets a `_1`, `_2`, ... suffix.
pub fn copy_to(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = src
        .file_name()
        .ok_or_else(|| TermdirError::path(src, "Invalid source path"))?;
    if src.is_dir() && dest_dir.starts_with(src) {
        return Err(TermdirError::path(src, "Cannot copy a folder into itself"));
    }
    let dest = unique_path(&dest_dir.join(file_name));

    if src.is_dir() {
        copy_dir_recursive(src, &dest)?;
    } else {
        std::fs::copy(src, &dest)?;
    }
    Ok(dest)
}

fn validate_name(parent: &Path, name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(TermdirError::path(parent.join(name), "Invalid name"));
    }
    if name.contains('/') || name.contains('\0') {
        return Err(TermdirError::path(parent.join(name), "Name cannot contain '/'"));
    }
    Ok(())
}

/// Append _1, _2, etc. to the stem until the path is free
fn unique_path(path: &Path) -> PathBuf {
    if path.symlink_metadata().is_err() {
        return path.to_path_buf();
    }

    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let parent = path.parent().unwrap_or(Path::new(""));

    (1..)
        .map(|counter| parent.join(format!("{}_{}{}", stem, counter, ext)))
        .find(|candidate| candidate.symlink_metadata().is_err())
        .unwrap_or_else(|| path.to_path_buf())
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    std::fs::create_dir_all(dest)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dest_path)?;
        } else {
            std::fs::copy(&src_path, &dest_path)?;
        }
    }
    Ok(())
}
