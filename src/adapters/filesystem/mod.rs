//! Filesystem adapter implementations for the source and sink ports.
//!
//! Both adapters own a directory path and enforce that every file name they
//! are handed resolves inside it.

mod output_directory;
mod question_directory;

pub use output_directory::FilesystemDocumentSink;
pub use question_directory::FilesystemQuestionSource;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Resolve `name` under `root`, rejecting anything that escapes it.
pub(crate) fn resolve_within(root: &Path, name: &str) -> Result<PathBuf, AppError> {
    let full_path = root.join(name);

    let normalized_path = normalize_path(&full_path);
    let normalized_root = normalize_path(root);

    if normalized_path == normalized_root || !normalized_path.starts_with(&normalized_root) {
        return Err(AppError::PathTraversal(name.to_string()));
    }

    Ok(full_path)
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => {
                ret.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}
