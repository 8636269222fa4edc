//! Path normalization for snapshot entries

use crate::error::WalkError;
use std::path::{Component, Path, PathBuf};

/// Canonicalize the workspace root (resolves symlinks, `..`, `.`).
///
/// Uses dunce for cross-platform canonicalization, so Windows paths come
/// back without the `\\?\` prefix.
pub fn canonicalize_root(root: &Path) -> Result<PathBuf, WalkError> {
    dunce::canonicalize(root)
        .map_err(|e| WalkError::InvalidPath(format!("Failed to canonicalize root: {}", e)))
}

/// Strip the root prefix, yielding the workspace-relative path.
pub fn relative_to_root(path: &Path, root: &Path) -> Result<PathBuf, WalkError> {
    path.strip_prefix(root).map(Path::to_path_buf).map_err(|_| {
        WalkError::InvalidPath(format!(
            "Path {} is outside workspace root {}",
            path.display(),
            root.display()
        ))
    })
}

/// Render a relative path with `/` separators, for archive entry names and
/// section headers. Only normal components are kept.
pub fn to_posix(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        if let Component::Normal(name) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&name.to_string_lossy());
        }
    }
    out
}
