use std::io;
use std::path::{Component, Path, PathBuf};

/// Absolute, lexically normalized form of `path` (no `.`/`..` segments).
///
/// Does not touch the filesystem beyond reading the current directory for
/// relative input, so symlinks are kept as dropped.
pub fn normalize_path(path: &Path) -> io::Result<PathBuf> {
    let abs = std::path::absolute(path)?;
    let mut out = PathBuf::with_capacity(abs.as_os_str().len());
    for component in abs.components() {
        match component {
            Component::CurDir => {}
            // pop() is a no-op at the root
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    Ok(out)
}
