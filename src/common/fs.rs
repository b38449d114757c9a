//! Common file system operations with unified error handling

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, file_write_failed};

/// Write `content` to `path` atomically.
///
/// The content goes to a temporary file next to the real target first and is
/// then renamed over it, so readers never see a half-written file. A symlinked
/// destination is followed and stays a symlink; an existing target keeps its
/// permissions.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = if path.is_file() {
        fs::canonicalize(path).map_err(|e| file_write_failed(path, e))?
    } else {
        path.to_path_buf()
    };
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp =
        NamedTempFile::new_in(parent).map_err(|e| file_write_failed(path, e))?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.flush())
        .map_err(|e| file_write_failed(path, e))?;

    if let Ok(metadata) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| file_write_failed(path, e))?;
    }

    temp.persist(&target)
        .map_err(|e| file_write_failed(path, e.error))?;

    Ok(())
}
