// File: crates/rasterplot-core/src/export.rs
// Summary: Output path selection (no-clobber suffixes) and PNG file writes.

use std::path::{Path, PathBuf};

use crate::error::{ChartError, Result};

/// Path to write to. With `overwrite`, or when nothing exists at `path`,
/// that is `path` itself; otherwise the first free `<stem>_<n>.<ext>`,
/// counting from 1.
pub fn resolve_output_path(path: &Path, overwrite: bool) -> PathBuf {
    if overwrite || !path.exists() {
        return path.to_path_buf();
    }
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());
    (1u64..)
        .map(|n| {
            let name = match &ext {
                Some(ext) => format!("{stem}_{n}.{ext}"),
                None => format!("{stem}_{n}"),
            };
            path.with_file_name(name)
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Write `bytes` honoring `overwrite`, creating parent directories.
/// Returns the path actually written.
pub fn write_file(path: &Path, bytes: &[u8], overwrite: bool) -> Result<PathBuf> {
    let target = resolve_output_path(path, overwrite);
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|source| ChartError::Io { path: parent.to_path_buf(), source })?;
    }
    std::fs::write(&target, bytes).map_err(|source| ChartError::Io { path: target.clone(), source })?;
    tracing::debug!(path = %target.display(), bytes = bytes.len(), "wrote image");
    Ok(target)
}
