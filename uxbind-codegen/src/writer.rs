//! Atomic output writing.

use crate::error::CodegenError;
use std::fs::Permissions;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

/// Writes `contents` to `path`, replacing any existing file.
///
/// The content goes to a temporary file in the target directory first and is
/// then renamed over the target, so a failed run never leaves a truncated
/// file behind. Missing parent directories are created. A replaced file keeps
/// its permissions; a new one is created readable by everyone (`0644` on
/// Unix).
///
/// # Errors
/// Returns `CodegenError` if the directory, the temporary file or the final
/// rename cannot be created.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), CodegenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut file = Builder::new().prefix(".uxbind").tempfile_in(dir)?;
    // set explicitly: creation modes are masked by the umask
    if let Some(permissions) = target_permissions(path) {
        file.as_file().set_permissions(permissions)?;
    }
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path)?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote generated file");
    Ok(())
}

fn target_permissions(path: &Path) -> Option<Permissions> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Some(metadata.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
