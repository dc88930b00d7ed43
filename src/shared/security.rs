use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for configuration files. A config is a handful of keys;
/// anything bigger is not one.
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Rejects symbolic links.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link; {} operations on symbolic links are not allowed",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Checks that `path` is a regular file no larger than `max_size` bytes.
///
/// # Errors
/// Returns an error if the path is missing, a symbolic link, not a regular
/// file, or too large.
pub fn validate_config_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: config file {} is a symbolic link; symbolic links are not allowed",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("Config file {} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Config file {} is too large ({} bytes, maximum {} bytes)",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    Ok(())
}
