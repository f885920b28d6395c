use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a local report document (100 MB)
pub const MAX_REPORT_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a path that is a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet passes: callers writing a new file rely on
/// this.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => anyhow::bail!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        ),
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates a local report document before it is read
///
/// `metadata` must come from `symlink_metadata()` on `path`. The path must be
/// a regular file (not a directory or a symbolic link) and must not exceed
/// [`MAX_REPORT_SIZE`]. Inspecting already fetched metadata keeps the check
/// usable from async readers.
///
/// # Returns
/// The file size in bytes
pub fn validate_report_metadata(metadata: &fs::Metadata, path: &Path) -> Result<u64> {
    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_report_size(metadata.len(), path, MAX_REPORT_SIZE)?;
    Ok(metadata.len())
}

/// Validates a report size against a limit
pub fn validate_report_size(size: u64, path: &Path, max_size: u64) -> Result<()> {
    if size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            size,
            max_size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_reject_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("grype.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(reject_symlink(&file_path, "write").is_ok());
    }

    #[test]
    fn test_reject_symlink_missing_path_is_allowed() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("dashboard.html");

        assert!(reject_symlink(&file_path, "write").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_reject_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = reject_symlink(&link, "write");
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    fn validate(path: &Path) -> Result<u64> {
        validate_report_metadata(&fs::symlink_metadata(path).unwrap(), path)
    }

    #[test]
    fn test_validate_report_metadata_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sbom.cdx.json");
        fs::write(&file_path, "{\"components\":[]}").unwrap();

        assert_eq!(validate(&file_path).unwrap(), 17);
    }

    #[test]
    fn test_validate_report_metadata_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate(temp_dir.path());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_report_metadata_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("grype.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(validate(&link).unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_report_size_exceeds_limit() {
        let path = PathBuf::from("reports/grype.json");
        let result = validate_report_size(MAX_REPORT_SIZE + 1, &path, MAX_REPORT_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
        assert!(validate_report_size(1000, &path, MAX_REPORT_SIZE).is_ok());
    }
}
