use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a listing or license file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Ensures `path` is a regular file of acceptable size and returns its length.
///
/// Symbolic links are rejected without being followed, so a captured listing
/// cannot be swapped for an arbitrary file elsewhere on disk.
pub fn check_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            MAX_FILE_SIZE
        );
    }

    Ok(file_size)
}

/// Reads a UTF-8 text file after [`check_regular_file`] accepted it.
pub fn read_checked_text(path: &Path, file_description: &str) -> Result<String> {
    check_regular_file(path, file_description)?;
    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_check_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("listing.txt");
        fs::write(&file_path, "module").unwrap();

        let size = check_regular_file(&file_path, "listing").unwrap();
        assert_eq!(size, 6);
    }

    #[test]
    fn test_check_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = check_regular_file(temp_dir.path(), "listing");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_check_regular_file_nonexistent() {
        let result = check_regular_file(&PathBuf::from("/nonexistent/listing.txt"), "listing");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read listing metadata"));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "content").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = check_regular_file(&link, "listing");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_read_checked_text() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("LICENSE");
        fs::write(&file_path, "MIT License\n").unwrap();

        let content = read_checked_text(&file_path, "license file").unwrap();
        assert_eq!(content, "MIT License\n");
    }

    #[test]
    fn test_max_file_size_constant() {
        assert_eq!(MAX_FILE_SIZE, 100 * 1024 * 1024);
    }
}
