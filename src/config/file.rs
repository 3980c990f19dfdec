//
//  github2
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Low-level file operations used by [`Config`](super::Config). Write
//! operations create missing parent directories. Because the file may hold
//! API tokens, on Unix it is created with `0600` permissions, and an existing
//! file is narrowed to `0600` before any new content is written to it.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads the contents of a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Writes a configuration file, creating parent directories as needed.
///
/// Existing files are overwritten.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
///
/// # Example
///
/// ```rust,no_run
/// use std::fs::OpenOptions;
/// use std::io::Write;
/// use std::path::Path;
/// use github2::config::write_config_file;
///
/// write_config_file(Path::new("/tmp/gh2/config.toml"), "[auth]\nusername = \"defunkt\"\n")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    if config_exists(path) {
        restrict_permissions(path)?;
    }

    let mut file = private_options()
        .open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write config file {}", path.display()))
}

/// Returns `true` if a regular file exists at `path`.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}

/// Truncating write options; new files are owner-only on Unix.
fn private_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .with_context(|| format!("Failed to restrict permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parents_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("gh2").join("config.toml");

        assert!(!config_exists(&path));
        write_config_file(&path, "[api]\n").unwrap();

        assert!(config_exists(&path));
        assert_eq!(read_config_file(&path).unwrap(), "[api]\n");
    }

    #[test]
    fn test_directory_is_not_a_config_file() {
        let dir = TempDir::new().unwrap();
        assert!(!config_exists(dir.path()));
    }

    #[test]
    fn test_read_missing_file_mentions_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let err = read_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }

    #[cfg(unix)]
    #[test]
    fn test_written_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        write_config_file(&path, "").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_readable_file_is_narrowed_before_rewrite() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nformat = \"json\"\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        write_config_file(&path, "[auth]\naccess_token = \"s3cret\"\n").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(read_config_file(&path).unwrap(), "[auth]\naccess_token = \"s3cret\"\n");
    }

    #[test]
    fn test_shorter_rewrite_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        write_config_file(&path, "[auth]\naccess_token = \"long-token-value\"\n").unwrap();
        write_config_file(&path, "[api]\n").unwrap();

        assert_eq!(read_config_file(&path).unwrap(), "[api]\n");
    }
}
