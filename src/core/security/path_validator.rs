use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::Config;

/// Errors that can occur during path validation
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Path '{path}' is outside allowed root directory '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Symlink '{path}' points outside allowed root directory")]
    SymlinkOutsideRoot { path: PathBuf },

    #[error("Symlinks are not allowed: '{path}'")]
    SymlinkNotAllowed { path: PathBuf },

    #[error("Cannot canonicalize path '{path}': {error}")]
    CannotCanonicalize { path: PathBuf, error: io::Error },

    #[error("Path does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Validates that a given path is within the configured security boundaries.
///
/// 1. The path must exist
/// 2. A symlink is rejected outright when `allow_symlinks` is false
/// 3. With a root configured, the canonical path must lie under the canonical root
///
/// Returns the canonical path on success.
///
/// ```rust,ignore
/// let config = Config::from_env();
/// let dir = validate_path("./pdfs", &config)?;
/// ```
pub fn validate_path(
    input_path: impl AsRef<Path>,
    config: &Config,
) -> Result<PathBuf, PathSecurityError> {
    let path = input_path.as_ref();

    // symlink_metadata does not follow links, so dangling links count as present
    if path.symlink_metadata().is_err() {
        return Err(PathSecurityError::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    let is_symlink = path.is_symlink();
    if is_symlink && !config.security.allow_symlinks {
        return Err(PathSecurityError::SymlinkNotAllowed {
            path: path.to_path_buf(),
        });
    }

    let canonical_path = canonicalize_path(path)?;

    let Some(root) = &config.security.root_path else {
        return Ok(canonical_path);
    };

    let canonical_root = root.canonicalize().map_err(|e| PathSecurityError::IoError {
        path: root.clone(),
        error: e,
    })?;

    if !canonical_path.starts_with(&canonical_root) {
        if is_symlink {
            return Err(PathSecurityError::SymlinkOutsideRoot {
                path: path.to_path_buf(),
            });
        }
        return Err(PathSecurityError::OutsideRootDirectory {
            path: canonical_path,
            root: canonical_root,
        });
    }

    Ok(canonical_path)
}

fn canonicalize_path(path: &Path) -> Result<PathBuf, PathSecurityError> {
    path.canonicalize().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            PathSecurityError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PathSecurityError::CannotCanonicalize {
                path: path.to_path_buf(),
                error: e,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_config(root: Option<PathBuf>, allow_symlinks: bool) -> Config {
        use crate::core::config::SecurityConfig;

        Config {
            security: SecurityConfig {
                root_path: root,
                allow_symlinks,
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_no_root_allows_existing_directory() {
        let temp_dir = TempDir::new().unwrap();

        let config = create_test_config(None, true);
        let result = validate_path(temp_dir.path(), &config).unwrap();

        assert_eq!(result, temp_dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_directory_within_root() {
        let temp_dir = TempDir::new().unwrap();
        let papers = temp_dir.path().join("papers");
        fs::create_dir(&papers).unwrap();

        let config = create_test_config(Some(temp_dir.path().to_path_buf()), true);
        assert!(validate_path(&papers, &config).is_ok());
        assert!(validate_path(temp_dir.path(), &config).is_ok());
    }

    #[test]
    fn test_directory_outside_root() {
        let root_dir = TempDir::new().unwrap();
        let outside_dir = TempDir::new().unwrap();

        let config = create_test_config(Some(root_dir.path().to_path_buf()), true);
        let result = validate_path(outside_dir.path(), &config);

        assert!(matches!(
            result,
            Err(PathSecurityError::OutsideRootDirectory { .. })
        ));
    }

    #[test]
    fn test_path_traversal_blocked() {
        let temp_dir = TempDir::new().unwrap();
        let subdir = temp_dir.path().join("subdir");
        let sibling = temp_dir.path().join("sibling");
        fs::create_dir(&subdir).unwrap();
        fs::create_dir(&sibling).unwrap();

        let config = create_test_config(Some(subdir.clone()), true);
        let result = validate_path(subdir.join("../sibling"), &config);

        assert!(matches!(
            result,
            Err(PathSecurityError::OutsideRootDirectory { .. })
        ));
    }

    #[test]
    fn test_nonexistent_path() {
        let temp_dir = TempDir::new().unwrap();
        let nonexistent = temp_dir.path().join("does_not_exist");

        let config = create_test_config(Some(temp_dir.path().to_path_buf()), true);
        let result = validate_path(&nonexistent, &config);

        assert!(matches!(result, Err(PathSecurityError::PathNotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_within_root() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target");
        let link = temp_dir.path().join("link");
        fs::create_dir(&target).unwrap();
        symlink(&target, &link).unwrap();

        let config = create_test_config(Some(temp_dir.path().to_path_buf()), true);
        assert!(validate_path(&link, &config).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_outside_root_blocked() {
        use std::os::unix::fs::symlink;

        let root_dir = TempDir::new().unwrap();
        let outside_dir = TempDir::new().unwrap();
        let link = root_dir.path().join("link");
        symlink(outside_dir.path(), &link).unwrap();

        let config = create_test_config(Some(root_dir.path().to_path_buf()), true);
        let result = validate_path(&link, &config);

        assert!(matches!(
            result,
            Err(PathSecurityError::SymlinkOutsideRoot { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_disallowed_by_config() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target");
        let link = temp_dir.path().join("link");
        fs::create_dir(&target).unwrap();
        symlink(&target, &link).unwrap();

        let config = create_test_config(Some(temp_dir.path().to_path_buf()), false);
        let result = validate_path(&link, &config);

        assert!(matches!(
            result,
            Err(PathSecurityError::SymlinkNotAllowed { .. })
        ));
    }
}
