use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the country dataset.
pub const DATASET_FILENAME: &str = "world_coordinates.csv";

/// Environment variable overriding the dataset location.
pub const DATASET_ENV_VAR: &str = "BORDERGRAPH_DATA";

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "bordergraph", "bordergraph")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Locate the dataset file.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `BORDERGRAPH_DATA` environment variable.
/// 3. Platform-specific project data directory.
///
/// A directory in positions 1 or 2 is joined with [`DATASET_FILENAME`]. The
/// resolved file must exist.
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    resolve_from(target, env::var_os(DATASET_ENV_VAR))
}

fn resolve_from(target: Option<&Path>, env_value: Option<OsString>) -> Result<PathBuf> {
    let (source, path) = if let Some(explicit) = target {
        ("argument", canonical_dataset_path(explicit))
    } else if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        ("environment", canonical_dataset_path(Path::new(&value)))
    } else {
        ("default", default_dataset_path()?)
    };

    debug!(source, path = %path.display(), "resolved dataset path");
    if !path.is_file() {
        return Err(Error::DatasetNotFound { path });
    }
    Ok(path)
}

fn canonical_dataset_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DATASET_FILENAME)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn explicit_path_wins_over_environment() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("mine.csv");
        fs::write(&explicit, "name\n").unwrap();

        let resolved = resolve_from(Some(&explicit), Some(OsString::from("/nowhere.csv"))).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn directory_is_joined_with_default_filename() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DATASET_FILENAME), "name\n").unwrap();

        let resolved = resolve_from(None, Some(dir.path().as_os_str().to_owned())).unwrap();
        assert_eq!(resolved, dir.path().join(DATASET_FILENAME));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.csv");

        let err = resolve_from(Some(&missing), None).unwrap_err();
        assert!(matches!(err, Error::DatasetNotFound { path } if path == missing));
    }
}
