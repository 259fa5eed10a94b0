//! Profile loading

use advisor_domain::UserInfo;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Cannot read profile {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid profile {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read and parse a profile file
pub fn load_profile(path: &Path) -> Result<UserInfo, ProfileError> {
    let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ProfileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.toml");
        fs::write(
            &path,
            r#"
chores = ["laundry"]
items = ["umbrella"]

[equipment]
dryer = true

[[schedule]]
date = "2025-07-03"
slots = [{ start = "09:00", end = "17:00" }]
"#,
        )
        .unwrap();

        let info = load_profile(&path).unwrap();
        assert_eq!(info.chores, vec!["laundry"]);
        assert!(info.equipment.dryer);
        assert!(!info.equipment.humidifier);
        assert_eq!(info.schedule[0].slots[0].to_string(), "9:00〜17:00");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profile(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ProfileError::Read { .. }));
    }

    #[test]
    fn test_bad_slot_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(
            &path,
            "[[schedule]]\ndate = \"2025-07-03\"\nslots = [{ start = \"late\", end = \"17:00\" }]\n",
        )
        .unwrap();
        assert!(matches!(
            load_profile(&path).unwrap_err(),
            ProfileError::Parse { .. }
        ));
    }
}
