//! Optional TOML configuration for locating the board database.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BoardConfig {
    pub database: Option<PathBuf>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("qboard.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".qboard").join("qboard.db")
}

/// Load config from `path` (or the default location), `None` if absent
pub fn load_config(path: Option<&Path>) -> Result<Option<BoardConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: BoardConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &BoardConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::ConfigExists(path.display().to_string()));
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qboard.toml");
        assert!(load_config(Some(&path)).unwrap().is_none());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qboard.toml");
        let config = BoardConfig {
            database: Some(PathBuf::from("boards/main.db")),
        };

        write_config(&path, &config, false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.database, config.database);
    }

    #[test]
    fn test_write_config_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qboard.toml");
        let config = BoardConfig::default();

        write_config(&path, &config, false).unwrap();
        let err = write_config(&path, &config, false).unwrap_err();
        assert!(matches!(err, Error::ConfigExists(_)));
        write_config(&path, &config, true).unwrap();
    }

    #[test]
    fn test_ensure_db_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = default_database_path_in(dir.path());

        ensure_db_dir(&db_path).unwrap();
        assert!(db_path.parent().unwrap().is_dir());
        // Idempotent on an existing directory.
        ensure_db_dir(&db_path).unwrap();
    }
}
