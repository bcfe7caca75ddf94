use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::config::DirectoryConfig;

#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub logs_dir: PathBuf,
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
}

/// Creates the log and data directories if missing and resolves the database
/// path inside the data directory.
pub fn ensure_directories(cfg: &DirectoryConfig) -> Result<ResolvedPaths> {
    let logs_dir = ensure_dir(&cfg.logs_dir)?;
    let data_dir = ensure_dir(&cfg.data_dir)?;
    let db_path = data_dir.join(&cfg.db_filename);

    Ok(ResolvedPaths {
        logs_dir,
        data_dir,
        db_path,
    })
}

fn ensure_dir(path: &str) -> Result<PathBuf> {
    let dir = PathBuf::from(path);
    fs::create_dir_all(&dir).with_context(|| format!("failed to create directory {path}"))?;
    Ok(dir.canonicalize().unwrap_or(dir))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn config_under(base: &Path) -> DirectoryConfig {
        DirectoryConfig {
            logs_dir: base.join("logs").to_string_lossy().into_owned(),
            data_dir: base.join("data").to_string_lossy().into_owned(),
            db_filename: "posts.db".to_string(),
        }
    }

    #[test]
    fn creates_missing_directories_and_resolves_db_path() {
        let base = std::env::temp_dir().join(format!("xeghep-dirs-a-{}", std::process::id()));
        let paths = ensure_directories(&config_under(&base)).expect("directories created");

        assert!(paths.logs_dir.is_dir());
        assert!(paths.data_dir.is_dir());
        assert_eq!(
            paths.db_path.file_name().and_then(|name| name.to_str()),
            Some("posts.db")
        );
        assert_eq!(paths.db_path.parent(), Some(paths.data_dir.as_path()));

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn existing_directories_are_reused() {
        let base = std::env::temp_dir().join(format!("xeghep-dirs-b-{}", std::process::id()));
        let cfg = config_under(&base);

        ensure_directories(&cfg).expect("first call creates");
        let paths = ensure_directories(&cfg).expect("second call reuses");
        assert!(paths.data_dir.is_dir());

        let _ = fs::remove_dir_all(&base);
    }
}
