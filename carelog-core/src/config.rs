//! Configuration resolution for the carelog service
//!
//! Precedence: explicit path > CARELOG_DB_PATH env var > ~/.carelog/carelog.db

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "CARELOG_DB_PATH";

/// Resolve the SQLite database path.
///
/// An explicit path (e.g. from a CLI flag) wins; otherwise the
/// `CARELOG_DB_PATH` environment variable; otherwise a file under the
/// user's home directory.
pub fn db_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    if let Ok(path) = env::var(DB_PATH_ENV) {
        return PathBuf::from(path);
    }

    default_db_path()
}

/// Default database location: ~/.carelog/carelog.db
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".carelog")
        .join("carelog.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = db_path(Some(PathBuf::from("/tmp/custom.db")));
        assert_eq!(path, PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn default_ends_with_carelog_db() {
        let path = default_db_path();
        assert!(path.ends_with(".carelog/carelog.db"));
    }
}
