//! Default on-disk locations for prompt state
//!
//! Paths are user-writable (no root required):
//! - Data: `$XDG_DATA_HOME/<app_id>` or `~/.local/share/<app_id>`

use std::path::PathBuf;

/// Environment variable for overriding the data directory
pub const OVATION_DATA_DIR_ENV: &str = "OVATION_DATA_DIR";

/// Database filename within the data directory
const DB_FILENAME: &str = "ovation.db";

/// Default database path for an application.
///
/// Order of precedence:
/// 1. `$OVATION_DATA_DIR/ovation.db` (if set)
/// 2. `$XDG_DATA_HOME/<app_id>/ovation.db` (if XDG_DATA_HOME is set)
/// 3. `~/.local/share/<app_id>/ovation.db` (fallback)
pub fn default_db_path(app_id: &str) -> PathBuf {
    if let Ok(path) = std::env::var(OVATION_DATA_DIR_ENV) {
        return PathBuf::from(path).join(DB_FILENAME);
    }

    data_dir(app_id).join(DB_FILENAME)
}

fn data_dir(app_id: &str) -> PathBuf {
    if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(data_home).join(app_id);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(app_id);
    }

    // Last resort
    PathBuf::from("/tmp").join(app_id)
}
