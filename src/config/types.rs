use std::path::PathBuf;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.ini";
pub const APP_SECTION: &str = "app";
pub const DEFAULT_DB_PATH: &str = "data/sample.db";
pub const DEFAULT_EXPORT_DIR: &str = "data/exports";

/// Resolved application settings, passed explicitly to every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub export_dir: PathBuf,
}
