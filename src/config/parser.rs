use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};
use tracing::debug;

use crate::errors::SectrackError;
use super::types::{
    AppConfig, APP_SECTION, DEFAULT_DB_PATH, DEFAULT_EXPORT_DIR, DEFAULT_SETTINGS_FILE,
};

/// Pick the settings file: an explicit `--config`, else `settings.ini` beside
/// the executable, else `settings.ini` in the working directory.
pub fn resolve_settings_path(explicit: Option<&Path>, exe: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match exe.and_then(Path::parent) {
        Some(dir) => dir.join(DEFAULT_SETTINGS_FILE),
        None => PathBuf::from(DEFAULT_SETTINGS_FILE),
    }
}

/// Load the `[app]` section of an INI settings file.
///
/// Relative paths are resolved against the directory holding the settings
/// file, so the same file works from any working directory.
pub fn load_config(path: &Path) -> Result<AppConfig, SectrackError> {
    if !path.exists() {
        return Err(SectrackError::Config(format!(
            "Missing {}. Create it with an [app] section (db_path, export_dir).",
            path.display()
        )));
    }

    // Values are taken literally: backslashes and quotes are not interpreted.
    let literal = ParseOption {
        enabled_escape: false,
        enabled_quote: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_file_opt(path, literal)
        .map_err(|e| SectrackError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

    let app = ini.section(Some(APP_SECTION)).ok_or_else(|| {
        SectrackError::Config(format!(
            "Invalid settings file {}: missing [{}] section",
            path.display(),
            APP_SECTION
        ))
    })?;

    let root = path.parent().unwrap_or_else(|| Path::new(""));
    let db_path = resolve(root, option_or_default(app.get("db_path"), DEFAULT_DB_PATH));
    let export_dir = resolve(root, option_or_default(app.get("export_dir"), DEFAULT_EXPORT_DIR));

    debug!(db_path = %db_path.display(), export_dir = %export_dir.display(), "Loaded settings");

    Ok(AppConfig { db_path, export_dir })
}

fn option_or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

fn resolve(root: &Path, value: &str) -> PathBuf {
    let candidate = PathBuf::from(value);
    if candidate.is_absolute() {
        candidate
    } else {
        root.join(candidate)
    }
}
