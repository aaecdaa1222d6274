use std::path::PathBuf;

pub const PREFERENCES_PATH_VAR: &str = "LUNARIA_PREFERENCES_PATH";

/// Location of the preferences file used by native builds.
pub fn get_preferences_path() -> PathBuf {
    resolve_preferences_path(std::env::var(PREFERENCES_PATH_VAR).ok(), dirs::config_dir())
}

fn resolve_preferences_path(configured: Option<String>, config_dir: Option<PathBuf>) -> PathBuf {
    match configured {
        Some(path) if !path.trim().is_empty() => {
            log::info!("Using preferences file from {}: {}", PREFERENCES_PATH_VAR, path);
            return PathBuf::from(path);
        }
        Some(_) => {
            log::warn!("{} is set but empty, ignoring it", PREFERENCES_PATH_VAR);
        }
        None => {}
    }

    match config_dir {
        Some(dir) => dir.join("lunaria").join("preferences.json"),
        None => {
            log::warn!("No config directory on this platform, storing preferences in working directory");
            PathBuf::from(".lunaria").join("preferences.json")
        }
    }
}
