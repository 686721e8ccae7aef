use std::path::PathBuf;

/// Environment variable that redirects the config directory (used by tests)
pub const CONFIG_DIR_ENV: &str = "DIALOGDEMO_CONFIG_DIR";

const APP_DIR: &str = "dialogdemo";

/// Get the config directory (`$DIALOGDEMO_CONFIG_DIR`, else `<config_dir>/dialogdemo`)
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Get the directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join(APP_DIR)
}
