use crate::core::error::Result;
use std::path::PathBuf;

const APP_DIR: &str = "git-stager";

/// Directory holding `settings.json`
pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join(APP_DIR))
}

/// Directory holding per-repository mark files
pub fn get_cache_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".cache")),
        "macos" => dirs::home_dir().unwrap_or_default().join("Library/Caches"),
        _ => dirs::cache_dir().unwrap_or_default(),
    };

    Ok(base.join(APP_DIR))
}

/// Cache subdirectory for one repository, keyed by the md5 of its path
pub fn get_repository_cache_directory(repo_path: &std::path::Path) -> Result<PathBuf> {
    let repo_hash = format!("{:x}", md5::compute(repo_path.to_string_lossy().as_bytes()));
    Ok(get_cache_directory()?.join(repo_hash))
}
