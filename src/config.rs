use std::{env, path::PathBuf, time::Duration};

use directories::ProjectDirs;

pub const DEFAULT_API_BASE_URL: &str = "https://apis.ccbp.in";

/// File under `data_dir()` holding the persisted session token.
pub const SESSION_FILE_NAME: &str = "session";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            tick_rate: Duration::from_millis(33),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("TUITUBE_API_URL")
            && !url.trim().is_empty()
        {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        config
    }
}

/// Platform data directory for the session file and logs.
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tuitube").map(|dirs| dirs.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_api() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!config.api_base_url.ends_with('/'));
    }

    #[test]
    fn session_file_name_is_a_bare_file_name() {
        assert!(!SESSION_FILE_NAME.is_empty());
        assert!(!SESSION_FILE_NAME.contains(std::path::MAIN_SEPARATOR));
    }
}
