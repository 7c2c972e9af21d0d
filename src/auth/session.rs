use std::{
    fs, io,
    path::PathBuf,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::warn;

use crate::config;

/// Bearer token for the current login, mirrored to a one-line file so a
/// restart resumes the session. The file plays the role a session cookie
/// plays in a browser client; logout removes it.
#[derive(Clone)]
pub struct SessionStore {
    path: PathBuf,
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    pub fn open() -> io::Result<Self> {
        let directory = config::data_dir()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
        fs::create_dir_all(&directory)?;
        Ok(Self::at_path(directory.join(config::SESSION_FILE_NAME)))
    }

    pub fn at_path(path: PathBuf) -> Self {
        let token = fs::read_to_string(&path)
            .ok()
            .map(|contents| contents.trim().to_string())
            .filter(|token| !token.is_empty());

        Self {
            path,
            token: Arc::new(RwLock::new(token)),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        fs::write(&self.path, token)
    }

    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        if let Err(e) = fs::remove_file(&self.path)
            && e.kind() != io::ErrorKind::NotFound
        {
            warn!("failed to remove session file: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_when_no_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join("session"));
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn save_then_reopen_round_trips_the_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");

        let store = SessionStore::at_path(path.clone());
        store.save("jwt-abc123").unwrap();
        assert_eq!(store.token().as_deref(), Some("jwt-abc123"));

        let reopened = SessionStore::at_path(path);
        assert_eq!(reopened.token().as_deref(), Some("jwt-abc123"));
    }

    #[test]
    fn clear_logs_out_in_memory_and_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");

        let store = SessionStore::at_path(path.clone());
        store.save("jwt-abc123").unwrap();
        store.clear();

        assert!(!store.is_authenticated());
        assert!(!path.exists());
        // clearing twice is fine
        store.clear();
    }

    #[test]
    fn whitespace_only_file_counts_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");
        fs::write(&path, "\n  \n").unwrap();

        let store = SessionStore::at_path(path);
        assert!(!store.is_authenticated());
    }
}
