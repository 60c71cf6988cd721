use splitbill_application::{SessionSnapshot, SessionStore, StoreError};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Keeps a session snapshot as a pretty-printed JSON document on disk.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<SessionSnapshot, StoreError> {
        let text = fs::read_to_string(&self.path).map_err(|err| self.io_error(err))?;
        let snapshot: SessionSnapshot =
            serde_json::from_str(&text).map_err(|err| StoreError::Format(err.to_string()))?;
        tracing::debug!(path = %self.path.display(), "Session loaded");
        Ok(snapshot)
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(snapshot)
            .map_err(|err| StoreError::Format(err.to_string()))?;
        fs::write(&self.path, text).map_err(|err| self.io_error(err))?;
        tracing::debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }
}
