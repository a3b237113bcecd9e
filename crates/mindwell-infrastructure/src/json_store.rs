//! JSON-file implementations of the core persistence traits.
//!
//! Each store owns one file and writes the whole slice on every save. A
//! missing file or unreadable JSON on load yields `None` so the owner
//! falls back to its defaults; the discarded content is logged, not
//! propagated.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use mindwell_core::Result;
use mindwell_core::chat::ChatMessage;
use mindwell_core::config::AiConfig;
use mindwell_core::history::HistoryEntry;
use mindwell_core::store::{ConfigStore, HistoryStore, TranscriptStore};

use crate::paths::MindwellPaths;

fn read_slice<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            if err.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), %err, "failed to read state slice");
            }
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                %err,
                "discarding unreadable state slice, falling back to defaults"
            );
            None
        }
    }
}

fn write_slice<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// File store for the AI configuration record.
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location under `~/.mindwell`.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(MindwellPaths::config_file()?))
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> Option<AiConfig> {
        read_slice(&self.path)
    }

    fn save(&self, config: &AiConfig) -> Result<()> {
        write_slice(&self.path, config)
    }
}

/// File store for the chat transcript.
pub struct JsonTranscriptStore {
    path: PathBuf,
}

impl JsonTranscriptStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_location() -> Result<Self> {
        Ok(Self::new(MindwellPaths::transcript_file()?))
    }
}

impl TranscriptStore for JsonTranscriptStore {
    fn load(&self) -> Option<Vec<ChatMessage>> {
        read_slice(&self.path)
    }

    fn save(&self, transcript: &[ChatMessage]) -> Result<()> {
        write_slice(&self.path, &transcript)
    }
}

/// File store for the tool-usage history.
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_location() -> Result<Self> {
        Ok(Self::new(MindwellPaths::history_file()?))
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load(&self) -> Option<Vec<HistoryEntry>> {
        read_slice(&self.path)
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        write_slice(&self.path, &entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindwell_core::config::Provider;
    use tempfile::TempDir;

    #[test]
    fn config_round_trips_through_the_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonConfigStore::new(dir.path().join("config.json"));

        let mut config = AiConfig::default();
        config.set_provider(Provider::Yi);
        config.api_key = "sk-secret".to_string();
        store.save(&config).unwrap();

        let loaded = store.load().expect("config should load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonTranscriptStore::new(dir.path().join("transcript.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_json_is_discarded_not_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let store = JsonHistoryStore::new(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn transcript_round_trips_in_order() {
        let dir = TempDir::new().unwrap();
        let store = JsonTranscriptStore::new(dir.path().join("transcript.json"));

        let transcript = vec![
            ChatMessage::assistant("welcome"),
            ChatMessage::user("hello"),
            ChatMessage::assistant("go on"),
        ];
        store.save(&transcript).unwrap();
        assert_eq!(store.load().unwrap(), transcript);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonConfigStore::new(dir.path().join("nested/deeper/config.json"));
        store.save(&AiConfig::default()).unwrap();
        assert!(store.load().is_some());
    }
}
