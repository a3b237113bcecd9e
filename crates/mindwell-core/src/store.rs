//! Persistence seams for the three durable state slices.
//!
//! Each slice owner (configuration, chat transcript, tool history) gets
//! its storage injected through one of these traits instead of reaching
//! into a shared key-value blob from arbitrary call sites. `load`
//! returning `None` means "no usable prior state" — implementations
//! treat a parse failure of stored state the same as a missing file and
//! fall back to defaults rather than propagating an error.

use crate::Result;
use crate::chat::ChatMessage;
use crate::config::AiConfig;
use crate::history::HistoryEntry;

/// Storage for the whole AI configuration record.
pub trait ConfigStore: Send + Sync {
    fn load(&self) -> Option<AiConfig>;
    fn save(&self, config: &AiConfig) -> Result<()>;
}

/// Storage for the ordered chat transcript.
pub trait TranscriptStore: Send + Sync {
    fn load(&self) -> Option<Vec<ChatMessage>>;
    fn save(&self, transcript: &[ChatMessage]) -> Result<()>;
}

/// Storage for the append-only tool-usage history.
pub trait HistoryStore: Send + Sync {
    fn load(&self) -> Option<Vec<HistoryEntry>>;
    fn save(&self, entries: &[HistoryEntry]) -> Result<()>;
}

/// In-memory store implementations, shared across crate tests.
pub mod memory {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// In-memory [`ConfigStore`]; clones share the same slot.
    #[derive(Clone, Default)]
    pub struct MemoryConfigStore {
        slot: Arc<Mutex<Option<AiConfig>>>,
    }

    impl MemoryConfigStore {
        /// Returns the last saved record, if any.
        pub fn snapshot(&self) -> Option<AiConfig> {
            self.slot.lock().unwrap().clone()
        }
    }

    impl ConfigStore for MemoryConfigStore {
        fn load(&self) -> Option<AiConfig> {
            self.snapshot()
        }

        fn save(&self, config: &AiConfig) -> Result<()> {
            *self.slot.lock().unwrap() = Some(config.clone());
            Ok(())
        }
    }

    /// In-memory [`TranscriptStore`]; clones share the same slot.
    #[derive(Clone, Default)]
    pub struct MemoryTranscriptStore {
        slot: Arc<Mutex<Option<Vec<ChatMessage>>>>,
    }

    impl MemoryTranscriptStore {
        pub fn with_transcript(transcript: Vec<ChatMessage>) -> Self {
            Self {
                slot: Arc::new(Mutex::new(Some(transcript))),
            }
        }

        pub fn snapshot(&self) -> Option<Vec<ChatMessage>> {
            self.slot.lock().unwrap().clone()
        }
    }

    impl TranscriptStore for MemoryTranscriptStore {
        fn load(&self) -> Option<Vec<ChatMessage>> {
            self.snapshot()
        }

        fn save(&self, transcript: &[ChatMessage]) -> Result<()> {
            *self.slot.lock().unwrap() = Some(transcript.to_vec());
            Ok(())
        }
    }

    /// In-memory [`HistoryStore`]; clones share the same slot.
    #[derive(Clone, Default)]
    pub struct MemoryHistoryStore {
        slot: Arc<Mutex<Option<Vec<HistoryEntry>>>>,
    }

    impl MemoryHistoryStore {
        pub fn snapshot(&self) -> Option<Vec<HistoryEntry>> {
            self.slot.lock().unwrap().clone()
        }
    }

    impl HistoryStore for MemoryHistoryStore {
        fn load(&self) -> Option<Vec<HistoryEntry>> {
            self.snapshot()
        }

        fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
            *self.slot.lock().unwrap() = Some(entries.to_vec());
            Ok(())
        }
    }
}
