//! File-backed persistence for Mindwell.
//!
//! Each durable state slice (configuration, transcript, history) lives
//! in its own pretty-printed JSON file under `~/.mindwell`. Reads that
//! fail to parse are discarded with a warning and treated as "no prior
//! state" — corrupt storage never crashes the application.

pub mod export;
pub mod json_store;
pub mod paths;

pub use json_store::{JsonConfigStore, JsonHistoryStore, JsonTranscriptStore};
pub use paths::MindwellPaths;
