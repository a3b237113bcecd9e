//! Append-only record of completed tool results.
//!
//! Entries are prepended (newest first) and never mutated or individually
//! deleted. The display window is capped at the most recent
//! [`DISPLAY_LIMIT`] entries while the persisted sequence stays unbounded
//! — that asymmetry matches the observed behavior of the original
//! application and is kept deliberately.

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use crate::store::HistoryStore;

/// Maximum number of entries surfaced for display.
pub const DISPLAY_LIMIT: usize = 10;

/// The tool that produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolId {
    Mbti,
    OhCards,
    Bazi,
    Ziwei,
}

impl ToolId {
    /// Display name shown next to history entries.
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolId::Mbti => "MBTI 测试",
            ToolId::OhCards => "OH 卡探索",
            ToolId::Bazi => "八字排盘",
            ToolId::Ziwei => "紫微斗数",
        }
    }
}

/// One completed tool run. The result payload is tool-specific and
/// treated as opaque here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Millisecond-timestamp-derived unique id.
    pub id: i64,
    #[serde(rename = "toolId")]
    pub tool: ToolId,
    #[serde(rename = "toolName")]
    pub tool_name: String,
    /// Formatted local time text.
    pub timestamp: String,
    pub result: Value,
}

/// Owner of the history slice.
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    store: Box<dyn HistoryStore>,
}

impl HistoryLog {
    /// Loads the persisted history, starting empty when nothing usable
    /// is stored.
    pub fn load(store: Box<dyn HistoryStore>) -> Self {
        let entries = store.load().unwrap_or_default();
        Self { entries, store }
    }

    /// Records a completed tool result and persists the full sequence.
    ///
    /// Ids are derived from the current millisecond timestamp; when two
    /// appends land in the same millisecond the id is bumped past the
    /// current head so ids stay unique.
    pub fn append(&mut self, tool: ToolId, result: Value) -> Result<&HistoryEntry> {
        let now = Local::now();
        let mut id = now.timestamp_millis();
        if let Some(head) = self.entries.first() {
            if id <= head.id {
                id = head.id + 1;
            }
        }

        let entry = HistoryEntry {
            id,
            tool,
            tool_name: tool.display_name().to_string(),
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            result,
        };
        self.entries.insert(0, entry);
        self.store.save(&self.entries)?;
        Ok(&self.entries[0])
    }

    /// The display window: at most [`DISPLAY_LIMIT`] newest entries.
    pub fn recent(&self) -> &[HistoryEntry] {
        let len = self.entries.len().min(DISPLAY_LIMIT);
        &self.entries[..len]
    }

    /// The full persisted sequence, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Serializes the entire history as pretty-printed JSON.
    ///
    /// Never mutates state; repeated calls on unchanged state produce
    /// byte-identical output.
    pub fn export_all(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryHistoryStore;
    use serde_json::json;

    fn log() -> (HistoryLog, MemoryHistoryStore) {
        let store = MemoryHistoryStore::default();
        (HistoryLog::load(Box::new(store.clone())), store)
    }

    #[test]
    fn append_prepends_and_persists() {
        let (mut log, store) = log();
        log.append(ToolId::Mbti, json!("ESTJ")).unwrap();
        log.append(ToolId::OhCards, json!({"image": 3})).unwrap();

        assert_eq!(log.entries()[0].tool, ToolId::OhCards);
        assert_eq!(log.entries()[1].tool, ToolId::Mbti);
        assert_eq!(store.snapshot().unwrap().len(), 2);
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let (mut log, _) = log();
        for _ in 0..5 {
            log.append(ToolId::Bazi, json!(null)).unwrap();
        }
        let mut ids: Vec<i64> = log.entries().iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        // Newest first means strictly descending ids.
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn recent_caps_display_but_not_storage() {
        let (mut log, _) = log();
        for _ in 0..13 {
            log.append(ToolId::Ziwei, json!(null)).unwrap();
        }
        assert_eq!(log.recent().len(), DISPLAY_LIMIT);
        assert_eq!(log.entries().len(), 13);
    }

    #[test]
    fn export_is_idempotent_and_does_not_mutate() {
        let (mut log, _) = log();
        log.append(ToolId::Mbti, json!("INFP")).unwrap();

        let first = log.export_all().unwrap();
        let second = log.export_all().unwrap();
        assert_eq!(first, second);
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn tool_ids_use_kebab_case_tags() {
        assert_eq!(serde_json::to_string(&ToolId::OhCards).unwrap(), r#""oh-cards""#);
        assert_eq!(
            serde_json::from_str::<ToolId>(r#""bazi""#).unwrap(),
            ToolId::Bazi
        );
    }
}
