pub mod cards;
pub mod chat;
pub mod config;
pub mod history;
pub mod pillars;
pub mod quiz;

use anyhow::Result;
use mindwell_core::history::{HistoryLog, ToolId};
use mindwell_infrastructure::JsonHistoryStore;

/// Opens the history log at its default location.
pub fn open_history() -> Result<HistoryLog> {
    let store = JsonHistoryStore::default_location()?;
    Ok(HistoryLog::load(Box::new(store)))
}

/// Appends a completed tool result and confirms on stdout.
pub fn record_result(tool: ToolId, result: serde_json::Value) -> Result<()> {
    let mut log = open_history()?;
    let entry = log.append(tool, result)?;
    println!("recorded in history at {}", entry.timestamp);
    Ok(())
}
