//! History export to a dated JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use mindwell_core::Result;
use mindwell_core::history::HistoryLog;

/// Writes the entire history to
/// `<dir>/know-yourself-export-YYYY-MM-DD.json` and returns the path.
///
/// The log itself is not mutated; the file content is exactly
/// [`HistoryLog::export_all`].
pub fn export_history(log: &HistoryLog, dir: &Path) -> Result<PathBuf> {
    let json = log.export_all()?;
    let file_name = format!("know-yourself-export-{}.json", Local::now().format("%Y-%m-%d"));
    let path = dir.join(file_name);
    fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindwell_core::history::ToolId;
    use mindwell_core::store::memory::MemoryHistoryStore;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn exports_the_full_sequence_verbatim() {
        let mut log = HistoryLog::load(Box::new(MemoryHistoryStore::default()));
        log.append(ToolId::Mbti, json!("ENTP")).unwrap();
        log.append(ToolId::Bazi, json!({"day": {"stem": "戊"}})).unwrap();

        let dir = TempDir::new().unwrap();
        let path = export_history(&log, dir.path()).unwrap();

        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("know-yourself-export-"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, log.export_all().unwrap());

        // Exporting twice with unchanged state is byte-identical.
        let again = export_history(&log, dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&again).unwrap(), written);
        assert_eq!(log.entries().len(), 2);
    }
}
