use std::path::Path;

use anyhow::Result;

use mindwell_infrastructure::export::export_history;

pub fn list() -> Result<()> {
    let log = super::open_history()?;
    if log.entries().is_empty() {
        println!("no history yet");
        return Ok(());
    }

    for entry in log.recent() {
        println!("{}  {:10}  {}", entry.timestamp, entry.tool_name, entry.result);
    }
    let hidden = log.entries().len().saturating_sub(log.recent().len());
    if hidden > 0 {
        println!("... and {hidden} older entries (use export for the full archive)");
    }
    Ok(())
}

pub fn export(dir: &Path) -> Result<()> {
    let log = super::open_history()?;
    let path = export_history(&log, dir)?;
    println!("exported {} entries to {}", log.entries().len(), path.display());
    Ok(())
}
