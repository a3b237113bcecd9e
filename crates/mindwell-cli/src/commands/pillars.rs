use anyhow::{Context, Result};
use chrono::NaiveDate;

use mindwell_core::history::ToolId;
use mindwell_core::tools::pillars::compute_pillars;

pub fn run(date: &str, time: &str) -> Result<()> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("'{date}' is not a YYYY-MM-DD date"))?;
    let chart = compute_pillars(date, time)?;

    println!("年柱: {}{}", chart.year.stem, chart.year.branch);
    println!("月柱: {}{}", chart.month.stem, chart.month.branch);
    println!("日柱: {}{}", chart.day.stem, chart.day.branch);
    println!("时柱: {}{}", chart.hour.stem, chart.hour.branch);

    super::record_result(ToolId::Bazi, serde_json::to_value(&chart)?)
}
