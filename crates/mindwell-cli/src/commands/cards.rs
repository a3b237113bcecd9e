use anyhow::Result;

use mindwell_core::history::ToolId;
use mindwell_core::tools::cards;

pub fn run() -> Result<()> {
    let drawn = cards::draw(&mut rand::thread_rng());
    println!("image card: #{}", drawn.image);
    println!("word card:  #{} {}", drawn.word.index, drawn.word.text);

    super::record_result(ToolId::OhCards, serde_json::to_value(&drawn)?)
}
