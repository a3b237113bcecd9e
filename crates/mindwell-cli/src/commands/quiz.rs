use anyhow::Result;
use serde_json::json;

use mindwell_core::history::ToolId;
use mindwell_core::tools::personality::{Answers, QUESTIONS, score};

/// Scores pre-selected answer letters, one per question in catalog
/// order. Fewer letters than questions leaves the rest unanswered.
pub fn run(answers: &str) -> Result<()> {
    let mut recorded = Answers::new();
    for (question, letter) in QUESTIONS.iter().zip(answers.trim().chars()) {
        recorded.record(question.id, letter.to_ascii_uppercase())?;
    }

    let code = score(&recorded);
    println!("{} ({} of {} answered)", code, recorded.len(), QUESTIONS.len());

    super::record_result(ToolId::Mbti, json!(code))
}
