use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};

use mindwell_core::MindwellError;
use mindwell_core::chat::ChatSession;
use mindwell_core::config::ConfigManager;
use mindwell_infrastructure::{JsonConfigStore, JsonTranscriptStore};
use mindwell_interaction::CompletionClient;

pub async fn run(text: Option<String>, reset: bool, yes: bool) -> Result<()> {
    let transcript_store = JsonTranscriptStore::default_location()?;
    let mut session = ChatSession::load(Box::new(transcript_store));

    if reset {
        if !yes && !confirm("Clear the whole conversation?")? {
            println!("reset cancelled");
            return Ok(());
        }
        session.reset()?;
        println!("{}", session.transcript()[0].content);
        return Ok(());
    }

    let Some(text) = text else {
        bail!("nothing to send; pass a message or --reset");
    };

    let config_store = JsonConfigStore::default_location()?;
    let manager = ConfigManager::load(Box::new(config_store));
    let client = CompletionClient::new();

    match session.send(&text, manager.config(), &client).await {
        Ok(reply) => {
            println!("{reply}");
            Ok(())
        }
        Err(err @ MindwellError::Config(_)) => {
            bail!("{err}\nhint: run `mindwell config set-key <key>` first");
        }
        Err(err) => {
            // The user turn is retained; resubmitting is safe.
            bail!("{err}");
        }
    }
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
