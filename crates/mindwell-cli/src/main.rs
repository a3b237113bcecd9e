use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mindwell")]
#[command(about = "Mindwell - a self-exploration toolbox", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the personality quiz
    Quiz {
        /// Pre-selected answer letters in question order (e.g. "EISNTFJP");
        /// omitted trailing questions count as unanswered
        #[arg(long)]
        answers: String,
    },
    /// Draw one image card and one word card
    Cards,
    /// Compute the four pillars for a birth date and time
    Pillars {
        /// Birth date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Birth time as HH:MM
        #[arg(long, default_value = "12:00")]
        time: String,
    },
    /// Talk to the AI coach
    Chat {
        /// Message to send; omit together with --reset to clear the transcript
        text: Option<String>,
        /// Reset the transcript to the seeded greeting
        #[arg(long)]
        reset: bool,
        /// Confirm the reset without prompting
        #[arg(long)]
        yes: bool,
    },
    /// Show or change AI provider settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Show or export tool history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration (the API key is masked)
    Show,
    /// Select a provider (openai, deepseek, moonshot, yi, custom)
    SetProvider { provider: String },
    /// Store the API key
    SetKey { key: String },
    /// Override the base URL
    SetBaseUrl { base_url: String },
    /// Override the model identifier
    SetModel { model: String },
    /// Replace the system prompt
    SetPrompt { prompt: String },
    /// Restore the built-in system prompt
    RestorePrompt,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List the most recent entries
    List,
    /// Export the full history to a dated JSON file
    Export {
        /// Directory to write the export into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Quiz { answers } => commands::quiz::run(&answers)?,
        Commands::Cards => commands::cards::run()?,
        Commands::Pillars { date, time } => commands::pillars::run(&date, &time)?,
        Commands::Chat { text, reset, yes } => commands::chat::run(text, reset, yes).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show()?,
            ConfigAction::SetProvider { provider } => commands::config::set_provider(&provider)?,
            ConfigAction::SetKey { key } => commands::config::set_key(key)?,
            ConfigAction::SetBaseUrl { base_url } => commands::config::set_base_url(base_url)?,
            ConfigAction::SetModel { model } => commands::config::set_model(model)?,
            ConfigAction::SetPrompt { prompt } => commands::config::set_prompt(prompt)?,
            ConfigAction::RestorePrompt => commands::config::restore_prompt()?,
        },
        Commands::History { action } => match action {
            HistoryAction::List => commands::history::list()?,
            HistoryAction::Export { dir } => commands::history::export(&dir)?,
        },
    }

    Ok(())
}
