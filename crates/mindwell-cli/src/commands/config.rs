use anyhow::Result;

use mindwell_core::config::{ConfigManager, Provider};
use mindwell_infrastructure::JsonConfigStore;

fn open() -> Result<ConfigManager> {
    let store = JsonConfigStore::default_location()?;
    Ok(ConfigManager::load(Box::new(store)))
}

pub fn show() -> Result<()> {
    let manager = open()?;
    let config = manager.config();
    println!("provider:  {}", config.provider.as_str());
    println!("base url:  {}", config.base_url);
    println!("model:     {}", config.model);
    println!("api key:   {}", mask(&config.api_key));
    println!("prompt:    {} chars", config.system_prompt.chars().count());
    Ok(())
}

pub fn set_provider(provider: &str) -> Result<()> {
    let provider: Provider = provider.parse()?;
    let mut manager = open()?;
    manager.set_provider(provider)?;
    let config = manager.config();
    println!(
        "provider set to {} (base url '{}', model '{}')",
        config.provider.as_str(),
        config.base_url,
        config.model
    );
    Ok(())
}

pub fn set_key(key: String) -> Result<()> {
    open()?.set_api_key(key)?;
    println!("api key updated");
    Ok(())
}

pub fn set_base_url(base_url: String) -> Result<()> {
    open()?.set_base_url(base_url)?;
    println!("base url updated");
    Ok(())
}

pub fn set_model(model: String) -> Result<()> {
    open()?.set_model(model)?;
    println!("model updated");
    Ok(())
}

pub fn set_prompt(prompt: String) -> Result<()> {
    open()?.set_system_prompt(prompt)?;
    println!("system prompt updated");
    Ok(())
}

pub fn restore_prompt() -> Result<()> {
    open()?.restore_prompt()?;
    println!("system prompt restored to the built-in default");
    Ok(())
}

/// Masks all but the key's first and last three characters.
fn mask(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }
    if key.chars().count() <= 8 {
        return "********".to_string();
    }
    let head: String = key.chars().take(3).collect();
    let tail: String = key.chars().rev().take(3).collect::<Vec<_>>().into_iter().rev().collect();
    format!("{head}...{tail}")
}
