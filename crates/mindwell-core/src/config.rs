//! AI provider configuration.
//!
//! Provider selection drives derived defaults: picking a known provider
//! overwrites the base URL and model from its preset pair, while the API
//! key and system prompt are never auto-overwritten. The preset lookup is
//! a pure function applied explicitly by [`AiConfig::set_provider`], so
//! the overwrite is auditable rather than hidden inside a generic setter.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::ConfigStore;
use crate::{MindwellError, Result};

/// The built-in coaching instruction injected as the system message.
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"As a professional Life Coach, you are here to help the user through a journey of self-discovery and problem-solving using the GROW model (Goal, Reality, Options, Will).

Your core principles:
1.  **Empathy & Active Listening**: Validate the user's feelings. Reflect back what you hear to ensure understanding.
2.  **Powerful Questioning**: Ask open-ended questions (starting with What, How, When, Who) to provoke deep thinking. Avoid "Why" as it can sound judgmental.
3.  **Non-Directive**: Do not give advice or solutions unless explicitly asked or after the user is stuck. Your goal is to help them find their own answers.
4.  **Structure (GROW)**:
    -   **Goal**: What do they want to achieve? (Make it SMART: Specific, Measurable, Achievable, Relevant, Time-bound).
    -   **Reality**: What is happening now? What have they tried? What are the obstacles?
    -   **Options**: What could they do? Brainstorm possibilities without judgment.
    -   **Will**: What *will* they do? Commit to a specific action plan.

Start by asking what topic they would like to explore today. Maintain a supportive, encouraging, and professional tone."#;

/// Supported chat-completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    DeepSeek,
    Moonshot,
    Yi,
    Custom,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::DeepSeek => "deepseek",
            Provider::Moonshot => "moonshot",
            Provider::Yi => "yi",
            Provider::Custom => "custom",
        }
    }
}

impl FromStr for Provider {
    type Err = MindwellError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "deepseek" => Ok(Provider::DeepSeek),
            "moonshot" => Ok(Provider::Moonshot),
            "yi" => Ok(Provider::Yi),
            "custom" => Ok(Provider::Custom),
            other => Err(MindwellError::invalid_input(format!(
                "unknown provider '{other}' (expected openai, deepseek, moonshot, yi or custom)"
            ))),
        }
    }
}

/// A provider's fixed base URL + model pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderPreset {
    pub base_url: &'static str,
    pub model: &'static str,
}

/// Returns the preset pair for a provider, or `None` for [`Provider::Custom`]
/// (custom endpoints are left for the caller to fill in).
pub fn preset_for(provider: Provider) -> Option<ProviderPreset> {
    match provider {
        Provider::OpenAi => Some(ProviderPreset {
            base_url: "https://api.openai.com/v1",
            model: "gpt-4o",
        }),
        Provider::DeepSeek => Some(ProviderPreset {
            base_url: "https://api.deepseek.com",
            model: "deepseek-chat",
        }),
        Provider::Moonshot => Some(ProviderPreset {
            base_url: "https://api.moonshot.cn/v1",
            model: "moonshot-v1-8k",
        }),
        Provider::Yi => Some(ProviderPreset {
            base_url: "https://api.lingyiwanwu.com/v1",
            model: "yi-large",
        }),
        Provider::Custom => None,
    }
}

/// The whole AI configuration record.
///
/// The API key never leaves the local environment except as an outbound
/// request header; keep it out of logs and error messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub provider: Provider,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub system_prompt: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        // Safe to unwrap: OpenAi always has a preset.
        let preset = preset_for(Provider::OpenAi).unwrap();
        Self {
            provider: Provider::OpenAi,
            api_key: String::new(),
            base_url: preset.base_url.to_string(),
            model: preset.model.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl AiConfig {
    /// Whether a usable (non-blank) API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Changes the provider, applying its preset pair.
    ///
    /// Selecting a known provider overwrites `base_url` and `model` from
    /// the preset. Transitioning into `Custom` clears both to empty;
    /// re-selecting the current provider (custom included) changes
    /// nothing. `api_key` and `system_prompt` are never touched.
    pub fn set_provider(&mut self, provider: Provider) {
        if provider == self.provider {
            return;
        }
        self.provider = provider;
        match preset_for(provider) {
            Some(preset) => {
                self.base_url = preset.base_url.to_string();
                self.model = preset.model.to_string();
            }
            None => {
                self.base_url.clear();
                self.model.clear();
            }
        }
    }

    /// Resets only the system prompt to the built-in default.
    pub fn restore_prompt(&mut self) {
        self.system_prompt = DEFAULT_SYSTEM_PROMPT.to_string();
    }
}

/// Owner of the configuration slice: wraps the record together with its
/// persistence backend so every mutation writes the whole record.
pub struct ConfigManager {
    config: AiConfig,
    store: Box<dyn ConfigStore>,
}

impl ConfigManager {
    /// Loads the persisted configuration, falling back to defaults when
    /// nothing usable is stored.
    pub fn load(store: Box<dyn ConfigStore>) -> Self {
        let config = store.load().unwrap_or_default();
        Self { config, store }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn set_provider(&mut self, provider: Provider) -> Result<()> {
        self.config.set_provider(provider);
        self.persist()
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> Result<()> {
        self.config.api_key = api_key.into();
        self.persist()
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> Result<()> {
        self.config.base_url = base_url.into();
        self.persist()
    }

    pub fn set_model(&mut self, model: impl Into<String>) -> Result<()> {
        self.config.model = model.into();
        self.persist()
    }

    pub fn set_system_prompt(&mut self, prompt: impl Into<String>) -> Result<()> {
        self.config.system_prompt = prompt.into();
        self.persist()
    }

    /// Resets only the system prompt field; the transcript is untouched.
    pub fn restore_prompt(&mut self) -> Result<()> {
        self.config.restore_prompt();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryConfigStore;

    #[test]
    fn default_config_uses_openai_preset() {
        let config = AiConfig::default();
        assert_eq!(config.provider, Provider::OpenAi);
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o");
        assert!(!config.has_api_key());
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn switching_provider_applies_preset_pair() {
        let mut config = AiConfig::default();
        config.api_key = "sk-test".to_string();
        config.set_provider(Provider::DeepSeek);

        assert_eq!(config.base_url, "https://api.deepseek.com");
        assert_eq!(config.model, "deepseek-chat");
        // Key and prompt survive provider changes.
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn transition_into_custom_clears_endpoint_once() {
        let mut config = AiConfig::default();
        config.set_provider(Provider::Custom);
        assert_eq!(config.base_url, "");
        assert_eq!(config.model, "");

        // User fills in their own endpoint; re-selecting custom keeps it.
        config.base_url = "https://llm.internal".to_string();
        config.model = "local-model".to_string();
        config.set_provider(Provider::Custom);
        assert_eq!(config.base_url, "https://llm.internal");
        assert_eq!(config.model, "local-model");
    }

    #[test]
    fn restore_prompt_only_touches_prompt() {
        let mut config = AiConfig::default();
        config.system_prompt = "be terse".to_string();
        config.api_key = "sk-test".to_string();
        config.restore_prompt();

        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(config.api_key, "sk-test");
    }

    #[test]
    fn provider_parses_from_str() {
        assert_eq!("deepseek".parse::<Provider>().unwrap(), Provider::DeepSeek);
        assert_eq!(" OpenAI ".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert!("claude".parse::<Provider>().is_err());
    }

    #[test]
    fn provider_tags_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&Provider::OpenAi).unwrap(),
            r#""openai""#
        );
        assert_eq!(
            serde_json::from_str::<Provider>(r#""deepseek""#).unwrap(),
            Provider::DeepSeek
        );
    }

    #[test]
    fn manager_persists_whole_record_on_every_write() {
        let store = MemoryConfigStore::default();
        let mut manager = ConfigManager::load(Box::new(store.clone()));

        manager.set_provider(Provider::Moonshot).unwrap();
        manager.set_api_key("sk-abc").unwrap();

        let saved = store.snapshot().expect("config saved");
        assert_eq!(saved.provider, Provider::Moonshot);
        assert_eq!(saved.base_url, "https://api.moonshot.cn/v1");
        assert_eq!(saved.api_key, "sk-abc");
    }

    #[test]
    fn manager_falls_back_to_defaults_without_stored_state() {
        let manager = ConfigManager::load(Box::new(MemoryConfigStore::default()));
        assert_eq!(manager.config(), &AiConfig::default());
    }
}
