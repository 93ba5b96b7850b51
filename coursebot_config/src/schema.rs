use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use coursebot_core::Verbosity;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssistantConfig {
    pub model: String,
    #[serde(default)]
    pub verbosity: Verbosity,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatConfig {
    /// Cap on locally retained messages per session.
    #[serde(default = "ChatConfig::default_max_messages")]
    pub max_messages: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_messages: Self::default_max_messages(),
        }
    }
}

impl ChatConfig {
    const fn default_max_messages() -> usize {
        100
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub openai: ProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::ensure_config_dir()?.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'coursebot init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("coursebot");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, Self::TEMPLATE)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Edit the config file and add your OpenAI API key");
        println!(
            "   2. Place the vector store metadata file at {}",
            config_dir.join(crate::VECTOR_STORE_FILE).display()
        );
        println!("   3. Run 'coursebot chat' to start a conversation");
        println!();
        println!("Configuration options:");
        println!("   - model: generation model to use (gpt-5-nano, gpt-4, ...)");
        println!("   - verbosity: reply terseness (low, medium, high)");
        println!("   - chat.max_messages: messages kept in local history per session");
        println!();
        Ok(())
    }

    const TEMPLATE: &str = r#"{
  "assistant": {
    "model": "gpt-5-nano",
    "verbosity": "low"
  },
  "providers": {
    "openai": {
      "api_key": "your-openai-api-key-here"
    }
  },
  "chat": {
    "max_messages": 100
  }
}"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses() {
        let parsed: Result<Config, _> = serde_json::from_str(Config::TEMPLATE);
        let Ok(config) = parsed else {
            panic!("template must parse: {parsed:?}");
        };
        assert_eq!(config.assistant.model, "gpt-5-nano");
        assert_eq!(config.assistant.verbosity, Verbosity::Low);
        assert_eq!(config.chat.max_messages, 100);
    }

    #[test]
    fn chat_section_is_optional() {
        let parsed: Result<Config, _> = serde_json::from_str(
            r#"{
              "assistant": { "model": "gpt-4" },
              "providers": { "openai": { "api_key": "sk-test" } }
            }"#,
        );
        let Ok(config) = parsed else {
            panic!("minimal config must parse: {parsed:?}");
        };
        assert_eq!(config.chat.max_messages, 100);
        assert_eq!(config.assistant.verbosity, Verbosity::Low);
    }
}
