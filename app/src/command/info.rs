use coursebot_config::{Config, VectorStoreFile};
use coursebot_core::KnowledgeBaseSource;

/// Strategy for displaying configuration information.
///
/// Outputs the assistant defaults, the masked API key, and whether the
/// vector store metadata currently resolves.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== coursebot Configuration ===\n");

        println!("API Key:");
        println!("  OpenAI: {}", mask_key(&config.providers.openai.api_key));
        println!();

        println!("Assistant Defaults:");
        println!("  Model: {}", config.assistant.model);
        println!("  Verbosity: {}", config.assistant.verbosity);
        println!("  Max Messages: {}", config.chat.max_messages);
        println!();

        println!("Vector Store:");
        let source = VectorStoreFile::in_config_dir()?;
        println!("  File: {}", source.path().display());
        match source.resolve() {
            Ok(Some(id)) => println!("  Status: Resolved ({id})"),
            Ok(None) => println!("  Status: Not found (chat will retry on use)"),
            Err(e) => {
                println!("  Status: Unreadable");
                println!("  Error: {e}");
            }
        }

        Ok(())
    }
}

fn mask_key(api_key: &str) -> String {
    if api_key.len() > 8 {
        format!("{}...{}", &api_key[..4], &api_key[api_key.len() - 4..])
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_keys_show_only_edges() {
        assert_eq!(mask_key("sk-abcdefghijklmnop"), "sk-a...mnop");
    }

    #[test]
    fn short_keys_are_fully_masked() {
        assert_eq!(mask_key("sk-1"), "***");
    }
}
