//! Multi-turn chat command.
//!
//! Runs either a single exchange (`-m`) or an interactive loop. The loop
//! blocks on each submit, so there is never more than one in-flight request
//! per session.

use std::io::Write;

use tracing::info;

use coursebot_conversation::{
    ConversationConfig, ConversationError, ConversationManager, INITIAL_ASSISTANT_MESSAGE,
    SessionState,
};
use coursebot_core::{KnowledgeBaseSource, ResponseProvider, Verbosity};

use super::{CommandStrategy, init_common_components};
use crate::render;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Optional model override
    pub model: Option<String>,
    /// Optional verbosity override
    pub verbosity: Option<Verbosity>,
}

/// Strategy for executing the Chat command.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components()?;

        let config = ConversationConfig::default()
            .with_model(
                input
                    .model
                    .unwrap_or_else(|| common.config.assistant.model.clone()),
            )
            .with_verbosity(input.verbosity.unwrap_or(common.config.assistant.verbosity));

        let manager = ConversationManager::new(common.provider, common.knowledge_base, config);
        let mut session = SessionState::new().with_max_messages(common.config.chat.max_messages);

        info!("Starting conversation session: {}", session.id);

        if let Some(msg) = input.message {
            // Single message mode
            let reply = manager.submit(&mut session, &msg).await?;
            println!("{reply}");
        } else {
            run_interactive(&manager, &mut session).await?;
            info!(
                "Conversation ended: {} total messages",
                session.message_count()
            );
        }

        Ok(())
    }
}

async fn run_interactive<P, K>(
    manager: &ConversationManager<P, K>,
    session: &mut SessionState,
) -> anyhow::Result<()>
where
    P: ResponseProvider + Send + Sync,
    K: KnowledgeBaseSource + Send + Sync,
{
    println!("=== Time Series Course Assistant ===");
    println!("{INITIAL_ASSISTANT_MESSAGE}");
    println!("\nType 'reset' to start over, 'exit' or 'quit' to leave.\n");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "exit" | "quit" | "q" => {
                println!(
                    "\nSession ended. Total turns: {}",
                    session.message_count() / 2
                );
                break;
            }
            "reset" => {
                manager.reset(session);
                println!("Conversation cleared.\n");
                continue;
            }
            "" => continue,
            _ => {}
        }

        match manager.submit(session, line).await {
            Ok(_) => render::print_tail(session, 2),
            Err(e @ ConversationError::Configuration(_)) => {
                // The user message is retained; the lookup is retried on
                // the next submit.
                render::print_tail(session, 1);
                eprintln!("Configuration problem: {e}");
            }
            Err(e) => {
                render::print_tail(session, 1);
                eprintln!("Error: {e}");
            }
        }
    }

    Ok(())
}
