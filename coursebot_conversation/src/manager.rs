//! Conversation manager for multi-turn dialogue.
//!
//! The `ConversationManager` turns one user utterance into exactly one
//! backend exchange, updating the caller's [`SessionState`] and returning
//! the assistant's reply text.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use coursebot_core::{
    ChatMessage, KnowledgeBaseSource, ResponseProvider, ResponseRequest, Role, Verbosity,
};

use crate::prompt::{INITIAL_ASSISTANT_MESSAGE, SYSTEM_INSTRUCTIONS};
use crate::session::SessionState;

/// Configuration for conversation management.
#[derive(Debug, Clone)]
pub struct ConversationConfig {
    /// Model to use for generation
    pub model: String,
    /// Reply terseness forwarded to the backend
    pub verbosity: Verbosity,
    /// Instruction block seeded on the first turn of a session
    pub system_instructions: String,
    /// Greeting seeded as the first assistant message
    pub initial_assistant_message: String,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            model: "gpt-5-nano".to_string(),
            verbosity: Verbosity::Low,
            system_instructions: SYSTEM_INSTRUCTIONS.to_string(),
            initial_assistant_message: INITIAL_ASSISTANT_MESSAGE.to_string(),
        }
    }
}

impl ConversationConfig {
    /// Set the model name.
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Set the reply verbosity.
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// Errors that can occur while processing a turn.
#[derive(Debug, Error)]
pub enum ConversationError {
    /// The knowledge-base identifier could not be resolved. Recoverable:
    /// the next submit retries the lookup.
    #[error("knowledge base not configured: {0}")]
    Configuration(String),

    /// Any failure of the generation backend (transport, auth, rate limit,
    /// malformed response). The session keeps the user's message but gains
    /// no assistant message and no new continuation token.
    #[error("generation backend error: {0}")]
    Remote(anyhow::Error),

    /// The backend returned blank reply text. Treated like a remote
    /// failure for state purposes.
    #[error("empty response from generation backend")]
    EmptyResponse,

    /// The utterance was empty after trimming. Rejected before any state
    /// mutation or remote call.
    #[error("utterance is empty")]
    EmptyUtterance,
}

/// Multi-turn conversation manager.
///
/// Holds the injected backend provider and knowledge-base source; session
/// state is passed in per call, so one manager serves any number of
/// independent sessions. The caller must keep at most one `submit` in
/// flight per session.
pub struct ConversationManager<P = Arc<dyn ResponseProvider>, K = Arc<dyn KnowledgeBaseSource>>
where
    P: Send + Sync,
    K: Send + Sync,
{
    provider: P,
    knowledge_base: K,
    config: ConversationConfig,
}

impl<P, K> ConversationManager<P, K>
where
    P: ResponseProvider + Send + Sync,
    K: KnowledgeBaseSource + Send + Sync,
{
    /// Create a new conversation manager.
    pub fn new(provider: P, knowledge_base: K, config: ConversationConfig) -> Self {
        info!("Creating conversation manager: model={}", config.model);
        Self {
            provider,
            knowledge_base,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ConversationConfig {
        &self.config
    }

    /// Process one user utterance: append it, dispatch exactly one backend
    /// request, record the reply and the new continuation token, and
    /// return the reply text.
    ///
    /// On any failure after the user message was appended, the session is
    /// left with that message retained and everything else untouched, so
    /// user input is never silently dropped.
    pub async fn submit(
        &self,
        session: &mut SessionState,
        utterance: &str,
    ) -> Result<String, ConversationError> {
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return Err(ConversationError::EmptyUtterance);
        }

        let turn_number = session.message_count() / 2 + 1;
        debug!("Processing turn {turn_number} for session {}", session.id);

        session.append(Role::User, utterance.to_string());

        let vector_store_id = self.ensure_vector_store(session)?;
        let request = self.build_request(session, utterance, vector_store_id);

        debug!(
            "Dispatching request: {} input item(s), continuation={}",
            request.input.len(),
            request.previous_response_id.is_some()
        );

        let response = self
            .provider
            .respond(&request)
            .await
            .map_err(ConversationError::Remote)?;

        if response.output_text.trim().is_empty() {
            return Err(ConversationError::EmptyResponse);
        }

        session.last_response_id = Some(response.id);
        session.append(Role::Assistant, response.output_text.clone());

        if let Some(usage) = &response.usage {
            debug!(
                "Turn {turn_number} tokens: {} input + {} output = {} total",
                usage.input_tokens, usage.output_tokens, usage.total_tokens
            );
        }
        info!("Turn {turn_number} completed for session {}", session.id);

        Ok(response.output_text)
    }

    /// Clear the conversation. Purely local: the backend needs no
    /// close-conversation call, and the knowledge-base identifier is kept.
    pub fn reset(&self, session: &mut SessionState) {
        info!("Resetting session {}", session.id);
        session.reset();
    }

    /// Return the cached knowledge-base identifier, resolving it on first
    /// use. An unresolved lookup is reported as a configuration error and
    /// retried on the next submit.
    fn ensure_vector_store(
        &self,
        session: &mut SessionState,
    ) -> Result<String, ConversationError> {
        if let Some(id) = &session.vector_store_id {
            return Ok(id.clone());
        }

        let resolved = self
            .knowledge_base
            .resolve()
            .map_err(|e| ConversationError::Configuration(e.to_string()))?;

        resolved.map_or_else(
            || {
                Err(ConversationError::Configuration(
                    "vector store id not found in knowledge-base metadata".to_string(),
                ))
            },
            |id| {
                info!("Resolved vector store for session {}: {id}", session.id);
                session.vector_store_id = Some(id.clone());
                Ok(id)
            },
        )
    }

    /// Build the backend request for this turn.
    ///
    /// First turn: a three-part seed (system instructions, fixed greeting,
    /// user utterance) and no continuation token. Later turns: only the new
    /// user utterance plus the stored token; the seed is never resent.
    fn build_request(
        &self,
        session: &SessionState,
        utterance: &str,
        vector_store_id: String,
    ) -> ResponseRequest {
        let input = if session.last_response_id.is_none() {
            vec![
                ChatMessage {
                    role: Role::System,
                    content: self.config.system_instructions.clone(),
                },
                ChatMessage {
                    role: Role::Assistant,
                    content: self.config.initial_assistant_message.clone(),
                },
                ChatMessage {
                    role: Role::User,
                    content: utterance.to_string(),
                },
            ]
        } else {
            vec![ChatMessage {
                role: Role::User,
                content: utterance.to_string(),
            }]
        };

        ResponseRequest {
            model: self.config.model.clone(),
            input,
            previous_response_id: session.last_response_id.clone(),
            vector_store_id,
            verbosity: self.config.verbosity,
        }
    }
}
