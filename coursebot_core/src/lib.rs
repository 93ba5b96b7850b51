#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Shared types for the coursebot workspace.
//!
//! Defines the message model exchanged with the generation backend and the
//! two seams the conversation layer depends on: the response provider and
//! the knowledge-base metadata lookup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One exchanged utterance. Assistant content may carry light HTML
/// formatting; the render layer is responsible for sanitizing user content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Terseness of generated replies, forwarded verbatim to the backend.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    #[default]
    Low,
    Medium,
    High,
}

impl Verbosity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown verbosity '{other}' (low, medium, high)")),
        }
    }
}

/// One request to the generation backend.
///
/// Either `input` carries the full seed sequence (first turn) or a single
/// new user message together with `previous_response_id` (continuation).
#[derive(Debug, Clone)]
pub struct ResponseRequest {
    pub model: String,
    pub input: Vec<ChatMessage>,
    /// Continuation token from the previous successful response, if any.
    pub previous_response_id: Option<String>,
    /// Vector store searched by the retrieval tool during generation.
    pub vector_store_id: String,
    pub verbosity: Verbosity,
}

/// Successful reply from the generation backend.
#[derive(Debug, Clone)]
pub struct GeneratedResponse {
    /// Server-side response id, used as the continuation token for the
    /// next turn.
    pub id: String,
    pub output_text: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

#[async_trait]
pub trait ResponseProvider: Send + Sync {
    async fn respond(&self, request: &ResponseRequest) -> anyhow::Result<GeneratedResponse>;
    fn default_model(&self) -> &str;
}

/// Read-only lookup for the knowledge-base identifier.
///
/// `Ok(None)` means "not found yet" and is recoverable: callers retry on
/// next access rather than treating it as a permanent failure.
pub trait KnowledgeBaseSource: Send + Sync {
    fn resolve(&self) -> anyhow::Result<Option<String>>;
}
