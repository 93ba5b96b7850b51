#![warn(
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

//! Multi-turn conversation support over a stateful generation backend.
//!
//! Unlike a transcript-replay design, continuation happens server-side: each
//! successful response yields a token that resumes the prior context on the
//! next turn, so only the new user utterance travels over the wire.
//!
//! # Key Features
//! - Explicit per-user session state with a bounded message history
//! - First-turn seeding with persona instructions and a fixed greeting
//! - Typed failure taxonomy that never drops the user's own message

mod manager;
mod prompt;
mod session;

pub use manager::{ConversationConfig, ConversationError, ConversationManager};
pub use prompt::{INITIAL_ASSISTANT_MESSAGE, SYSTEM_INSTRUCTIONS};
pub use session::{DEFAULT_MAX_MESSAGES, SessionState};
