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

//! Configuration loading and knowledge-base metadata lookup.

mod schema;
mod vector_store;

pub use schema::{AssistantConfig, ChatConfig, Config, ProviderConfig, ProvidersConfig};
pub use vector_store::{VECTOR_STORE_FILE, VectorStoreFile};
