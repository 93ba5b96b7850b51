//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically so the whole command surface is monomorphized at compile
//! time.

use coursebot_config::{Config, VectorStoreFile};
use coursebot_providers::OpenAiProvider;
use tracing::info;

mod chat;
mod info;
mod init;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Components shared by the commands that talk to the backend.
pub struct CommonComponents {
    pub config: Config,
    pub provider: OpenAiProvider,
    pub knowledge_base: VectorStoreFile,
}

/// Load the config and build the injected collaborators: one provider
/// client per process, one knowledge-base source pointing at the metadata
/// file in the config dir.
pub fn init_common_components() -> anyhow::Result<CommonComponents> {
    let config = Config::load()?;
    info!("Loaded config from ~/coursebot/config.json");

    let provider = OpenAiProvider::new(config.providers.openai.api_key.clone());
    let knowledge_base = VectorStoreFile::in_config_dir()?;

    Ok(CommonComponents {
        config,
        provider,
        knowledge_base,
    })
}
