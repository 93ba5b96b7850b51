//! Knowledge-base metadata lookup.
//!
//! The vector store backing the retrieval tool is provisioned out of band;
//! its identifier is published in a small JSON metadata file next to the
//! config. A missing file is "not found yet", not an error: callers retry
//! on next use.

use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

use coursebot_core::KnowledgeBaseSource;

/// File name of the vector store metadata, relative to the config dir.
pub const VECTOR_STORE_FILE: &str = "_vector_store.json";

#[derive(Debug, Deserialize)]
struct VectorStoreMeta {
    id: Option<String>,
}

/// File-backed [`KnowledgeBaseSource`].
#[derive(Debug, Clone)]
pub struct VectorStoreFile {
    path: PathBuf,
}

impl VectorStoreFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Metadata file at its default location under the config dir.
    pub fn in_config_dir() -> anyhow::Result<Self> {
        Ok(Self::new(
            crate::Config::ensure_config_dir()?.join(VECTOR_STORE_FILE),
        ))
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl KnowledgeBaseSource for VectorStoreFile {
    fn resolve(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            warn!("Vector store file not found: {}", self.path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let meta: VectorStoreMeta = serde_json::from_str(&content)?;
        Ok(meta.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("coursebot_{}_{name}.json", std::process::id()))
    }

    #[test]
    fn missing_file_resolves_to_none() {
        let source = VectorStoreFile::new(temp_path("missing"));
        let resolved = source.resolve();
        assert!(matches!(resolved, Ok(None)));
    }

    #[test]
    fn reads_id_from_metadata_file() {
        let path = temp_path("present");
        let written = std::fs::write(&path, r#"{ "id": "vs_42", "name": "course-files" }"#);
        assert!(written.is_ok());

        let resolved = VectorStoreFile::new(path.clone()).resolve();
        assert!(matches!(resolved, Ok(Some(ref id)) if id == "vs_42"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn malformed_metadata_is_an_error() {
        let path = temp_path("malformed");
        let written = std::fs::write(&path, "not json");
        assert!(written.is_ok());

        let resolved = VectorStoreFile::new(path.clone()).resolve();
        assert!(resolved.is_err());

        let _ = std::fs::remove_file(path);
    }
}
