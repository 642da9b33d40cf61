use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Per-iteration error type for the generation pipeline.
///
/// Every variant is recoverable at the batch-loop boundary: a failed day is
/// logged and skipped, never aborting the run. Only configuration errors
/// (raised in `main` before the batch starts) terminate the process.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Failed to write {path:?}: {source}")]
    Persistence {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
