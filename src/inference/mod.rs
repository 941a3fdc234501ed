//! Inference service
//!
//! Owns the pre-trained classifier. The classifier is loaded once at
//! startup and shared read-only behind an `Arc` for the process lifetime.

pub mod forest;
pub mod loader;

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TransactionRecord;

pub use loader::load_model;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model artifact is incompatible: {0}")]
    Schema(String),

    #[error("inference failed: {0}")]
    Inference(String),
}

/// Binary classifier over a single transaction record.
pub trait Classifier: Send + Sync {
    /// Short description used by the health endpoint
    fn name(&self) -> &str;

    /// Score exactly one record and return its class.
    fn predict(&self, record: &TransactionRecord) -> Result<i64, ModelError>;
}
