//! Model artifact loader

use std::path::Path;

use sha2::{Digest, Sha256};

use super::forest::{ForestArtifact, RandomForest};
use super::ModelError;

/// Load and validate the forest stored at `path`.
///
/// Any failure here is a startup failure: the service cannot answer
/// predictions without a model, so callers should not retry.
pub fn load_model(path: &Path) -> Result<RandomForest, ModelError> {
    tracing::info!("Loading model artifact from: {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let digest = format!("{:x}", Sha256::digest(&bytes));
    let artifact: ForestArtifact = serde_json::from_slice(&bytes)?;
    let forest = RandomForest::from_artifact(artifact)?;

    tracing::info!(
        trees = forest.tree_count(),
        classes = ?forest.classes(),
        sha256 = %digest,
        "Model artifact loaded"
    );

    Ok(forest)
}
