//! Classifier interface and the random-forest backend.
//!
//! The pipeline only depends on [`Classifier`]; the model file format is an
//! implementation detail of [`ForestModel`].

mod error;
mod forest;

pub use error::ModelError;
pub use forest::{ForestModel, Tree};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::checksum;
use crate::features::FeatureVector;
use crate::label::UrlClass;

/// Model output for one URL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class: UrlClass,
    /// Share of the ensemble vote behind `class`, in `[0, 1]`.
    pub confidence: f64,
}

/// Trait implemented by model backends. Implementations are immutable after
/// loading and shared read-only between requests.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError>;
}

/// Loads a forest from `path` and logs its SHA-256.
pub fn load_model(path: &Path) -> Result<ForestModel> {
    let bytes = fs::read(path).with_context(|| format!("read model {}", path.display()))?;
    let digest = checksum::sha256_hex(&bytes);
    let text = std::str::from_utf8(&bytes)
        .with_context(|| format!("model {} is not UTF-8", path.display()))?;
    let model = ForestModel::from_json(text)
        .with_context(|| format!("load model {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        sha256 = %digest,
        trees = model.tree_count(),
        "loaded model"
    );
    Ok(model)
}
