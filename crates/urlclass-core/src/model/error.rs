//! Errors raised while loading or evaluating a model.

use crate::label::UrlClass;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file is not valid forest JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model expects {found} features, extractor produces {expected}")]
    FeatureCount { expected: usize, found: usize },
    #[error("model has no trees")]
    NoTrees,
    #[error("model has no classes")]
    NoClasses,
    #[error("class {0} listed more than once")]
    DuplicateClass(UrlClass),
    #[error("tree {tree}: {reason}")]
    MalformedTree { tree: usize, reason: String },
    #[error("tree {tree}: walk did not reach a leaf")]
    NoLeaf { tree: usize },
}
