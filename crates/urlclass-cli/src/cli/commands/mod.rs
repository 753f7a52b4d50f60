//! CLI command handlers, one per file.

mod classify;
mod completions;
mod features;
mod serve;

pub use classify::run_classify;
pub use completions::run_completions;
pub use features::run_features;
pub use serve::run_serve;

use anyhow::Result;
use std::path::Path;
use urlclass_core::classify::UrlClassifier;
use urlclass_core::config::UrlclassConfig;
use urlclass_core::model;

/// Loads the configured (or overridden) model and wraps it in the pipeline.
fn load_classifier(cfg: &UrlclassConfig, model_override: Option<&Path>) -> Result<UrlClassifier> {
    let path = cfg.resolve_model_path(model_override)?;
    let forest = model::load_model(&path)?;
    Ok(UrlClassifier::new(Box::new(forest)).with_max_url_length(cfg.max_url_length))
}
