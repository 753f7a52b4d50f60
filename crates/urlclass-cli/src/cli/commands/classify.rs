//! `urlclass classify <url>` – one-shot classification.

use anyhow::Result;
use std::path::Path;
use urlclass_core::config::UrlclassConfig;

use super::load_classifier;

pub async fn run_classify(cfg: &UrlclassConfig, url: &str, model: Option<&Path>) -> Result<()> {
    let classifier = load_classifier(cfg, model)?;
    let c = classifier.classify(url)?;
    println!(
        "The URL is classified as {} ({:.0}% of the ensemble vote)",
        c.prediction.class,
        c.prediction.confidence * 100.0
    );
    Ok(())
}
