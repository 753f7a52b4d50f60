//! `urlclass serve` – run the web form.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use urlclass_core::config::UrlclassConfig;

use super::load_classifier;
use crate::web;

pub async fn run_serve(
    cfg: &UrlclassConfig,
    bind: Option<&str>,
    model: Option<&Path>,
) -> Result<()> {
    // Model load failures abort before the port is bound.
    let classifier = load_classifier(cfg, model)?;
    let addr = bind.unwrap_or(cfg.bind_addr.as_str());
    web::serve(addr, Arc::new(classifier)).await
}
