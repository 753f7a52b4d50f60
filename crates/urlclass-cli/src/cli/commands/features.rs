//! `urlclass features <url>` – show the extracted feature vector.

use anyhow::Result;
use urlclass_core::features::{extract_features, FeatureVector};

fn format_features(fv: &FeatureVector) -> String {
    let mut out = format!("{:<20} {}\n", "FEATURE", "VALUE");
    for (name, value) in fv.named() {
        out.push_str(&format!("{:<20} {}\n", name, value));
    }
    out
}

pub async fn run_features(url: &str) -> Result<()> {
    let fv = extract_features(url.trim())?;
    print!("{}", format_features(&fv));
    Ok(())
}
