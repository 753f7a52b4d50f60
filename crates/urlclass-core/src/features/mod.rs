//! URL feature extraction.
//!
//! Turns a raw URL string into the fixed, ordered [`FeatureVector`] the
//! classifier was trained on. Every feature is an independent pure function
//! of the URL text; only the split into components is shared.

mod lexical;
mod patterns;
mod structure;

pub use lexical::{count_char, count_substr, digit_count, letter_count, url_length};
pub use patterns::{abnormal_url, having_ip_address, shortening_service, suspicious_words};
pub use structure::{
    dir_count, embedded_domain_count, first_dir_length, hostname_length, tld_length, NO_TLD,
};

use crate::url_model::{split_url, SplitError};

/// Number of features the model consumes.
pub const FEATURE_COUNT: usize = 21;

/// Feature names in model input order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "use_of_ip",
    "abnormal_url",
    "count.",
    "count-www",
    "count@",
    "count_dir",
    "count_embed_domian",
    "short_url",
    "count-https",
    "count-http",
    "count%",
    "count?",
    "count-",
    "count=",
    "url_length",
    "hostname_length",
    "sus_url",
    "fd_length",
    "tld_length",
    "count-digits",
    "count-letters",
];

/// Ordered feature encoding of one URL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// `(name, value)` pairs in model input order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Extracts the feature vector for `url`.
///
/// Fails only when the URL cannot be split (malformed bracketed host).
pub fn extract_features(url: &str) -> Result<FeatureVector, SplitError> {
    let parts = split_url(url)?;

    let values = [
        flag(having_ip_address(url)),
        flag(abnormal_url(url, &parts)),
        count_char(url, '.') as f64,
        count_substr(url, "www") as f64,
        count_char(url, '@') as f64,
        dir_count(&parts) as f64,
        embedded_domain_count(&parts) as f64,
        flag(shortening_service(url)),
        count_substr(url, "https") as f64,
        count_substr(url, "http") as f64,
        count_char(url, '%') as f64,
        count_char(url, '?') as f64,
        count_char(url, '-') as f64,
        count_char(url, '=') as f64,
        url_length(url) as f64,
        hostname_length(&parts) as f64,
        flag(suspicious_words(url)),
        first_dir_length(&parts) as f64,
        tld_length(&parts),
        digit_count(url) as f64,
        letter_count(url) as f64,
    ];

    Ok(FeatureVector(values))
}
