//! urlclass-core: lexical URL features and random-forest classification.
//!
//! [`classify::UrlClassifier`] is the entry point: it splits a URL, extracts
//! the 21-value [`features::FeatureVector`], and asks a [`model::Classifier`]
//! for a [`label::UrlClass`].

pub mod config;
pub mod logging;

pub mod checksum;
pub mod classify;
pub mod features;
pub mod label;
pub mod model;
pub mod url_model;
