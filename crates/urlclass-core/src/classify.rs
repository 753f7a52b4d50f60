//! URL → features → model → label.

use thiserror::Error;

use crate::features::{extract_features, FeatureVector};
use crate::model::{Classifier, ModelError, Prediction};
use crate::url_model::SplitError;

/// Default upper bound on accepted URL length, in characters.
pub const DEFAULT_MAX_URL_LENGTH: usize = 2048;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("no URL given")]
    EmptyUrl,
    #[error("URL is {len} characters long; the limit is {max}")]
    TooLong { len: usize, max: usize },
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result of classifying one URL.
#[derive(Debug, Clone)]
pub struct Classification {
    pub url: String,
    pub features: FeatureVector,
    pub prediction: Prediction,
}

/// Classification pipeline around a loaded model.
pub struct UrlClassifier {
    model: Box<dyn Classifier>,
    max_url_length: usize,
}

impl UrlClassifier {
    pub fn new(model: Box<dyn Classifier>) -> Self {
        Self {
            model,
            max_url_length: DEFAULT_MAX_URL_LENGTH,
        }
    }

    pub fn with_max_url_length(mut self, max: usize) -> Self {
        self.max_url_length = max;
        self
    }

    pub fn max_url_length(&self) -> usize {
        self.max_url_length
    }

    /// Classifies `url`. Surrounding whitespace is ignored.
    pub fn classify(&self, url: &str) -> Result<Classification, ClassifyError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ClassifyError::EmptyUrl);
        }
        let len = url.chars().count();
        if len > self.max_url_length {
            return Err(ClassifyError::TooLong {
                len,
                max: self.max_url_length,
            });
        }

        let features = extract_features(url)?;
        let prediction = self.model.predict(&features)?;
        tracing::debug!(
            url,
            class = %prediction.class,
            confidence = prediction.confidence,
            "classified"
        );
        Ok(Classification {
            url: url.to_string(),
            features,
            prediction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::UrlClass;

    /// Phishing whenever the URL carries a suspicious word, else benign.
    struct WordModel;

    impl Classifier for WordModel {
        fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
            let class = if features.get(16) == Some(1.0) {
                UrlClass::Phishing
            } else {
                UrlClass::Benign
            };
            Ok(Prediction {
                class,
                confidence: 1.0,
            })
        }
    }

    struct BrokenModel;

    impl Classifier for BrokenModel {
        fn predict(&self, _: &FeatureVector) -> Result<Prediction, ModelError> {
            Err(ModelError::NoLeaf { tree: 3 })
        }
    }

    #[test]
    fn uses_model_output() {
        let c = UrlClassifier::new(Box::new(WordModel));
        let r = c.classify("  http://secure-login.example.net/  ").unwrap();
        assert_eq!(r.url, "http://secure-login.example.net/");
        assert_eq!(r.prediction.class, UrlClass::Phishing);
        let r = c.classify("docs.rs/regex").unwrap();
        assert_eq!(r.prediction.class, UrlClass::Benign);
    }

    #[test]
    fn empty_input_rejected() {
        let c = UrlClassifier::new(Box::new(WordModel));
        assert!(matches!(c.classify("   "), Err(ClassifyError::EmptyUrl)));
    }

    #[test]
    fn length_feature_ignores_surrounding_whitespace() {
        let c = UrlClassifier::new(Box::new(WordModel));
        let r = c.classify("\t example.com/a \n").unwrap();
        assert_eq!(r.features.get(14), Some(13.0));
    }

    #[test]
    fn max_length_configurable() {
        let c = UrlClassifier::new(Box::new(WordModel));
        assert_eq!(c.max_url_length(), DEFAULT_MAX_URL_LENGTH);
        assert_eq!(c.with_max_url_length(64).max_url_length(), 64);
    }

    #[test]
    fn long_input_rejected() {
        let c = UrlClassifier::new(Box::new(WordModel)).with_max_url_length(10);
        assert!(matches!(
            c.classify("http://example.com/"),
            Err(ClassifyError::TooLong { len: 19, max: 10 })
        ));
    }

    #[test]
    fn split_errors_surface() {
        let c = UrlClassifier::new(Box::new(WordModel));
        let err = c.classify("http://[::1/").unwrap_err();
        assert_eq!(err.to_string(), "Invalid IPv6 URL");
    }

    #[test]
    fn model_errors_surface() {
        let c = UrlClassifier::new(Box::new(BrokenModel));
        let err = c.classify("example.com").unwrap_err();
        assert!(matches!(err, ClassifyError::Model(_)));
        assert_eq!(err.to_string(), "tree 3: walk did not reach a leaf");
    }
}
