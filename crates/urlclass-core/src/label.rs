//! Output classes of the URL classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicted URL class. The discriminant is the model's class index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlClass {
    Benign = 0,
    Defacement = 1,
    Phishing = 2,
    Malware = 3,
}

impl UrlClass {
    /// All classes in model index order.
    pub const ALL: [UrlClass; 4] = [
        UrlClass::Benign,
        UrlClass::Defacement,
        UrlClass::Phishing,
        UrlClass::Malware,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UrlClass::Benign => "Benign",
            UrlClass::Defacement => "Defacement",
            UrlClass::Phishing => "Phishing",
            UrlClass::Malware => "Malware",
        }
    }
}

impl fmt::Display for UrlClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
