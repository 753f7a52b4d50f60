//! Small hand-built forest over real feature indices, written to a temp file.
//!
//! - tree 0: `use_of_ip` → malware, else `sus_url` → phishing, else benign
//! - trees 1, 2: `count_embed_domian` > 0 → defacement, else a mixed leaf

use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

const USE_OF_IP: i64 = 0;
const EMBED: i64 = 6;
const SUS_URL: i64 = 16;

fn ip_and_words_tree() -> Value {
    json!({
        "children_left":  [1, 2, -1, -1, -1],
        "children_right": [4, 3, -1, -1, -1],
        "feature":        [USE_OF_IP, SUS_URL, -2, -2, -2],
        "threshold":      [0.5, 0.5, -2.0, -2.0, -2.0],
        "value": [
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [10.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 8.0, 2.0],
            [0.0, 0.0, 1.0, 9.0]
        ]
    })
}

fn embed_tree() -> Value {
    json!({
        "children_left":  [1, -1, -1],
        "children_right": [2, -1, -1],
        "feature":        [EMBED, -2, -2],
        "threshold":      [0.5, -2.0, -2.0],
        "value": [
            [0.0, 0.0, 0.0, 0.0],
            [4.0, 1.0, 4.0, 1.0],
            [0.0, 10.0, 0.0, 0.0]
        ]
    })
}

pub fn forest_json() -> String {
    json!({
        "n_features": 21,
        "classes": ["benign", "defacement", "phishing", "malware"],
        "trees": [ip_and_words_tree(), embed_tree(), embed_tree()]
    })
    .to_string()
}

/// Writes the fixture forest to a temp file kept alive by the returned handle.
pub fn write_forest() -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("temp model file");
    f.write_all(forest_json().as_bytes()).expect("write model");
    f.flush().expect("flush model");
    f
}
