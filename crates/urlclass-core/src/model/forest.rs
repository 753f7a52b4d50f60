//! Random-forest model serialized as JSON.
//!
//! Each tree is stored as parallel node arrays:
//! - `children_left[i]` / `children_right[i]`: child node indices, `-1` on leaves
//! - `feature[i]`, `threshold[i]`: split rule, go left when `x[feature] <= threshold`
//! - `value[i]`: per-class weights at the node (only leaf values are used)
//!
//! A tree votes with its leaf weights normalized to sum 1; the forest averages
//! the votes and predicts the class with the highest mean (first one on ties).

use serde::Deserialize;

use super::error::ModelError;
use super::{Classifier, Prediction};
use crate::features::{FeatureVector, FEATURE_COUNT};
use crate::label::UrlClass;

const LEAF: i64 = -1;

fn default_classes() -> Vec<UrlClass> {
    UrlClass::ALL.to_vec()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    value: Vec<Vec<f64>>,
}

impl Tree {
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn validate(&self, tree: usize, n_classes: usize) -> Result<(), ModelError> {
        let malformed = |reason: String| ModelError::MalformedTree { tree, reason };
        let n = self.node_count();
        if n == 0 {
            return Err(malformed("no nodes".to_string()));
        }
        let lens = [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ];
        if lens.iter().any(|&l| l != n) {
            return Err(malformed(format!(
                "node arrays differ in length ({n} vs {lens:?})"
            )));
        }

        let in_range = |idx: i64| idx >= 0 && (idx as usize) < n;
        for i in 0..n {
            let left = self.children_left[i];
            if left == LEAF {
                let width = self.value[i].len();
                if width != n_classes {
                    return Err(malformed(format!(
                        "leaf {i} has {width} class weights, model has {n_classes} classes"
                    )));
                }
                if self.value[i].iter().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err(malformed(format!("leaf {i} has a negative or non-finite weight")));
                }
                continue;
            }
            let right = self.children_right[i];
            if !in_range(left) || !in_range(right) {
                return Err(malformed(format!("node {i} has child out of range")));
            }
            let feature = self.feature[i];
            if feature < 0 || feature as usize >= FEATURE_COUNT {
                return Err(malformed(format!("node {i} splits on unknown feature {feature}")));
            }
            if self.threshold[i].is_nan() {
                return Err(malformed(format!("node {i} has NaN threshold")));
            }
        }
        Ok(())
    }

    /// Walks from the root to a leaf. The walk is bounded by the node count
    /// so a cyclic tree cannot loop forever.
    fn leaf(&self, tree: usize, x: &[f64; FEATURE_COUNT]) -> Result<&[f64], ModelError> {
        let mut node = 0usize;
        for _ in 0..self.node_count() {
            let left = self.children_left[node];
            if left == LEAF {
                return Ok(&self.value[node]);
            }
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
        Err(ModelError::NoLeaf { tree })
    }
}

#[derive(Debug, Deserialize)]
struct ForestFile {
    n_features: usize,
    #[serde(default = "default_classes")]
    classes: Vec<UrlClass>,
    trees: Vec<Tree>,
}

/// Validated random forest ready for inference.
#[derive(Debug, Clone)]
pub struct ForestModel {
    classes: Vec<UrlClass>,
    trees: Vec<Tree>,
}

impl ForestModel {
    /// Parses and validates a forest from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let file: ForestFile = serde_json::from_str(json)?;
        Self::new(file.n_features, file.classes, file.trees)
    }

    pub fn new(
        n_features: usize,
        classes: Vec<UrlClass>,
        trees: Vec<Tree>,
    ) -> Result<Self, ModelError> {
        if n_features != FEATURE_COUNT {
            return Err(ModelError::FeatureCount {
                expected: FEATURE_COUNT,
                found: n_features,
            });
        }
        if classes.is_empty() {
            return Err(ModelError::NoClasses);
        }
        for (i, class) in classes.iter().enumerate() {
            if classes[..i].contains(class) {
                return Err(ModelError::DuplicateClass(*class));
            }
        }
        if trees.is_empty() {
            return Err(ModelError::NoTrees);
        }
        for (i, tree) in trees.iter().enumerate() {
            tree.validate(i, classes.len())?;
        }
        Ok(Self { classes, trees })
    }

    pub fn classes(&self) -> &[UrlClass] {
        &self.classes
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Mean normalized vote per class, in `classes()` order.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        let x = features.values();
        let mut votes = vec![0.0; self.classes.len()];
        for (i, tree) in self.trees.iter().enumerate() {
            let leaf = tree.leaf(i, x)?;
            let total: f64 = leaf.iter().sum();
            if total <= 0.0 {
                continue;
            }
            for (v, w) in votes.iter_mut().zip(leaf) {
                *v += w / total;
            }
        }
        let n = self.trees.len() as f64;
        votes.iter_mut().for_each(|v| *v /= n);
        Ok(votes)
    }
}

impl Classifier for ForestModel {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        let proba = self.predict_proba(features)?;
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        Ok(Prediction {
            class: self.classes[best],
            confidence: proba[best],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Stump on `count.` (index 2): <= 2.5 → benign, else phishing.
    fn stump(left: [f64; 4], right: [f64; 4]) -> serde_json::Value {
        json!({
            "children_left": [1, -1, -1],
            "children_right": [2, -1, -1],
            "feature": [2, -2, -2],
            "threshold": [2.5, -2.0, -2.0],
            "value": [[0.0, 0.0, 0.0, 0.0], left, right],
        })
    }

    fn forest(trees: Vec<serde_json::Value>) -> ForestModel {
        let doc = json!({ "n_features": 21, "trees": trees });
        ForestModel::from_json(&doc.to_string()).unwrap()
    }

    fn with_dots(dots: f64) -> FeatureVector {
        let mut x = [0.0; FEATURE_COUNT];
        x[2] = dots;
        FeatureVector::from(x)
    }

    #[test]
    fn single_stump_routes_on_threshold() {
        let m = forest(vec![stump([10.0, 0.0, 0.0, 0.0], [0.0, 0.0, 4.0, 0.0])]);
        assert_eq!(m.predict(&with_dots(2.0)).unwrap().class, UrlClass::Benign);
        assert_eq!(m.predict(&with_dots(2.5)).unwrap().class, UrlClass::Benign);
        assert_eq!(m.predict(&with_dots(3.0)).unwrap().class, UrlClass::Phishing);
    }

    #[test]
    fn votes_are_normalized_then_averaged() {
        let m = forest(vec![
            stump([100.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0]),
            stump([1.0, 0.0, 0.0, 3.0], [0.0, 0.0, 0.0, 1.0]),
        ]);
        let proba = m.predict_proba(&with_dots(0.0)).unwrap();
        assert!((proba[0] - 0.625).abs() < 1e-12);
        assert!((proba[3] - 0.375).abs() < 1e-12);
        let p = m.predict(&with_dots(0.0)).unwrap();
        assert_eq!(p.class, UrlClass::Benign);
        assert!((p.confidence - 0.625).abs() < 1e-12);
    }

    #[test]
    fn ties_pick_lowest_index() {
        let m = forest(vec![stump([1.0, 1.0, 0.0, 0.0], [0.0; 4])]);
        assert_eq!(m.predict(&with_dots(0.0)).unwrap().class, UrlClass::Benign);
    }

    #[test]
    fn custom_class_order() {
        let doc = json!({
            "n_features": 21,
            "classes": ["malware", "benign"],
            "trees": [{
                "children_left": [-1],
                "children_right": [-1],
                "feature": [-2],
                "threshold": [-2.0],
                "value": [[5.0, 1.0]],
            }],
        });
        let m = ForestModel::from_json(&doc.to_string()).unwrap();
        assert_eq!(m.classes(), &[UrlClass::Malware, UrlClass::Benign]);
        assert_eq!(m.predict(&with_dots(0.0)).unwrap().class, UrlClass::Malware);
    }

    #[test]
    fn rejects_wrong_feature_count() {
        let doc = json!({ "n_features": 20, "trees": [stump([1.0; 4], [1.0; 4])] });
        assert!(matches!(
            ForestModel::from_json(&doc.to_string()),
            Err(ModelError::FeatureCount { expected: 21, found: 20 })
        ));
    }

    #[test]
    fn rejects_empty_forest() {
        let doc = json!({ "n_features": 21, "trees": [] });
        assert!(matches!(
            ForestModel::from_json(&doc.to_string()),
            Err(ModelError::NoTrees)
        ));
    }

    #[test]
    fn rejects_out_of_range_child() {
        let mut tree = stump([1.0; 4], [1.0; 4]);
        tree["children_right"] = json!([7, -1, -1]);
        let doc = json!({ "n_features": 21, "trees": [tree] });
        assert!(matches!(
            ForestModel::from_json(&doc.to_string()),
            Err(ModelError::MalformedTree { tree: 0, .. })
        ));
    }

    #[test]
    fn rejects_unknown_feature_index() {
        let mut tree = stump([1.0; 4], [1.0; 4]);
        tree["feature"] = json!([21, -2, -2]);
        let doc = json!({ "n_features": 21, "trees": [tree] });
        assert!(ForestModel::from_json(&doc.to_string()).is_err());
    }

    #[test]
    fn rejects_leaf_width_mismatch() {
        let tree = stump([1.0; 4], [1.0; 4]);
        let doc = json!({ "n_features": 21, "classes": ["benign", "phishing"], "trees": [tree] });
        assert!(ForestModel::from_json(&doc.to_string()).is_err());
    }

    #[test]
    fn rejects_duplicate_classes() {
        let doc = json!({
            "n_features": 21,
            "classes": ["benign", "benign"],
            "trees": [stump([1.0; 4], [1.0; 4])],
        });
        assert!(matches!(
            ForestModel::from_json(&doc.to_string()),
            Err(ModelError::DuplicateClass(UrlClass::Benign))
        ));
    }

    #[test]
    fn cyclic_tree_fails_at_predict() {
        let mut tree = stump([1.0; 4], [1.0; 4]);
        tree["children_left"] = json!([1, 0, -1]);
        tree["children_right"] = json!([2, 0, -1]);
        tree["feature"] = json!([2, 2, -2]);
        tree["threshold"] = json!([2.5, 2.5, -2.0]);
        let m = forest(vec![tree]);
        assert!(matches!(
            m.predict(&with_dots(0.0)),
            Err(ModelError::NoLeaf { tree: 0 })
        ));
    }

    #[test]
    fn not_json() {
        assert!(matches!(
            ForestModel::from_json("not json"),
            Err(ModelError::Parse(_))
        ));
    }
}
