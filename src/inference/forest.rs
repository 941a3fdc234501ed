//! Random forest classifier
//!
//! Evaluates a forest exported from a trained tree ensemble. Every tree is a
//! flat node array rooted at index 0; a sample goes left when
//! `x[feature] <= threshold`. Leaf class weights are normalized per tree and
//! averaged across the forest, and the class with the highest mean wins.

use std::collections::HashMap;

use serde::Deserialize;

use super::{Classifier, ModelError};
use crate::models::{FieldValue, RecordField, TransactionRecord};

// ============================================================================
// ARTIFACT
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ForestArtifact {
    pub model_type: String,
    pub feature_names: Vec<String>,
    pub classes: Vec<i64>,
    #[serde(default)]
    pub categories: HashMap<String, HashMap<String, f64>>,
    #[serde(default = "default_unknown_category")]
    pub unknown_category_value: f64,
    pub trees: Vec<TreeArtifact>,
}

fn default_unknown_category() -> f64 {
    -1.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeArtifact {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

// ============================================================================
// MODEL
// ============================================================================

/// How one column of the feature vector is read from a record
#[derive(Debug, Clone)]
enum Column {
    Numeric(RecordField),
    Categorical {
        field: RecordField,
        codes: HashMap<String, f64>,
    },
}

#[derive(Debug, Clone)]
pub struct RandomForest {
    name: String,
    columns: Vec<Column>,
    classes: Vec<i64>,
    unknown_category_value: f64,
    trees: Vec<Vec<Node>>,
}

impl RandomForest {
    /// Validate an artifact against the record schema and build the model.
    pub fn from_artifact(mut artifact: ForestArtifact) -> Result<Self, ModelError> {
        if artifact.trees.is_empty() {
            return Err(ModelError::Schema("forest has no trees".to_string()));
        }
        if artifact.classes.is_empty() {
            return Err(ModelError::Schema("no classes declared".to_string()));
        }

        let columns = build_columns(&artifact.feature_names, &mut artifact.categories)?;

        let n_features = columns.len();
        let n_classes = artifact.classes.len();
        for (t, tree) in artifact.trees.iter().enumerate() {
            validate_tree(&tree.nodes, n_features, n_classes)
                .map_err(|msg| ModelError::Schema(format!("tree {}: {}", t, msg)))?;
        }

        Ok(Self {
            name: artifact.model_type,
            columns,
            classes: artifact.classes,
            unknown_category_value: artifact.unknown_category_value,
            trees: artifact.trees.into_iter().map(|t| t.nodes).collect(),
        })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    /// Encode a record into the feature order the forest was trained on
    fn features(&self, record: &TransactionRecord) -> Vec<f64> {
        self.columns
            .iter()
            .map(|column| match column {
                Column::Numeric(field) => match record.get(*field) {
                    FieldValue::Number(v) => v,
                    FieldValue::Text(_) => self.unknown_category_value,
                },
                Column::Categorical { field, codes } => match record.get(*field) {
                    FieldValue::Text(s) => {
                        codes.get(s).copied().unwrap_or(self.unknown_category_value)
                    }
                    FieldValue::Number(v) => v,
                },
            })
            .collect()
    }

    /// Mean class distribution over all trees
    pub fn predict_proba(&self, record: &TransactionRecord) -> Vec<f64> {
        let x = self.features(record);
        let mut totals = vec![0.0; self.classes.len()];

        for nodes in &self.trees {
            let leaf = walk(nodes, &x);
            let sum: f64 = leaf.iter().sum();
            for (total, weight) in totals.iter_mut().zip(leaf) {
                *total += if sum > 0.0 { weight / sum } else { *weight };
            }
        }

        let n_trees = self.trees.len() as f64;
        totals.iter_mut().for_each(|t| *t /= n_trees);
        totals
    }
}

impl Classifier for RandomForest {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, record: &TransactionRecord) -> Result<i64, ModelError> {
        let proba = self.predict_proba(record);

        // First maximum wins on ties
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }

        self.classes
            .get(best)
            .copied()
            .ok_or_else(|| ModelError::Inference("empty class distribution".to_string()))
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn build_columns(
    feature_names: &[String],
    categories: &mut HashMap<String, HashMap<String, f64>>,
) -> Result<Vec<Column>, ModelError> {
    if feature_names.len() != RecordField::ALL.len() {
        return Err(ModelError::Schema(format!(
            "expected {} features, artifact declares {}",
            RecordField::ALL.len(),
            feature_names.len()
        )));
    }

    let mut seen = Vec::with_capacity(feature_names.len());
    let mut columns = Vec::with_capacity(feature_names.len());

    for name in feature_names {
        let field = RecordField::from_name(name)
            .ok_or_else(|| ModelError::Schema(format!("unknown feature '{}'", name)))?;
        if seen.contains(&field) {
            return Err(ModelError::Schema(format!("duplicate feature '{}'", name)));
        }
        seen.push(field);

        let column = match categories.remove(name) {
            Some(codes) => Column::Categorical { field, codes },
            None if field.is_text() => {
                return Err(ModelError::Schema(format!(
                    "no category table for text feature '{}'",
                    name
                )));
            }
            None => Column::Numeric(field),
        };
        columns.push(column);
    }

    Ok(columns)
}

/// Children must come after their parent, so every walk terminates.
fn validate_tree(nodes: &[Node], n_features: usize, n_classes: usize) -> Result<(), String> {
    if nodes.is_empty() {
        return Err("no nodes".to_string());
    }

    for (i, node) in nodes.iter().enumerate() {
        match node {
            Node::Split { feature, left, right, .. } => {
                if *feature >= n_features {
                    return Err(format!("node {} splits on feature {} of {}", i, feature, n_features));
                }
                for child in [*left, *right] {
                    if child <= i || child >= nodes.len() {
                        return Err(format!("node {} has invalid child {}", i, child));
                    }
                }
            }
            Node::Leaf { value } => {
                if value.len() != n_classes {
                    return Err(format!(
                        "leaf {} has {} weights for {} classes",
                        i,
                        value.len(),
                        n_classes
                    ));
                }
            }
        }
    }

    Ok(())
}

fn walk<'a>(nodes: &'a [Node], x: &[f64]) -> &'a [f64] {
    let mut idx = 0;
    loop {
        match &nodes[idx] {
            Node::Split { feature, threshold, left, right } => {
                idx = if x[*feature] <= *threshold { *left } else { *right };
            }
            Node::Leaf { value } => return value,
        }
    }
}
