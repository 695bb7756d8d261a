use serde::{Serialize, Deserialize};

use crate::perceptron::model::Perceptron;

/// One line of a classification report: the test point, its raw decision
/// value, and the predicted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRow {
    pub point: Vec<f64>,
    pub score: f64,
    pub label: u8,
}

/// Scores and labels every test point under `model`. Pure: the model is
/// read-only and the same inputs always produce the same rows.
pub fn classification_report(model: &Perceptron, points: &[Vec<f64>]) -> Vec<ClassificationRow> {
    points.iter()
        .map(|point| ClassificationRow {
            point: point.clone(),
            score: model.score(point),
            label: model.classify(point),
        })
        .collect()
}
