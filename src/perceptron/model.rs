use serde::{Serialize, Deserialize};

use crate::math::vector::dot;

/// A trained linear classifier: `score(z) = W·z + b`, label 1 iff the score
/// is non-negative.
///
/// `bias` stays `0.0` when the trainer ran without a bias term, which
/// constrains the decision boundary through the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl Perceptron {
    pub fn new(weights: Vec<f64>, bias: f64) -> Perceptron {
        Perceptron { weights, bias }
    }

    /// The raw decision value `W·z + b`.
    pub fn score(&self, point: &[f64]) -> f64 {
        dot(&self.weights, point) + self.bias
    }

    /// Predicted label. Ties break toward 1: `score >= 0` classifies as 1.
    ///
    /// Note the asymmetry with the training rule, which leaves a negative
    /// point scoring exactly 0 untouched. A converged model therefore
    /// guarantees `score >= 0` on positives and `score <= 0` on negatives.
    pub fn classify(&self, point: &[f64]) -> u8 {
        if self.score(point) >= 0.0 { 1 } else { 0 }
    }

    /// The 2-D decision boundary `w1*x1 + w2*x2 + b = 0` rearranged to
    /// `x2 = slope * x1 + intercept`. Returns `None` unless the model is
    /// 2-dimensional with `w2 != 0` (the line is vertical or undefined
    /// otherwise).
    pub fn boundary_line(&self) -> Option<(f64, f64)> {
        if self.weights.len() != 2 || self.weights[1] == 0.0 {
            return None;
        }
        let slope = -self.weights[0] / self.weights[1];
        let intercept = -self.bias / self.weights[1];
        Some((slope, intercept))
    }

    /// Serializes the model to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a model from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Perceptron> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_affine() {
        let model = Perceptron::new(vec![1.0, 2.0], -0.5);
        assert_eq!(model.score(&[1.0, 1.0]), 2.5);
        assert_eq!(model.score(&[0.0, 0.0]), -0.5);
    }

    #[test]
    fn classify_ties_break_toward_one() {
        let model = Perceptron::new(vec![1.0, 1.0], 0.0);
        // score = 2 -> 1
        assert_eq!(model.classify(&[1.0, 1.0]), 1);
        // score = 0 -> 1, by convention
        assert_eq!(model.classify(&[0.0, 0.0]), 1);
        // score = -1 -> 0
        assert_eq!(model.classify(&[-1.0, 0.0]), 0);
    }

    #[test]
    fn classify_is_idempotent() {
        let model = Perceptron::new(vec![0.3, -0.7], 0.1);
        let point = [0.5, 0.5];
        let first = model.classify(&point);
        for _ in 0..10 {
            assert_eq!(model.classify(&point), first);
        }
    }

    #[test]
    fn boundary_line_requires_nonzero_w2() {
        let model = Perceptron::new(vec![1.0, 1.0], -0.5);
        let (slope, intercept) = model.boundary_line().unwrap();
        assert_eq!(slope, -1.0);
        assert_eq!(intercept, 0.5);

        assert_eq!(Perceptron::new(vec![1.0, 0.0], 0.0).boundary_line(), None);
        assert_eq!(Perceptron::new(vec![1.0, 1.0, 1.0], 0.0).boundary_line(), None);
    }

    #[test]
    fn json_round_trip() {
        let model = Perceptron::new(vec![1.5, -2.0], 0.25);
        let path = std::env::temp_dir().join("perceptron_lab_model_test.json");
        let path = path.to_str().unwrap();

        model.save_json(path).unwrap();
        let loaded = Perceptron::load_json(path).unwrap();
        assert_eq!(loaded, model);

        std::fs::remove_file(path).unwrap();
    }
}
