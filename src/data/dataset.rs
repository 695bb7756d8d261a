use serde::{Serialize, Deserialize};

use crate::error::TrainError;

/// A coordinate vector paired with its binary class label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub coords: Vec<f64>,
    /// Binary class label: `1` (positive) or `0` (negative).
    pub label: u8,
}

impl LabeledPoint {
    pub fn new(coords: Vec<f64>, label: u8) -> LabeledPoint {
        LabeledPoint { coords, label }
    }
}

/// A validated two-class point set: `positives` carry label 1, `negatives`
/// label 0.
///
/// Construction enforces the dataset invariants up front so the trainer
/// never has to re-check them:
/// - at least one point overall,
/// - every point has the same dimensionality,
/// - no point appears in both sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    positives: Vec<Vec<f64>>,
    negatives: Vec<Vec<f64>>,
    dim: usize,
}

impl Dataset {
    pub fn new(positives: Vec<Vec<f64>>, negatives: Vec<Vec<f64>>) -> Result<Dataset, TrainError> {
        let first = positives.first().or_else(|| negatives.first())
            .ok_or(TrainError::EmptyDataset)?;
        let dim = first.len();

        for point in positives.iter().chain(negatives.iter()) {
            if point.len() != dim {
                return Err(TrainError::DimensionMismatch { expected: dim, found: point.len() });
            }
        }

        for point in &positives {
            if negatives.contains(point) {
                return Err(TrainError::OverlappingPoint(point.clone()));
            }
        }

        Ok(Dataset { positives, negatives, dim })
    }

    /// Dimensionality shared by every point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of points across both sets.
    pub fn len(&self) -> usize {
        self.positives.len() + self.negatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn positives(&self) -> &[Vec<f64>] {
        &self.positives
    }

    pub fn negatives(&self) -> &[Vec<f64>] {
        &self.negatives
    }

    /// All points with their implicit labels, positives first.
    pub fn labeled_points(&self) -> Vec<LabeledPoint> {
        self.positives.iter()
            .map(|p| LabeledPoint::new(p.clone(), 1))
            .chain(self.negatives.iter().map(|n| LabeledPoint::new(n.clone(), 0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dataset() {
        let ds = Dataset::new(
            vec![vec![1.0, 1.0], vec![1.0, 0.0], vec![0.0, 1.0]],
            vec![vec![0.0, 0.0]],
        ).unwrap();
        assert_eq!(ds.dim(), 2);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.positives().len(), 3);
        assert_eq!(ds.negatives().len(), 1);
    }

    #[test]
    fn one_side_may_be_empty() {
        let ds = Dataset::new(vec![vec![1.0, 1.0]], vec![]).unwrap();
        assert_eq!(ds.len(), 1);

        let ds = Dataset::new(vec![], vec![vec![0.0, 0.0]]).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Dataset::new(vec![], vec![]), Err(TrainError::EmptyDataset));
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let err = Dataset::new(vec![vec![1.0, 1.0]], vec![vec![0.0]]).unwrap_err();
        assert_eq!(err, TrainError::DimensionMismatch { expected: 2, found: 1 });
    }

    #[test]
    fn rejects_overlapping_point() {
        let err = Dataset::new(
            vec![vec![1.0, 0.0], vec![0.0, 0.0]],
            vec![vec![0.0, 0.0]],
        ).unwrap_err();
        assert_eq!(err, TrainError::OverlappingPoint(vec![0.0, 0.0]));
    }

    #[test]
    fn labeled_points_carry_implicit_labels() {
        let ds = Dataset::new(vec![vec![1.0, 1.0]], vec![vec![0.0, 0.0]]).unwrap();
        let points = ds.labeled_points();
        assert_eq!(points[0], LabeledPoint::new(vec![1.0, 1.0], 1));
        assert_eq!(points[1], LabeledPoint::new(vec![0.0, 0.0], 0));
    }
}
