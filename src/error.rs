use std::fmt;

/// All errors that can occur when building a dataset or running the trainer.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainError {
    /// Both the positive and the negative set are empty.
    EmptyDataset,
    /// A point's dimensionality disagrees with the rest of the dataset,
    /// or the supplied initial weights do not match the point dimension.
    DimensionMismatch { expected: usize, found: usize },
    /// The same point appears in both the positive and the negative set.
    OverlappingPoint(Vec<f64>),
    /// Invalid trainer configuration — caught before any training step.
    InvalidConfig(String),
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDataset => {
                write!(f, "dataset is empty: at least one labeled point is required")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Self::OverlappingPoint(p) => {
                write!(f, "point {p:?} appears in both the positive and negative set")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for TrainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = TrainError::DimensionMismatch { expected: 2, found: 3 };
        assert_eq!(e.to_string(), "dimension mismatch: expected 2, found 3");

        let e = TrainError::InvalidConfig("max_iterations must be at least 1".into());
        assert!(e.to_string().contains("max_iterations"));
    }
}
