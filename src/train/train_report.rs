use serde::{Serialize, Deserialize};

use crate::perceptron::model::Perceptron;

/// How a training run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainStatus {
    /// The termination criterion of the chosen policy was met. Under
    /// `FullPass` this means a complete pass with zero updates.
    Converged,
    /// The step cap was hit first. Expected for non-linearly-separable
    /// data such as XOR; a status, not an error.
    IterationLimitReached,
}

/// Final result of a `train` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// The trained model. `bias` is `0.0` when training ran without one.
    pub model: Perceptron,
    /// Total sampling steps consumed (one per point examined).
    pub iterations: usize,
    /// Completed full passes; `0` under the random-sample policy.
    pub passes: usize,
    pub status: TrainStatus,
}

impl TrainReport {
    pub fn converged(&self) -> bool {
        self.status == TrainStatus::Converged
    }
}

/// Per-pass statistics emitted by the full-pass trainer.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, one
/// `PassStats` value is sent at the end of every completed pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassStats {
    /// 1-based pass number.
    pub pass: usize,
    /// Weight updates applied during this pass; `0` means convergence.
    pub updates: usize,
    /// Cumulative sampling steps after this pass.
    pub steps: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converged_flag_follows_status() {
        let report = TrainReport {
            model: Perceptron::new(vec![1.0, 1.0], 0.0),
            iterations: 12,
            passes: 3,
            status: TrainStatus::Converged,
        };
        assert!(report.converged());

        let report = TrainReport { status: TrainStatus::IterationLimitReached, ..report };
        assert!(!report.converged());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&TrainStatus::IterationLimitReached).unwrap();
        assert_eq!(json, "\"iteration_limit_reached\"");
    }
}
