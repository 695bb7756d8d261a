use std::sync::mpsc;

use crate::train::train_report::PassStats;

/// Default cap on total sampling steps.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// How the trainer walks the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrainPolicy {
    /// One iteration = one full pass over every point, reshuffled per pass.
    /// Convergence is declared only when an entire pass produces zero
    /// updates, so a `Converged` result certifies the whole dataset.
    #[default]
    FullPass,
    /// One iteration = a single point drawn i.i.d. from P ∪ N (probability
    /// |P| / (|P| + |N|) of drawing from P, then uniform within the set).
    /// The loop exits as soon as one sampled point needs no update, which
    /// certifies nothing about the rest of the dataset. Kept only for
    /// behavioral parity with the classic random-trial procedure.
    RandomSample,
}

/// Configuration for a `train` run.
///
/// # Fields
/// - `max_iterations`  — cap on total sampling steps (default 1000); every
///                       point examined counts as one step
/// - `policy`          — full-pass (default) or legacy random-sample walk
/// - `with_bias`       — when `true` a constant-1 coordinate is appended
///                       internally, giving the model a learned bias term;
///                       when `false` the boundary is forced through the
///                       origin
/// - `initial_weights` — starting weights matching the point dimension;
///                       `None` draws each component from N(0, 1)
/// - `seed`            — seeds the internal RNG for reproducible runs;
///                       `None` uses OS entropy
/// - `progress_tx`     — optional channel sender; one `PassStats` is sent
///                       per completed full pass. If the receiver is
///                       dropped the loop terminates early (clean shutdown).
pub struct TrainConfig {
    pub max_iterations: usize,
    pub policy: TrainPolicy,
    pub with_bias: bool,
    pub initial_weights: Option<Vec<f64>>,
    pub seed: Option<u64>,
    pub progress_tx: Option<mpsc::Sender<PassStats>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig`: full-pass policy, no bias, random
    /// initial weights, no progress channel.
    pub fn new(max_iterations: usize) -> Self {
        TrainConfig {
            max_iterations,
            policy: TrainPolicy::default(),
            with_bias: false,
            initial_weights: None,
            seed: None,
            progress_tx: None,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_MAX_ITERATIONS)
    }
}
