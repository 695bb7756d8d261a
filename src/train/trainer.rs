use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::data::dataset::{Dataset, LabeledPoint};
use crate::error::TrainError;
use crate::math::vector::{dot, random_normal_vector};
use crate::perceptron::model::Perceptron;
use crate::train::train_config::{TrainConfig, TrainPolicy};
use crate::train::train_report::{PassStats, TrainReport, TrainStatus};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Runs the Rosenblatt perceptron learning rule over `dataset` and returns
/// the trained model together with iteration counts and a termination
/// status.
///
/// The update rule, for a point `z` with label `l` and `score = W·z`:
/// - `l = 1` and `score < 0`  →  `W ← W + z`
/// - `l = 0` and `score > 0`  →  `W ← W − z`
/// - otherwise no update. A negative point scoring exactly 0 is accepted.
///
/// Termination depends on `config.policy` (see `TrainPolicy`); either way
/// the total number of points examined is capped by `config.max_iterations`,
/// and hitting the cap is reported as `IterationLimitReached` — an expected
/// outcome for non-separable data, not an error.
///
/// The trainer performs no I/O and owns all mutable state for the duration
/// of the call; `dataset` is borrowed read-only. All randomness (initial
/// weights, shuffling, sampling) comes from a single `StdRng` seeded from
/// `config.seed`, so seeded runs are fully reproducible.
pub fn train(dataset: &Dataset, config: &TrainConfig) -> Result<TrainReport, TrainError> {
    if config.max_iterations == 0 {
        return Err(TrainError::InvalidConfig("max_iterations must be at least 1".into()));
    }

    let dim = dataset.dim();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // The bias term is a constant-1 coordinate appended to every point, so
    // the update rule needs no special case for it.
    let aug_dim = dim + usize::from(config.with_bias);
    let mut weights = match &config.initial_weights {
        Some(init) => {
            if init.len() != dim {
                return Err(TrainError::DimensionMismatch { expected: dim, found: init.len() });
            }
            let mut w = init.clone();
            if config.with_bias {
                w.push(0.0);
            }
            w
        }
        None => random_normal_vector(aug_dim, &mut rng),
    };

    let mut points = dataset.labeled_points();
    if config.with_bias {
        for point in &mut points {
            point.coords.push(1.0);
        }
    }

    let (iterations, passes, status) = match config.policy {
        TrainPolicy::FullPass => full_pass_loop(&points, &mut weights, config, &mut rng),
        TrainPolicy::RandomSample => random_sample_loop(&points, &mut weights, config, &mut rng),
    };

    let bias = if config.with_bias { weights.pop().unwrap_or(0.0) } else { 0.0 };

    log::info!(
        "training finished: status={status:?}, iterations={iterations}, passes={passes}"
    );

    Ok(TrainReport {
        model: Perceptron::new(weights, bias),
        iterations,
        passes,
        status,
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Applies the perceptron update for one point. Returns whether the weights
/// changed.
fn apply_update(weights: &mut [f64], point: &LabeledPoint) -> bool {
    let score = dot(weights, &point.coords);

    if point.label == 1 && score < 0.0 {
        for (w, x) in weights.iter_mut().zip(point.coords.iter()) {
            *w += x;
        }
        log::trace!("misclassified positive {:?} (score {score:.4}): W += z", point.coords);
        true
    } else if point.label == 0 && score > 0.0 {
        for (w, x) in weights.iter_mut().zip(point.coords.iter()) {
            *w -= x;
        }
        log::trace!("misclassified negative {:?} (score {score:.4}): W -= z", point.coords);
        true
    } else {
        false
    }
}

/// Default policy: every point is examined once per pass, in an order
/// reshuffled per pass. A pass with zero updates certifies the whole
/// dataset and ends the run as `Converged`.
fn full_pass_loop<R: Rng>(
    points: &[LabeledPoint],
    weights: &mut [f64],
    config: &TrainConfig,
    rng: &mut R,
) -> (usize, usize, TrainStatus) {
    let mut steps = 0;
    let mut passes = 0;
    let mut indices: Vec<usize> = (0..points.len()).collect();

    loop {
        indices.shuffle(rng);
        let mut updates = 0;

        for &idx in &indices {
            if steps == config.max_iterations {
                return (steps, passes, TrainStatus::IterationLimitReached);
            }
            steps += 1;

            if apply_update(weights, &points[idx]) {
                updates += 1;
            }
        }
        passes += 1;

        log::debug!("pass {passes}: {updates} updates, {steps} steps total");

        // If the receiver has been dropped, stop training.
        let mut receiver_gone = false;
        if let Some(ref tx) = config.progress_tx {
            receiver_gone = tx.send(PassStats { pass: passes, updates, steps }).is_err();
        }

        if updates == 0 {
            return (steps, passes, TrainStatus::Converged);
        }
        if receiver_gone {
            return (steps, passes, TrainStatus::IterationLimitReached);
        }
    }
}

/// Legacy policy: one i.i.d. sample per iteration, drawn from P with
/// probability |P| / (|P| + |N|) and uniformly within the chosen set. The
/// loop exits `Converged` the first time a sampled point needs no update —
/// a much weaker guarantee than a zero-update full pass.
fn random_sample_loop<R: Rng>(
    points: &[LabeledPoint],
    weights: &mut [f64],
    config: &TrainConfig,
    rng: &mut R,
) -> (usize, usize, TrainStatus) {
    let positives: Vec<&LabeledPoint> = points.iter().filter(|p| p.label == 1).collect();
    let negatives: Vec<&LabeledPoint> = points.iter().filter(|p| p.label == 0).collect();
    let positive_frac = positives.len() as f64 / points.len() as f64;

    let mut steps = 0;
    loop {
        steps += 1;

        // gen::<f64>() is uniform on [0, 1), so an empty side is never drawn.
        let point = if rng.gen::<f64>() < positive_frac {
            positives[rng.gen_range(0..positives.len())]
        } else {
            negatives[rng.gen_range(0..negatives.len())]
        };

        if !apply_update(weights, point) {
            return (steps, 0, TrainStatus::Converged);
        }
        if steps >= config.max_iterations {
            return (steps, 0, TrainStatus::IterationLimitReached);
        }
    }
}
