use serde::{Serialize, Deserialize};

use crate::data::dataset::Dataset;
use crate::error::TrainError;
use crate::neuron::mcculloch_pitts::McCullochPitts;

/// The four canonical 2-input binary combinations, in truth-table order.
pub const GATE_INPUTS: [(u8, u8); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// The three classic 2-input gates used throughout the demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    And,
    Or,
    Xor,
}

impl Gate {
    pub fn name(&self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Xor => "XOR",
        }
    }

    /// Gate output for a single input pair.
    pub fn output(&self, x1: u8, x2: u8) -> u8 {
        match self {
            Gate::And => x1 & x2,
            Gate::Or => x1 | x2,
            Gate::Xor => x1 ^ x2,
        }
    }

    /// The full truth table: `((x1, x2), output)` for all four inputs.
    pub fn truth_table(&self) -> [((u8, u8), u8); 4] {
        let mut rows = [((0, 0), 0); 4];
        for (row, &(x1, x2)) in rows.iter_mut().zip(GATE_INPUTS.iter()) {
            *row = ((x1, x2), self.output(x1, x2));
        }
        rows
    }

    /// The truth table split into a positive/negative point set, ready for
    /// the perceptron trainer.
    pub fn dataset(&self) -> Result<Dataset, TrainError> {
        let mut positives = Vec::new();
        let mut negatives = Vec::new();
        for &(x1, x2) in &GATE_INPUTS {
            let point = vec![f64::from(x1), f64::from(x2)];
            if self.output(x1, x2) == 1 {
                positives.push(point);
            } else {
                negatives.push(point);
            }
        }
        Dataset::new(positives, negatives)
    }

    /// Whether a single line can separate the gate's output classes.
    /// AND and OR are separable; XOR famously is not.
    pub fn linearly_separable(&self) -> bool {
        !matches!(self, Gate::Xor)
    }

    /// Checks a fixed-threshold neuron against every truth-table row.
    pub fn verify(&self, unit: &McCullochPitts) -> bool {
        self.truth_table().iter().all(|&((x1, x2), expected)| {
            unit.activate(&[f64::from(x1), f64::from(x2)]) == expected
        })
    }
}
