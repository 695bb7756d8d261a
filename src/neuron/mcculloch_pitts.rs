use serde::{Serialize, Deserialize};

/// A McCulloch-Pitts neuron: a fixed-threshold binary unit with no learned
/// weights. Fires (`1`) when the sum of its inputs meets the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct McCullochPitts {
    pub threshold: f64,
}

impl McCullochPitts {
    pub fn new(threshold: f64) -> McCullochPitts {
        McCullochPitts { threshold }
    }

    /// Threshold 1: fires when at least one input is active — an OR gate.
    pub fn or_unit() -> McCullochPitts {
        McCullochPitts::new(1.0)
    }

    /// Threshold 2: fires only when both inputs are active — an AND gate.
    pub fn and_unit() -> McCullochPitts {
        McCullochPitts::new(2.0)
    }

    /// `1` if the input sum meets the threshold, else `0`.
    pub fn activate(&self, inputs: &[f64]) -> u8 {
        let sum: f64 = inputs.iter().sum();
        if sum >= self.threshold { 1 } else { 0 }
    }
}
