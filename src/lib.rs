pub mod error;
pub mod math;
pub mod data;
pub mod neuron;
pub mod perceptron;
pub mod train;

// Convenience re-exports
pub use error::TrainError;
pub use data::dataset::{Dataset, LabeledPoint};
pub use neuron::mcculloch_pitts::McCullochPitts;
pub use neuron::gates::Gate;
pub use perceptron::model::Perceptron;
pub use perceptron::report::{classification_report, ClassificationRow};
pub use train::trainer::train;
pub use train::train_config::{TrainConfig, TrainPolicy};
pub use train::train_report::{PassStats, TrainReport, TrainStatus};
