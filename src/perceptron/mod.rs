pub mod model;
pub mod report;

pub use model::Perceptron;
pub use report::{classification_report, ClassificationRow};
