pub mod trainer;
pub mod train_config;
pub mod train_report;

pub use trainer::train;
pub use train_config::{TrainConfig, TrainPolicy};
pub use train_report::{PassStats, TrainReport, TrainStatus};
