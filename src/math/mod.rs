pub mod vector;

pub use vector::{dot, random_normal_vector};
