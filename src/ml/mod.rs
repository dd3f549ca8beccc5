//! Prediction backends.
//!
//! There is no trained model behind the service: `RandomClassifier` draws a
//! label uniformly from the configured range, and `ModelTrainer` only stands
//! in for a training phase at startup. Real inference plugs in behind
//! the `Classifier` trait.

pub mod classifier;
pub mod trainer;

pub use classifier::{Classifier, RandomClassifier};
pub use trainer::ModelTrainer;
