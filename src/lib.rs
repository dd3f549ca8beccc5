pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ml;
pub mod services;

pub use api::{create_router, AppState};
pub use config::AppConfig;
pub use domain::{Label, LabelRange, Prediction};
pub use error::{LabelStubError, Result};
pub use ml::{Classifier, ModelTrainer, RandomClassifier};
