mod prediction;

pub use prediction::{Label, LabelRange, Prediction};
