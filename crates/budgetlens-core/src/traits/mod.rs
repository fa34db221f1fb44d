//! Seams between the prediction pipeline and its backends.

pub mod classifier;
pub mod record_store;

pub use classifier::{CategoryClassifier, ClassifierInput};
pub use record_store::RecordStore;
