//! # budgetlens-prediction
//!
//! Request pipeline: validate → classify → metrics → response.
//! Collaborator calls run on the blocking pool under one request deadline.

pub mod bootstrap;
pub mod cache;
pub mod classifier;
pub mod engine;

pub use cache::SliceCache;
pub use classifier::{FnClassifier, HttpClassifier, LexiconClassifier};
pub use engine::PredictionEngine;
