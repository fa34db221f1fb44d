//! Category classifier backends and output validation.

mod closure;
mod http;
mod lexicon;
pub mod tokenize;
mod validate;

pub use closure::FnClassifier;
pub use http::{ClassifyRequest, ClassifyResponse, HttpClassifier};
pub use lexicon::LexiconClassifier;
pub use validate::validate_classification;
