//! Naive-Bayes filter
//!
//! Word-frequency vocabularies per class, per-word spam probabilities and
//! their combination into a per-document score.

pub mod classifier;
pub mod scorer;
pub mod tokenizer;
pub mod types;
pub mod vocabulary;

pub use classifier::BayesFilter;
pub use scorer::{document_probability, word_probability, DocumentScore};
pub use tokenizer::tokenize;
pub use types::*;
pub use vocabulary::{balance, Vocabulary};
