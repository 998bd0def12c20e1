//! Per-class word vocabularies

use std::collections::HashMap;
use tracing::debug;

use super::tokenizer::tokenize;
use crate::corpus::{Document, DocumentCollection};
use crate::error::Result;

/// Word to weight mapping for one class
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    words: HashMap<String, f64>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a word
    pub fn add_word(&mut self, word: &str) {
        *self.words.entry(word.to_string()).or_insert(0.0) += 1.0;
    }

    /// Count every token of a line
    pub fn absorb_line(&mut self, line: &str) {
        for token in tokenize(line) {
            self.add_word(&token);
        }
    }

    /// Count every token of a document
    pub fn absorb_document(&mut self, document: &Document) {
        for line in &document.lines {
            self.absorb_line(line);
        }
    }

    /// Count every token of every document in a collection.
    ///
    /// Counts accumulate on top of what the vocabulary already holds.
    /// Returns the number of documents read.
    pub fn build_from(&mut self, collection: &dyn DocumentCollection) -> Result<usize> {
        let documents = collection.documents()?;
        for document in &documents {
            self.absorb_document(document);
        }

        debug!(
            "Absorbed {} documents from {}, {} distinct words",
            documents.len(),
            collection.name(),
            self.len()
        );

        Ok(documents.len())
    }

    /// Add another vocabulary's weights to this one
    pub fn merge(&mut self, other: &Vocabulary) {
        for (word, weight) in &other.words {
            *self.words.entry(word.clone()).or_insert(0.0) += weight;
        }
    }

    /// Insert a word with a fixed weight unless already present.
    /// Returns whether the word was inserted.
    pub fn insert_missing(&mut self, word: &str, weight: f64) -> bool {
        if self.words.contains_key(word) {
            return false;
        }
        self.words.insert(word.to_string(), weight);
        true
    }

    pub fn weight(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> f64 {
        self.words.values().sum()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }
}

impl FromIterator<(String, f64)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// Give both vocabularies the same key set.
///
/// Every word present in only one vocabulary is inserted into the other
/// with weight `alpha`. Running it again without intervening updates
/// changes nothing. Returns the number of inserted entries.
pub fn balance(spam: &mut Vocabulary, ham: &mut Vocabulary, alpha: f64) -> usize {
    let missing_in_spam: Vec<String> = ham
        .words
        .keys()
        .filter(|w| !spam.contains(w))
        .cloned()
        .collect();
    let missing_in_ham: Vec<String> = spam
        .words
        .keys()
        .filter(|w| !ham.contains(w))
        .cloned()
        .collect();

    for word in &missing_in_spam {
        spam.insert_missing(word, alpha);
    }
    for word in &missing_in_ham {
        ham.insert_missing(word, alpha);
    }

    let inserted = missing_in_spam.len() + missing_in_ham.len();
    debug!(
        "Balanced vocabularies: {} words added to spam, {} to ham",
        missing_in_spam.len(),
        missing_in_ham.len()
    );
    inserted
}
