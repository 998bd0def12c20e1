//! Bayesian spam filter session
//!
//! [`BayesFilter`] owns both class vocabularies and the model constants for
//! one training and evaluation run. Vocabularies are rebalanced after every
//! update, so scoring always sees identical key sets.

use tracing::{debug, info, warn};

use super::scorer::{document_probability, DocumentScore};
use super::types::{Classification, CollectionReport, EvaluationReport, Label};
use super::vocabulary::{balance, Vocabulary};
use crate::config::ModelConfig;
use crate::corpus::{Document, DocumentCollection};
use crate::error::Result;

/// Naive-Bayes spam filter
#[derive(Debug, Clone)]
pub struct BayesFilter {
    model: ModelConfig,
    spam: Vocabulary,
    ham: Vocabulary,
}

impl BayesFilter {
    /// Create an untrained filter
    pub fn new(model: ModelConfig) -> Self {
        Self {
            model,
            spam: Vocabulary::new(),
            ham: Vocabulary::new(),
        }
    }

    /// Create a filter from existing vocabularies, balancing them
    pub fn from_vocabularies(model: ModelConfig, spam: Vocabulary, ham: Vocabulary) -> Self {
        let mut filter = Self { model, spam, ham };
        filter.rebalance();
        filter
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    pub fn spam_vocabulary(&self) -> &Vocabulary {
        &self.spam
    }

    pub fn ham_vocabulary(&self) -> &Vocabulary {
        &self.ham
    }

    /// Learn from labeled collections, then rebalance
    pub fn train(
        &mut self,
        spam: &dyn DocumentCollection,
        ham: &dyn DocumentCollection,
    ) -> Result<()> {
        let ham_docs = self.ham.build_from(ham)?;
        let spam_docs = self.spam.build_from(spam)?;
        self.rebalance();

        info!(
            "Trained on {} spam and {} ham documents ({} words)",
            spam_docs,
            ham_docs,
            self.spam.len()
        );
        Ok(())
    }

    /// Ingest additional labeled collections on top of the current model.
    ///
    /// Counts are added to the existing vocabularies; nothing learned
    /// earlier is discarded.
    pub fn calibrate(
        &mut self,
        spam: Option<&dyn DocumentCollection>,
        ham: Option<&dyn DocumentCollection>,
    ) -> Result<()> {
        let before = self.spam.len();

        let mut ham_extra = Vocabulary::new();
        if let Some(collection) = ham {
            ham_extra.build_from(collection)?;
        }
        let mut spam_extra = Vocabulary::new();
        if let Some(collection) = spam {
            spam_extra.build_from(collection)?;
        }

        self.ham.merge(&ham_extra);
        self.spam.merge(&spam_extra);
        self.rebalance();

        info!(
            "Calibrated with {} spam and {} ham words, vocabulary grew from {} to {}",
            spam_extra.len(),
            ham_extra.len(),
            before,
            self.spam.len()
        );
        Ok(())
    }

    fn rebalance(&mut self) {
        balance(&mut self.spam, &mut self.ham, self.model.alpha);
    }

    /// Spam probability of a document
    pub fn score(&self, document: &Document) -> Result<DocumentScore> {
        document_probability(document, &self.spam, &self.ham, &self.model)
    }

    /// Label for a score; equal to the threshold is ham
    pub fn label_for(&self, probability: f64) -> Label {
        if probability > self.model.threshold {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    /// Score and label a document
    pub fn classify(&self, document: &Document) -> Result<Classification> {
        let score = self.score(document)?;
        let label = self.label_for(score.probability);

        debug!(
            "{}: p={} words={} -> {}",
            document.name, score.probability, score.recognized_words, label
        );

        Ok(Classification {
            document: document.name.clone(),
            probability: score.probability,
            recognized_words: score.recognized_words,
            label,
        })
    }

    /// Count how many documents of a collection classify as spam
    pub fn evaluate(
        &self,
        collection: &dyn DocumentCollection,
        expected: Label,
    ) -> Result<CollectionReport> {
        let documents = collection.documents()?;
        if documents.is_empty() {
            warn!("Collection {} contains no documents", collection.name());
        }

        let mut classified_spam = 0;
        for document in &documents {
            if self.classify(document)?.is_spam() {
                classified_spam += 1;
            }
        }

        let report = CollectionReport {
            collection: collection.name(),
            expected,
            documents: documents.len(),
            classified_spam,
        };

        info!(
            "{}: {} / {} classified as spam ({:.2}%)",
            report.collection,
            report.classified_spam,
            report.documents,
            report.spam_rate()
        );

        Ok(report)
    }

    /// Evaluate a known-spam and a known-ham collection
    pub fn evaluate_pair(
        &self,
        spam: &dyn DocumentCollection,
        ham: &dyn DocumentCollection,
    ) -> Result<EvaluationReport> {
        Ok(EvaluationReport {
            spam_test: self.evaluate(spam, Label::Spam)?,
            ham_test: self.evaluate(ham, Label::Ham)?,
            spam_vocabulary: self.spam.len(),
            ham_vocabulary: self.ham.len(),
        })
    }
}
