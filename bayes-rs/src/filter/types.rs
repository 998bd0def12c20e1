//! Filter types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spam,
    Ham,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Spam => write!(f, "spam"),
            Label::Ham => write!(f, "ham"),
        }
    }
}

/// Classification of a single document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Document name
    pub document: String,
    /// Rounded spam probability
    pub probability: f64,
    /// Words that contributed evidence
    pub recognized_words: usize,
    /// Decided class (spam iff probability > threshold)
    pub label: Label,
}

impl Classification {
    pub fn is_spam(&self) -> bool {
        self.label == Label::Spam
    }
}

/// Classification counts over one test collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionReport {
    /// Collection name
    pub collection: String,
    /// Label every document of the collection truly carries
    pub expected: Label,
    /// Number of documents scored
    pub documents: usize,
    /// Number of documents classified as spam
    pub classified_spam: usize,
}

impl CollectionReport {
    /// Percentage of documents classified as spam.
    ///
    /// An empty collection reports 0.0.
    pub fn spam_rate(&self) -> f64 {
        if self.documents == 0 {
            return 0.0;
        }
        self.classified_spam as f64 * 100.0 / self.documents as f64
    }

    /// Number of documents classified as ham
    pub fn classified_ham(&self) -> usize {
        self.documents - self.classified_spam
    }

    /// Number of documents whose classification matches `expected`
    pub fn correct(&self) -> usize {
        match self.expected {
            Label::Spam => self.classified_spam,
            Label::Ham => self.classified_ham(),
        }
    }

    /// Percentage of correctly classified documents
    pub fn accuracy(&self) -> f64 {
        if self.documents == 0 {
            return 0.0;
        }
        self.correct() as f64 * 100.0 / self.documents as f64
    }
}

/// Evaluation of both test collections after one training phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Results on the collection of known spam
    pub spam_test: CollectionReport,
    /// Results on the collection of known ham
    pub ham_test: CollectionReport,
    /// Distinct words in the spam vocabulary
    pub spam_vocabulary: usize,
    /// Distinct words in the ham vocabulary
    pub ham_vocabulary: usize,
}

impl EvaluationReport {
    /// Spam correctly detected, in percent
    pub fn detection_rate(&self) -> f64 {
        self.spam_test.spam_rate()
    }

    /// Ham wrongly flagged as spam, in percent
    pub fn false_positive_rate(&self) -> f64 {
        self.ham_test.spam_rate()
    }
}

/// Outcome of a training run with optional calibration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Evaluation after the base training pass
    pub baseline: EvaluationReport,
    /// Evaluation after the calibration pass, if one ran
    pub calibrated: Option<EvaluationReport>,
    pub alpha: f64,
    pub threshold: f64,
}

impl RunReport {
    /// Change in detection rate caused by calibration, in percentage points
    pub fn detection_delta(&self) -> Option<f64> {
        self.calibrated
            .as_ref()
            .map(|c| c.detection_rate() - self.baseline.detection_rate())
    }

    /// Change in false positive rate caused by calibration, in percentage points
    pub fn false_positive_delta(&self) -> Option<f64> {
        self.calibrated
            .as_ref()
            .map(|c| c.false_positive_rate() - self.baseline.false_positive_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(expected: Label, documents: usize, classified_spam: usize) -> CollectionReport {
        CollectionReport {
            collection: "test".to_string(),
            expected,
            documents,
            classified_spam,
        }
    }

    #[test]
    fn test_spam_rate() {
        let r = report(Label::Spam, 10, 7);
        assert_eq!(r.spam_rate(), 70.0);
        assert_eq!(r.classified_ham(), 3);
        assert_eq!(r.accuracy(), 70.0);
    }

    #[test]
    fn test_ham_accuracy() {
        let r = report(Label::Ham, 4, 1);
        assert_eq!(r.spam_rate(), 25.0);
        assert_eq!(r.correct(), 3);
        assert_eq!(r.accuracy(), 75.0);
    }

    #[test]
    fn test_empty_collection_rates() {
        let r = report(Label::Ham, 0, 0);
        assert_eq!(r.spam_rate(), 0.0);
        assert_eq!(r.accuracy(), 0.0);
    }

    #[test]
    fn test_run_report_deltas() {
        let baseline = EvaluationReport {
            spam_test: report(Label::Spam, 10, 6),
            ham_test: report(Label::Ham, 10, 2),
            spam_vocabulary: 5,
            ham_vocabulary: 5,
        };
        let calibrated = EvaluationReport {
            spam_test: report(Label::Spam, 10, 9),
            ham_test: report(Label::Ham, 10, 1),
            ..baseline.clone()
        };
        let run = RunReport {
            baseline: baseline.clone(),
            calibrated: Some(calibrated),
            alpha: 0.02,
            threshold: 0.5,
        };

        assert_eq!(run.detection_delta(), Some(30.0));
        assert_eq!(run.false_positive_delta(), Some(-10.0));

        let uncalibrated = RunReport {
            calibrated: None,
            ..run
        };
        assert_eq!(uncalibrated.detection_delta(), None);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Spam.to_string(), "spam");
        assert_eq!(Label::Ham.to_string(), "ham");
    }
}
