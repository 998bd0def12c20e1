//! Text rendering of run results

use std::fmt;

use crate::filter::{Classification, CollectionReport, EvaluationReport, RunReport};

impl fmt::Display for CollectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% spam in '{}' ({} / {}, expected {})",
            self.spam_rate(),
            self.collection,
            self.classified_spam,
            self.documents,
            self.expected
        )
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Spam detected as spam: {} / {}  ## Spam detected in ham: {} / {}",
            self.spam_test.classified_spam,
            self.spam_test.documents,
            self.ham_test.classified_spam,
            self.ham_test.documents
        )?;
        writeln!(f, "{}", self.ham_test)?;
        writeln!(f, "{}", self.spam_test)?;
        write!(
            f,
            "Vocabulary: {} spam words, {} ham words",
            self.spam_vocabulary, self.ham_vocabulary
        )
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "########### training collections ###########")?;
        writeln!(f, "{}", self.baseline)?;

        if let Some(calibrated) = &self.calibrated {
            writeln!(f)?;
            writeln!(f, "########### after calibration ###########")?;
            writeln!(f, "{}", calibrated)?;
            writeln!(
                f,
                "Detection rate change: {:+.2} pp, false positive rate change: {:+.2} pp",
                self.detection_delta().unwrap_or_default(),
                self.false_positive_delta().unwrap_or_default()
            )?;
        }

        writeln!(f)?;
        write!(f, "Alpha = {}, threshold = {}", self.alpha, self.threshold)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t({} words)",
            self.document, self.label, self.probability, self.recognized_words
        )
    }
}
