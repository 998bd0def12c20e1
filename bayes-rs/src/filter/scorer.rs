//! Word and document scoring
//!
//! A word's spam probability comes from Bayes' rule over its relative
//! frequency in each class vocabulary. A document's probability combines
//! the probabilities of all its recognized words:
//!
//! ```text
//! P = Πp / (Πp + Π(1 - p))
//! ```
//!
//! The products are accumulated as sums of logarithms so long documents
//! cannot underflow both terms to zero.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::tokenizer::tokenize;
use super::vocabulary::Vocabulary;
use crate::config::{ModelConfig, Normalization};
use crate::corpus::Document;
use crate::error::{BayesError, Result};

/// Score returned for a degenerate 0/0 probability
const NEUTRAL: f64 = 0.5;

/// Spam probability of one document
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DocumentScore {
    /// Combined probability, rounded half-up
    pub probability: f64,
    /// Tokens found in both vocabularies
    pub recognized_words: usize,
}

fn relative_frequency(weight: f64, vocabulary: &Vocabulary, normalization: Normalization) -> f64 {
    let base = match normalization {
        Normalization::DistinctWords => vocabulary.len() as f64,
        Normalization::TotalWeight => vocabulary.total_weight(),
    };
    if base == 0.0 {
        return 0.0;
    }
    weight / base
}

/// Posterior probability that `word` indicates spam.
///
/// The word must be present in both vocabularies, which balancing
/// guarantees for every word seen in training.
pub fn word_probability(
    word: &str,
    spam: &Vocabulary,
    ham: &Vocabulary,
    model: &ModelConfig,
) -> Result<f64> {
    let (spam_weight, ham_weight) = match (spam.weight(word), ham.weight(word)) {
        (Some(s), Some(h)) => (s, h),
        _ => return Err(BayesError::UnbalancedVocabulary(word.to_string())),
    };

    let spam_term = relative_frequency(spam_weight, spam, model.normalization) * model.spam_prior;
    let ham_term = relative_frequency(ham_weight, ham, model.normalization) * model.ham_prior();

    let denominator = spam_term + ham_term;
    if denominator == 0.0 {
        return Ok(NEUTRAL);
    }

    Ok(spam_term / denominator)
}

/// Combined spam probability of a document.
///
/// Tokens missing from either vocabulary carry no evidence and are
/// skipped. A document without recognized words scores exactly 0.5.
pub fn document_probability(
    document: &Document,
    spam: &Vocabulary,
    ham: &Vocabulary,
    model: &ModelConfig,
) -> Result<DocumentScore> {
    let mut ln_spam = 0.0f64;
    let mut ln_ham = 0.0f64;
    let mut recognized_words = 0;

    for line in &document.lines {
        for word in tokenize(line) {
            if !(spam.contains(&word) && ham.contains(&word)) {
                continue;
            }
            let p = word_probability(&word, spam, ham, model)?;
            ln_spam += p.ln();
            ln_ham += (1.0 - p).ln();
            recognized_words += 1;
        }
    }

    let probability = combine(ln_spam, ln_ham);

    Ok(DocumentScore {
        probability: round_half_up(probability, model.score_precision),
        recognized_words,
    })
}

/// `exp(a) / (exp(a) + exp(b))` for log-products `a` and `b`
fn combine(ln_spam: f64, ln_ham: f64) -> f64 {
    match (ln_spam == f64::NEG_INFINITY, ln_ham == f64::NEG_INFINITY) {
        (true, true) => NEUTRAL,
        (true, false) => 0.0,
        (false, true) => 1.0,
        (false, false) => 1.0 / (1.0 + (ln_ham - ln_spam).exp()),
    }
}

/// Round a probability half-up to `places` decimals.
///
/// The value is taken at its shortest decimal form first, so 0.285 rounds
/// to 0.29 even though its binary form lies just below the midpoint.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    // Below Decimal's range, and zero at every precision validate() allows
    if value.abs() < 1e-16 {
        return 0.0;
    }
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(entries: &[(&str, f64)]) -> Vocabulary {
        entries.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_equal_frequencies_return_prior() {
        let spam = vocab(&[("offer", 1.0), ("meeting", 1.0)]);
        let ham = vocab(&[("offer", 1.0), ("meeting", 1.0)]);
        let model = ModelConfig::default();

        let p = word_probability("offer", &spam, &ham, &model).unwrap();
        assert!((p - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_distinct_word_normalization() {
        // spam: 4/2 = 2.0, ham: 1/4 = 0.25
        let spam = vocab(&[("cash", 4.0), ("win", 9.0)]);
        let ham = vocab(&[("cash", 1.0), ("a", 1.0), ("b", 1.0), ("c", 1.0)]);
        let model = ModelConfig::default();

        let p = word_probability("cash", &spam, &ham, &model).unwrap();
        let expected = (2.0 * 0.75) / (2.0 * 0.75 + 0.25 * 0.25);
        assert!((p - expected).abs() < 1e-12);
    }

    #[test]
    fn test_total_weight_normalization() {
        // spam: 4/13, ham: 1/4
        let spam = vocab(&[("cash", 4.0), ("win", 9.0)]);
        let ham = vocab(&[("cash", 1.0), ("a", 1.0), ("b", 1.0), ("c", 1.0)]);
        let model = ModelConfig {
            normalization: Normalization::TotalWeight,
            ..ModelConfig::default()
        };

        let p = word_probability("cash", &spam, &ham, &model).unwrap();
        let s = 4.0 / 13.0 * 0.75;
        let h = 0.25 * 0.25;
        assert!((p - s / (s + h)).abs() < 1e-12);
    }

    #[test]
    fn test_missing_word_fails_loudly() {
        let spam = vocab(&[("free", 3.0)]);
        let ham = Vocabulary::new();
        let model = ModelConfig::default();

        let err = word_probability("free", &spam, &ham, &model).unwrap_err();
        assert!(matches!(err, BayesError::UnbalancedVocabulary(w) if w == "free"));
    }

    #[test]
    fn test_zero_weights_are_neutral() {
        let spam = vocab(&[("void", 0.0)]);
        let ham = vocab(&[("void", 0.0)]);
        let model = ModelConfig::default();

        assert_eq!(word_probability("void", &spam, &ham, &model).unwrap(), 0.5);
    }

    #[test]
    fn test_document_without_recognized_words_is_neutral() {
        let spam = vocab(&[("free", 3.0), ("hello", 0.02)]);
        let ham = vocab(&[("free", 0.02), ("hello", 5.0)]);
        let model = ModelConfig::default();
        let doc = Document::from_text("unknown", "completely unseen tokens 42");

        let score = document_probability(&doc, &spam, &ham, &model).unwrap();
        assert_eq!(score.probability, 0.5);
        assert_eq!(score.recognized_words, 0);

        let empty = Document::new("empty", Vec::new());
        let score = document_probability(&empty, &Vocabulary::new(), &Vocabulary::new(), &model)
            .unwrap();
        assert_eq!(score.probability, 0.5);
    }

    #[test]
    fn test_no_evidence_stays_neutral_at_lowest_precision() {
        let model = ModelConfig {
            score_precision: 1,
            ..ModelConfig::default()
        };
        assert!(model.validate().is_ok());

        let doc = Document::from_text("unknown", "nothing known");
        let score = document_probability(&doc, &Vocabulary::new(), &Vocabulary::new(), &model)
            .unwrap();
        assert_eq!(score.probability, 0.5);
    }

    #[test]
    fn test_document_combines_word_probabilities() {
        let spam = vocab(&[("free", 3.0), ("hello", 1.0)]);
        let ham = vocab(&[("free", 1.0), ("hello", 3.0)]);
        let model = ModelConfig::default();
        let doc = Document::from_text("mixed", "Free hello FREE");

        let p_free = word_probability("free", &spam, &ham, &model).unwrap();
        let p_hello = word_probability("hello", &spam, &ham, &model).unwrap();
        let num = p_free * p_free * p_hello;
        let den = num + (1.0 - p_free) * (1.0 - p_free) * (1.0 - p_hello);

        let score = document_probability(&doc, &spam, &ham, &model).unwrap();
        assert_eq!(score.recognized_words, 3);
        assert!((score.probability - num / den).abs() < 1e-9);
    }

    #[test]
    fn test_long_document_does_not_underflow() {
        let spam = vocab(&[("free", 3.0), ("hello", 1.0)]);
        let ham = vocab(&[("free", 1.0), ("hello", 9.0)]);
        let model = ModelConfig::default();
        let doc = Document::from_text("long", &"free hello hello hello ".repeat(2000));

        let score = document_probability(&doc, &spam, &ham, &model).unwrap();
        assert!(score.probability.is_finite());
        assert!(score.probability < 0.5);
    }

    #[test]
    fn test_combine_handles_certain_words() {
        assert_eq!(combine(f64::NEG_INFINITY, f64::NEG_INFINITY), 0.5);
        assert_eq!(combine(f64::NEG_INFINITY, -1.0), 0.0);
        assert_eq!(combine(-1.0, f64::NEG_INFINITY), 1.0);
        assert_eq!(combine(0.0, 0.0), 0.5);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.125, 2), 0.13);
        assert_eq!(round_half_up(0.5, 10), 0.5);
        assert_eq!(round_half_up(0.4449, 2), 0.44);
        assert_eq!(round_half_up(1.0, 3), 1.0);
        assert_eq!(round_half_up(0.285, 2), 0.29);
        assert_eq!(round_half_up(0.145, 2), 0.15);
        assert_eq!(round_half_up(0.5, 1), 0.5);
        assert_eq!(round_half_up(1e-300, 10), 0.0);
    }
}
