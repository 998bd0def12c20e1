//! Configuration for bayes-rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BayesError, Result};

/// Main filter configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Model constants
    #[serde(default)]
    pub model: ModelConfig,
    /// Training, test and calibration collections
    pub corpus: CorpusConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Model constants, fixed for the duration of a run
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Prior probability of spam; the ham prior is its complement
    #[serde(default = "default_spam_prior")]
    pub spam_prior: f64,
    /// Documents scoring strictly above this are spam
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Weight given to a word seen only in the other class
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Decimal places kept when rounding a document score
    #[serde(default = "default_score_precision")]
    pub score_precision: u32,
    /// Denominator used for a word's relative frequency
    #[serde(default)]
    pub normalization: Normalization,
}

/// How a word weight is turned into a relative frequency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Divide by the number of distinct words in the vocabulary.
    /// Kept for parity with the source filter; textbook naive Bayes divides
    /// by the total word count instead.
    #[default]
    DistinctWords,
    /// Divide by the sum of all weights in the vocabulary
    TotalWeight,
}

/// Document collection locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub spam_training: PathBuf,
    pub ham_training: PathBuf,
    pub spam_test: PathBuf,
    pub ham_test: PathBuf,
    /// Extra spam examples ingested in the calibration pass
    pub spam_calibration: Option<PathBuf>,
    /// Extra ham examples ingested in the calibration pass
    pub ham_calibration: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_spam_prior() -> f64 {
    0.75
}

fn default_threshold() -> f64 {
    0.5
}

fn default_alpha() -> f64 {
    0.02
}

fn default_score_precision() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl ModelConfig {
    /// Prior probability of ham
    pub fn ham_prior(&self) -> f64 {
        1.0 - self.spam_prior
    }

    /// Validate model constants
    pub fn validate(&self) -> Result<()> {
        if !(self.spam_prior > 0.0 && self.spam_prior < 1.0) {
            return Err(BayesError::Config(format!(
                "spam_prior must be inside (0, 1), got {}",
                self.spam_prior
            )));
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(BayesError::Config(format!(
                "threshold must be inside (0, 1), got {}",
                self.threshold
            )));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(BayesError::Config(format!(
                "alpha must be a positive number, got {}",
                self.alpha
            )));
        }
        // At 0 decimals a neutral 0.5 would round up to 1.0
        if !(1..=15).contains(&self.score_precision) {
            return Err(BayesError::Config(format!(
                "score_precision must be between 1 and 15, got {}",
                self.score_precision
            )));
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            spam_prior: default_spam_prior(),
            threshold: default_threshold(),
            alpha: default_alpha(),
            score_precision: default_score_precision(),
            normalization: Normalization::default(),
        }
    }
}

impl CorpusConfig {
    /// Whether a calibration pass is configured
    pub fn has_calibration(&self) -> bool {
        self.spam_calibration.is_some() || self.ham_calibration.is_some()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl FilterConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BayesError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| BayesError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Create a default development configuration rooted at `./data`
    pub fn development() -> Self {
        let data = PathBuf::from("./data");
        Self {
            model: ModelConfig::default(),
            corpus: CorpusConfig {
                spam_training: data.join("spam-anlern"),
                ham_training: data.join("ham-anlern"),
                spam_test: data.join("spam-test"),
                ham_test: data.join("ham-test"),
                spam_calibration: Some(data.join("spam-kallibrierung")),
                ham_calibration: Some(data.join("ham-kallibrierung")),
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.model.validate()?;

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(BayesError::Config(format!(
                "Unknown logging format '{}'",
                other
            ))),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::development()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model.spam_prior, 0.75);
        assert_eq!(config.model.ham_prior(), 0.25);
        assert_eq!(config.model.alpha, 0.02);
        assert!(config.corpus.has_calibration());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[model]
spam_prior = 0.6
normalization = "total_weight"

[corpus]
spam_training = "corpus/spam-train"
ham_training = "corpus/ham-train"
spam_test = "corpus/spam-test"
ham_test = "corpus/ham-test"
"#;
        let config: FilterConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.model.spam_prior, 0.6);
        assert_eq!(config.model.threshold, 0.5);
        assert_eq!(config.model.normalization, Normalization::TotalWeight);
        assert_eq!(config.corpus.spam_test, PathBuf::from("corpus/spam-test"));
        assert!(!config.corpus.has_calibration());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_rejects_bad_constants() {
        let mut config = FilterConfig::default();
        config.model.threshold = 1.0;
        assert!(matches!(config.validate(), Err(BayesError::Config(_))));

        let mut config = FilterConfig::default();
        config.model.alpha = 0.0;
        assert!(config.validate().is_err());

        let mut config = FilterConfig::default();
        config.model.spam_prior = 0.0;
        assert!(config.validate().is_err());

        let mut config = FilterConfig::default();
        config.model.score_precision = 0;
        assert!(matches!(config.validate(), Err(BayesError::Config(_))));

        let mut config = FilterConfig::default();
        config.model.score_precision = 16;
        assert!(config.validate().is_err());

        let mut config = FilterConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }
}
