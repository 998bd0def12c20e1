//! bayes-rs: Naive-Bayes spam filter
//!
//! Classifies text documents as spam or ham from word frequencies learned
//! on two labeled corpora.
//!
//! # Features
//!
//! - Lowercase ASCII-alphabetic tokenization
//! - Per-class vocabularies balanced with a smoothing weight
//! - Per-word posteriors combined into one document probability
//! - Evaluation over known-spam and known-ham test collections
//! - Optional calibration pass that adds more labeled data and re-evaluates
//!
//! # Example Configuration
//!
//! ```toml
//! [model]
//! spam_prior = 0.75
//! threshold = 0.5
//! alpha = 0.02
//!
//! [corpus]
//! spam_training = "data/spam-anlern"
//! ham_training = "data/ham-anlern"
//! spam_test = "data/spam-test"
//! ham_test = "data/ham-test"
//! spam_calibration = "data/spam-kallibrierung"
//! ham_calibration = "data/ham-kallibrierung"
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod filter;
pub mod report;

pub use config::FilterConfig;
pub use error::{BayesError, Result};
pub use filter::BayesFilter;

use corpus::{DirectoryCollection, DocumentCollection};
use filter::RunReport;
use tracing::info;

/// Build a filter trained on the configured training collections,
/// including the calibration collections when `calibrate` is set.
pub fn train(config: &FilterConfig, calibrate: bool) -> Result<BayesFilter> {
    config.validate()?;

    let mut filter = BayesFilter::new(config.model.clone());
    filter.train(
        &DirectoryCollection::new(&config.corpus.spam_training),
        &DirectoryCollection::new(&config.corpus.ham_training),
    )?;

    if calibrate && config.corpus.has_calibration() {
        apply_calibration(&mut filter, config)?;
    }

    Ok(filter)
}

fn apply_calibration(filter: &mut BayesFilter, config: &FilterConfig) -> Result<()> {
    let spam = config
        .corpus
        .spam_calibration
        .as_ref()
        .map(DirectoryCollection::new);
    let ham = config
        .corpus
        .ham_calibration
        .as_ref()
        .map(DirectoryCollection::new);

    filter.calibrate(
        spam.as_ref().map(|c| c as &dyn DocumentCollection),
        ham.as_ref().map(|c| c as &dyn DocumentCollection),
    )
}

/// Train, evaluate, optionally calibrate and evaluate again.
///
/// Both evaluations use the same test collections, so the difference
/// between them is the effect of calibration alone.
pub fn run(config: &FilterConfig) -> Result<RunReport> {
    let mut filter = train(config, false)?;

    let spam_test = DirectoryCollection::new(&config.corpus.spam_test);
    let ham_test = DirectoryCollection::new(&config.corpus.ham_test);

    info!("Evaluating after training");
    let baseline = filter.evaluate_pair(&spam_test, &ham_test)?;

    let calibrated = if config.corpus.has_calibration() {
        apply_calibration(&mut filter, config)?;
        info!("Evaluating after calibration");
        Some(filter.evaluate_pair(&spam_test, &ham_test)?)
    } else {
        None
    };

    Ok(RunReport {
        baseline,
        calibrated,
        alpha: config.model.alpha,
        threshold: config.model.threshold,
    })
}
