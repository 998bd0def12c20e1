//! Text normalization

/// Split a line into lowercase ASCII-alphabetic tokens.
///
/// Every character that is not an ASCII letter acts as a separator, so
/// digits, punctuation and non-ASCII letters never reach a vocabulary.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_ascii_lowercase())
        .collect()
}
