use crate::case::{Word, WordSequence};
use crate::error::{CaseError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DELIMITER_RUN: Regex = Regex::new(r"[_\-]+").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref ALPHANUMERIC_RUN: Regex = Regex::new(r"[A-Za-z0-9]+").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Words are separated by runs of whitespace, `_` and `-`; blank input is rejected
    Delimited,
    /// Words are runs of ASCII letters and digits; anything else is a boundary
    Alphanumeric,
}

pub fn split_with(input: &str, policy: SplitPolicy) -> Result<WordSequence> {
    match policy {
        SplitPolicy::Delimited => split(input),
        SplitPolicy::Alphanumeric => Ok(split_alphanumeric(input)),
    }
}

/// Split on spaces, underscores and hyphens.
///
/// Fails with [`CaseError::EmptyInput`] when the input is blank or consists
/// of delimiters only.
pub fn split(input: &str) -> Result<WordSequence> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CaseError::EmptyInput);
    }

    let spaced = DELIMITER_RUN.replace_all(trimmed, " ");
    let normalized = WHITESPACE_RUN.replace_all(&spaced, " ");

    let words: WordSequence = normalized
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(Word::from)
        .collect();

    if words.is_empty() {
        return Err(CaseError::EmptyInput);
    }

    Ok(words)
}

/// Extract every run of ASCII alphanumerics. Never fails; may return no words.
pub fn split_alphanumeric(input: &str) -> WordSequence {
    ALPHANUMERIC_RUN
        .find_iter(input)
        .map(|m| Word::from(m.as_str()))
        .collect()
}
