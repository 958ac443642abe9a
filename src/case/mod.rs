pub mod joiner;
pub mod splitter;
pub mod style;

pub use splitter::SplitPolicy;
pub use style::CaseStyle;

use crate::error::Result;
use crate::input::Input;
use tracing::{debug, trace};

/// A single word as it appeared in the input. Case is normalized on join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word(String);

impl Word {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Word(s.to_string())
    }
}

/// Words in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence(Vec<Word>);

impl WordSequence {
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Word> for WordSequence {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        WordSequence(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Splits and rejoins input for one case style.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    style: CaseStyle,
}

impl Converter {
    pub fn new(style: CaseStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> CaseStyle {
        self.style
    }

    pub fn convert(&self, input: &str) -> Result<String> {
        let words = splitter::split_with(input, self.style.split_policy())?;
        trace!(words = ?words, "split input");

        let output = joiner::join(&words, self.style);
        debug!(style = %self.style, words = words.len(), input, output = %output, "converted");

        Ok(output)
    }

    pub fn convert_input(&self, input: &Input) -> Result<String> {
        self.convert(input.as_text()?)
    }
}
