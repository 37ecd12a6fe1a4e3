use crate::{
    error::{Error, Result},
    placement::DEFAULT_MAX_ATTEMPTS,
};

/// The smallest allowed height or width.
pub const MIN_DIMENSION: usize = 5;

/// The largest allowed height or width.
pub const MAX_DIMENSION: usize = 50;

/// The shortest word that may be placed.
pub const MIN_WORD_LEN: usize = 3;

/// A validated word search configuration. See [`PuzzleConfig::builder`] for the defaults.
///
/// Once built, a configuration cannot be changed; every word in it is uppercase, made only of
/// the letters `A` to `Z`, and fits along both sides of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleConfig {
    height: usize,
    width: usize,
    words: Vec<String>,
    show_answers: bool,
    max_attempts: usize,
}

impl PuzzleConfig {
    /// Validates a configuration with the default retry budget.
    pub fn new<I, S>(height: usize, width: usize, words: I, show_answers: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder()
            .height(height)
            .width(width)
            .words(words)
            .show_answers(show_answers)
            .build()
    }

    /// Starts a configuration with a 10 x 10 grid, no words, answers hidden, and a retry budget
    /// of [`DEFAULT_MAX_ATTEMPTS`] per word.
    pub fn builder() -> PuzzleConfigBuilder {
        PuzzleConfigBuilder::new()
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The words to place, uppercased, in the order they will be attempted.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether the puzzle renders only the cells claimed by placed words.
    pub fn show_answers(&self) -> bool {
        self.show_answers
    }

    /// How many placement attempts each word gets.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

/// Builder for [`PuzzleConfig`]. Nothing is checked until [`build`](PuzzleConfigBuilder::build).
#[derive(Clone, Debug)]
pub struct PuzzleConfigBuilder {
    height: usize,
    width: usize,
    words: Vec<String>,
    show_answers: bool,
    max_attempts: usize,
}

impl Default for PuzzleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            height: 10,
            width: 10,
            words: Vec::new(),
            show_answers: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the number of rows.
    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Sets the number of columns.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the word list.
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one word to the word list.
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.words.push(word.into());
        self
    }

    /// Sets whether only the placed words are rendered.
    pub fn show_answers(mut self, show_answers: bool) -> Self {
        self.show_answers = show_answers;
        self
    }

    /// Sets the per-word retry budget.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates the size first, then each word in order, and fails on the first problem found.
    pub fn build(self) -> Result<PuzzleConfig> {
        let Self {
            height,
            width,
            words,
            show_answers,
            max_attempts,
        } = self;

        let dimensions = MIN_DIMENSION..=MAX_DIMENSION;
        if !dimensions.contains(&height) || !dimensions.contains(&width) {
            return Err(Error::InvalidSize { height, width });
        }

        let words = words
            .into_iter()
            .map(|word| validate_word(word, height, width))
            .collect::<Result<Vec<_>>>()?;

        if max_attempts == 0 {
            return Err(Error::InvalidRetryBudget);
        }

        Ok(PuzzleConfig {
            height,
            width,
            words,
            show_answers,
            max_attempts,
        })
    }
}

fn validate_word(word: String, height: usize, width: usize) -> Result<String> {
    let len = word.chars().count();

    if len < MIN_WORD_LEN {
        return Err(Error::WordTooShort { word });
    }

    if len > width || len > height {
        return Err(Error::WordTooLong {
            word,
            height,
            width,
        });
    }

    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::NonAlphabetic { word });
    }

    Ok(word.to_ascii_uppercase())
}
