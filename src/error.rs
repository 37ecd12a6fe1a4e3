use thiserror::Error;

use crate::config::{MAX_DIMENSION, MIN_DIMENSION, MIN_WORD_LEN};

/// A shorthand for results whose error is a puzzle configuration [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// An error that happened while validating a puzzle configuration.
///
/// Every variant is raised before any grid work begins, so a puzzle is never partially built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Height or width lies outside the supported range.
    #[error(
        "Invalid size {height} x {width}. Height and width must each be between {} and {}",
        MIN_DIMENSION,
        MAX_DIMENSION
    )]
    InvalidSize {
        /// The requested number of rows.
        height: usize,
        /// The requested number of columns.
        width: usize,
    },

    /// A word is shorter than the minimum word length.
    #[error("Word '{word}' is too short. Words must be at least {} characters", MIN_WORD_LEN)]
    WordTooShort {
        /// The offending word, as given.
        word: String,
    },

    /// A word does not fit along the shorter side of the grid.
    #[error("Word '{word}' is too long for a {height} x {width} grid")]
    WordTooLong {
        /// The offending word, as given.
        word: String,
        /// The configured number of rows.
        height: usize,
        /// The configured number of columns.
        width: usize,
    },

    /// A word contains something other than the letters A to Z.
    #[error("Word '{word}' contains one or more non-alphabetic characters")]
    NonAlphabetic {
        /// The offending word, as given.
        word: String,
    },

    /// The per-word retry budget is zero.
    #[error("The placement retry budget must be at least 1 attempt per word")]
    InvalidRetryBudget,
}
