#![warn(missing_docs)]

//! # Word search puzzles
//!
//! Generates word searches: a grid of random letters with a list of words hidden in it along
//! any of eight compass directions. Words may cross where they share a letter. A word that
//! cannot be fitted after a bounded number of random attempts is left out and reported rather
//! than failing the whole puzzle.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use wordsearch_puzzle::{PuzzleConfig, WordSearch};
//!
//! let config = PuzzleConfig::new(10, 10, ["nap", "sleep", "pillow"], false)?;
//! let puzzle = WordSearch::with_rng(config, &mut StdRng::seed_from_u64(1));
//!
//! assert_eq!(puzzle.render(false).lines().count(), 10);
//! # Ok::<(), wordsearch_puzzle::Error>(())
//! ```

/// Puzzle configuration and its validation.
pub mod config;
/// The eight placement directions and the start cells each one allows.
pub mod direction;
/// Configuration errors.
pub mod error;
/// The letter grid.
pub mod grid;
/// Fitting words into the grid.
pub mod placement;
/// Puzzle generation from end to end.
pub mod puzzle;
/// Which cells placed words have claimed.
pub mod registry;
/// Text output.
pub mod render;

pub use config::{PuzzleConfig, PuzzleConfigBuilder};
pub use direction::{Direction, StartRange};
pub use error::{Error, Result};
pub use grid::Grid;
pub use placement::{place_word, WordSpan, DEFAULT_MAX_ATTEMPTS};
pub use puzzle::WordSearch;
pub use registry::Registry;
pub use render::render;
