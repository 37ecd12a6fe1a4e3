use std::{fmt::Display, ops::Index};

use rand::Rng;
use tracing::info;

use crate::{
    config::PuzzleConfig,
    grid::Grid,
    placement::{place_word, WordSpan},
    registry::Registry,
    render::render,
};

/// A finished word search: a grid of letters, the cells claimed by placed words, and which
/// words made it onto the board.
#[derive(Clone, Debug)]
pub struct WordSearch {
    config: PuzzleConfig,
    grid: Grid,
    registry: Registry,
    placed: Vec<(String, WordSpan)>,
    unplaced: Vec<String>,
}

impl WordSearch {
    /// Generates a word search from a validated configuration using the thread-local RNG.
    ///
    /// Generation never fails. A word that finds no collision-free position within
    /// [`PuzzleConfig::max_attempts`] tries is left off the board and listed in
    /// [`WordSearch::unplaced_words`].
    pub fn new(config: PuzzleConfig) -> Self {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Generates a word search drawing all randomness from `rng`, so a seeded generator gives a
    /// reproducible puzzle.
    pub fn with_rng<R: Rng + ?Sized>(config: PuzzleConfig, rng: &mut R) -> Self {
        let mut grid = Grid::fill(config.height(), config.width(), rng);
        let mut registry = Registry::new();
        let mut placed = Vec::with_capacity(config.words().len());
        let mut unplaced = Vec::new();

        for word in config.words() {
            match place_word(word, config.max_attempts(), &mut grid, &mut registry, rng) {
                Some(span) => placed.push((word.clone(), span)),
                None => unplaced.push(word.clone()),
            }
        }

        info!(
            placed = placed.len(),
            unplaced = unplaced.len(),
            height = config.height(),
            width = config.width(),
            "Generated word search"
        );

        Self {
            config,
            grid,
            registry,
            placed,
            unplaced,
        }
    }

    /// The configuration the puzzle was generated from.
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// The number of rows in the grid.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The number of columns in the grid.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Provides a reference to the letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Provides a reference to the cells claimed by placed words.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Gets the letter at column `x`, row `y`, returning [`Option::None`] if the coordinate is out
    /// of bounds.
    pub fn get_letter(&self, x: usize, y: usize) -> Option<char> {
        self.grid.get(x, y)
    }

    /// Each word that was placed, in input order, with where it sits in the grid.
    pub fn placed_words(&self) -> &[(String, WordSpan)] {
        &self.placed
    }

    /// Words that exhausted their retry budget, in input order.
    pub fn unplaced_words(&self) -> &[String] {
        &self.unplaced
    }

    /// Renders the grid as text. With `show_answers` set, only cells belonging to placed words
    /// are shown.
    pub fn render(&self, show_answers: bool) -> String {
        render(&self.grid, &self.registry, show_answers)
    }
}

impl Index<(usize, usize)> for WordSearch {
    type Output = char;

    /// Indexes by `(x, y)`.
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.grid[(x, y)]
    }
}

impl Display for WordSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(self.config.show_answers()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;
    use rand::{rngs::StdRng, SeedableRng};

    fn generate(config: PuzzleConfig, seed: u64) -> WordSearch {
        WordSearch::with_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn generate_word_search() {
        let config = PuzzleConfig::new(10, 10, ["lazy", "panic", "search"], false).unwrap();
        let word_search = generate(config, 0);

        assert_eq!(word_search.height(), 10);
        assert_eq!(word_search.width(), 10);
        assert_eq!(
            word_search.placed_words().len() + word_search.unplaced_words().len(),
            3
        );
    }

    #[test]
    fn empty_word_search() {
        let config = PuzzleConfig::new(10, 10, Vec::<String>::new(), false).unwrap();
        let word_search = generate(config, 0);

        assert!(word_search.placed_words().is_empty());
        assert!(word_search.registry().is_empty());
    }

    #[test]
    fn every_cell_is_an_uppercase_letter() {
        let config = PuzzleConfig::new(7, 23, ["python", "rust"], false).unwrap();
        let word_search = generate(config, 1);

        for y in 0..7 {
            for x in 0..23 {
                let letter = word_search.get_letter(x, y).unwrap();
                assert!(letter.is_ascii_uppercase());
                assert_eq!(word_search[(x, y)], letter);
            }
        }
        assert_eq!(word_search.get_letter(23, 0), None);
        assert_eq!(word_search.get_letter(0, 7), None);
    }

    #[test]
    fn placed_words_read_back_from_registry() {
        let words = [
            "HELLO",
            "BACKLIGHT",
            "RAPTORS",
            "COMPUTER",
            "SENATORS",
            "PYTHON",
        ];

        for seed in 0..20 {
            let config = PuzzleConfig::new(10, 10, words, true).unwrap();
            let word_search = generate(config, seed);

            for (word, span) in word_search.placed_words() {
                assert!(span.in_bounds(10, 10));
                assert_eq!(span.len, word.len());

                for ((x, y), letter) in span.indices().into_iter().zip(word.chars()) {
                    assert_eq!(word_search.registry().get(x, y), Some(letter));
                    assert_eq!(word_search.get_letter(x, y), Some(letter));
                }
            }

            let claimed: usize = word_search
                .placed_words()
                .iter()
                .map(|(_, span)| span.len)
                .sum();
            assert!(word_search.registry().len() <= claimed);
        }
    }

    #[test]
    fn crowded_board_reports_unplaced_words() {
        let words = ["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY", "ZZZZZ", "QQQQQ"];
        let config = PuzzleConfig::new(5, 5, words, true).unwrap();
        let word_search = generate(config, 2);

        // Seven five-letter words with no letters in common cannot share a 5x5 board.
        assert!(!word_search.unplaced_words().is_empty());
        assert_eq!(
            word_search.placed_words().len() + word_search.unplaced_words().len(),
            words.len()
        );

        let answers = word_search.render(true);
        for word in word_search.unplaced_words() {
            assert!(!word_search
                .placed_words()
                .iter()
                .any(|(placed, _)| placed == word));
        }
        let visible = answers.chars().filter(|c| c.is_ascii_uppercase()).count();
        assert_eq!(visible, word_search.registry().len());
    }

    #[test]
    fn single_word_on_small_board() {
        let config = PuzzleConfig::new(5, 5, ["cat"], false).unwrap();
        let word_search = generate(config, 3);

        assert_eq!(word_search.registry().len(), 3);
        let (word, span) = &word_search.placed_words()[0];
        assert_eq!(word, "CAT");
        assert!(Direction::ALL.contains(&span.direction));
    }

    #[test]
    fn display_uses_configured_mode_and_is_stable() {
        let config = PuzzleConfig::new(8, 8, ["rust", "crate"], true).unwrap();
        let word_search = generate(config, 4);

        let first = word_search.to_string();
        let second = word_search.to_string();
        assert_eq!(first, second);
        assert_eq!(first, word_search.render(true));
        assert_eq!(first.lines().count(), 8);
    }

    #[test]
    fn same_seed_same_puzzle() {
        let config = PuzzleConfig::new(12, 12, ["seeded", "random", "words"], false).unwrap();

        let a = generate(config.clone(), 42);
        let b = generate(config, 42);

        assert_eq!(a.render(false), b.render(false));
        assert_eq!(a.placed_words(), b.placed_words());
    }
}
