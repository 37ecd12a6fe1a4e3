use rand::Rng;
use tracing::{debug, instrument, trace, warn};

use crate::{direction::Direction, grid::Grid, registry::Registry};

/// How many times a word is tried at a random position before it is abandoned.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Describes where a word's letters are placed in the grid: a start coordinate, a length,
/// and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSpan {
    /// The `(x, y)` coordinate of the first letter.
    pub begin: (usize, usize),

    /// The number of letters.
    pub len: usize,

    /// The direction the word is walked in.
    pub direction: Direction,
}

impl WordSpan {
    /// Creates a new [WordSpan] with the given start coordinate, length, and direction.
    pub fn new(begin: (usize, usize), len: usize, direction: Direction) -> Self {
        Self {
            begin,
            len,
            direction,
        }
    }

    fn coordinate(&self, i: usize) -> (isize, isize) {
        let (dx, dy) = self.direction.step();
        let i = i as isize;

        (
            self.begin.0 as isize + dx * i,
            self.begin.1 as isize + dy * i,
        )
    }

    /// Returns every `(x, y)` the word covers, from its first letter to its last.
    ///
    /// Only meaningful for a span that is [in bounds](WordSpan::in_bounds).
    pub fn indices(&self) -> Vec<(usize, usize)> {
        (0..self.len)
            .map(|i| {
                let (x, y) = self.coordinate(i);
                (x as usize, y as usize)
            })
            .collect()
    }

    /// Returns whether both ends of the span lie inside a `height` x `width` grid.
    pub fn in_bounds(&self, height: usize, width: usize) -> bool {
        if self.len == 0 {
            return false;
        }

        let end = self.coordinate(self.len - 1);

        self.begin.0 < width
            && self.begin.1 < height
            && end.0 >= 0
            && end.1 >= 0
            && (end.0 as usize) < width
            && (end.1 as usize) < height
    }
}

/// Tries to embed `word` into the grid, committing it to both `grid` and `registry` on success.
///
/// Each attempt draws a fresh direction and a start cell from that direction's
/// [start range](Direction::start_range). An attempt is rejected when any letter would land on
/// a cell the registry has already claimed for a different letter. After `max_attempts`
/// rejections the word is abandoned and neither `grid` nor `registry` is touched.
#[instrument(level = "trace", skip(grid, registry, rng))]
pub fn place_word<R: Rng + ?Sized>(
    word: &str,
    max_attempts: usize,
    grid: &mut Grid,
    registry: &mut Registry,
    rng: &mut R,
) -> Option<WordSpan> {
    let letters: Vec<char> = word.chars().collect();

    for attempt in 1..=max_attempts {
        let direction = Direction::random(rng);

        let Some(range) = direction.start_range(grid.height(), grid.width(), letters.len()) else {
            trace!(attempt, %direction, "Word does not fit in this direction");
            continue;
        };

        let span = WordSpan::new(range.sample(rng), letters.len(), direction);
        let indices = span.indices();

        let collision = indices
            .iter()
            .zip(&letters)
            .find(|&(&(x, y), &letter)| registry.conflicts(x, y, letter));

        if let Some((&(x, y), _)) = collision {
            trace!(attempt, %direction, x, y, "Collision with a placed word");
            continue;
        }

        for (&(x, y), &letter) in indices.iter().zip(&letters) {
            grid.set(x, y, letter);
            registry.claim(x, y, letter);
        }

        debug!(
            word,
            %direction,
            x = span.begin.0,
            y = span.begin.1,
            attempt,
            "Placed word"
        );

        return Some(span);
    }

    warn!("Could not place {}", word);
    None
}
