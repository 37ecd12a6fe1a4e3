use std::ops::Index;

use array2d::Array2D;
use rand::Rng;

/// The rectangular board of letters. Every cell always holds one uppercase letter.
///
/// Coordinates are `(x, y)` where `x` is the column and `y` is the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<char>,
}

impl Grid {
    /// Creates a `height` x `width` grid where every cell is a letter from `A` to `Z`
    /// drawn uniformly at random.
    pub fn fill<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Self {
        let letters: Vec<char> = ('A'..='Z').collect();

        let cells = Array2D::filled_by_row_major(
            || letters[rng.gen_range(0..letters.len())],
            height,
            width,
        );

        Self { cells }
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.cells.num_rows()
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.cells.num_columns()
    }

    /// Gets the letter at `(x, y)`, returning [`Option::None`] if the coordinate is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y, x).copied()
    }

    /// Overwrites the letter at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, letter: char) {
        self.cells[(y, x)] = letter;
    }

    /// Iterates over the rows from `y = 0` upwards.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &char>> {
        self.cells.rows_iter()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = char;

    /// Indexes by `(x, y)`.
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.cells[(y, x)]
    }
}
