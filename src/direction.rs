use std::{fmt::Display, ops::RangeInclusive};

use rand::Rng;

/// The compass direction a word is laid out in, relative to its start cell.
///
/// A direction names the edge of the grid the word is anchored against rather than the
/// screen direction it reads in: a [Direction::North] word starts in the rows nearest
/// `y = 0` and walks towards larger `y`, a [Direction::West] word starts near `x = 0`
/// and walks towards larger `x`. Diagonals combine one vertical and one horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Walks towards increasing `y`.
    North,

    /// Walks towards decreasing `y`.
    South,

    /// Walks towards decreasing `x`.
    East,

    /// Walks towards increasing `x`.
    West,

    /// Increasing `y`, decreasing `x`.
    NorthEast,

    /// Increasing `y`, increasing `x`.
    NorthWest,

    /// Decreasing `y`, decreasing `x`.
    SouthEast,

    /// Decreasing `y`, increasing `x`.
    SouthWest,
}

/// The inclusive coordinate bounds a start cell must lie within so that a word of a given
/// length, walked in a given direction, stays inside the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartRange {
    /// Valid start columns.
    pub x: RangeInclusive<usize>,

    /// Valid start rows.
    pub y: RangeInclusive<usize>,
}

impl StartRange {
    /// Picks a start coordinate `(x, y)` uniformly within the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (usize, usize) {
        (rng.gen_range(self.x.clone()), rng.gen_range(self.y.clone()))
    }

    /// Returns whether `(x, y)` lies within the range.
    pub fn contains(&self, (x, y): (usize, usize)) -> bool {
        self.x.contains(&x) && self.y.contains(&y)
    }
}

// The two base axes a direction is composed from.
#[derive(Clone, Copy)]
enum Vertical {
    North,
    South,
}

#[derive(Clone, Copy)]
enum Horizontal {
    East,
    West,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Returns a direction drawn uniformly from all eight.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        use Direction::*;

        match rng.gen_range(0..8) {
            0 => North,
            1 => South,
            2 => East,
            3 => West,
            4 => NorthEast,
            5 => NorthWest,
            6 => SouthEast,
            7 => SouthWest,
            _ => unreachable!(),
        }
    }

    /// The short compass symbol, e.g. `"NE"`.
    pub fn symbol(self) -> &'static str {
        use Direction::*;

        match self {
            North => "N",
            South => "S",
            East => "E",
            West => "W",
            NorthEast => "NE",
            NorthWest => "NW",
            SouthEast => "SE",
            SouthWest => "SW",
        }
    }

    fn vertical(self) -> Option<Vertical> {
        use Direction::*;

        match self {
            North | NorthEast | NorthWest => Some(Vertical::North),
            South | SouthEast | SouthWest => Some(Vertical::South),
            East | West => None,
        }
    }

    fn horizontal(self) -> Option<Horizontal> {
        use Direction::*;

        match self {
            East | NorthEast | SouthEast => Some(Horizontal::East),
            West | NorthWest | SouthWest => Some(Horizontal::West),
            North | South => None,
        }
    }

    /// The `(dx, dy)` added to the coordinate for each successive letter.
    pub fn step(self) -> (isize, isize) {
        let dx = match self.horizontal() {
            Some(Horizontal::West) => 1,
            Some(Horizontal::East) => -1,
            None => 0,
        };
        let dy = match self.vertical() {
            Some(Vertical::North) => 1,
            Some(Vertical::South) => -1,
            None => 0,
        };

        (dx, dy)
    }

    /// Returns the start cells from which a word of `len` letters fits inside a
    /// `height` x `width` grid when walked in this direction.
    ///
    /// Returns [`None`] when the word is empty or longer than the axis it has to travel along.
    pub fn start_range(self, height: usize, width: usize, len: usize) -> Option<StartRange> {
        if len == 0 || height == 0 || width == 0 {
            return None;
        }

        let x = match self.horizontal() {
            Some(Horizontal::West) => 0..=width.checked_sub(len)?,
            Some(Horizontal::East) => (len - 1)..=(width - 1),
            None => 0..=(width - 1),
        };
        let y = match self.vertical() {
            Some(Vertical::North) => 0..=height.checked_sub(len)?,
            Some(Vertical::South) => (len - 1)..=(height - 1),
            None => 0..=(height - 1),
        };

        if x.is_empty() || y.is_empty() {
            return None;
        }

        Some(StartRange { x, y })
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
