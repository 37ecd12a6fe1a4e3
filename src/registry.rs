use std::collections::HashMap;

/// Records which grid cells are claimed by placed words and the letter each one must hold.
///
/// Entries are only ever added. A coordinate, once claimed, keeps its letter for the lifetime
/// of the puzzle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    cells: HashMap<(usize, usize), char>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The letter claimed at `(x, y)`, if any.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(&(x, y)).copied()
    }

    /// Returns whether `(x, y)` is claimed by a placed word.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells.contains_key(&(x, y))
    }

    /// Returns whether placing `letter` at `(x, y)` would contradict an earlier claim.
    /// Claiming the same letter twice is not a conflict; that is how words cross.
    pub fn conflicts(&self, x: usize, y: usize, letter: char) -> bool {
        self.get(x, y).is_some_and(|claimed| claimed != letter)
    }

    pub(crate) fn claim(&mut self, x: usize, y: usize, letter: char) {
        self.cells.insert((x, y), letter);
    }

    /// The number of claimed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether no cell has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over `((x, y), letter)` claims in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), char)> + '_ {
        self.cells.iter().map(|(&coord, &letter)| (coord, letter))
    }
}
