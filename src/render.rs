use crate::{grid::Grid, registry::Registry};

/// Separates neighbouring columns in rendered output.
pub const COLUMN_SEPARATOR: char = ' ';

/// Stands in for an unclaimed cell when only answers are shown.
pub const BLANK: char = ' ';

/// Formats the grid as text, one line per row, columns separated by [`COLUMN_SEPARATOR`].
///
/// With `show_answers` set, every cell the registry has not claimed is printed as [`BLANK`]
/// so only the placed words remain visible.
pub fn render(grid: &Grid, registry: &Registry, show_answers: bool) -> String {
    let mut output = String::with_capacity(grid.height() * (grid.width() * 2 + 1));

    for (y, row) in grid.rows().enumerate() {
        for (x, &letter) in row.enumerate() {
            if x > 0 {
                output.push(COLUMN_SEPARATOR);
            }

            if show_answers && !registry.contains(x, y) {
                output.push(BLANK);
            } else {
                output.push(letter);
            }
        }

        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn renders_rows_and_masks_unclaimed_cells() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut grid = Grid::fill(5, 5, &mut rng);
        let mut registry = Registry::new();

        for (x, letter) in "DOG".chars().enumerate() {
            grid.set(x, 1, letter);
            registry.claim(x, 1, letter);
        }

        let full = render(&grid, &registry, false);
        let lines: Vec<&str> = full.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.len() == 9));
        assert!(lines[1].starts_with("D O G "));

        let answers = render(&grid, &registry, true);
        let lines: Vec<&str> = answers.lines().collect();
        assert_eq!(lines[0], "         ");
        assert_eq!(lines[1], "D O G    ");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn rendering_is_repeatable() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = Grid::fill(6, 7, &mut rng);
        let registry = Registry::new();

        assert_eq!(
            render(&grid, &registry, false),
            render(&grid, &registry, false)
        );
    }
}
