//! Padded two-dimensional world grid.

use super::cell::{Cell, DEAD, LIVE};
use serde::{Deserialize, Serialize};

/// An `(n + 2) × (n + 2)` binary matrix whose outer ring is permanently dead.
///
/// Coordinates are padded: the logical world occupies rows and columns
/// `1..=n`, and row/column `0` and `n + 1` form the border. The border lets a
/// 3×3 window be read around any interior cell without bounds checks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid {
    size: usize,
    cells: Vec<Cell>,
    generation: u64,
}

impl WorldGrid {
    /// An empty world with an `size × size` interior.
    #[must_use]
    pub fn blank(size: usize) -> Self {
        let side = size + 2;
        Self {
            size,
            cells: vec![DEAD; side * side],
            generation: 0,
        }
    }

    /// Builds a world from interior rows (`rows[r][c]` lands at padded
    /// `(r + 1, c + 1)`). Returns `None` unless `rows` is square and binary.
    #[must_use]
    pub fn from_interior(rows: &[Vec<Cell>]) -> Option<Self> {
        let size = rows.len();
        let mut grid = Self::blank(size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size || row.iter().any(|&c| c > LIVE) {
                return None;
            }
            for (c, &cell) in row.iter().enumerate() {
                grid.set(r + 1, c + 1, cell == LIVE);
            }
        }
        Some(grid)
    }

    /// An `size × size` world with the listed interior cells alive. Cells are
    /// given in 0-based interior coordinates; out-of-range entries are
    /// ignored.
    #[must_use]
    pub fn from_pattern(size: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::blank(size);
        for &(r, c) in live {
            grid.set(r + 1, c + 1, true);
        }
        grid
    }

    /// Interior side length `n`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Padded side length `n + 2`.
    #[inline]
    pub fn side(&self) -> usize {
        self.size + 2
    }

    #[inline(always)]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.side() + col
    }

    /// State at padded `(row, col)`. Anything outside the padded matrix reads
    /// as dead.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.side() || col >= self.side() {
            return DEAD;
        }
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == LIVE
    }

    #[inline]
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == self.size + 1 || col == self.size + 1
    }

    #[inline]
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        (1..=self.size).contains(&row) && (1..=self.size).contains(&col)
    }

    /// Sets an interior cell at padded `(row, col)`. Border and out-of-range
    /// writes are refused and return `false`.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        if !self.is_interior(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = if alive { LIVE } else { DEAD };
        true
    }

    /// Number of steps this grid has been advanced since seeding.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }

    /// Live interior cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == LIVE).count()
    }

    /// Checks the dead-border invariant.
    pub fn border_is_dead(&self) -> bool {
        let side = self.side();
        (0..side).all(|i| {
            self.get(0, i) == DEAD
                && self.get(side - 1, i) == DEAD
                && self.get(i, 0) == DEAD
                && self.get(i, side - 1) == DEAD
        })
    }

    /// Interior row `row` (padded index, `1..=n`) without its border cells.
    pub fn interior_row(&self, row: usize) -> &[Cell] {
        let start = self.index(row, 1);
        &self.cells[start..start + self.size]
    }

    /// Interior rows from top to bottom.
    pub fn interior_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (1..=self.size).map(move |r| self.interior_row(r))
    }

    /// Full padded matrix in row-major order, border included.
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_dimensions() {
        let g = WorldGrid::blank(4);
        assert_eq!(g.side(), 6);
        assert_eq!(g.as_slice().len(), 36);
        assert_eq!(g.population(), 0);
        assert!(g.border_is_dead());
    }

    #[test]
    fn test_border_writes_refused() {
        let mut g = WorldGrid::blank(3);
        assert!(!g.set(0, 2, true));
        assert!(!g.set(4, 4, true));
        assert!(!g.set(2, 0, true));
        assert!(g.set(1, 1, true));
        assert!(g.is_border(0, 2) && g.is_border(4, 4));
        assert!(!g.is_border(1, 1));
        assert!(g.border_is_dead());
        assert_eq!(g.population(), 1);
    }

    #[test]
    fn test_from_interior_places_cells() {
        let g = WorldGrid::from_interior(&[vec![1, 0], vec![0, 1]]).unwrap();
        assert!(g.is_alive(1, 1));
        assert!(g.is_alive(2, 2));
        assert!(!g.is_alive(1, 2));
        assert_eq!(g.interior_row(1), &[1, 0]);
    }

    #[test]
    fn test_from_interior_rejects_non_square() {
        assert!(WorldGrid::from_interior(&[vec![1, 0, 1], vec![0, 1, 0]]).is_none());
    }

    #[test]
    fn test_get_out_of_range_is_dead() {
        let g = WorldGrid::from_pattern(2, &[(0, 0), (1, 1)]);
        assert_eq!(g.get(10, 10), DEAD);
        assert_eq!(g.population(), 2);
    }
}
