//! Generation history of a one-dimensional automaton run.

use super::cell::{density, Cell, LIVE};
use serde::{Deserialize, Serialize};

/// Row-major buffer of `generations × width` cells.
///
/// Row 0 is the seed. Row `i` was derived from row `i - 1` only. The width is
/// fixed for the lifetime of the buffer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct History {
    width: usize,
    generations: usize,
    cells: Vec<Cell>,
}

impl History {
    /// Allocates an all-dead history.
    #[must_use]
    pub fn zeroed(generations: usize, width: usize) -> Self {
        Self {
            width,
            generations,
            cells: vec![0; generations * width],
        }
    }

    /// Builds a history from explicit rows. Returns `None` when the rows are
    /// ragged or contain a value other than 0 or 1.
    #[must_use]
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * width);
        for row in rows {
            if row.len() != width || row.iter().any(|&c| c > LIVE) {
                return None;
            }
            cells.extend_from_slice(row);
        }
        Some(Self {
            width,
            generations: rows.len(),
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Cells of generation `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.generations()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[Cell] {
        let start = i * self.width;
        &self.cells[start..start + self.width]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [Cell] {
        let start = i * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// Splits out generation `i - 1` (read-only) and generation `i`
    /// (writable), so a step can read the frozen previous row while filling
    /// the next one.
    ///
    /// # Panics
    /// Panics if `i == 0` or `i >= self.generations()`.
    pub fn step_rows(&mut self, i: usize) -> (&[Cell], &mut [Cell]) {
        assert!(i > 0 && i < self.generations, "step row {i} out of range");
        let (head, tail) = self.cells.split_at_mut(i * self.width);
        let prev = &head[(i - 1) * self.width..];
        (prev, &mut tail[..self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.generations).map(move |i| self.row(i))
    }

    pub fn last_row(&self) -> Option<&[Cell]> {
        self.generations.checked_sub(1).map(|i| self.row(i))
    }

    /// Live cells in generation `i`.
    pub fn population(&self, i: usize) -> usize {
        self.row(i).iter().filter(|&&c| c == LIVE).count()
    }

    /// Generation `i` as a string of `0` and `1`.
    pub fn row_string(&self, i: usize) -> String {
        row_to_string(self.row(i))
    }

    /// Flat row-major view of every cell.
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }
}

/// Renders cells as `0`/`1` characters.
pub fn row_to_string(row: &[Cell]) -> String {
    row.iter().map(|&c| if c == LIVE { '1' } else { '0' }).collect()
}

/// Per-generation live-cell fraction of a [`History`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DensitySeries {
    values: Vec<f64>,
}

impl DensitySeries {
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Recomputes the series from a finished history.
    #[must_use]
    pub fn from_history(history: &History) -> Self {
        Self {
            values: history.rows().map(density).collect(),
        }
    }

    /// Records the density of `row` as entry `i`.
    pub fn record(&mut self, i: usize, row: &[Cell]) {
        self.values[i] = density(row);
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mean density across all generations.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_shape() {
        let h = History::zeroed(4, 7);
        assert_eq!(h.generations(), 4);
        assert_eq!(h.width(), 7);
        assert_eq!(h.as_slice().len(), 28);
        assert!(h.rows().all(|r| r.iter().all(|&c| c == 0)));
    }

    #[test]
    fn test_step_rows_split() {
        let mut h = History::from_rows(&[vec![1, 0, 1], vec![0, 0, 0]]).unwrap();
        let (prev, next) = h.step_rows(1);
        assert_eq!(prev, &[1, 0, 1]);
        next.copy_from_slice(&[0, 1, 0]);
        assert_eq!(h.row_string(1), "010");
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_non_binary() {
        assert!(History::from_rows(&[vec![1, 0], vec![1]]).is_none());
        assert!(History::from_rows(&[vec![2, 0]]).is_none());
    }

    #[test]
    fn test_density_series_matches_rows() {
        let h = History::from_rows(&[vec![1, 1, 0, 0], vec![1, 1, 1, 1]]).unwrap();
        let d = DensitySeries::from_history(&h);
        assert_eq!(d.values(), &[0.5, 1.0]);
        assert_eq!(d.mean(), 0.75);
        assert_eq!(h.population(1), 4);
    }

    #[test]
    fn test_history_serde_roundtrip() {
        let h = History::from_rows(&[vec![0, 1, 0], vec![1, 0, 1]]).unwrap();
        let json = serde_json::to_string(&h).unwrap();
        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}
