/// A binary cell state. Only [`DEAD`] and [`LIVE`] are ever stored.
pub type Cell = u8;

pub const DEAD: Cell = 0;
pub const LIVE: Cell = 1;

/// Fraction of live cells in `cells`. An empty slice has density `0.0`.
#[must_use]
pub fn density(cells: &[Cell]) -> f64 {
    if cells.is_empty() {
        return 0.0;
    }
    let live = cells.iter().filter(|&&c| c == LIVE).count();
    live as f64 / cells.len() as f64
}
