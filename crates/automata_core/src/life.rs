//! Conway's Game of Life on a bounded, dead-bordered grid.
//!
//! Neighbor counts come from the 3×3 window around each interior cell. The
//! border row/column supplies zeros at the edges, so nothing wraps.

use crate::config::{LifeConfig, ValidatedLife};
use crate::error::Result;
use crate::rng::seeded_rng;
use automata_data::{Cell, WorldGrid, DEAD, LIVE};
use rand::Rng;
use std::iter::FusedIterator;

/// Sum of the 3×3 window centered on padded `(row, col)`, the cell itself
/// included. `(row, col)` must be an interior position.
#[inline]
pub fn window_sum(grid: &WorldGrid, row: usize, col: usize) -> u8 {
    let mut total = 0;
    for r in row - 1..=row + 1 {
        for c in col - 1..=col + 1 {
            total += grid.get(r, c);
        }
    }
    total
}

/// Birth/survival policy given a cell's state and its window total (self
/// included).
#[inline]
pub fn next_state(current: Cell, total: u8) -> Cell {
    if current == LIVE {
        let neighbors = total - 1;
        if neighbors == 2 || neighbors == 3 {
            LIVE
        } else {
            DEAD
        }
    } else if total == 3 {
        LIVE
    } else {
        DEAD
    }
}

/// Writes the successor of `prev` into `next`. Both grids must share the same
/// size; only interior cells of `next` are written.
pub fn step_into(prev: &WorldGrid, next: &mut WorldGrid) {
    debug_assert_eq!(prev.size(), next.size());
    let n = prev.size();
    for r in 1..=n {
        for c in 1..=n {
            let state = next_state(prev.get(r, c), window_sum(prev, r, c));
            next.set(r, c, state == LIVE);
        }
    }
    next.set_generation(prev.generation() + 1);
}

/// Successor of `prev` in a fresh grid.
pub fn step(prev: &WorldGrid) -> WorldGrid {
    let mut next = WorldGrid::blank(prev.size());
    step_into(prev, &mut next);
    next
}

/// Sows `⌊size² · seed_density⌋` live cells at uniformly drawn interior
/// positions. Draws may collide, so the live count is at most that number.
pub fn seed_world<R: Rng + ?Sized>(size: usize, seed_density: f64, rng: &mut R) -> WorldGrid {
    let mut world = WorldGrid::blank(size);
    let draws = ((size * size) as f64 * seed_density).floor() as usize;
    for _ in 0..draws {
        let r = rng.gen_range(1..=size);
        let c = rng.gen_range(1..=size);
        world.set(r, c, true);
    }
    world
}

/// Lazy sequence of Game of Life snapshots.
///
/// Yields exactly `generations` grids; the `t`-th one (1-based) is the world
/// after `t` steps. The iterator owns a front and a back buffer and swaps them
/// after each step. It cannot be restarted.
#[derive(Debug, Clone)]
pub struct LifeRun {
    initial: WorldGrid,
    current: WorldGrid,
    back: WorldGrid,
    remaining: usize,
}

impl LifeRun {
    pub fn new(world: WorldGrid, generations: usize) -> Self {
        let back = WorldGrid::blank(world.size());
        Self {
            initial: world.clone(),
            current: world,
            back,
            remaining: generations,
        }
    }

    /// Seeds a world from a validated record and `rng`.
    pub fn seeded<R: Rng + ?Sized>(config: &ValidatedLife, rng: &mut R) -> Self {
        let world = seed_world(config.size(), config.seed_density(), rng);
        tracing::debug!(
            size = config.size(),
            generations = config.generations(),
            population = world.population(),
            "Seeded Game of Life world"
        );
        Self::new(world, config.generations())
    }

    /// The seeded grid, before any step.
    pub fn initial(&self) -> &WorldGrid {
        &self.initial
    }

    /// The most recently produced grid.
    pub fn current(&self) -> &WorldGrid {
        &self.current
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Iterator for LifeRun {
    type Item = WorldGrid;

    fn next(&mut self) -> Option<WorldGrid> {
        if self.remaining == 0 {
            return None;
        }
        step_into(&self.current, &mut self.back);
        std::mem::swap(&mut self.current, &mut self.back);
        self.remaining -= 1;
        tracing::trace!(
            generation = self.current.generation(),
            population = self.current.population(),
            "Game of Life step"
        );
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LifeRun {}

impl FusedIterator for LifeRun {}

impl LifeConfig {
    /// Validates the record and returns the snapshot sequence, seeded from
    /// `seed`.
    pub fn run(&self) -> Result<LifeRun> {
        let validated = self.validate()?;
        let mut rng = seeded_rng(validated.seed());
        Ok(LifeRun::seeded(&validated, &mut rng))
    }
}
