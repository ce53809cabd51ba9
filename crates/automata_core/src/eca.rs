//! One-dimensional cellular automata of arbitrary radius.
//!
//! The engine fills a [`History`] row by row. Each new row is computed from
//! the frozen previous row and written into its own slice of the buffer, so
//! no cell ever reads a value produced in the same sweep.

use crate::config::{EcaConfig, NeighborhoodMode, ValidatedEca};
use crate::error::{AutomatonError, Result};
use crate::rng::seeded_rng;
use crate::rule::{neighborhood_size, RuleTable};
use automata_data::{Cell, DensitySeries, History, DEAD, LIVE};
use num_bigint::BigUint;
use rand::Rng;
use std::time::Instant;

/// Cells of the radius-`radius` neighborhood centered on `center`, leftmost
/// first. With `wraparound` the row is a ring; otherwise cells past either
/// end read as dead.
pub fn neighborhood(row: &[Cell], center: usize, radius: u32, wraparound: bool) -> Vec<Cell> {
    let n = row.len() as isize;
    let k = radius as isize;
    (center as isize - k..=center as isize + k)
        .map(|idx| read_cell(row, idx, n, wraparound))
        .collect()
}

/// Integer value of the neighborhood around `center`, leftmost neighbor as
/// the most significant bit.
#[inline]
pub fn local_pattern(row: &[Cell], center: usize, radius: u32, wraparound: bool) -> usize {
    let n = row.len() as isize;
    let k = radius as isize;
    (center as isize - k..=center as isize + k).fold(0usize, |acc, idx| {
        (acc << 1) | usize::from(read_cell(row, idx, n, wraparound) == LIVE)
    })
}

#[inline(always)]
fn read_cell(row: &[Cell], idx: isize, n: isize, wraparound: bool) -> Cell {
    if wraparound {
        row[idx.rem_euclid(n) as usize]
    } else if (0..n).contains(&idx) {
        row[idx as usize]
    } else {
        DEAD
    }
}

/// Per-cell parent positions for the random-parents strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    fan_in: usize,
    parents: Vec<usize>,
}

impl Wiring {
    /// Draws `fan_in` parents for each of `cells` cells, uniformly and with
    /// replacement.
    pub fn random<R: Rng + ?Sized>(cells: usize, fan_in: usize, rng: &mut R) -> Self {
        let parents = (0..cells * fan_in)
            .map(|_| rng.gen_range(0..cells))
            .collect();
        Self { fan_in, parents }
    }

    /// Parent positions of `cell`, in pattern order.
    pub fn parents(&self, cell: usize) -> &[usize] {
        &self.parents[cell * self.fan_in..(cell + 1) * self.fan_in]
    }

    #[inline]
    fn pattern(&self, row: &[Cell], cell: usize) -> usize {
        self.parents(cell)
            .iter()
            .fold(0usize, |acc, &p| (acc << 1) | usize::from(row[p] == LIVE))
    }
}

/// A parameterized 1-D automaton: size, generation count, rule table and
/// neighborhood strategy.
#[derive(Debug, Clone)]
pub struct ElementaryAutomaton {
    cells: usize,
    generations: usize,
    table: RuleTable,
    randomized_seed: bool,
    wraparound: bool,
    neighborhood: NeighborhoodMode,
}

impl ElementaryAutomaton {
    /// Builds the engine and decodes its rule table once.
    pub fn new(config: &ValidatedEca) -> Result<Self> {
        let table = RuleTable::new(config.radius(), config.rule())?;
        Ok(Self {
            cells: config.cells(),
            generations: config.generations(),
            table,
            randomized_seed: config.randomized_seed(),
            wraparound: config.wraparound(),
            neighborhood: config.neighborhood(),
        })
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn cells(&self) -> usize {
        self.cells
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Writes generation 0 into `row`: one live cell at `n / 2`, or every cell
    /// drawn uniformly from {0, 1}.
    pub fn seed_row<R: Rng + ?Sized>(&self, row: &mut [Cell], rng: &mut R) {
        if self.randomized_seed {
            for cell in row.iter_mut() {
                *cell = Cell::from(rng.gen_bool(0.5));
            }
        } else {
            row.fill(DEAD);
            row[row.len() / 2] = LIVE;
        }
    }

    /// Computes `next` from `prev`. `wiring` is ignored by the local strategy;
    /// the random-parents strategy fails with
    /// [`AutomatonError::MissingWiring`] without one.
    pub fn step(&self, prev: &[Cell], next: &mut [Cell], wiring: Option<&Wiring>) -> Result<()> {
        match (self.neighborhood, wiring) {
            (NeighborhoodMode::RandomParents, Some(wiring)) => self.step_wired(prev, next, wiring),
            (NeighborhoodMode::RandomParents, None) => return Err(AutomatonError::MissingWiring),
            (NeighborhoodMode::Local, _) => self.step_local(prev, next),
        }
        Ok(())
    }

    fn step_local(&self, prev: &[Cell], next: &mut [Cell]) {
        let radius = self.table.radius();
        for (j, cell) in next.iter_mut().enumerate() {
            *cell = self
                .table
                .lookup(local_pattern(prev, j, radius, self.wraparound));
        }
    }

    fn step_wired(&self, prev: &[Cell], next: &mut [Cell], wiring: &Wiring) {
        for (j, cell) in next.iter_mut().enumerate() {
            *cell = self.table.lookup(wiring.pattern(prev, j));
        }
    }

    /// Runs every generation and returns the finished history.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> EcaRun {
        let start = Instant::now();
        tracing::debug!(
            cells = self.cells,
            generations = self.generations,
            radius = self.table.radius(),
            rule = %self.table.rule(),
            "Starting elementary automaton run"
        );

        let mut history = History::zeroed(self.generations, self.cells);
        let mut density = DensitySeries::zeroed(self.generations);
        self.seed_row(history.row_mut(0), rng);

        let wiring = match self.neighborhood {
            NeighborhoodMode::RandomParents => Some(Wiring::random(
                self.cells,
                neighborhood_size(self.table.radius()),
                rng,
            )),
            NeighborhoodMode::Local => None,
        };

        for i in 1..self.generations {
            let (prev, next) = history.step_rows(i);
            density.record(i - 1, prev);
            match &wiring {
                Some(wiring) => self.step_wired(prev, next, wiring),
                None => self.step_local(prev, next),
            }
        }
        let last = self.generations - 1;
        density.record(last, history.row(last));

        tracing::debug!(
            rule = %self.table.rule(),
            generations = self.generations,
            mean_density = density.mean(),
            duration_us = start.elapsed().as_micros() as u64,
            "Elementary automaton run complete"
        );

        EcaRun {
            rule: self.table.rule().clone(),
            radius: self.table.radius(),
            history,
            density,
            wiring,
        }
    }
}

/// Output of a finished 1-D run.
#[derive(Debug, Clone)]
pub struct EcaRun {
    pub rule: BigUint,
    pub radius: u32,
    pub history: History,
    pub density: DensitySeries,
    /// Parent wiring when the random-parents strategy was used.
    pub wiring: Option<Wiring>,
}

impl EcaRun {
    pub fn into_parts(self) -> (History, DensitySeries) {
        (self.history, self.density)
    }
}

impl EcaConfig {
    /// Validates the record, seeds the RNG from `seed` and runs the engine.
    /// Nothing is allocated when validation fails.
    pub fn run(&self) -> Result<EcaRun> {
        let validated = self.validate()?;
        let engine = ElementaryAutomaton::new(&validated)?;
        let mut rng = seeded_rng(validated.seed());
        Ok(engine.run(&mut rng))
    }
}
