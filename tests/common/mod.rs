#[macro_use]
pub mod macros;

use automata_core::{EcaConfig, LifeConfig, NeighborhoodMode, RawValue};
use automata_data::{Cell, WorldGrid, LIVE};

#[allow(dead_code)]
pub struct EcaBuilder {
    config: EcaConfig,
}

#[allow(dead_code)]
impl EcaBuilder {
    pub fn new(cells: usize, generations: usize, rule: u64) -> Self {
        Self {
            config: EcaConfig::new(cells as i64, generations as i64, rule as i64),
        }
    }

    /// A record with no required field set.
    pub fn empty() -> Self {
        Self {
            config: EcaConfig::default(),
        }
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.config.radius = radius;
        self
    }

    pub fn rule(mut self, rule: impl Into<RawValue>) -> Self {
        self.config.rule = Some(rule.into());
        self
    }

    pub fn random_seed(mut self, seed: u64) -> Self {
        self.config.randomized_seed = true;
        self.config.seed = Some(seed);
        self
    }

    pub fn no_wrap(mut self) -> Self {
        self.config.wraparound = false;
        self
    }

    pub fn random_parents(mut self, seed: u64) -> Self {
        self.config.neighborhood = NeighborhoodMode::RandomParents;
        self.config.seed = Some(seed);
        self
    }

    pub fn build(self) -> EcaConfig {
        self.config
    }
}

#[allow(dead_code)]
pub struct LifeBuilder {
    config: LifeConfig,
}

#[allow(dead_code)]
impl LifeBuilder {
    pub fn new(size: usize, generations: usize) -> Self {
        Self {
            config: LifeConfig::new(size as i64, generations as i64),
        }
    }

    pub fn density(mut self, seed_density: f64) -> Self {
        self.config.seed_density = seed_density;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn build(self) -> LifeConfig {
        self.config
    }
}

/// Parses rows of `.`/`#` into a world, `#` being alive.
#[allow(dead_code)]
pub fn world_from_ascii(rows: &[&str]) -> WorldGrid {
    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| row.chars().map(|c| Cell::from(c == '#')).collect())
        .collect();
    WorldGrid::from_interior(&cells).expect("rows must form a square")
}

/// Interior live cells in 0-based coordinates, row-major.
#[allow(dead_code)]
pub fn live_cells(world: &WorldGrid) -> Vec<(usize, usize)> {
    world
        .interior_rows()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell == LIVE)
                .map(move |(c, _)| (r, c))
        })
        .collect()
}
