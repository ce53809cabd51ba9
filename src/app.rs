use anyhow::{Context, Result};
use automata_core::{
    seeded_rng, EcaConfig, ElementaryAutomaton, LifeConfig, LifeRun, NeighborhoodMode, RunMetrics,
};
use automata_data::{density, row_to_string};
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// What a one-dimensional run reports back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct EcaSummary {
    pub rule: String,
    pub radius: u32,
    pub cells: usize,
    pub generations: usize,
    pub wraparound: bool,
    pub neighborhood: NeighborhoodMode,
    pub final_row: String,
    pub final_density: f64,
    pub mean_density: f64,
}

impl fmt::Display for EcaSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ECA rule {} (radius {}, {} cells, {} generations)",
            self.rule, self.radius, self.cells, self.generations
        )?;
        writeln!(f, "final row:     {}", self.final_row)?;
        writeln!(f, "final density: {:.3}", self.final_density)?;
        write!(f, "mean density:  {:.3}", self.mean_density)
    }
}

/// What a Game of Life run reports back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct LifeSummary {
    pub size: usize,
    pub steps: usize,
    pub initial_population: usize,
    /// Live cells after each step, in order.
    pub populations: Vec<usize>,
}

impl LifeSummary {
    pub fn final_population(&self) -> usize {
        self.populations
            .last()
            .copied()
            .unwrap_or(self.initial_population)
    }
}

impl fmt::Display for LifeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Game of Life {0}x{0}, {1} steps",
            self.size, self.steps
        )?;
        writeln!(f, "initial population: {}", self.initial_population)?;
        write!(f, "final population:   {}", self.final_population())
    }
}

/// Validates `config`, runs the 1-D engine to completion and summarizes the
/// history.
pub fn run_eca(config: &EcaConfig, metrics: &mut RunMetrics) -> Result<EcaSummary> {
    let validated = config
        .validate()
        .context("elementary automaton configuration rejected")?;
    let engine = ElementaryAutomaton::new(&validated)?;
    let mut rng = seeded_rng(validated.seed());

    let start = Instant::now();
    let run = engine.run(&mut rng);
    metrics.record_run("eca", validated.generations(), start.elapsed());

    let rule = run.rule.to_string();
    let radius = run.radius;
    let (history, density_series) = run.into_parts();
    let final_row = history.last_row().context("history has no generations")?;

    Ok(EcaSummary {
        rule,
        radius,
        cells: validated.cells(),
        generations: validated.generations(),
        wraparound: validated.wraparound(),
        neighborhood: validated.neighborhood(),
        final_row: row_to_string(final_row),
        final_density: density(final_row),
        mean_density: density_series.mean(),
    })
}

/// Validates `config`, pulls every Game of Life snapshot and records the
/// population of each.
pub fn run_life(config: &LifeConfig, metrics: &mut RunMetrics) -> Result<LifeSummary> {
    let validated = config
        .validate()
        .context("Game of Life configuration rejected")?;
    let mut rng = seeded_rng(validated.seed());

    let start = Instant::now();
    let run = LifeRun::seeded(&validated, &mut rng);
    let initial_population = run.initial().population();
    let mut populations = Vec::with_capacity(run.len());
    for grid in run {
        metrics.record_step(grid.generation(), grid.population());
        populations.push(grid.population());
    }
    metrics.record_run("life", validated.generations(), start.elapsed());

    Ok(LifeSummary {
        size: validated.size(),
        steps: populations.len(),
        initial_population,
        populations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_eca_rule_90() {
        let mut metrics = RunMetrics::new();
        let summary = run_eca(&EcaConfig::new(7, 3, 90), &mut metrics).unwrap();
        assert_eq!(summary.final_row, "0101010");
        assert!((summary.final_density - 3.0 / 7.0).abs() < 1e-12);
        assert_eq!(metrics.runs(), 1);
        assert!(summary.to_string().contains("ECA rule 90"));
    }

    #[test]
    fn test_run_eca_reports_all_issues() {
        let mut metrics = RunMetrics::new();
        let err = run_eca(&EcaConfig::default(), &mut metrics).unwrap_err();
        let text = format!("{err:#}");
        assert!(text.contains("cells must be defined"));
        assert!(text.contains("generations must be defined"));
        assert!(text.contains("rule must be defined"));
        assert_eq!(metrics.runs(), 0);
    }

    #[test]
    fn test_run_life_counts_steps() {
        let mut metrics = RunMetrics::new();
        let config = LifeConfig::new(16, 5).with_seed(8);
        let summary = run_life(&config, &mut metrics).unwrap();
        assert_eq!(summary.steps, 5);
        assert_eq!(summary.populations.len(), 5);
        assert_eq!(metrics.generations(), 5);
        assert_eq!(metrics.snapshots(), 5);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["size"], 16);
    }
}
