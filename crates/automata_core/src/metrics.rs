//! Run metrics and logging setup.
//!
//! Provides structured logging and counters for monitoring engine runs.

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counters for the runs performed in one process.
#[derive(Debug)]
pub struct RunMetrics {
    runs: u64,
    generations: u64,
    snapshots: u64,
    busy: Duration,
    start_time: Instant,
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RunMetrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            runs: 0,
            generations: 0,
            snapshots: 0,
            busy: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Records a completed run of `generations` generations.
    pub fn record_run(&mut self, engine: &str, generations: usize, duration: Duration) {
        self.runs += 1;
        self.generations += generations as u64;
        self.busy += duration;
        tracing::info!(
            engine = engine,
            generations = generations,
            duration_ms = duration.as_millis() as u64,
            "Run complete"
        );
    }

    /// Records one produced Game of Life snapshot.
    pub fn record_step(&mut self, generation: u64, population: usize) {
        self.snapshots += 1;
        tracing::debug!(generation, population, "Snapshot produced");
    }

    #[must_use]
    pub fn runs(&self) -> u64 {
        self.runs
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Game of Life snapshots handed out so far.
    #[must_use]
    pub fn snapshots(&self) -> u64 {
        self.snapshots
    }

    /// Time spent inside recorded runs.
    #[must_use]
    pub fn busy(&self) -> Duration {
        self.busy
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize the tracing subscriber with a filter directive such as `info`
/// or `automata_core=debug`. An unparsable directive falls back to `info`.
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(directive: &str) -> bool {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .is_ok()
}
