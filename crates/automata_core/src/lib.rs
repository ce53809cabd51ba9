//! # Automata Core
//!
//! The automaton evolution engines.
//!
//! This crate contains:
//! - Rule-table decoding from Wolfram rule numbers of any radius
//! - A one-dimensional engine with circular (or dead) boundaries and an
//!   optional random-parents wiring
//! - A Game of Life engine on a dead-bordered grid, exposed as a lazy
//!   snapshot iterator
//! - Configuration records validated as a whole before any run
//! - Run metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use automata_core::EcaConfig;
//!
//! let run = EcaConfig::new(7, 3, 90).run().unwrap();
//! assert_eq!(run.history.row_string(2), "0101010");
//! ```

/// Configuration records and their validation
pub mod config;
/// One-dimensional automaton engine
pub mod eca;
/// Error taxonomy for configuration and rule decoding
pub mod error;
/// Game of Life engine
pub mod life;
/// Run metrics and logging setup
pub mod metrics;
/// Seeded random number generation
pub mod rng;
/// Rule table decoding
pub mod rule;

pub use config::{
    AppConfig, EcaConfig, LifeConfig, NeighborhoodMode, RawValue, ValidatedEca, ValidatedLife,
    MAX_CELLS,
};
pub use eca::{EcaRun, ElementaryAutomaton, Wiring};
pub use error::{AutomatonError, ConfigIssue};
pub use life::LifeRun;
pub use metrics::{init_logging, RunMetrics};
pub use rng::seeded_rng;
pub use rule::{max_rule, RuleTable, MAX_RADIUS};
