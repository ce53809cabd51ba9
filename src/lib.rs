//! # Automata Lab
//!
//! Headless front end for the automaton engines: the command-line surface,
//! configuration overrides and run summaries.

pub mod app;
pub mod cli;

pub use automata_core as core;
pub use automata_data as data;
pub use automata_io as io;
