//! # Automata IO
//!
//! Configuration file handling for automaton runs.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - Loading, initializing and writing `config.toml`

/// Error types and result aliases for I/O operations
pub mod error;
/// `config.toml` loading and saving
pub mod config_file;

pub use config_file::{from_toml, load_config, load_or_init, save_config, to_toml};
pub use error::{IoError, Result};
