//! Core data structures for automaton runs.

pub mod cell;
pub mod grid;
pub mod history;
