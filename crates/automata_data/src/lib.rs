//! # Automata Data
//!
//! Plain data shared by the automaton engines and their consumers:
//! binary cells, the 1-D generation history with its density series, and the
//! padded 2-D world grid.
//!
//! Nothing here decides how a generation evolves; the engines in
//! `automata_core` own that logic and hand these buffers to renderers.

pub mod data;

pub use data::cell::{density, Cell, DEAD, LIVE};
pub use data::grid::WorldGrid;
pub use data::history::{row_to_string, DensitySeries, History};
