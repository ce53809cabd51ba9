//! Wolfram rule tables generalized to any neighborhood radius.
//!
//! A radius-`k` neighborhood holds `2k + 1` cells, so there are
//! `W = 2^(2k+1)` possible patterns and `2^W` possible rules. Reading a
//! pattern as a binary number with the leftmost neighbor as the most
//! significant bit, pattern `p` maps to bit `p` of the rule id. For `k = 1`
//! this is the familiar elementary numbering: the all-live pattern `111`
//! takes the rule's most significant bit and `000` its least significant.

use crate::error::{AutomatonError, Result};
use automata_data::{Cell, LIVE};
use num_bigint::BigUint;

/// Largest supported radius. A radius-8 table has 131 072 entries.
pub const MAX_RADIUS: u32 = 8;

/// Number of cells in a radius-`radius` neighborhood.
#[inline]
pub fn neighborhood_size(radius: u32) -> usize {
    2 * radius as usize + 1
}

/// Number of distinct neighborhood patterns, `2^(2k+1)`.
#[inline]
pub fn pattern_space(radius: u32) -> usize {
    1usize << neighborhood_size(radius)
}

/// Largest valid rule id for `radius`, `2^(2^(2k+1)) - 1`.
pub fn max_rule(radius: u32) -> BigUint {
    (BigUint::from(1u32) << pattern_space(radius)) - 1u32
}

/// Reads `cells` as a big-endian binary number.
#[inline]
pub fn pattern_value(cells: &[Cell]) -> usize {
    cells
        .iter()
        .fold(0usize, |acc, &c| (acc << 1) | usize::from(c == LIVE))
}

/// Total, immutable map from neighborhood pattern to next cell state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    radius: u32,
    rule: BigUint,
    outputs: Vec<Cell>,
}

impl RuleTable {
    /// Decodes `rule` for a radius-`radius` neighborhood.
    pub fn new(radius: u32, rule: &BigUint) -> Result<Self> {
        if radius > MAX_RADIUS {
            return Err(AutomatonError::RadiusTooLarge {
                radius,
                max: MAX_RADIUS,
            });
        }
        let width = pattern_space(radius);
        if rule.bits() > width as u64 {
            return Err(AutomatonError::RuleOutOfRange {
                rule: rule.to_string(),
                radius,
                max: max_rule(radius).to_string(),
            });
        }

        let bytes = rule.to_bytes_le();
        let outputs = (0..width)
            .map(|p| {
                let byte = bytes.get(p / 8).copied().unwrap_or(0);
                (byte >> (p % 8)) & 1
            })
            .collect();

        Ok(Self {
            radius,
            rule: rule.clone(),
            outputs,
        })
    }

    pub fn from_u64(radius: u32, rule: u64) -> Result<Self> {
        Self::new(radius, &BigUint::from(rule))
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    #[inline]
    pub fn rule(&self) -> &BigUint {
        &self.rule
    }

    #[inline]
    pub fn neighborhood_size(&self) -> usize {
        neighborhood_size(self.radius)
    }

    /// Number of patterns covered, always `2^(2k+1)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Never true; a table always covers its full pattern space.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Next state for the pattern with integer value `pattern`.
    ///
    /// # Panics
    /// Panics if `pattern >= self.len()`.
    #[inline(always)]
    pub fn lookup(&self, pattern: usize) -> Cell {
        self.outputs[pattern]
    }

    /// Next state for an explicit neighborhood, leftmost cell first. Returns
    /// `None` when `cells` has the wrong length.
    pub fn lookup_cells(&self, cells: &[Cell]) -> Option<Cell> {
        if cells.len() != self.neighborhood_size() {
            return None;
        }
        Some(self.lookup(pattern_value(cells)))
    }

    /// Next state for a pattern written as `0`/`1` characters, e.g. `"110"`.
    pub fn lookup_str(&self, pattern: &str) -> Option<Cell> {
        if pattern.len() != self.neighborhood_size()
            || !pattern.bytes().all(|b| b == b'0' || b == b'1')
        {
            return None;
        }
        usize::from_str_radix(pattern, 2)
            .ok()
            .map(|p| self.lookup(p))
    }

    /// Every `(pattern, output)` pair in Wolfram order: the all-live pattern
    /// first, down to the all-dead pattern.
    pub fn entries(&self) -> impl Iterator<Item = (String, Cell)> + '_ {
        let size = self.neighborhood_size();
        (0..self.len()).rev().map(move |p| {
            (format!("{p:0size$b}"), self.outputs[p])
        })
    }
}
