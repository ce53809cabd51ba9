//! Error types for automaton configuration and rule decoding.
//!
//! Every problem found while validating a configuration record is collected
//! into one [`AutomatonError::InvalidConfig`], so a caller sees all missing or
//! invalid fields at once instead of fixing them one run at a time.

use thiserror::Error;

/// A single problem with a configuration field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigIssue {
    /// A required field was not supplied.
    #[error("{field} must be defined")]
    Missing { field: &'static str },

    /// An integer field was zero or negative.
    #[error("{field} must be a positive integer, given {value}")]
    NotPositive { field: &'static str, value: String },

    /// A field that must be an integer held a fractional or non-numeric value.
    #[error("{field} must be an integer, given {value}")]
    NotIntegral { field: &'static str, value: String },

    /// Integer coercion of a loosely typed value was impossible.
    #[error("{field} could not be converted to an integer: {value}")]
    Coercion { field: &'static str, value: String },

    /// Rule id above `2^(2^(2k+1)) - 1`.
    #[error("rule must be an integer in range [0, {max}] for radius {radius}, given {rule}")]
    RuleOutOfRange {
        rule: String,
        radius: u32,
        max: String,
    },

    #[error("rule must be non-negative, given {value}")]
    NegativeRule { value: String },

    #[error("radius {radius} exceeds the supported maximum of {max}")]
    RadiusTooLarge { radius: u32, max: u32 },

    #[error("seed density must lie in [0, 1], given {value}")]
    DensityOutOfRange { value: f64 },

    /// The requested buffer exceeds the cell budget.
    #[error("{what} of {rows} x {cols} cells is too large")]
    TooLarge {
        what: &'static str,
        rows: usize,
        cols: usize,
    },
}

/// Main error type for automaton operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AutomatonError {
    /// One or more configuration fields are missing or invalid.
    #[error("invalid configuration: {}", join_issues(.0))]
    InvalidConfig(Vec<ConfigIssue>),

    #[error("rule {rule} is out of range [0, {max}] for radius {radius}")]
    RuleOutOfRange {
        rule: String,
        radius: u32,
        max: String,
    },

    #[error("radius {radius} exceeds the supported maximum of {max}")]
    RadiusTooLarge { radius: u32, max: u32 },

    /// A random-parents step was requested without a parent wiring.
    #[error("random-parents step requires a parent wiring")]
    MissingWiring,
}

/// Result type alias for automaton operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;

impl AutomatonError {
    /// Issues carried by an [`AutomatonError::InvalidConfig`]; empty for other
    /// variants.
    #[must_use]
    pub fn issues(&self) -> &[ConfigIssue] {
        match self {
            Self::InvalidConfig(issues) => issues,
            _ => &[],
        }
    }
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
