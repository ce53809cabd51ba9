//! Configuration records for automaton runs.
//!
//! Each engine has one explicit structure listing every recognized option and
//! its default. Records map to tables of `config.toml`:
//!
//! ```toml
//! log_level = "info"
//!
//! [eca]
//! cells = 101
//! generations = 200
//! radius = 2
//! rule = 7500
//! randomized_seed = true
//! seed = 42
//!
//! [life]
//! size = 60
//! generations = 50
//! seed_density = 0.1
//! ```
//!
//! Sizes and rule ids are read as [`RawValue`] so that a float or a string in
//! the file becomes a reported validation issue rather than a parse failure.
//! A record is validated as a whole; all problems are returned together.

use crate::error::{AutomatonError, ConfigIssue, Result};
use crate::rule::{max_rule, MAX_RADIUS};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest buffer, in cells, that a validated run may allocate. One cell is
/// one byte, so this caps a run at 4 GiB.
pub const MAX_CELLS: usize = 1 << 32;

/// Whether a `rows` x `cols` buffer fits within [`MAX_CELLS`].
fn within_budget(rows: usize, cols: usize) -> bool {
    rows.checked_mul(cols).is_some_and(|cells| cells <= MAX_CELLS)
}

/// A loosely typed scalar from a config file or command line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for RawValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl RawValue {
    /// Strict integer reading: integers, integral floats and integer strings
    /// pass; anything fractional or non-numeric is not integral.
    pub fn to_integer(&self, field: &'static str) -> std::result::Result<i64, ConfigIssue> {
        let not_integral = || ConfigIssue::NotIntegral {
            field,
            value: self.to_string(),
        };
        match self {
            Self::Int(v) => Ok(*v),
            Self::Float(v) => float_to_integer(*v).ok_or_else(not_integral),
            Self::Text(s) => {
                let s = s.trim();
                if let Ok(v) = s.parse::<i64>() {
                    return Ok(v);
                }
                s.parse::<f64>()
                    .ok()
                    .and_then(float_to_integer)
                    .ok_or_else(not_integral)
            }
        }
    }

    /// Lenient coercion: finite floats are truncated toward zero, strings must
    /// hold an integer.
    pub fn coerce_integer(&self, field: &'static str) -> std::result::Result<i64, ConfigIssue> {
        let failed = || ConfigIssue::Coercion {
            field,
            value: self.to_string(),
        };
        match self {
            Self::Int(v) => Ok(*v),
            Self::Float(v) if v.is_finite() && v.abs() < i64::MAX as f64 => Ok(v.trunc() as i64),
            Self::Float(_) => Err(failed()),
            Self::Text(s) => s.trim().parse::<i64>().map_err(|_| failed()),
        }
    }
}

fn float_to_integer(v: f64) -> Option<i64> {
    (v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64).then_some(v as i64)
}

fn positive(
    field: &'static str,
    value: std::result::Result<i64, ConfigIssue>,
) -> std::result::Result<usize, ConfigIssue> {
    let v = value?;
    if v <= 0 {
        return Err(ConfigIssue::NotPositive {
            field,
            value: v.to_string(),
        });
    }
    usize::try_from(v).map_err(|_| ConfigIssue::TooLarge {
        what: field,
        rows: 1,
        cols: usize::MAX,
    })
}

/// Reads a rule id: non-negative integers or decimal strings of any length.
fn parse_rule(raw: &RawValue) -> std::result::Result<BigUint, ConfigIssue> {
    match raw {
        RawValue::Int(v) if *v < 0 => Err(ConfigIssue::NegativeRule {
            value: v.to_string(),
        }),
        RawValue::Int(v) => Ok(BigUint::from(*v as u64)),
        RawValue::Float(_) => Err(ConfigIssue::NotIntegral {
            field: "rule",
            value: raw.to_string(),
        }),
        RawValue::Text(s) => {
            let s = s.trim();
            if let Some(digits) = s.strip_prefix('-') {
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ConfigIssue::NegativeRule {
                        value: s.to_string(),
                    });
                }
            }
            s.parse::<BigUint>().map_err(|_| ConfigIssue::NotIntegral {
                field: "rule",
                value: raw.to_string(),
            })
        }
    }
}

/// How a cell's neighborhood is gathered from the previous generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NeighborhoodMode {
    /// The `2k + 1` cells centered on the cell.
    #[default]
    Local,
    /// `2k + 1` parent positions drawn once per run, uniformly over the row.
    RandomParents,
}

/// One-dimensional automaton options.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EcaConfig {
    /// Number of cells per generation (`n`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<RawValue>,
    /// Number of generations, seed included (`it`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generations: Option<RawValue>,
    /// Neighborhood radius (`k`).
    pub radius: u32,
    /// Rule id in Wolfram numbering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RawValue>,
    /// Seed every cell at random instead of a single centered live cell.
    pub randomized_seed: bool,
    pub wraparound: bool,
    pub neighborhood: NeighborhoodMode,
    /// RNG seed; `None` draws one from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EcaConfig {
    fn default() -> Self {
        Self {
            cells: None,
            generations: None,
            radius: 1,
            rule: None,
            randomized_seed: false,
            wraparound: true,
            neighborhood: NeighborhoodMode::Local,
            seed: None,
        }
    }
}

impl EcaConfig {
    /// A record with the three required fields set and every option at its
    /// default.
    pub fn new(
        cells: impl Into<RawValue>,
        generations: impl Into<RawValue>,
        rule: impl Into<RawValue>,
    ) -> Self {
        Self {
            cells: Some(cells.into()),
            generations: Some(generations.into()),
            rule: Some(rule.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn randomized(mut self, randomized: bool) -> Self {
        self.randomized_seed = randomized;
        self
    }

    #[must_use]
    pub fn with_wraparound(mut self, wraparound: bool) -> Self {
        self.wraparound = wraparound;
        self
    }

    #[must_use]
    pub fn with_neighborhood(mut self, mode: NeighborhoodMode) -> Self {
        self.neighborhood = mode;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every field and returns either a validated record or all the
    /// problems found.
    pub fn validate(&self) -> Result<ValidatedEca> {
        let mut issues = Vec::new();

        let mut required = |field: &'static str, value: &Option<RawValue>| {
            if value.is_none() {
                issues.push(ConfigIssue::Missing { field });
            }
        };
        required("cells", &self.cells);
        required("generations", &self.generations);
        required("rule", &self.rule);

        let cells = self
            .cells
            .as_ref()
            .map(|v| positive("cells", v.to_integer("cells")));
        let generations = self
            .generations
            .as_ref()
            .map(|v| positive("generations", v.to_integer("generations")));
        let rule = self.rule.as_ref().map(parse_rule);

        let cells = collect(cells, &mut issues);
        let generations = collect(generations, &mut issues);
        let rule = collect(rule, &mut issues);

        let radius_ok = self.radius <= MAX_RADIUS;
        if !radius_ok {
            issues.push(ConfigIssue::RadiusTooLarge {
                radius: self.radius,
                max: MAX_RADIUS,
            });
        }

        if let (Some(rule), true) = (&rule, radius_ok) {
            let max = max_rule(self.radius);
            if *rule > max {
                issues.push(ConfigIssue::RuleOutOfRange {
                    rule: rule.to_string(),
                    radius: self.radius,
                    max: max.to_string(),
                });
            }
        }

        if let (Some(rows), Some(cols)) = (generations, cells) {
            if !within_budget(rows, cols) {
                issues.push(ConfigIssue::TooLarge {
                    what: "history",
                    rows,
                    cols,
                });
            }
        }

        match (cells, generations, rule) {
            (Some(cells), Some(generations), Some(rule)) if issues.is_empty() => {
                Ok(ValidatedEca {
                    cells,
                    generations,
                    radius: self.radius,
                    rule,
                    randomized_seed: self.randomized_seed,
                    wraparound: self.wraparound,
                    neighborhood: self.neighborhood,
                    seed: self.seed,
                })
            }
            _ => Err(AutomatonError::InvalidConfig(issues)),
        }
    }
}

fn collect<T>(
    value: Option<std::result::Result<T, ConfigIssue>>,
    issues: &mut Vec<ConfigIssue>,
) -> Option<T> {
    match value? {
        Ok(v) => Some(v),
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}

/// An [`EcaConfig`] that passed validation. Only [`EcaConfig::validate`]
/// builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEca {
    cells: usize,
    generations: usize,
    radius: u32,
    rule: BigUint,
    randomized_seed: bool,
    wraparound: bool,
    neighborhood: NeighborhoodMode,
    seed: Option<u64>,
}

impl ValidatedEca {
    pub fn cells(&self) -> usize {
        self.cells
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn rule(&self) -> &BigUint {
        &self.rule
    }

    pub fn randomized_seed(&self) -> bool {
        self.randomized_seed
    }

    pub fn wraparound(&self) -> bool {
        self.wraparound
    }

    pub fn neighborhood(&self) -> NeighborhoodMode {
        self.neighborhood
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Game of Life options.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LifeConfig {
    /// Interior side length (`n`).
    pub size: RawValue,
    /// Number of steps to produce (`it`).
    pub generations: RawValue,
    /// Fraction of `n²` used as the number of seed draws.
    pub seed_density: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            size: RawValue::Int(30),
            generations: RawValue::Int(50),
            seed_density: 0.1,
            seed: None,
        }
    }
}

impl LifeConfig {
    pub fn new(size: impl Into<RawValue>, generations: impl Into<RawValue>) -> Self {
        Self {
            size: size.into(),
            generations: generations.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed_density(mut self, seed_density: f64) -> Self {
        self.seed_density = seed_density;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Coerces `size` and `generations` to integers and checks ranges.
    /// A value that cannot be coerced aborts the run.
    pub fn validate(&self) -> Result<ValidatedLife> {
        let mut issues = Vec::new();

        let size = collect(
            Some(positive("size", self.size.coerce_integer("size"))),
            &mut issues,
        );
        let generations = collect(
            Some(positive(
                "generations",
                self.generations.coerce_integer("generations"),
            )),
            &mut issues,
        );

        if !(0.0..=1.0).contains(&self.seed_density) {
            issues.push(ConfigIssue::DensityOutOfRange {
                value: self.seed_density,
            });
        }

        if let Some(size) = size {
            let fits = size
                .checked_add(2)
                .is_some_and(|side| within_budget(side, side));
            if !fits {
                issues.push(ConfigIssue::TooLarge {
                    what: "world grid",
                    rows: size,
                    cols: size,
                });
            }
        }

        match (size, generations) {
            (Some(size), Some(generations)) if issues.is_empty() => Ok(ValidatedLife {
                size,
                generations,
                seed_density: self.seed_density,
                seed: self.seed,
            }),
            _ => Err(AutomatonError::InvalidConfig(issues)),
        }
    }
}

/// A [`LifeConfig`] that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLife {
    size: usize,
    generations: usize,
    seed_density: f64,
    seed: Option<u64>,
}

impl ValidatedLife {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn seed_density(&self) -> f64 {
        self.seed_density
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Top-level configuration file contents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing` filter directive, e.g. `info` or `automata_core=debug`.
    pub log_level: String,
    pub eca: EcaConfig,
    pub life: LifeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            eca: EcaConfig::default(),
            life: LifeConfig::default(),
        }
    }
}
