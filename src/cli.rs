use automata_core::{EcaConfig, LifeConfig, NeighborhoodMode, RawValue};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Log filter directive, overriding `log_level` from the config file
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the run summary as a single JSON object
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a one-dimensional cellular automaton
    Eca(EcaArgs),
    /// Run Conway's Game of Life
    Life(LifeArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct EcaArgs {
    /// Number of cells per generation
    #[arg(short = 'n', long)]
    pub cells: Option<String>,

    /// Number of generations, seed row included
    #[arg(short = 'i', long)]
    pub generations: Option<String>,

    /// Neighborhood radius
    #[arg(short = 'k', long)]
    pub radius: Option<u32>,

    /// Rule id (Wolfram numbering, any size)
    #[arg(short, long)]
    pub rule: Option<String>,

    /// Seed every cell at random instead of one centered live cell
    #[arg(long)]
    pub random: bool,

    /// Treat cells past the row ends as dead instead of wrapping
    #[arg(long)]
    pub no_wrap: bool,

    /// Wire each cell to randomly drawn parents instead of its local window
    #[arg(long)]
    pub random_parents: bool,

    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,
}

impl EcaArgs {
    /// Overrides `config` with every flag that was given.
    pub fn apply(&self, config: &mut EcaConfig) {
        if let Some(cells) = &self.cells {
            config.cells = Some(raw_from_arg(cells));
        }
        if let Some(generations) = &self.generations {
            config.generations = Some(raw_from_arg(generations));
        }
        if let Some(radius) = self.radius {
            config.radius = radius;
        }
        if let Some(rule) = &self.rule {
            config.rule = Some(raw_from_arg(rule));
        }
        if self.random {
            config.randomized_seed = true;
        }
        if self.no_wrap {
            config.wraparound = false;
        }
        if self.random_parents {
            config.neighborhood = NeighborhoodMode::RandomParents;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct LifeArgs {
    /// Interior side length of the world
    #[arg(short = 'n', long)]
    pub size: Option<String>,

    /// Number of steps to produce
    #[arg(short = 'i', long)]
    pub generations: Option<String>,

    /// Fraction of size² used as the number of seed draws
    #[arg(long)]
    pub seed_density: Option<f64>,

    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,
}

impl LifeArgs {
    pub fn apply(&self, config: &mut LifeConfig) {
        if let Some(size) = &self.size {
            config.size = raw_from_arg(size);
        }
        if let Some(generations) = &self.generations {
            config.generations = raw_from_arg(generations);
        }
        if let Some(density) = self.seed_density {
            config.seed_density = density;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

/// Reads a command-line value the way a config file would type it. Digit
/// strings too long for `i64` stay text so large rule ids keep every digit.
pub fn raw_from_arg(arg: &str) -> RawValue {
    let arg = arg.trim();
    if let Ok(v) = arg.parse::<i64>() {
        RawValue::Int(v)
    } else if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) {
        RawValue::Text(arg.to_string())
    } else if let Ok(v) = arg.parse::<f64>() {
        RawValue::Float(v)
    } else {
        RawValue::Text(arg.to_string())
    }
}
