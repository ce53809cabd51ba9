use anyhow::Result;
use automata_core::{init_logging, RunMetrics};
use automata_lab_lib::app;
use automata_lab_lib::cli::{Cli, Command};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = automata_io::load_config(&cli.config);
    let level = cli
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    init_logging(&level);

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!("Config not loaded directly: {}", e);
            automata_io::load_or_init(&cli.config)
        }
    };

    let mut metrics = RunMetrics::new();
    match &cli.command {
        Command::Eca(args) => {
            args.apply(&mut config.eca);
            let summary = app::run_eca(&config.eca, &mut metrics)?;
            if cli.json {
                println!("{}", serde_json::to_string(&summary)?);
            } else {
                println!("{summary}");
            }
        }
        Command::Life(args) => {
            args.apply(&mut config.life);
            let summary = app::run_life(&config.life, &mut metrics)?;
            if cli.json {
                println!("{}", serde_json::to_string(&summary)?);
            } else {
                println!("{summary}");
            }
        }
    }

    tracing::info!(
        runs = metrics.runs(),
        generations = metrics.generations(),
        elapsed_ms = metrics.elapsed().as_millis() as u64,
        "Finished"
    );
    Ok(())
}
