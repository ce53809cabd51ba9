use automata_core::{AppConfig, EcaConfig, LifeConfig, NeighborhoodMode, RawValue};
use automata_io::{from_toml, load_config, save_config, to_toml};
use std::fs;

const SAMPLE: &str = r#"
log_level = "automata_core=debug"

[eca]
cells = 101
generations = "200"
radius = 3
rule = "340282366920938463463374607431768211455"
randomized_seed = true
wraparound = false
neighborhood = "random_parents"
seed = 11

[life]
size = 40.7
generations = 25
seed_density = 0.3
"#;

#[test]
fn test_sample_file_validates() {
    let config = from_toml(SAMPLE).unwrap();
    assert_eq!(config.log_level, "automata_core=debug");
    assert_eq!(config.eca.neighborhood, NeighborhoodMode::RandomParents);

    let eca = config.eca.validate().unwrap();
    assert_eq!(eca.cells(), 101);
    assert_eq!(eca.generations(), 200);
    assert_eq!(eca.radius(), 3);
    assert!(eca.randomized_seed());
    assert!(!eca.wraparound());
    assert_eq!(eca.seed(), Some(11));

    let life = config.life.validate().unwrap();
    assert_eq!(life.size(), 40);
    assert_eq!(life.generations(), 25);
}

#[test]
fn test_partial_file_takes_defaults() {
    let config = from_toml("[eca]\ncells = 9\n").unwrap();
    assert_eq!(config.log_level, "info");
    assert_eq!(config.eca.cells, Some(RawValue::Int(9)));
    assert_eq!(config.eca.radius, 1);
    assert!(config.eca.wraparound);
    assert_eq!(config.life, LifeConfig::default());
}

#[test]
fn test_file_round_trip() {
    let config = AppConfig {
        log_level: "warn".into(),
        eca: EcaConfig::new(64, "32", 110)
            .with_wraparound(false)
            .with_seed(3),
        life: LifeConfig::new(20, 10).with_seed_density(0.5).with_seed(4),
    };
    assert_eq!(from_toml(&to_toml(&config).unwrap()).unwrap(), config);

    let path = std::env::temp_dir().join(format!(
        "automata_lab_round_trip_{}.toml",
        std::process::id()
    ));
    save_config(&path, &config).unwrap();
    let loaded = load_config(&path);
    let _ = fs::remove_file(&path);
    assert_eq!(loaded.unwrap(), config);
}

#[test]
fn test_loaded_config_drives_a_run() {
    let config = from_toml("[eca]\ncells = 7\ngenerations = 3\nrule = 90\n").unwrap();
    let run = config.eca.run().unwrap();
    assert_eq!(run.history.row_string(2), "0101010");
}
