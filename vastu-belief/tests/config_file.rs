//! Loading belief configuration from files on disk.

use std::io::Write;

use tempfile::NamedTempFile;
use vastu_belief::{BeliefConfig, BeliefGrid, ConfigError, ConfigLoadError, Heading, Pose};

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    env_logger::try_init().ok();

    let file = write_config(
        r#"
grid:
  width: 8
  height: 6
start:
  x: 3
  y: 4
  heading: West
"#,
    );

    let config = BeliefConfig::load(file.path()).unwrap();
    let belief = BeliefGrid::from_config(&config).unwrap();

    assert_eq!(belief.dimensions(), (8, 6));
    assert_eq!(belief.pose(), Pose::new(3, 4, Heading::West));
}

#[test]
fn test_too_small_grid_rejected() {
    let file = write_config("grid:\n  width: 2\n  height: 9\n");
    assert_eq!(
        BeliefConfig::load(file.path()),
        Err(ConfigLoadError::Invalid(ConfigError::TooSmall {
            width: 2,
            height: 9
        }))
    );
}

#[test]
fn test_malformed_yaml_rejected() {
    let file = write_config("grid: [this is not a map");
    assert!(matches!(
        BeliefConfig::load(file.path()),
        Err(ConfigLoadError::Parse(_))
    ));
}

#[test]
fn test_shipped_sample_config() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/belief.yaml");
    let config = BeliefConfig::load(&path).unwrap();
    assert_eq!(config.start_pose(), Pose::new(2, 2, Heading::North));
    assert!(BeliefGrid::from_config(&config).is_ok());
}
