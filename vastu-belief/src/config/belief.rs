//! Main BeliefConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Pose;
use crate::grid::GridConfig;

use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::start::StartSection;

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/belief.yaml";

/// Full belief configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BeliefConfig {
    /// Grid dimensions
    #[serde(default)]
    pub grid: GridSection,

    /// Initial agent pose
    #[serde(default)]
    pub start: StartSection,
}

impl BeliefConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        log::info!(
            "Loaded belief config from {} ({}x{} grid)",
            path.display(),
            config.grid.width,
            config.grid.height
        );
        Ok(config)
    }

    /// Load from default config path (configs/belief.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check grid dimensions and start pose
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let grid = self.to_grid_config();
        grid.validate()?;
        grid.validate_pose(&self.start_pose())?;
        Ok(())
    }

    /// Convert to GridConfig
    pub fn to_grid_config(&self) -> GridConfig {
        self.grid.to_grid_config()
    }

    /// Initial agent pose
    pub fn start_pose(&self) -> Pose {
        self.start.to_pose()
    }
}
