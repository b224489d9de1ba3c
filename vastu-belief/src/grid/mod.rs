//! Belief grid storage and dimensions.

mod config;
mod storage;
mod types;

pub use config::{ConfigError, GridConfig, MIN_DIMENSION};
pub use storage::BeliefStorage;
pub use types::CellCounts;
