//! Configuration loading for VastuBelief.
//!
//! Loads grid dimensions and the start pose from a YAML file with sensible
//! defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_belief::{BeliefConfig, BeliefGrid};
//!
//! // Load from default path (configs/belief.yaml), or defaults if absent
//! let config = BeliefConfig::load_default()?;
//! let belief = BeliefGrid::from_config(&config)?;
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   width: 5      # border included
//!   height: 5
//! start:
//!   x: 2
//!   y: 2
//!   heading: North
//! ```

mod belief;
mod defaults;
mod error;
mod grid;
mod start;

pub use belief::{BeliefConfig, DEFAULT_CONFIG_PATH};
pub use error::ConfigLoadError;
pub use grid::GridSection;
pub use start::StartSection;
