//! # VastuBelief
//!
//! Belief-state tracking for a reflex vacuum agent in a walled grid world.
//!
//! ## Overview
//!
//! The agent only senses two things each step: dirt under it and whether its
//! last forward move bumped. [`BeliefGrid`] turns that action/percept history
//! into a partial map with semantic cell states:
//!
//! - **Unknown** - Never visited or bumped
//! - **Wall** - Bumped into while moving forward
//! - **Edge** - Outer border ring (always reported, never stored)
//! - **Clean** - Visited, no dirt sensed (or sucked)
//! - **Dirt** - Visited, dirt sensed
//!
//! Action selection and the environment simulator live outside this crate.
//! A policy drives the grid with [`BeliefGrid::record_action`] then
//! [`BeliefGrid::update`] each step, and inspects it with the query methods.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_belief::{Action, BeliefGrid, CellState, GridConfig, Heading, Pose};
//!
//! let mut belief = BeliefGrid::new(GridConfig::new(5, 5), Pose::new(2, 2, Heading::North))?;
//!
//! belief.record_action(Action::Forward);
//! belief.update(false, false)?;
//!
//! assert_eq!(belief.state()?, CellState::Clean);
//! assert_eq!(belief.state_forward()?, CellState::Edge);
//! ```
//!
//! ## Coordinate System
//!
//! - x: row index, North decreases it
//! - y: column index, West decreases it
//! - Cells with x or y on `0` or `extent - 1` form the border ring

#![warn(missing_docs)]

// Core types
pub mod core;

// Cell storage and grid dimensions
pub mod grid;

// YAML configuration
pub mod config;

// The belief grid
pub mod belief;

mod error;

pub use crate::core::{Action, CellState, GridCoord, Heading, Percept, Pose, TurnDirection};

pub use grid::{BeliefStorage, CellCounts, ConfigError, GridConfig};

pub use config::{BeliefConfig, ConfigLoadError};

pub use belief::{BeliefGrid, StepOutcome};

pub use error::{BeliefError, Result};
