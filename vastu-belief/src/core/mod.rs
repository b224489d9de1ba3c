//! Core value types for the belief grid.
//!
//! Coordinates follow the vacuum-world lab convention:
//! - **x**: row index, North decreases it
//! - **y**: column index, West decreases it
//!
//! ## Type Categories
//!
//! - [`CellState`]: Believed state of a square (Unknown, Wall, Edge, Clean, Dirt)
//! - [`Heading`], [`TurnDirection`]: Absolute heading and relative look direction
//! - [`Action`]: The agent's closed action vocabulary
//! - [`GridCoord`], [`Pose`]: Cell indices and agent pose
//! - [`Percept`]: The (dirt, bump) pair reported each step

mod action;
mod cell;
mod heading;
mod percept;
mod point;

pub use action::Action;
pub use cell::CellState;
pub use heading::{Heading, TurnDirection};
pub use percept::Percept;
pub use point::{GridCoord, Pose};
