//! Agent action vocabulary.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BeliefError;

/// Actions the agent can perform.
///
/// The set is closed: a recorded `Action` is always one of these five, so
/// the belief update can dispatch on it without a fallback arm. Raw action
/// text or codes coming from a driver are checked when converted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Action {
    /// Do nothing; the percept describes the current square
    #[default]
    Nop = 0,
    /// Move one square along the current heading
    Forward = 1,
    /// Clean the current square
    Suck = 2,
    /// Rotate 90° counter-clockwise in place
    TurnLeft = 3,
    /// Rotate 90° clockwise in place
    TurnRight = 4,
}

impl TryFrom<u8> for Action {
    type Error = BeliefError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Nop),
            1 => Ok(Action::Forward),
            2 => Ok(Action::Suck),
            3 => Ok(Action::TurnLeft),
            4 => Ok(Action::TurnRight),
            other => Err(BeliefError::InvalidAction(format!("code {}", other))),
        }
    }
}

impl FromStr for Action {
    type Err = BeliefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nop" | "noop" => Ok(Action::Nop),
            "forward" => Ok(Action::Forward),
            "suck" => Ok(Action::Suck),
            "left" | "turn_left" | "turnleft" => Ok(Action::TurnLeft),
            "right" | "turn_right" | "turnright" => Ok(Action::TurnRight),
            _ => Err(BeliefError::InvalidAction(s.to_string())),
        }
    }
}
