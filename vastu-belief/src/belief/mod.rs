//! The agent's belief grid.
//!
//! Tracks position, heading, and a partial map of cell states using nothing
//! but the agent's own action history and the (dirt, bump) percepts.
//!
//! ## Step Protocol
//!
//! Once per time step the driver calls:
//! 1. [`BeliefGrid::record_action`] with the action being executed
//! 2. [`BeliefGrid::update`] with the percepts that action produced
//!
//! Queries ([`BeliefGrid::state`], [`BeliefGrid::state_in_direction`], ...)
//! are read-only and may be called any number of times between steps.
//!
//! ```rust,ignore
//! use vastu_belief::{Action, BeliefGrid, GridConfig, Heading, Pose, TurnDirection};
//!
//! let mut belief = BeliefGrid::new(GridConfig::new(5, 5), Pose::new(2, 2, Heading::North))?;
//!
//! belief.record_action(Action::Nop);
//! belief.update(false, false)?;
//!
//! if !belief.state_forward()?.is_obstacle() {
//!     belief.record_action(Action::Forward);
//! } else if !belief.state_in_direction(TurnDirection::Left)?.is_obstacle() {
//!     belief.record_action(Action::TurnLeft);
//! }
//! ```

mod outcome;

pub use outcome::StepOutcome;

use crate::config::BeliefConfig;
use crate::core::{Action, CellState, GridCoord, Heading, Percept, Pose, TurnDirection};
use crate::error::Result;
use crate::grid::{BeliefStorage, CellCounts, ConfigError, GridConfig};

/// Internal belief state of a reflex vacuum agent.
#[derive(Clone, Debug)]
pub struct BeliefGrid {
    storage: BeliefStorage,
    pose: Pose,
    last_action: Action,
}

impl BeliefGrid {
    /// Create a belief grid for a `width` x `height` world (border included).
    ///
    /// The grid must have an interior and the start pose must lie in it.
    pub fn new(config: GridConfig, start: Pose) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        config.validate_pose(&start)?;

        log::debug!(
            "Belief grid {}x{} ({} interior cells) starting at {} facing {:?}",
            config.width,
            config.height,
            config.interior_cells(),
            start.position,
            start.heading
        );

        Ok(Self {
            storage: BeliefStorage::new(config.width, config.height),
            pose: start,
            last_action: Action::Nop,
        })
    }

    /// Create a belief grid from a loaded configuration.
    pub fn from_config(config: &BeliefConfig) -> std::result::Result<Self, ConfigError> {
        Self::new(config.to_grid_config(), config.start_pose())
    }

    // =========================================================================
    // STEP PROTOCOL
    // =========================================================================

    /// Remember the action about to be (or just) executed.
    pub fn record_action(&mut self, action: Action) {
        self.last_action = action;
    }

    /// Fold the percepts of the last recorded action into the belief.
    ///
    /// | Last action | Effect |
    /// |-------------|--------|
    /// | `Nop` | current cell ← Dirt/Clean from `dirt` |
    /// | `Suck` | current cell ← Clean (`dirt` ignored) |
    /// | `TurnLeft`/`TurnRight` | heading rotated, percepts ignored |
    /// | `Forward`, no bump | advance, new cell ← Dirt/Clean |
    /// | `Forward`, bump | stay, cell ahead ← Wall unless it is border |
    pub fn update(&mut self, dirt: bool, bump: bool) -> Result<StepOutcome> {
        log::trace!(
            "Update after {:?} at {} (dirt={}, bump={})",
            self.last_action,
            self.pose.position,
            dirt,
            bump
        );

        match self.last_action {
            Action::Nop => {
                let coord = self.pose.position;
                let state = observed_state(dirt);
                self.storage.set(coord, state)?;
                Ok(StepOutcome::Observed { coord, state })
            }
            Action::Suck => {
                let coord = self.pose.position;
                self.storage.set(coord, CellState::Clean)?;
                Ok(StepOutcome::Cleaned { coord })
            }
            Action::TurnLeft => Ok(self.turn(TurnDirection::Left)),
            Action::TurnRight => Ok(self.turn(TurnDirection::Right)),
            Action::Forward => self.forward(dirt, bump),
        }
    }

    /// Same as [`update`](Self::update), taking a [`Percept`].
    pub fn perceive(&mut self, percept: Percept) -> Result<StepOutcome> {
        self.update(percept.dirt, percept.bump)
    }

    fn turn(&mut self, direction: TurnDirection) -> StepOutcome {
        let heading = self.pose.heading.turned(direction);
        log::debug!("Heading {:?} -> {:?}", self.pose.heading, heading);
        self.pose.heading = heading;
        StepOutcome::Turned { heading }
    }

    fn forward(&mut self, dirt: bool, bump: bool) -> Result<StepOutcome> {
        let ahead = self.pose.ahead();

        if bump {
            if self.storage.is_border(ahead) {
                log::debug!("Bumped into border at {}", ahead);
                return Ok(StepOutcome::Bumped { wall: None });
            }
            self.storage.set(ahead, CellState::Wall)?;
            log::debug!("Bumped into wall at {}", ahead);
            return Ok(StepOutcome::Bumped { wall: Some(ahead) });
        }

        // Write first: a rejected cell leaves the pose unchanged
        let state = observed_state(dirt);
        self.storage.set(ahead, state)?;
        self.pose.position = ahead;
        Ok(StepOutcome::Moved { to: ahead, state })
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Believed state at `(x, y)`.
    ///
    /// Border cells always read `Edge`; coordinates outside the grid are an error.
    pub fn state_at(&self, x: i32, y: i32) -> Result<CellState> {
        self.storage.state_at(GridCoord::new(x, y))
    }

    /// Believed state of the current square.
    pub fn state(&self) -> Result<CellState> {
        self.storage.state_at(self.pose.position)
    }

    /// Believed state of the square one step away in a relative direction.
    ///
    /// The heading is not changed.
    pub fn state_in_direction(&self, direction: TurnDirection) -> Result<CellState> {
        let heading = self.heading_in_direction(direction);
        self.storage.state_at(self.pose.position.step(heading))
    }

    /// Believed state of the square directly ahead.
    pub fn state_forward(&self) -> Result<CellState> {
        self.state_in_direction(TurnDirection::Forward)
    }

    /// Heading the agent would have after turning in `direction`.
    #[inline]
    pub fn heading_in_direction(&self, direction: TurnDirection) -> Heading {
        self.pose.heading.turned(direction)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Current position
    #[inline]
    pub fn position(&self) -> GridCoord {
        self.pose.position
    }

    /// Current heading
    #[inline]
    pub fn heading(&self) -> Heading {
        self.pose.heading
    }

    /// Current pose
    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Last recorded action
    #[inline]
    pub fn last_action(&self) -> Action {
        self.last_action
    }

    /// Grid dimensions (width, height), border included
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.storage.width(), self.storage.height())
    }

    /// Underlying cell storage
    pub fn storage(&self) -> &BeliefStorage {
        &self.storage
    }

    /// Interior cell counts by believed state
    pub fn counts(&self) -> CellCounts {
        self.storage.count_by_state()
    }
}

#[inline]
fn observed_state(dirt: bool) -> CellState {
    if dirt { CellState::Dirt } else { CellState::Clean }
}
