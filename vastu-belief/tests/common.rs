//! Scenario replay utilities for VastuBelief tests.
//!
//! A scenario is a recorded episode: grid, start pose, the (action, dirt,
//! bump) trace the driver produced, and the belief expected at the end.

#![allow(dead_code)]

use std::path::Path;

use serde::Deserialize;
use vastu_belief::config::{GridSection, StartSection};
use vastu_belief::{
    Action, BeliefConfig, BeliefGrid, CellState, GridCoord, Heading, StepOutcome,
};

/// Top-level scenario loaded from YAML.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// Scenario name (used in failure messages)
    pub name: String,
    /// Grid dimensions
    #[serde(default)]
    pub grid: GridSection,
    /// Initial pose
    #[serde(default)]
    pub start: StartSection,
    /// Recorded step trace
    pub steps: Vec<Step>,
    /// Expected belief after the last step
    pub expect: Expectation,
}

/// One recorded step.
#[derive(Debug, Deserialize)]
pub struct Step {
    /// Action name as the driver spells it
    pub action: String,
    #[serde(default)]
    pub dirt: bool,
    #[serde(default)]
    pub bump: bool,
}

/// Expected final belief.
#[derive(Debug, Deserialize)]
pub struct Expectation {
    /// Final (x, y)
    pub position: (i32, i32),
    pub heading: Heading,
    #[serde(default)]
    pub cells: Vec<ExpectedCell>,
}

/// Expected state of one cell.
#[derive(Debug, Deserialize)]
pub struct ExpectedCell {
    pub x: i32,
    pub y: i32,
    pub state: CellState,
}

/// Load a scenario from a YAML file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Path of a scenario file shipped with the tests.
pub fn scenario_path(file: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("scenarios")
        .join(file)
}

/// Replay a scenario's trace and return the final belief plus every outcome.
pub fn replay(
    scenario: &Scenario,
) -> Result<(BeliefGrid, Vec<StepOutcome>), Box<dyn std::error::Error>> {
    let config = BeliefConfig {
        grid: scenario.grid.clone(),
        start: scenario.start.clone(),
    };
    let mut belief = BeliefGrid::from_config(&config)?;
    let mut outcomes = Vec::with_capacity(scenario.steps.len());

    for step in &scenario.steps {
        let action: Action = step.action.parse()?;
        belief.record_action(action);
        outcomes.push(belief.update(step.dirt, step.bump)?);
    }

    Ok((belief, outcomes))
}

/// Assert the final belief matches the scenario's expectation.
pub fn check_expectation(scenario: &Scenario, belief: &BeliefGrid) {
    let expect = &scenario.expect;
    assert_eq!(
        (belief.position().x, belief.position().y),
        expect.position,
        "[{}] final position",
        scenario.name
    );
    assert_eq!(belief.heading(), expect.heading, "[{}] final heading", scenario.name);

    for cell in &expect.cells {
        assert_eq!(
            belief.state_at(cell.x, cell.y).ok(),
            Some(cell.state),
            "[{}] cell ({}, {})",
            scenario.name,
            cell.x,
            cell.y
        );
    }
}

/// Stored state of every interior cell.
pub fn snapshot(belief: &BeliefGrid) -> Vec<(GridCoord, CellState)> {
    belief.storage().iter_interior().collect()
}

/// Interior cells whose stored state differs from `before`.
pub fn changed_cells(before: &[(GridCoord, CellState)], belief: &BeliefGrid) -> Vec<GridCoord> {
    before
        .iter()
        .zip(belief.storage().iter_interior())
        .filter(|((_, old), (_, new))| old != new)
        .map(|((coord, _), _)| *coord)
        .collect()
}

/// Check one applied step against the grid state it actually changed.
///
/// At most one stored cell may differ, and it must be the one the outcome
/// reports. Position and heading never change together, and each changes
/// only when the outcome says so.
pub fn check_single_effect(
    before_cells: &[(GridCoord, CellState)],
    before_pose: vastu_belief::Pose,
    belief: &BeliefGrid,
    outcome: &StepOutcome,
) {
    let changed = changed_cells(before_cells, belief);
    assert!(changed.len() <= 1, "{:?} changed {:?}", outcome, changed);
    if let Some(coord) = changed.first() {
        assert_eq!(Some(*coord), outcome.changed_cell(), "{:?}", outcome);
    }

    let after = belief.pose();
    let moved = after.position != before_pose.position;
    let turned = after.heading != before_pose.heading;
    assert!(!(moved && turned), "{:?} moved and turned", outcome);
    assert_eq!(moved, outcome.moved(), "{:?}", outcome);
    assert_eq!(turned, outcome.turned(), "{:?}", outcome);
}
