//! Error types for VastuBelief

/// Result type alias
pub type Result<T> = std::result::Result<T, BeliefError>;

/// Belief grid error types
///
/// Both variants indicate a defect in the caller, not a runtime condition to
/// recover from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BeliefError {
    /// Coordinate is neither on the border ring nor inside it
    #[error("Coordinate ({x}, {y}) out of range for {width}x{height} grid")]
    OutOfRange {
        /// Row index
        x: i32,
        /// Column index
        y: i32,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// Action text or code outside the agent's vocabulary
    #[error("Invalid action: {0}")]
    InvalidAction(String),
}
