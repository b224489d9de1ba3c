//! Configuration types for the belief grid.

use serde::{Deserialize, Serialize};

use crate::core::Pose;

/// Smallest width/height that still leaves one interior cell.
pub const MIN_DIMENSION: usize = 3;

/// Grid validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Grid has no interior
    #[error("Grid {width}x{height} too small, need at least {min}x{min}", min = MIN_DIMENSION)]
    TooSmall {
        /// Configured width
        width: usize,
        /// Configured height
        height: usize,
    },

    /// Grid cannot be addressed with `i32` coordinates or stored in one array
    #[error("Grid {width}x{height} too large, each side must be at most {max}", max = i32::MAX)]
    TooLarge {
        /// Configured width
        width: usize,
        /// Configured height
        height: usize,
    },

    /// Start position is on the border or outside the grid
    #[error("Start position ({x}, {y}) is not inside the {width}x{height} border")]
    PoseOutsideInterior {
        /// Start row
        x: i32,
        /// Start column
        y: i32,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },
}

/// Grid dimensions, including the one-cell border ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Extent along x (rows), border included
    pub width: usize,

    /// Extent along y (columns), border included
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}

impl GridConfig {
    /// Create a configuration with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check that the grid has a non-empty interior and fits in memory indexing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(ConfigError::TooSmall {
                width: self.width,
                height: self.height,
            });
        }

        let max_side = i32::MAX as usize;
        let fits = self.width <= max_side
            && self.height <= max_side
            && self
                .width
                .checked_mul(self.height)
                .is_some_and(|cells| cells <= isize::MAX as usize);
        if !fits {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Check that a start pose lies strictly inside the border.
    pub fn validate_pose(&self, pose: &Pose) -> Result<(), ConfigError> {
        let (x, y) = (i64::from(pose.position.x), i64::from(pose.position.y));
        let inside =
            x > 0 && y > 0 && x < self.width as i64 - 1 && y < self.height as i64 - 1;

        if inside {
            Ok(())
        } else {
            Err(ConfigError::PoseOutsideInterior {
                x: pose.position.x,
                y: pose.position.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Number of interior cells
    pub fn interior_cells(&self) -> usize {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Heading;

    #[test]
    fn test_default_is_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.interior_cells(), 9);
    }

    #[test]
    fn test_too_small() {
        assert_eq!(
            GridConfig::new(2, 5).validate(),
            Err(ConfigError::TooSmall {
                width: 2,
                height: 5
            })
        );
        assert!(GridConfig::new(5, 0).validate().is_err());
        assert!(GridConfig::new(3, 3).validate().is_ok());
    }

    #[test]
    fn test_too_large() {
        let too_wide = i32::MAX as usize + 1;
        assert_eq!(
            GridConfig::new(too_wide, 5).validate(),
            Err(ConfigError::TooLarge {
                width: too_wide,
                height: 5
            })
        );
        assert!(GridConfig::new(5, too_wide).validate().is_err());
        assert!(GridConfig::new(usize::MAX, usize::MAX).validate().is_err());
        assert!(GridConfig::new(i32::MAX as usize, 3).validate().is_ok());
    }

    #[test]
    fn test_pose_must_be_interior() {
        let config = GridConfig::new(5, 4);
        assert!(config.validate_pose(&Pose::new(1, 1, Heading::North)).is_ok());
        assert!(config.validate_pose(&Pose::new(3, 2, Heading::North)).is_ok());

        for (x, y) in [(0, 1), (4, 1), (1, 0), (1, 3), (-1, 1), (7, 7)] {
            assert!(
                config.validate_pose(&Pose::new(x, y, Heading::East)).is_err(),
                "({}, {}) should be rejected",
                x,
                y
            );
        }
    }

    #[test]
    fn test_error_message() {
        let err = GridConfig::new(1, 1).validate().unwrap_err();
        assert_eq!(err.to_string(), "Grid 1x1 too small, need at least 3x3");
    }
}
