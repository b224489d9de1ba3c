//! Default value functions for serde deserialization.

use crate::core::Heading;

pub fn grid_size() -> usize {
    5
}

pub fn start_coord() -> i32 {
    1
}

pub fn heading() -> Heading {
    Heading::East
}
