//! Common utilities for integration tests

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{
    quadrant_axis, quadrant_floorplan, quadrant_temperatures, write_fixture, QUADRANT_CELLS,
};
