//! Heat-sink plugin template
//!
//! The thermal flow can delegate its topmost layer to an external
//! heat-sink model through a two-call contract: one initialization with
//! the grid shape and ambient conditions, then one step call per
//! simulation interval, exchanging a heat-flow vector for a temperature
//! vector of the same length.
//!
//! The template used to keep the ambient temperature and an initialized
//! flag in module-level globals; here the whole contract lives in an
//! explicit [`HeatsinkSession`] that is constructed once and threaded
//! through every step call, so there is no hidden cross-call state. This
//! template models a "brick wall" sink whose temperature stays constant
//! regardless of applied power; a real plugin replaces [`step`] with its
//! own thermal response and keeps the same contract.
//!
//! [`step`]: HeatsinkSession::step
//!
//! # Example
//!
//! ```rust
//! use tmap_rs::heatsink::HeatsinkSession;
//!
//! let session = HeatsinkSession::new(2, 3, 500.0, 500.0, 300.0, 0.01);
//! let temps = session.step(&[0.1; 6]).unwrap();
//! assert_eq!(temps, vec![300.0; 6]);
//! ```

use thiserror::Error;

/// Errors raised by a heat-sink session.
#[derive(Debug, Error)]
pub enum HeatsinkError {
    /// The heat-flow vector does not cover the sink grid.
    #[error("heat-flow vector has {found} entries, sink grid has {expected} cells")]
    FlowLengthMismatch { expected: usize, found: usize },
}

/// State of one heat-sink simulation, fixed at initialization.
#[derive(Debug, Clone)]
pub struct HeatsinkSession {
    rows: usize,
    columns: usize,
    cell_width: f64,
    cell_length: f64,
    ambient_temperature: f64,
    time_step: f64,
}

impl HeatsinkSession {
    /// Initialize a session over a `rows` x `columns` sink grid.
    ///
    /// Cell dimensions are in µm, the ambient temperature in K and the
    /// step duration in s, matching the plugin loader's call.
    pub fn new(
        rows: usize,
        columns: usize,
        cell_width: f64,
        cell_length: f64,
        initial_temperature: f64,
        time_step: f64,
    ) -> Self {
        Self {
            rows,
            columns,
            cell_width,
            cell_length,
            ambient_temperature: initial_temperature,
            time_step,
        }
    }

    /// Number of cells on the sink interface.
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_length(&self) -> f64 {
        self.cell_length
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Advance the sink by one step: take the heat flowing into each
    /// interface cell [W], return each cell's temperature [K].
    ///
    /// The brick-wall template ignores the applied power and answers the
    /// ambient temperature for every cell.
    pub fn step(&self, heat_flows: &[f64]) -> Result<Vec<f64>, HeatsinkError> {
        if heat_flows.len() != self.cell_count() {
            return Err(HeatsinkError::FlowLengthMismatch {
                expected: self.cell_count(),
                found: heat_flows.len(),
            });
        }
        Ok(vec![self.ambient_temperature; heat_flows.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_returns_ambient_for_every_cell() {
        let session = HeatsinkSession::new(2, 2, 250.0, 250.0, 295.0, 0.01);
        let temps = session.step(&[0.5, 1.0, 0.0, 0.25]).unwrap();
        assert_eq!(temps, vec![295.0; 4]);
    }

    #[test]
    fn test_step_is_repeatable_without_hidden_state() {
        let session = HeatsinkSession::new(1, 3, 100.0, 100.0, 310.0, 0.1);
        let first = session.step(&[1.0, 2.0, 3.0]).unwrap();
        let second = session.step(&[9.0, 9.0, 9.0]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_step_rejects_wrong_flow_length() {
        let session = HeatsinkSession::new(2, 2, 250.0, 250.0, 295.0, 0.01);
        assert!(matches!(
            session.step(&[0.5; 3]).unwrap_err(),
            HeatsinkError::FlowLengthMismatch { expected: 4, found: 3 }
        ));
    }
}
