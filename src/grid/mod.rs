//! Grid geometry construction and temperature series loading
//!
//! A temperature map is defined over a set of rectangular grid cells. The
//! cells come from one of two mutually exclusive descriptions:
//!
//! - **Explicit (non-uniform) mode**: one file, one `x y w h` rectangle
//!   per line, order preserved ([`cells_from_explicit`])
//! - **Uniform mode**: two files, one 1-D axis coordinate per line; cells
//!   are the Cartesian product of the two axes ([`cells_from_axes`])
//!
//! Temperature data is loaded per frame and length-checked against the
//! cell count ([`TemperatureSeries::load`]): the cell ordering of the
//! geometry is the sample ordering of every frame.
//!
//! # Organization
//!
//! - **geometry**: [`GridCell`] and the two geometry builders
//! - **temperature**: [`TemperatureSeries`], [`HeaderLayout`] and the
//!   frame loaders

pub mod geometry;
pub mod temperature;

pub use geometry::{cells_from_axes, cells_from_explicit, uniform_cells, GridCell, GridError};
pub use temperature::{
    load_single_frame, HeaderLayout, SeriesError, TemperatureFrame, TemperatureSeries,
};
