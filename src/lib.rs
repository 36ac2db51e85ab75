//! tmap-rs: Thermal Map Visualization
//!
//! Renders a spatial temperature field, defined over a chip/package
//! floorplan, as a static heat-map image or a time-animated GIF.
//!
//! # Architecture
//!
//! The pipeline is built on two core principles:
//!
//! 1. **Separation of ingestion and rendering**
//!    - Parsers turn line-oriented text inputs into plain value data
//!      (blocks, grid cells, temperature frames)
//!    - Renderers consume that data and only decide geometry and colors;
//!      rasterization is delegated to `plotters`
//!
//! 2. **One geometry, one color scale**
//!    - Grid geometry is built once, in either uniform or explicit
//!      (non-uniform) mode, and every temperature frame is length-checked
//!      against it
//!    - The color normalization is resolved once per rendering request,
//!      so static and animated renders of the same series are comparably
//!      colored
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tmap_rs::floorplan::parse_floorplan;
//! use tmap_rs::grid::{cells_from_axes, HeaderLayout, TemperatureSeries};
//! use tmap_rs::render::{render_map, MapConfig};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Ingest the three inputs
//! let blocks = parse_floorplan(Path::new("chip.flp"))?;
//! let cells = cells_from_axes(Path::new("xaxis.txt"), Path::new("yaxis.txt"))?;
//! let series = TemperatureSeries::load(
//!     Path::new("tmap.txt"),
//!     cells.len(),
//!     HeaderLayout::Prologue,
//!     Some(1),
//! )?;
//!
//! // 2. Render the first frame as an SVG
//! let config = MapConfig::static_map();
//! render_map(&blocks, &cells, series.frame(0), &config, "chip.svg")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`floorplan`]: floorplan block parsing and the area diagnostic
//! - [`grid`]: grid geometry construction and temperature series loading
//! - [`render`]: color mapping, static map and animation rendering
//! - [`heatsink`]: heat-sink plugin template (init-then-step session)

pub mod floorplan;
pub mod grid;
pub mod heatsink;
pub mod render;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use tmap_rs::prelude::*;
    //! ```
    pub use crate::floorplan::{area_report, parse_floorplan, AreaReport, Block};
    pub use crate::grid::{
        cells_from_axes, cells_from_explicit, GridCell, HeaderLayout, TemperatureFrame,
        TemperatureSeries,
    };
    pub use crate::render::{
        render_animation, render_map, AnimationConfig, ColorScale, MapConfig,
    };
}
