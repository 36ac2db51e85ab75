//! Rendering of temperature maps with the `plotters` library
//!
//! This module turns the parsed value data (blocks, grid cells,
//! temperature frames) into figures. It decides geometry and colors;
//! colormap interpolation, rasterization and animation encoding belong to
//! `plotters`.
//!
//! # Organization
//!
//! - **config**: shared render configuration ([`MapConfig`],
//!   [`AnimationConfig`])
//! - **colormap**: scalar-to-color binning ([`ColorScale`])
//! - **static_map**: single-frame figure with color legend
//!   ([`render_map`])
//! - **animation**: time-animated GIF with progress label
//!   ([`render_animation`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tmap_rs::render::{render_map, render_animation, MapConfig, AnimationConfig};
//!
//! // Static SVG of one frame
//! render_map(&blocks, &cells, &frame, &MapConfig::static_map(), "chip.svg")?;
//!
//! // GIF over the whole series, 0.1 s per frame
//! let config = AnimationConfig::new(0.1);
//! render_animation(&blocks, &cells, &series, &config, "chip.gif")?;
//! ```
//!
//! Both renderers resolve one [`ColorScale`] per rendering request (never
//! per frame), so a static render and an animation of the same series are
//! comparably colored.

pub mod animation;
pub mod colormap;
pub mod config;
pub mod static_map;

mod draw;

pub use animation::{progress_label, render_animation};
pub use colormap::{ColorScale, ColorScaleError, AUTO_RANGE_MARGIN};
pub use config::{AnimationConfig, MapConfig};
pub use static_map::render_map;
