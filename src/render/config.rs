//! Render configuration shared across the static and animated renderers

use plotters::prelude::*;

/// Configuration for a temperature-map rendering.
///
/// # Fields
///
/// - `height`: figure height in pixels; the width is derived from the
///   floorplan extents so one mm spans the same pixel count on both axes
/// - `show_block_names`: draw each block's name centered in its outline
/// - `color_bins`: resolution of the color scale (default: 100)
/// - `temp_min`, `temp_max`: explicit normalization bounds; `None` adapts
///   to the rendered data
/// - `cell_alpha`: opacity of the colored cell layer
/// - `background`: figure background color
/// - `legend_label`: caption of the color legend
///
/// # Example
///
/// ```rust
/// use tmap_rs::render::MapConfig;
///
/// let mut config = MapConfig::static_map();
/// config.color_bins = 256;
/// config.temp_min = Some(300.0);
/// config.temp_max = Some(360.0);
/// config.show_block_names = false;
/// ```
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Figure height in pixels (default: 768).
    pub height: u32,

    /// Draw block names (default: true).
    pub show_block_names: bool,

    /// Color resolution in bins (default: 100).
    pub color_bins: usize,

    /// Explicit lower normalization bound [K] (default: from data).
    pub temp_min: Option<f64>,

    /// Explicit upper normalization bound [K] (default: from data).
    pub temp_max: Option<f64>,

    /// Opacity of the colored cell layer (0.5 static, 1.0 animation).
    pub cell_alpha: f64,

    /// Background color (default: WHITE).
    pub background: RGBColor,

    /// Legend caption (default: "Temperature (K)").
    pub legend_label: String,
}

impl MapConfig {
    /// Defaults for the static renderer: semi-transparent cell layer so
    /// block outlines stay visible through it.
    pub fn static_map() -> Self {
        Self {
            height: 768,
            show_block_names: true,
            color_bins: 100,
            temp_min: None,
            temp_max: None,
            cell_alpha: 0.5,
            background: WHITE,
            legend_label: "Temperature (K)".to_string(),
        }
    }

    /// Defaults for the animation renderer: fully opaque cell layer.
    pub fn animation() -> Self {
        Self {
            cell_alpha: 1.0,
            ..Self::static_map()
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::static_map()
    }
}

/// Configuration for an animated rendering.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Per-frame map configuration.
    pub map: MapConfig,

    /// Simulated duration of one frame [s]; playback runs at
    /// `1/timestep` frames per second.
    pub timestep: f64,

    /// Cap on the number of frames rendered (default: all frames the
    /// series holds).
    pub max_frames: Option<usize>,
}

impl AnimationConfig {
    pub fn new(timestep: f64) -> Self {
        Self {
            map: MapConfig::animation(),
            timestep,
            max_frames: None,
        }
    }
}
