//! Animated temperature-map rendering
//!
//! Renders a temperature series as a GIF: the floorplan layer and color
//! legend on every frame, one fully opaque colored cell layer per time
//! step, and an x-axis label carrying a fixed-width ASCII progress bar
//! with the elapsed simulated time.
//!
//! One [`ColorScale`] is resolved over the whole series before any frame
//! is drawn, so a cell's color means the same temperature in every frame.
//! Playback runs at `1/timestep` frames per second.

use std::error::Error;

use plotters::prelude::*;

use crate::floorplan::{area_report, Block};
use crate::grid::{GridCell, TemperatureSeries};

use super::colormap::ColorScale;
use super::config::AnimationConfig;
use super::draw::{build_chart, data_extent, draw_blocks, draw_cells, draw_legend, figure_size};
use super::static_map::split_off_legend;

/// Character width of the progress bar in the animation's x-axis label.
pub const PROGRESS_BAR_WIDTH: usize = 30;

/// The x-axis label of one animation frame: a [`PROGRESS_BAR_WIDTH`]-slot
/// progress bar plus the elapsed simulated time to two decimals.
///
/// ```rust
/// use tmap_rs::render::progress_label;
///
/// let label = progress_label(0, 3, 0.5);
/// assert_eq!(label, format!("|{}>{}|t=0.00s", "-".repeat(10), " ".repeat(20)));
/// ```
pub fn progress_label(frame: usize, frame_count: usize, timestep: f64) -> String {
    let filled = (PROGRESS_BAR_WIDTH * (frame + 1) / frame_count.max(1)).min(PROGRESS_BAR_WIDTH);
    format!(
        "|{}>{}|t={:.2}s",
        "-".repeat(filled),
        " ".repeat(PROGRESS_BAR_WIDTH - filled),
        frame as f64 * timestep
    )
}

/// Render a temperature series over the floorplan into an animated GIF.
///
/// # Arguments
///
/// * `blocks` - Floorplan blocks (outline/label layer, every frame)
/// * `cells` - Grid cell geometry, one rectangle per sample
/// * `series` - Temperature frames in time order
/// * `config` - Animation configuration; `config.max_frames` caps how
///   many frames are encoded (default: all)
/// * `output_path` - Output GIF path
///
/// The floorplan area diagnostic is printed once, after encoding, if the
/// summed block area does not cover the bounding box.
///
/// # Errors
///
/// Fails on a non-positive time step, an empty series, a frame whose
/// sample count does not match the cell count, a degenerate color range,
/// or a backend write failure.
pub fn render_animation(
    blocks: &[Block],
    cells: &[GridCell],
    series: &TemperatureSeries,
    config: &AnimationConfig,
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    if config.timestep <= 0.0 {
        return Err(format!("time step must be positive, got {}", config.timestep).into());
    }

    let frame_count = config
        .max_frames
        .map_or(series.len(), |cap| cap.min(series.len()));
    if frame_count == 0 {
        return Err("no frames to animate".into());
    }
    for (index, frame) in series.frames().iter().take(frame_count).enumerate() {
        if frame.len() != cells.len() {
            return Err(format!(
                "frame {} holds {} sample(s) for {} grid cell(s)",
                index,
                frame.len(),
                cells.len()
            )
            .into());
        }
    }

    let map = &config.map;
    let range = series.value_range().ok_or("temperature series is empty")?;
    let scale = ColorScale::resolve(range, map.temp_min, map.temp_max, map.color_bins)?;

    let extent = data_extent(blocks, cells).ok_or("floorplan and grid span no drawable area")?;
    let (width, height) = figure_size(&extent, map.height);

    // One encoded frame per time step, played back at 1/timestep fps.
    let frame_delay_ms = (config.timestep * 1000.0).round() as u32;
    let backend = BitMapBackend::gif(output_path, (width, height), frame_delay_ms)?;
    let root = backend.into_drawing_area();
    let (map_area, legend_area) = split_off_legend(&root);

    for t in 0..frame_count {
        root.fill(&map.background)?;

        let x_label = progress_label(t, frame_count, config.timestep);
        let mut chart = build_chart(&map_area, &extent, &x_label, "Y (mm)")?;
        draw_blocks(&mut chart, blocks, map.show_block_names)?;
        draw_cells(&mut chart, cells, series.frame(t), &scale, map.cell_alpha)?;
        draw_legend(&legend_area, &scale, &map.legend_label)?;

        root.present()?;
    }

    let report = area_report(blocks);
    if report.mismatch() {
        println!("{}", report.warning());
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
