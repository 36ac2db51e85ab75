//! Static temperature-map rendering
//!
//! Composes, in drawing order: the floorplan outline/label layer, one
//! semi-transparent colored cell layer for a single temperature frame,
//! and a vertical color legend, into one figure with mm-scaled axes.
//!
//! The backend is chosen from the output file extension: `.svg` produces
//! a vector image, anything else a bitmap.
//!
//! # Example
//!
//! ```rust,ignore
//! use tmap_rs::render::{render_map, MapConfig};
//!
//! let mut config = MapConfig::static_map();
//! config.temp_min = Some(300.0);
//! config.temp_max = Some(360.0);
//! render_map(&blocks, &cells, &frame, &config, "chip.svg")?;
//! ```

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::floorplan::{area_report, Block};
use crate::grid::{GridCell, TemperatureFrame};

use super::colormap::ColorScale;
use super::config::MapConfig;
use super::draw::{
    build_chart, data_extent, draw_blocks, draw_cells, draw_legend, figure_size, Extent,
    LEGEND_WIDTH,
};

/// Render one temperature frame over the floorplan into a single image.
///
/// # Arguments
///
/// * `blocks` - Floorplan blocks (outline/label layer)
/// * `cells` - Grid cell geometry, one rectangle per sample
/// * `frame` - Temperature samples, in cell order
/// * `config` - Render configuration
/// * `output_path` - Output image; `.svg` selects the vector backend
///
/// After the figure is written, the floorplan area diagnostic is printed
/// if the summed block area does not cover the bounding box. That is a
/// warning only; rendering still completes.
///
/// # Errors
///
/// Fails if the sample count does not match the cell count, the color
/// range is degenerate, or the backend cannot write the output file.
pub fn render_map(
    blocks: &[Block],
    cells: &[GridCell],
    frame: &TemperatureFrame,
    config: &MapConfig,
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    if cells.len() != frame.len() {
        return Err(format!(
            "frame holds {} sample(s) for {} grid cell(s)",
            frame.len(),
            cells.len()
        )
        .into());
    }

    let range = frame
        .iter()
        .fold(None, |range, &v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
        .ok_or("temperature frame is empty")?;
    let scale = ColorScale::resolve(range, config.temp_min, config.temp_max, config.color_bins)?;

    let extent =
        data_extent(blocks, cells).ok_or("floorplan and grid span no drawable area")?;
    let (width, height) = figure_size(&extent, config.height);

    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (width, height));
            render_map_impl(backend, blocks, cells, frame, &scale, &extent, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (width, height));
            render_map_impl(backend, blocks, cells, frame, &scale, &extent, config)
        }
    }?;

    let report = area_report(blocks);
    if report.mismatch() {
        println!("{}", report.warning());
    }

    Ok(())
}

/// Implementation for a concrete backend.
fn render_map_impl<DB: DrawingBackend>(
    backend: DB,
    blocks: &[Block],
    cells: &[GridCell],
    frame: &TemperatureFrame,
    scale: &ColorScale,
    extent: &Extent,
    config: &MapConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let (map_area, legend_area) = split_off_legend(&root);

    let mut chart = build_chart(&map_area, extent, "X (mm)", "Y (mm)")?;
    draw_blocks(&mut chart, blocks, config.show_block_names)?;
    draw_cells(&mut chart, cells, frame, scale, config.cell_alpha)?;
    draw_legend(&legend_area, scale, &config.legend_label)?;

    root.present()?;
    Ok(())
}

/// Split the legend strip off the right-hand edge of the figure.
pub(crate) fn split_off_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
) -> (DrawingArea<DB, Shift>, DrawingArea<DB, Shift>) {
    let (width, _) = root.dim_in_pixel();
    root.split_horizontally(width.saturating_sub(LEGEND_WIDTH) as i32)
}

// =============================================================================
// Tests
// =============================================================================
