//! Drawing helpers shared by the static and animated renderers
//!
//! Both renderers compose the same three layers (block outlines, a
//! colored cell layer, a color legend) over the same chart setup.
//! Keeping the composition here is what makes a static render and an
//! animation of the same data agree on geometry and colors.

use std::error::Error;

use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::floorplan::Block;
use crate::grid::{GridCell, TemperatureFrame};

use super::colormap::ColorScale;

pub(crate) const MARGIN: u32 = 10;
pub(crate) const X_LABEL_AREA: u32 = 45;
pub(crate) const Y_LABEL_AREA: u32 = 55;
pub(crate) const LEGEND_WIDTH: u32 = 130;

pub(crate) type MapChart<'a, DB> =
    ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Data extents of the figure in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Extent {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl Extent {
    pub fn x_span(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn y_span(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Union of the block and cell rectangles, µm scaled to mm.
///
/// `None` when there is nothing to draw, or when the rectangles span no
/// area at all (a chart range needs nonzero width and height).
pub(crate) fn data_extent(blocks: &[Block], cells: &[GridCell]) -> Option<Extent> {
    let rects = blocks
        .iter()
        .map(|b| (b.x, b.y, b.width, b.height))
        .chain(cells.iter().map(|c| (c.x, c.y, c.width, c.height)));

    let mut extent: Option<Extent> = None;
    for (x, y, w, h) in rects {
        let (x0, y0) = (x / 1000.0, y / 1000.0);
        let (x1, y1) = ((x + w) / 1000.0, (y + h) / 1000.0);
        extent = Some(match extent {
            None => Extent { x0, x1, y0, y1 },
            Some(e) => Extent {
                x0: e.x0.min(x0),
                x1: e.x1.max(x1),
                y0: e.y0.min(y0),
                y1: e.y1.max(y1),
            },
        });
    }

    extent.filter(|e| e.x_span() > 0.0 && e.y_span() > 0.0)
}

/// Figure size in pixels for a given extent and figure height.
///
/// The plot area width is chosen so one mm covers the same pixel count on
/// both axes (a 1:1 physical aspect), then the label areas and the legend
/// strip are added around it.
pub(crate) fn figure_size(extent: &Extent, height: u32) -> (u32, u32) {
    let plot_h = height.saturating_sub(X_LABEL_AREA + 2 * MARGIN).max(64);
    let plot_w = ((plot_h as f64) * extent.x_span() / extent.y_span()).round() as u32;
    let width = plot_w.max(64) + Y_LABEL_AREA + 2 * MARGIN + LEGEND_WIDTH;
    (width, height)
}

/// Build the mm-scaled map chart with its axis labels and no mesh grid.
pub(crate) fn build_chart<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    extent: &Extent,
    x_label: &str,
    y_label: &str,
) -> Result<MapChart<'a, DB>, Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(extent.x0..extent.x1, extent.y0..extent.y1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_label_formatter(&|x| format!("{x:.1}"))
        .y_label_formatter(&|y| format!("{y:.1}"))
        .draw()?;

    Ok(chart)
}

/// Draw the floorplan layer: unfilled black outlines, optionally with the
/// block name centered in each rectangle.
pub(crate) fn draw_blocks<DB: DrawingBackend>(
    chart: &mut MapChart<'_, DB>,
    blocks: &[Block],
    show_names: bool,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    chart.draw_series(blocks.iter().map(|b| {
        Rectangle::new(
            [
                (b.x / 1000.0, b.y / 1000.0),
                ((b.x + b.width) / 1000.0, (b.y + b.height) / 1000.0),
            ],
            ShapeStyle::from(&BLACK).stroke_width(1),
        )
    }))?;

    if show_names {
        let style = TextStyle::from(("sans-serif", 14).into_font())
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(blocks.iter().map(|b| {
            let center = (
                (b.x + b.width / 2.0) / 1000.0,
                (b.y + b.height / 2.0) / 1000.0,
            );
            Text::new(b.name.clone(), center, style.clone())
        }))?;
    }

    Ok(())
}

/// Draw the colored cell layer for one temperature frame.
pub(crate) fn draw_cells<DB: DrawingBackend>(
    chart: &mut MapChart<'_, DB>,
    cells: &[GridCell],
    frame: &TemperatureFrame,
    scale: &ColorScale,
    alpha: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    chart.draw_series(cells.iter().zip(frame.iter()).map(|(c, &sample)| {
        Rectangle::new(
            [
                (c.x / 1000.0, c.y / 1000.0),
                ((c.x + c.width) / 1000.0, (c.y + c.height) / 1000.0),
            ],
            scale.color_of(sample).mix(alpha).filled(),
        )
    }))?;
    Ok(())
}

/// Draw the vertical color legend: one filled rectangle per bin over the
/// normalization range, labeled on the right.
pub(crate) fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scale: &ColorScale,
    label: &str,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .margin(MARGIN)
        .margin_bottom(X_LABEL_AREA + MARGIN)
        .set_label_area_size(LabelAreaPosition::Right, 60)
        .build_cartesian_2d(0.0..1.0, scale.min()..scale.max())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_desc(label)
        .draw()?;

    let span = scale.max() - scale.min();
    let bins = scale.bins();
    chart.draw_series((0..bins).map(|i| {
        let lo = scale.min() + span * i as f64 / bins as f64;
        let hi = scale.min() + span * (i + 1) as f64 / bins as f64;
        Rectangle::new([(0.0, lo), (1.0, hi)], scale.bin_color(i).filled())
    }))?;

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
