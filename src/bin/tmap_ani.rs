//! Animated temperature-map driver
//!
//! Renders a transient temperature series over a floorplan into a GIF,
//! one encoded frame per simulation time step, played back at
//! `1/timestep` frames per second.
//!
//! Non-uniform transient dumps carry a header line before every frame;
//! uniform dumps carry a single header line for the whole file. The
//! loader mode follows the grid mode accordingly.

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use tmap_rs::floorplan::parse_floorplan;
use tmap_rs::grid::{cells_from_axes, cells_from_explicit, HeaderLayout, TemperatureSeries};
use tmap_rs::render::{render_animation, AnimationConfig};

#[derive(Parser, Debug)]
#[command(name = "tmap-ani")]
#[command(about = "Render a thermal-simulation temperature series as an animated GIF")]
#[command(group(ArgGroup::new("grid").required(true).args(["xyaxis", "xaxis"])))]
struct Args {
    /// Input floorplan file
    #[arg(short = 'f', long)]
    flp: PathBuf,

    /// Input temperature map file
    #[arg(short = 't', long)]
    tmap: PathBuf,

    /// Simulated duration of one frame, in seconds
    #[arg(short = 's', long)]
    timestep: f64,

    /// [non-uniform mode] input xyaxis file, one cell rectangle per line
    #[arg(long, conflicts_with = "yaxis")]
    xyaxis: Option<PathBuf>,

    /// [uniform mode] input xaxis file, one coordinate per line
    #[arg(short = 'x', long, requires = "yaxis")]
    xaxis: Option<PathBuf>,

    /// [uniform mode] input yaxis file, one coordinate per line
    #[arg(short = 'y', long, requires = "xaxis")]
    yaxis: Option<PathBuf>,

    /// Output GIF file
    #[arg(short = 'o', long, default_value = "animation.gif")]
    output: String,

    /// Min temperature of the color scale (adapts to the data if not set)
    #[arg(long = "tempmin")]
    temp_min: Option<f64>,

    /// Max temperature of the color scale (adapts to the data if not set)
    #[arg(long = "tempmax")]
    temp_max: Option<f64>,

    /// Show the block names in the output figure
    #[arg(long = "flpname", action = clap::ArgAction::Set, default_value_t = true)]
    show_names: bool,

    /// Resolution of the color bar
    #[arg(short = 'c', long = "color", default_value_t = 100)]
    color_bins: usize,

    /// Number of frames to render (all frames in the file if not set)
    #[arg(long = "framecount")]
    frame_count: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let blocks = parse_floorplan(&args.flp)?;

    let (cells, layout) = match &args.xyaxis {
        Some(xyaxis) => (cells_from_explicit(xyaxis)?, HeaderLayout::PerFrame),
        None => {
            let xaxis = args.xaxis.as_ref().ok_or("--xaxis is required in uniform mode")?;
            let yaxis = args.yaxis.as_ref().ok_or("--yaxis is required in uniform mode")?;
            (cells_from_axes(xaxis, yaxis)?, HeaderLayout::Prologue)
        }
    };

    let series = TemperatureSeries::load(&args.tmap, cells.len(), layout, args.frame_count)?;

    let mut config = AnimationConfig::new(args.timestep);
    config.map.show_block_names = args.show_names;
    config.map.color_bins = args.color_bins;
    config.map.temp_min = args.temp_min;
    config.map.temp_max = args.temp_max;

    render_animation(&blocks, &cells, &series, &config, &args.output)
}
