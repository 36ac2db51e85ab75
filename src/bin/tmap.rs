//! Static temperature-map driver
//!
//! Renders one temperature frame over a floorplan into a single image
//! (SVG by default). The grid geometry comes either from an explicit
//! per-cell file (`--xyaxis`) or from a pair of uniform axis files
//! (`--xaxis` + `--yaxis`); the two modes are mutually exclusive.

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use tmap_rs::floorplan::parse_floorplan;
use tmap_rs::grid::{cells_from_axes, cells_from_explicit, load_single_frame, HeaderLayout};
use tmap_rs::render::{render_map, MapConfig};

#[derive(Parser, Debug)]
#[command(name = "tmap")]
#[command(about = "Render a thermal-simulation temperature map over a chip floorplan")]
#[command(group(ArgGroup::new("grid").required(true).args(["xyaxis", "xaxis"])))]
struct Args {
    /// Input floorplan file
    #[arg(short = 'f', long)]
    flp: PathBuf,

    /// Input temperature map file
    #[arg(short = 't', long)]
    tmap: PathBuf,

    /// [non-uniform mode] input xyaxis file, one cell rectangle per line
    #[arg(long, conflicts_with = "yaxis")]
    xyaxis: Option<PathBuf>,

    /// [uniform mode] input xaxis file, one coordinate per line
    #[arg(short = 'x', long, requires = "yaxis")]
    xaxis: Option<PathBuf>,

    /// [uniform mode] input yaxis file, one coordinate per line
    #[arg(short = 'y', long, requires = "xaxis")]
    yaxis: Option<PathBuf>,

    /// Output file (svg extension selects the vector backend)
    #[arg(short = 'o', long, default_value = "test.svg")]
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
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let blocks = parse_floorplan(&args.flp)?;

    let cells = match &args.xyaxis {
        Some(xyaxis) => cells_from_explicit(xyaxis)?,
        None => {
            let xaxis = args.xaxis.as_ref().ok_or("--xaxis is required in uniform mode")?;
            let yaxis = args.yaxis.as_ref().ok_or("--yaxis is required in uniform mode")?;
            cells_from_axes(xaxis, yaxis)?
        }
    };

    // Static temperature files carry one header line for the whole file;
    // only the first frame is rendered.
    let frame = load_single_frame(&args.tmap, cells.len(), HeaderLayout::Prologue)?;

    let mut config = MapConfig::static_map();
    config.show_block_names = args.show_names;
    config.color_bins = args.color_bins;
    config.temp_min = args.temp_min;
    config.temp_max = args.temp_max;

    render_map(&blocks, &cells, &frame, &config, &args.output)
}
