//! Demo: static temperature map of a four-quadrant die
//!
//! Builds a 1mm x 1mm floorplan with two blocks, overlays a 2x2 uniform
//! temperature grid, and renders the result as `quadrants.svg` in the
//! current directory.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example uniform_quadrants
//! ```

use std::error::Error;

use tmap_rs::floorplan::{area_report, Block};
use tmap_rs::grid::uniform_cells;
use tmap_rs::render::{render_map, MapConfig};

fn main() -> Result<(), Box<dyn Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  tmap-rs - Static Quadrant Map");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Floorplan: one core, one cache, 1mm x 1mm total ======

    let blocks = vec![
        Block {
            name: "Core".to_string(),
            x: 0.0,
            y: 0.0,
            width: 600.0,
            height: 1000.0,
            power: 2.0,
        },
        Block {
            name: "L2".to_string(),
            x: 600.0,
            y: 0.0,
            width: 400.0,
            height: 1000.0,
            power: 0.4,
        },
    ];

    let report = area_report(&blocks);
    println!("Floorplan:");
    println!("  blocks        : {}", blocks.len());
    println!("  blocks area   : {} mm2", report.block_area_mm2);
    println!("  bounding area : {} mm2\n", report.bounding_area_mm2);

    // ====== Uniform 2x2 grid over the die, cell centers at 250/750 ======

    let cells = uniform_cells(&[250.0, 750.0], &[250.0, 750.0])?;
    let frame = vec![318.5, 309.0, 321.0, 307.5];

    println!("Grid:");
    println!("  cells         : {}", cells.len());
    println!("  cell pitch    : {} µm\n", cells[0].width);

    // ====== Render ======

    let mut config = MapConfig::static_map();
    config.color_bins = 128;

    render_map(&blocks, &cells, &frame, &config, "quadrants.svg")?;
    println!("Wrote quadrants.svg");

    Ok(())
}
