//! Demo: animated heat-up of a four-quadrant die
//!
//! Generates a synthetic transient — the top-left quadrant heating while
//! the others follow slowly — and renders it as `heatup.gif` in the
//! current directory, 10 frames at 0.1 s per frame.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example heatup_animation
//! ```

use std::error::Error;

use tmap_rs::floorplan::Block;
use tmap_rs::grid::{uniform_cells, TemperatureSeries};
use tmap_rs::render::{render_animation, AnimationConfig};

fn main() -> Result<(), Box<dyn Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  tmap-rs - Heat-up Animation");
    println!("═══════════════════════════════════════════════════════\n");

    let blocks = vec![Block {
        name: "Die".to_string(),
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 1000.0,
        power: 3.0,
    }];
    let cells = uniform_cells(&[250.0, 750.0], &[250.0, 750.0])?;

    // Hotspot in the cell above-left, the rest trailing behind.
    let frames: Vec<Vec<f64>> = (0..10)
        .map(|t| {
            let t = t as f64;
            vec![
                300.0 + 1.5 * t,
                300.0 + 2.0 * t,
                300.0 + 6.0 * t,
                300.0 + 2.5 * t,
            ]
        })
        .collect();
    let series = TemperatureSeries::from_frames(frames);

    println!("Series:");
    println!("  frames : {}", series.len());
    let (lo, hi) = series.value_range().expect("series is non-empty");
    println!("  range  : {lo} K .. {hi} K\n");

    let config = AnimationConfig::new(0.1);
    render_animation(&blocks, &cells, &series, &config, "heatup.gif")?;
    println!("Wrote heatup.gif ({} fps)", 1.0 / config.timestep);

    Ok(())
}
