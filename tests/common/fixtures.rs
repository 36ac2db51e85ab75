//! Input-file fixtures for integration tests
//!
//! All fixtures describe the same reference chip: a 1mm x 1mm die split
//! into four 500µm x 500µm temperature cells (a 2x2 uniform grid whose
//! axis coordinates are the cell centers 250µm and 750µm).

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Cell count of the reference 2x2 quadrant grid.
pub const QUADRANT_CELLS: usize = 4;

/// Write `contents` under `name` in the test's scratch directory.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write fixture");
    path
}

/// Floorplan text for the reference die.
///
/// With `width = 1000` the single block covers its bounding box exactly;
/// smaller widths leave part of the die uncovered.
pub fn quadrant_floorplan(width_um: f64) -> String {
    format!(
        "A:\n   position 0, 0\n   dimension {width_um}, 1000\n   power values 1.0\n"
    )
}

/// One uniform axis of the reference grid: the two cell centers.
pub fn quadrant_axis() -> &'static str {
    "250\n750\n"
}

/// A temperature file over the reference grid: one prologue header line,
/// then one frame per line, each frame shifted by `step_delta` K from the
/// previous one.
pub fn quadrant_temperatures(frames: usize, step_delta: f64) -> String {
    let mut text = String::from("Time(s)\tT(K)\n");
    for frame in 0..frames {
        let offset = frame as f64 * step_delta;
        let samples: Vec<String> = [300.0, 310.0, 320.0, 330.0]
            .iter()
            .map(|base| format!("{}", base + offset))
            .collect();
        text.push_str(&samples.join(" "));
        text.push('\n');
    }
    text
}
