//! Grid geometry builders
//!
//! Reconstructs the list of rectangular cell geometries a temperature
//! frame is defined over, in either of the two source representations:
//!
//! - **Explicit (non-uniform)**: each line of the axis file already is a
//!   cell rectangle `x y w h` (µm). Lines are parsed independently and
//!   order is preserved; no cross-line validation is performed (cells may
//!   overlap or leave gaps — that is the producer's responsibility).
//! - **Uniform**: two files each list the 1-D coordinates of one axis.
//!   The cell pitch is taken from the spacing of the first two coordinates
//!   of each axis (assumed constant across the axis), and one cell is
//!   emitted per (y, x) coordinate pair in row-major order over the y
//!   axis, centered on the pair.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

// =============================================================================
// Data model
// =============================================================================

/// One rectangular spatial unit over which a single temperature sample is
/// defined. Coordinates are in µm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// Left edge [µm].
    pub x: f64,
    /// Bottom edge [µm].
    pub y: f64,
    /// Width [µm].
    pub width: f64,
    /// Height [µm].
    pub height: f64,
}

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while building grid geometry.
#[derive(Debug, Error)]
pub enum GridError {
    /// A uniform axis needs at least two coordinates to define the cell
    /// pitch.
    #[error("{origin}: uniform axis has {points} point(s), at least 2 are required")]
    InsufficientAxisPoints { origin: String, points: usize },

    /// An explicit cell line did not hold exactly four fields.
    #[error("{origin}:{line}: expected 4 fields (x y w h), found {fields}")]
    MalformedCell {
        origin: String,
        line: usize,
        fields: usize,
    },

    /// A field could not be parsed as a float.
    #[error("{origin}:{line}: invalid number {value:?}")]
    InvalidNumber {
        origin: String,
        line: usize,
        value: String,
    },

    #[error("failed to read grid file {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },
}

// =============================================================================
// Explicit (non-uniform) mode
// =============================================================================

/// Parse an explicit cell list from any buffered reader.
///
/// One cell per line, four whitespace-separated floats `x y w h` in µm.
/// Blank lines are skipped; cell order equals line order.
pub fn explicit_cells_from_reader<R: BufRead>(
    reader: R,
    origin: &str,
) -> Result<Vec<GridCell>, GridError> {
    let mut cells = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| GridError::Io {
            origin: origin.to_string(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_floats(&line, origin, line_no)?;
        if fields.len() != 4 {
            return Err(GridError::MalformedCell {
                origin: origin.to_string(),
                line: line_no,
                fields: fields.len(),
            });
        }

        cells.push(GridCell {
            x: fields[0],
            y: fields[1],
            width: fields[2],
            height: fields[3],
        });
    }

    Ok(cells)
}

/// Build grid geometry from an explicit per-cell rectangle file.
///
/// # Errors
///
/// Returns [`GridError`] if the file cannot be read, a line does not hold
/// exactly four fields, or a field is not a float.
pub fn cells_from_explicit(path: &Path) -> Result<Vec<GridCell>, GridError> {
    let origin = path.display().to_string();
    let file = open(path, &origin)?;
    explicit_cells_from_reader(BufReader::new(file), &origin)
}

// =============================================================================
// Uniform mode
// =============================================================================

/// Build the uniform cell lattice from two axis coordinate lists.
///
/// The pitch on each axis is the spacing of its first two coordinates
/// (assumed constant). Cells are emitted in row-major order with the y
/// axis as the outer loop, each centered on its (x, y) coordinate pair —
/// the sample ordering the thermal flow writes its uniform grid dumps in.
///
/// # Errors
///
/// [`GridError::InsufficientAxisPoints`] if either axis has fewer than
/// two coordinates.
pub fn uniform_cells(xs: &[f64], ys: &[f64]) -> Result<Vec<GridCell>, GridError> {
    if xs.len() < 2 {
        return Err(GridError::InsufficientAxisPoints {
            origin: "x axis".to_string(),
            points: xs.len(),
        });
    }
    if ys.len() < 2 {
        return Err(GridError::InsufficientAxisPoints {
            origin: "y axis".to_string(),
            points: ys.len(),
        });
    }

    let cell_length = xs[1] - xs[0];
    let cell_width = ys[1] - ys[0];

    let mut cells = Vec::with_capacity(xs.len() * ys.len());
    for &y in ys {
        for &x in xs {
            cells.push(GridCell {
                x: x - cell_length / 2.0,
                y: y - cell_width / 2.0,
                width: cell_length,
                height: cell_width,
            });
        }
    }

    Ok(cells)
}

/// Build grid geometry from a pair of uniform axis files.
///
/// Each file lists one axis coordinate per line (µm, strictly
/// increasing).
pub fn cells_from_axes(x_path: &Path, y_path: &Path) -> Result<Vec<GridCell>, GridError> {
    let xs = read_axis(x_path)?;
    let ys = read_axis(y_path)?;

    match uniform_cells(&xs, &ys) {
        // Rewrite the generic axis label with the actual file.
        Err(GridError::InsufficientAxisPoints { origin, points }) => {
            let path = if origin.starts_with('x') { x_path } else { y_path };
            Err(GridError::InsufficientAxisPoints {
                origin: path.display().to_string(),
                points,
            })
        }
        other => other,
    }
}

/// Read a 1-D axis coordinate list, one float per line.
pub fn read_axis(path: &Path) -> Result<Vec<f64>, GridError> {
    let origin = path.display().to_string();
    let file = open(path, &origin)?;

    let mut coords = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| GridError::Io {
            origin: origin.clone(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        coords.extend(parse_floats(&line, &origin, idx + 1)?);
    }

    Ok(coords)
}

// =============================================================================
// Helpers
// =============================================================================

fn open(path: &Path, origin: &str) -> Result<File, GridError> {
    File::open(path).map_err(|source| GridError::Io {
        origin: origin.to_string(),
        source,
    })
}

/// Split a line on whitespace and parse every field as a float.
pub(crate) fn parse_floats(
    line: &str,
    origin: &str,
    line_no: usize,
) -> Result<Vec<f64>, GridError> {
    line.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| GridError::InvalidNumber {
                origin: origin.to_string(),
                line: line_no,
                value: token.to_string(),
            })
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
