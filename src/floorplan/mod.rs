//! Floorplan parsing and the floorplan area diagnostic
//!
//! A floorplan file is a line-oriented description of named rectangular
//! blocks, each with a position, a dimension (both in µm) and a dissipated
//! power (in W):
//!
//! ```text
//! Core0:
//!    position    0.0,    0.0
//!    dimension 500.0, 1000.0
//!    power values 1.5
//! ```
//!
//! Parsing is an explicit state machine with one state per expected field:
//!
//! ```text
//! ExpectName -> ExpectPosition -> ExpectDimension -> ExpectPower -> emit
//! ```
//!
//! A block is emitted exactly when its `power values` line is read (power
//! is always the last field of a block in the source format). Lines that
//! match none of the four field patterns are skipped in every state, so
//! blank lines and free-form comments are tolerated; a *recognized* field
//! line arriving out of order is a hard error rather than a silent
//! overwrite of the pending record.
//!
//! # Example
//!
//! ```rust,no_run
//! use tmap_rs::floorplan::{parse_floorplan, area_report};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let blocks = parse_floorplan(Path::new("chip.flp"))?;
//! let report = area_report(&blocks);
//! if report.mismatch() {
//!     eprintln!("floorplan does not cover its bounding box");
//! }
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

// =============================================================================
// Data model
// =============================================================================

/// One named rectangular floorplan block.
///
/// Coordinates and dimensions are in µm, power in W. Identity is the name;
/// uniqueness is not enforced. Blocks are immutable value data, consumed
/// only for drawing the outline/label layer of a rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Block name as written in the floorplan (without the trailing `:`).
    pub name: String,
    /// Left edge [µm].
    pub x: f64,
    /// Bottom edge [µm].
    pub y: f64,
    /// Width [µm].
    pub width: f64,
    /// Height [µm].
    pub height: f64,
    /// Dissipated power [W].
    pub power: f64,
}

impl Block {
    /// Block area in mm² (source coordinates are µm).
    pub fn area_mm2(&self) -> f64 {
        (self.width / 1000.0) * (self.height / 1000.0)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while parsing a floorplan file.
///
/// Every variant identifies the offending file, and the offending line
/// where one exists.
#[derive(Debug, Error)]
pub enum FloorplanError {
    /// A recognized field line appeared in the wrong position within a
    /// block (e.g. a `power values` line before any block name).
    #[error("{origin}:{line}: found {found} line while expecting {expected}")]
    OutOfOrder {
        origin: String,
        line: usize,
        found: &'static str,
        expected: &'static str,
    },

    /// A numeric field could not be parsed as a float.
    #[error("{origin}:{line}: invalid {field} value {value:?}")]
    InvalidNumber {
        origin: String,
        line: usize,
        field: &'static str,
        value: String,
    },

    /// The file ended inside a partially read block.
    #[error("{origin}: file ends inside block {name:?} (missing {expected} line)")]
    Truncated {
        origin: String,
        name: String,
        expected: &'static str,
    },

    #[error("failed to read floorplan {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },
}

// =============================================================================
// Parser
// =============================================================================

/// The field a block description is expected to supply next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    ExpectName,
    ExpectPosition,
    ExpectDimension,
    ExpectPower,
}

impl ParseState {
    fn expected(self) -> &'static str {
        match self {
            ParseState::ExpectName => "block name",
            ParseState::ExpectPosition => "position",
            ParseState::ExpectDimension => "dimension",
            ParseState::ExpectPower => "power values",
        }
    }
}

/// A line classified against the four field patterns.
enum Field<'a> {
    Name(&'a str),
    Position(&'a str),
    Dimension(&'a str),
    Power(&'a str),
}

impl<'a> Field<'a> {
    fn kind(&self) -> &'static str {
        match self {
            Field::Name(_) => "block name",
            Field::Position(_) => "position",
            Field::Dimension(_) => "dimension",
            Field::Power(_) => "power values",
        }
    }
}

/// Classify a line against the field patterns, `None` if it matches none.
fn classify(line: &str) -> Option<Field<'_>> {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix("power values ") {
        return Some(Field::Power(rest));
    }
    if let Some(rest) = trimmed.strip_prefix("position ") {
        return Some(Field::Position(rest));
    }
    if let Some(rest) = trimmed.strip_prefix("dimension ") {
        return Some(Field::Dimension(rest));
    }
    if let Some(name) = trimmed.strip_suffix(':') {
        if !name.is_empty() {
            return Some(Field::Name(name));
        }
    }
    None
}

/// Parse a `<x>, <y>` pair following a `position`/`dimension` keyword.
fn parse_pair(
    rest: &str,
    field: &'static str,
    origin: &str,
    line_no: usize,
) -> Result<(f64, f64), FloorplanError> {
    let invalid = |value: &str| FloorplanError::InvalidNumber {
        origin: origin.to_string(),
        line: line_no,
        field,
        value: value.to_string(),
    };

    let mut parts = rest.splitn(2, ',');
    let first = parts.next().unwrap_or("").trim();
    let second = parts.next().ok_or_else(|| invalid(rest.trim()))?.trim();

    let a: f64 = first.parse().map_err(|_| invalid(first))?;
    let b: f64 = second.parse().map_err(|_| invalid(second))?;
    Ok((a, b))
}

/// Parse the leading power value after `power values`.
///
/// The source format may list several values separated by commas and end
/// the list with a semicolon; only the first value is meaningful for the
/// drawing layer.
fn parse_power(rest: &str, origin: &str, line_no: usize) -> Result<f64, FloorplanError> {
    let token = rest
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_end_matches([',', ';']);
    token.parse().map_err(|_| FloorplanError::InvalidNumber {
        origin: origin.to_string(),
        line: line_no,
        field: "power",
        value: token.to_string(),
    })
}

/// Parse a floorplan from any buffered reader.
///
/// `origin` names the input in error messages (a file path, `"<memory>"`
/// in tests, ...).
pub fn parse_floorplan_reader<R: BufRead>(
    reader: R,
    origin: &str,
) -> Result<Vec<Block>, FloorplanError> {
    let mut blocks = Vec::new();
    let mut state = ParseState::ExpectName;

    // Fields of the pending block, filled as the states advance.
    let mut name = String::new();
    let mut position = (0.0, 0.0);
    let mut dimension = (0.0, 0.0);

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| FloorplanError::Io {
            origin: origin.to_string(),
            source,
        })?;

        let field = match classify(&line) {
            Some(field) => field,
            None => continue,
        };

        match (state, field) {
            (ParseState::ExpectName, Field::Name(n)) => {
                name = n.trim().to_string();
                state = ParseState::ExpectPosition;
            }
            (ParseState::ExpectPosition, Field::Position(rest)) => {
                position = parse_pair(rest, "position", origin, line_no)?;
                state = ParseState::ExpectDimension;
            }
            (ParseState::ExpectDimension, Field::Dimension(rest)) => {
                dimension = parse_pair(rest, "dimension", origin, line_no)?;
                state = ParseState::ExpectPower;
            }
            (ParseState::ExpectPower, Field::Power(rest)) => {
                let power = parse_power(rest, origin, line_no)?;
                blocks.push(Block {
                    name: std::mem::take(&mut name),
                    x: position.0,
                    y: position.1,
                    width: dimension.0,
                    height: dimension.1,
                    power,
                });
                state = ParseState::ExpectName;
            }
            (_, field) => {
                return Err(FloorplanError::OutOfOrder {
                    origin: origin.to_string(),
                    line: line_no,
                    found: field.kind(),
                    expected: state.expected(),
                });
            }
        }
    }

    if state != ParseState::ExpectName {
        return Err(FloorplanError::Truncated {
            origin: origin.to_string(),
            name,
            expected: state.expected(),
        });
    }

    Ok(blocks)
}

/// Parse a floorplan file into an ordered sequence of [`Block`]s.
///
/// # Errors
///
/// Returns [`FloorplanError`] if the file cannot be read, a numeric field
/// is not a float, a field line is out of order, or the file ends inside
/// a block.
pub fn parse_floorplan(path: &Path) -> Result<Vec<Block>, FloorplanError> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| FloorplanError::Io {
        origin: origin.clone(),
        source,
    })?;
    parse_floorplan_reader(BufReader::new(file), &origin)
}

// =============================================================================
// Area diagnostic
// =============================================================================

/// Relative tolerance for the block-area vs bounding-area comparison.
const AREA_TOLERANCE: f64 = 1e-9;

/// Summed block area against the floorplan bounding box, both in mm².
///
/// A mismatch means the blocks cover less than their bounding box
/// (L-shaped or otherwise irregular chips). That is a legitimate input,
/// so the report is a diagnostic for the renderers to print, never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaReport {
    /// Sum of all block areas [mm²].
    pub block_area_mm2: f64,
    /// Max block extent in x times max extent in y [mm²].
    pub bounding_area_mm2: f64,
}

impl AreaReport {
    /// Whether the two areas differ beyond floating-point tolerance.
    pub fn mismatch(&self) -> bool {
        let scale = self.bounding_area_mm2.abs().max(self.block_area_mm2.abs());
        if scale == 0.0 {
            return false;
        }
        (self.block_area_mm2 - self.bounding_area_mm2).abs() > AREA_TOLERANCE * scale
    }

    /// The warning the renderers print when [`mismatch`](Self::mismatch)
    /// holds.
    pub fn warning(&self) -> String {
        format!(
            "area mismatch. Blocks area: {} mm2, total area: {} mm2, please check the floorplan",
            self.block_area_mm2, self.bounding_area_mm2
        )
    }
}

/// Compute the [`AreaReport`] for a set of blocks.
pub fn area_report(blocks: &[Block]) -> AreaReport {
    let mut block_area = 0.0;
    let mut x_max: f64 = 0.0;
    let mut y_max: f64 = 0.0;

    for block in blocks {
        block_area += block.area_mm2();
        x_max = x_max.max((block.x + block.width) / 1000.0);
        y_max = y_max.max((block.y + block.height) / 1000.0);
    }

    AreaReport {
        block_area_mm2: block_area,
        bounding_area_mm2: x_max * y_max,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Vec<Block>, FloorplanError> {
        parse_floorplan_reader(Cursor::new(text), "<memory>")
    }

    #[test]
    fn test_parse_two_blocks() {
        let text = "\
Core0:
   position 0, 0
   dimension 500, 1000
   power values 1.5
Core1:
   position 500, 0
   dimension 500, 1000
   power values 0.25
";
        let blocks = parse(text).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "Core0");
        assert_eq!(blocks[0].width, 500.0);
        assert_eq!(blocks[1].x, 500.0);
        assert_eq!(blocks[1].power, 0.25);
    }

    #[test]
    fn test_unrecognized_lines_are_skipped() {
        let text = "\
# floorplan exported by the thermal flow

Core0:
   position 0.0, 0.0
   dimension 1000.0, 1000.0
   power values 2.0 ;
";
        let blocks = parse(text).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].power, 2.0);
    }

    #[test]
    fn test_power_before_name_is_out_of_order() {
        let err = parse("power values 1.0\n").unwrap_err();
        match err {
            FloorplanError::OutOfOrder { line, found, expected, .. } => {
                assert_eq!(line, 1);
                assert_eq!(found, "power values");
                assert_eq!(expected, "block name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dimension_before_position_is_out_of_order() {
        let text = "Core0:\n   dimension 500, 500\n";
        assert!(matches!(
            parse(text).unwrap_err(),
            FloorplanError::OutOfOrder { line: 2, .. }
        ));
    }

    #[test]
    fn test_invalid_float_is_reported_with_line() {
        let text = "Core0:\n   position 0, abc\n";
        match parse(text).unwrap_err() {
            FloorplanError::InvalidNumber { line, field, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(field, "position");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_truncated_block() {
        let text = "Core0:\n   position 0, 0\n";
        assert!(matches!(
            parse(text).unwrap_err(),
            FloorplanError::Truncated { .. }
        ));
    }

    #[test]
    fn test_area_report_full_coverage() {
        // One 1mm x 1mm block: block area equals its bounding box.
        let blocks = vec![Block {
            name: "A".to_string(),
            x: 0.0,
            y: 0.0,
            width: 1000.0,
            height: 1000.0,
            power: 1.0,
        }];
        let report = area_report(&blocks);
        assert_eq!(report.block_area_mm2, 1.0);
        assert_eq!(report.bounding_area_mm2, 1.0);
        assert!(!report.mismatch());
    }

    #[test]
    fn test_area_report_partial_coverage() {
        // 0.9mm x 1mm block inside a 1mm x 1mm bounding box (bounding box
        // widened by a second thin block).
        let blocks = vec![
            Block {
                name: "A".to_string(),
                x: 0.0,
                y: 0.0,
                width: 900.0,
                height: 1000.0,
                power: 1.0,
            },
            Block {
                name: "B".to_string(),
                x: 950.0,
                y: 0.0,
                width: 50.0,
                height: 1000.0,
                power: 0.0,
            },
        ];
        let report = area_report(&blocks);
        assert!(report.mismatch());
        assert!(report.warning().contains("area mismatch"));
    }

    #[test]
    fn test_area_report_empty_floorplan() {
        assert!(!area_report(&[]).mismatch());
    }
}
