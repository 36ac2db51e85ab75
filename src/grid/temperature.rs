//! Temperature series loading
//!
//! A temperature file carries one or many frames, each frame one line of
//! whitespace-separated samples — one sample per grid cell, in the cell
//! ordering of the geometry. The thermal flow writes two header
//! conventions, both preserved here as explicit [`HeaderLayout`] modes:
//!
//! - [`HeaderLayout::Prologue`]: one header line for the whole file,
//!   then one data line per frame (uniform-grid dumps, and the static
//!   non-uniform path which only ever consumes the first frame)
//! - [`HeaderLayout::PerFrame`]: a header line before *every* data line
//!   (non-uniform transient dumps)
//!
//! Every frame is length-checked against the geometry cell count at load
//! time; a mismatch aborts the load rather than producing a misaligned
//! rendering.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use super::geometry::parse_floats;
use super::GridError;

// =============================================================================
// Data model
// =============================================================================

/// One time-sampled temperature snapshot over the entire grid, one sample
/// per grid cell in geometry order. Units are K.
pub type TemperatureFrame = Vec<f64>;

/// An ordered sequence of [`TemperatureFrame`]s (length 1 for the static
/// rendering path).
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSeries {
    frames: Vec<TemperatureFrame>,
}

/// Header convention of a temperature file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// One header line at the top of the file, then one data line per
    /// frame.
    Prologue,
    /// A header line before every data line.
    PerFrame,
}

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while loading a temperature series.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// A frame's sample count did not equal the geometry cell count.
    #[error(
        "{origin}:{line}: frame {frame} has {found} sample(s), geometry has {expected} cell(s)"
    )]
    FrameLengthMismatch {
        origin: String,
        line: usize,
        frame: usize,
        expected: usize,
        found: usize,
    },

    /// The file held no data frame at all.
    #[error("{origin}: no temperature frame found")]
    EmptySeries { origin: String },

    /// A sample could not be parsed as a float.
    #[error(transparent)]
    InvalidNumber(#[from] GridError),

    #[error("failed to read temperature file {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },
}

// =============================================================================
// Loading
// =============================================================================

impl TemperatureSeries {
    /// Load a temperature series from a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Temperature file
    /// * `cell_count` - Cell count of the grid geometry; every frame must
    ///   hold exactly this many samples
    /// * `layout` - Header convention of the file
    /// * `max_frames` - `None` reads every frame in file order; `Some(n)`
    ///   stops after the first `n`
    ///
    /// # Errors
    ///
    /// [`SeriesError::FrameLengthMismatch`] on the first misaligned
    /// frame, [`SeriesError::EmptySeries`] if no data line is found.
    pub fn load(
        path: &Path,
        cell_count: usize,
        layout: HeaderLayout,
        max_frames: Option<usize>,
    ) -> Result<Self, SeriesError> {
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|source| SeriesError::Io {
            origin: origin.clone(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), &origin, cell_count, layout, max_frames)
    }

    /// Load a temperature series from any buffered reader.
    pub fn from_reader<R: BufRead>(
        reader: R,
        origin: &str,
        cell_count: usize,
        layout: HeaderLayout,
        max_frames: Option<usize>,
    ) -> Result<Self, SeriesError> {
        let mut frames = Vec::new();
        let mut expect_data = false;

        for (idx, line) in reader.lines().enumerate() {
            if max_frames.is_some_and(|cap| frames.len() >= cap) {
                break;
            }

            let line_no = idx + 1;
            let line = line.map_err(|source| SeriesError::Io {
                origin: origin.to_string(),
                source,
            })?;

            let is_data = match layout {
                // The whole-file header is line 1, everything after is data.
                HeaderLayout::Prologue => line_no > 1,
                // Header and data lines strictly alternate.
                HeaderLayout::PerFrame => {
                    let data = expect_data;
                    expect_data = !expect_data;
                    data
                }
            };
            if !is_data || line.trim().is_empty() {
                continue;
            }

            let samples = parse_floats(&line, origin, line_no)?;
            if samples.len() != cell_count {
                return Err(SeriesError::FrameLengthMismatch {
                    origin: origin.to_string(),
                    line: line_no,
                    frame: frames.len(),
                    expected: cell_count,
                    found: samples.len(),
                });
            }
            frames.push(samples);
        }

        if frames.is_empty() {
            return Err(SeriesError::EmptySeries {
                origin: origin.to_string(),
            });
        }

        Ok(Self { frames })
    }

    /// Number of frames in the series.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Borrow one frame by index. Panics if out of range.
    pub fn frame(&self, index: usize) -> &TemperatureFrame {
        &self.frames[index]
    }

    /// Borrow all frames in time order.
    pub fn frames(&self) -> &[TemperatureFrame] {
        &self.frames
    }

    /// Minimum and maximum sample across every frame of the series.
    ///
    /// `None` only for a series whose frames are all empty (a zero-cell
    /// grid), which the loaders never produce.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for sample in self.frames.iter().flatten() {
            range = Some(match range {
                None => (*sample, *sample),
                Some((lo, hi)) => (lo.min(*sample), hi.max(*sample)),
            });
        }
        range
    }

    /// Build a series directly from frames (tests, synthetic data).
    pub fn from_frames(frames: Vec<TemperatureFrame>) -> Self {
        Self { frames }
    }
}

/// Load only the first frame of a temperature file (static rendering
/// path).
pub fn load_single_frame(
    path: &Path,
    cell_count: usize,
    layout: HeaderLayout,
) -> Result<TemperatureFrame, SeriesError> {
    let mut series = TemperatureSeries::load(path, cell_count, layout, Some(1))?;
    Ok(series.frames.remove(0))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(text: &str, cells: usize, layout: HeaderLayout, cap: Option<usize>)
        -> Result<TemperatureSeries, SeriesError>
    {
        TemperatureSeries::from_reader(Cursor::new(text), "<memory>", cells, layout, cap)
    }

    #[test]
    fn test_prologue_layout_reads_every_frame() {
        let text = "Time(s) T(K)\n300 310 320 330\n301 311 321 331\n";
        let series = load(text, 4, HeaderLayout::Prologue, None).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.frame(0), &vec![300.0, 310.0, 320.0, 330.0]);
        assert_eq!(series.frame(1)[3], 331.0);
    }

    #[test]
    fn test_per_frame_layout_strips_header_before_each_frame() {
        let text = "t=0\n300 310\nt=1\n305 315\nt=2\n310 320\n";
        let series = load(text, 2, HeaderLayout::PerFrame, None).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.frame(2), &vec![310.0, 320.0]);
    }

    #[test]
    fn test_frame_cap_limits_consumption() {
        let text = "header\n1 2\n3 4\n5 6\n";
        let series = load(text, 2, HeaderLayout::Prologue, Some(2)).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_length_mismatch_identifies_frame_and_line() {
        let text = "header\n300 310 320 330\n300 310 320\n";
        match load(text, 4, HeaderLayout::Prologue, None).unwrap_err() {
            SeriesError::FrameLengthMismatch { line, frame, expected, found, .. } => {
                assert_eq!(line, 3);
                assert_eq!(frame, 1);
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_three_samples_against_four_cells_fails() {
        let text = "header\n300 310 320\n";
        assert!(matches!(
            load(text, 4, HeaderLayout::Prologue, None).unwrap_err(),
            SeriesError::FrameLengthMismatch { found: 3, expected: 4, .. }
        ));
    }

    #[test]
    fn test_header_only_file_is_empty_series() {
        assert!(matches!(
            load("header\n", 4, HeaderLayout::Prologue, None).unwrap_err(),
            SeriesError::EmptySeries { .. }
        ));
    }

    #[test]
    fn test_value_range_spans_all_frames() {
        let series = TemperatureSeries::from_frames(vec![
            vec![300.0, 310.0],
            vec![295.0, 320.0],
        ]);
        assert_eq!(series.value_range(), Some((295.0, 320.0)));
    }
}
