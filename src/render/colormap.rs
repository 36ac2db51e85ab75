//! Scalar-to-color mapping
//!
//! A [`ColorScale`] discretizes a temperature range into `bins` evenly
//! spaced samples of a fixed hue ramp (blue for the low end, red for the
//! high end, the ordering of the classic `jet` map). It is derived once
//! per rendering request — either from explicit user bounds or from the
//! data itself — so every frame of a series maps temperatures to colors
//! identically.

use plotters::prelude::*;
use thiserror::Error;

/// Fraction of a bound's magnitude by which an auto-derived range is
/// inflated, so the extreme samples never land exactly on a bin boundary.
pub const AUTO_RANGE_MARGIN: f64 = 1e-3;

/// Errors raised while building a [`ColorScale`].
#[derive(Debug, Error)]
pub enum ColorScaleError {
    /// The normalization range has zero (or negative) width, so samples
    /// cannot be placed on it.
    #[error("degenerate temperature range: min {min} K, max {max} K")]
    DegenerateRange { min: f64, max: f64 },

    /// A color resolution of zero bins cannot map anything.
    #[error("color resolution must be at least 1 bin")]
    ZeroBins,
}

/// A discrete temperature-to-color normalization.
#[derive(Debug, Clone)]
pub struct ColorScale {
    min: f64,
    max: f64,
    colors: Vec<RGBColor>,
}

impl ColorScale {
    /// Build a scale over an explicit `[min, max]` range.
    ///
    /// # Errors
    ///
    /// [`ColorScaleError::DegenerateRange`] unless `max > min`,
    /// [`ColorScaleError::ZeroBins`] if `bins == 0`.
    pub fn new(min: f64, max: f64, bins: usize) -> Result<Self, ColorScaleError> {
        if bins == 0 {
            return Err(ColorScaleError::ZeroBins);
        }
        if !(max > min) {
            return Err(ColorScaleError::DegenerateRange { min, max });
        }

        let colors = (0..bins)
            .map(|i| {
                let t = if bins == 1 {
                    0.0
                } else {
                    i as f64 / (bins - 1) as f64
                };
                ramp_color(t)
            })
            .collect();

        Ok(Self { min, max, colors })
    }

    /// Build a scale from the rendered data's value range, honoring
    /// explicit per-bound overrides.
    ///
    /// Bounds without an override are taken from `data_range` inflated
    /// outward by [`AUTO_RANGE_MARGIN`] of the bound's magnitude.
    pub fn resolve(
        data_range: (f64, f64),
        override_min: Option<f64>,
        override_max: Option<f64>,
        bins: usize,
    ) -> Result<Self, ColorScaleError> {
        let (data_min, data_max) = data_range;
        let min = override_min.unwrap_or(data_min - AUTO_RANGE_MARGIN * data_min.abs());
        let max = override_max.unwrap_or(data_max + AUTO_RANGE_MARGIN * data_max.abs());
        Self::new(min, max, bins)
    }

    /// Lower bound of the normalization range [K].
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the normalization range [K].
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Color resolution.
    pub fn bins(&self) -> usize {
        self.colors.len()
    }

    /// Bin index of a sample: `floor((v - min) / (max - min) * bins)`,
    /// clamped to `[0, bins - 1]`. Monotonic in `v`.
    pub fn bin_index(&self, v: f64) -> usize {
        let bins = self.colors.len();
        let fraction = (v - self.min) / (self.max - self.min);
        let index = (fraction * bins as f64).floor();
        if index < 0.0 {
            0
        } else {
            (index as usize).min(bins - 1)
        }
    }

    /// Color of one bin. Panics if out of range.
    pub fn bin_color(&self, bin: usize) -> RGBColor {
        self.colors[bin]
    }

    /// Color of a sample.
    pub fn color_of(&self, v: f64) -> RGBColor {
        self.colors[self.bin_index(v)]
    }
}

/// Sample the hue ramp at `t` in `[0, 1]`: hue 240° (blue) at the low
/// end down to 0° (red) at the high end, full saturation, mid lightness.
fn ramp_color(t: f64) -> RGBColor {
    let hue = (2.0 / 3.0) * (1.0 - t.clamp(0.0, 1.0));
    let (r, g, b) = HSLColor(hue, 1.0, 0.5).to_backend_color().rgb;
    RGBColor(r, g, b)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_range_rejected() {
        assert!(matches!(
            ColorScale::new(300.0, 300.0, 100).unwrap_err(),
            ColorScaleError::DegenerateRange { .. }
        ));
        assert!(matches!(
            ColorScale::new(310.0, 300.0, 100).unwrap_err(),
            ColorScaleError::DegenerateRange { .. }
        ));
    }

    #[test]
    fn test_zero_bins_rejected() {
        assert!(matches!(
            ColorScale::new(300.0, 310.0, 0).unwrap_err(),
            ColorScaleError::ZeroBins
        ));
    }

    #[test]
    fn test_bin_index_is_monotonic() {
        let scale = ColorScale::new(300.0, 400.0, 100).unwrap();
        let mut previous = 0;
        for step in 0..=1000 {
            let v = 300.0 + (step as f64) * 0.1;
            let bin = scale.bin_index(v);
            assert!(bin >= previous, "binning not monotonic at {v}");
            previous = bin;
        }
    }

    #[test]
    fn test_bin_index_clamps_out_of_range_samples() {
        let scale = ColorScale::new(300.0, 400.0, 100).unwrap();
        assert_eq!(scale.bin_index(250.0), 0);
        assert_eq!(scale.bin_index(400.0), 99);
        assert_eq!(scale.bin_index(1000.0), 99);
    }

    #[test]
    fn test_resolve_inflates_auto_bounds() {
        let scale = ColorScale::resolve((300.0, 400.0), None, None, 10).unwrap();
        assert!(scale.min() < 300.0);
        assert!(scale.max() > 400.0);
        // The data extremes stay strictly inside the inflated range.
        assert!(scale.bin_index(300.0) < 10);
        assert!(scale.bin_index(400.0) < 10);
    }

    #[test]
    fn test_resolve_honors_explicit_bounds() {
        let scale = ColorScale::resolve((300.0, 400.0), Some(280.0), Some(420.0), 10).unwrap();
        assert_eq!(scale.min(), 280.0);
        assert_eq!(scale.max(), 420.0);
    }

    #[test]
    fn test_resolve_flat_series_is_degenerate() {
        // All-equal samples at 0 K leave no range even after inflation.
        assert!(matches!(
            ColorScale::resolve((0.0, 0.0), None, None, 100).unwrap_err(),
            ColorScaleError::DegenerateRange { .. }
        ));
    }

    #[test]
    fn test_rebinned_series_stays_in_range() {
        let samples = [295.5, 301.2, 317.9, 356.0, 400.0];
        let (lo, hi) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let scale = ColorScale::resolve((lo, hi), None, None, 37).unwrap();
        for &v in &samples {
            assert!(scale.bin_index(v) < 37);
        }
    }

    #[test]
    fn test_ramp_runs_blue_to_red() {
        let scale = ColorScale::new(0.0, 1.0, 100).unwrap();
        let cold = scale.bin_color(0);
        let hot = scale.bin_color(99);
        assert!(cold.2 > cold.0, "low end should be blue-dominant");
        assert!(hot.0 > hot.2, "high end should be red-dominant");
    }
}
