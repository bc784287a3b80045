//! Power normalization and exponential smoothing of incoming spectra.

use crate::util::db::POWER_FLOOR;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_FRAME_RATE: f32 = 1.0;
pub const DEFAULT_FRAME_RATE: f32 = 15.0;
pub const MIN_AVERAGING: f32 = 0.0;
pub const MAX_AVERAGING: f32 = 1.0;
pub const DEFAULT_AVERAGING: f32 = 0.5;

// a = (rate ^ (RATE_EXPONENT * averaging)) ^ GAMMA
const RATE_EXPONENT: f32 = -1.75;
const GAMMA: f32 = 0.7;

/// Unit in which the plot reports power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotScale {
    /// Relative to full-scale input.
    #[default]
    Dbfs,
    /// Volts RMS.
    Dbv,
    /// Milliwatts into 50 ohms.
    Dbm50,
}

impl PlotScale {
    fn power_factor(self) -> f64 {
        match self {
            PlotScale::Dbfs => 1.0,
            PlotScale::Dbv => 0.5,
            PlotScale::Dbm50 => 1000.0 / (2.0 * 50.0),
        }
    }

    pub fn unit_label(self, per_hz: bool) -> &'static str {
        match (self, per_hz) {
            (PlotScale::Dbfs, _) => "dBFS",
            (PlotScale::Dbv, false) => "dBV",
            (PlotScale::Dbv, true) => "dBV/Hz",
            (PlotScale::Dbm50, false) => "dBm",
            (PlotScale::Dbm50, true) => "dBm/Hz",
        }
    }
}

/// Linear factor that converts squared FFT magnitudes of an `fft_size` point
/// transform into the requested unit. Per-Hz scaling does not apply to dBFS.
pub fn power_scale_factor(scale: PlotScale, per_hz: bool, fft_size: usize, sample_rate: f64) -> f32 {
    if fft_size == 0 {
        return 0.0;
    }
    let n = fft_size as f64;
    let mut factor = scale.power_factor() / (n * n);
    if per_hz && scale != PlotScale::Dbfs && sample_rate > 0.0 {
        factor *= n / sample_rate;
    }
    factor as f32
}

/// Writes `input * factor` into `output`, flooring every value at [`POWER_FLOOR`].
pub fn normalize_power(input: &[f32], factor: f32, output: &mut Vec<f32>) {
    output.resize(input.len(), POWER_FLOOR);
    for (target, &value) in output.iter_mut().zip(input) {
        let scaled = value * factor;
        *target = if scaled.is_finite() {
            scaled.max(POWER_FLOOR)
        } else {
            POWER_FLOOR
        };
    }
}

/// Per-frame exponent of the multiplicative filter for a given frame rate and
/// averaging setting. Returns 1.0 (no smoothing) when `averaging` is 0.
///
/// The rate term keeps the settling time roughly constant in seconds.
pub fn smoothing_exponent(frame_rate: f32, averaging: f32) -> f32 {
    let rate = if frame_rate.is_finite() {
        frame_rate.max(MIN_FRAME_RATE)
    } else {
        DEFAULT_FRAME_RATE
    };
    let averaging = clamp_averaging(averaging);
    rate.powf(RATE_EXPONENT * averaging)
        .powf(GAMMA)
        .clamp(f32::MIN_POSITIVE, 1.0)
}

pub fn clamp_averaging(value: f32) -> f32 {
    let value = if value.is_finite() {
        value
    } else {
        DEFAULT_AVERAGING
    };
    value.clamp(MIN_AVERAGING, MAX_AVERAGING)
}

/// Exponential smoother working on the ratio of new to previous power, so
/// equal steps in dB decay at equal speed regardless of level.
#[derive(Clone, Default)]
pub struct SpectrumSmoother {
    values: Vec<f32>,
}

impl SpectrumSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `raw` into the smoothed spectrum. When `valid` is false, or the
    /// frame length changed, the state is reseeded from `raw`.
    pub fn update(&mut self, raw: &[f32], exponent: f32, valid: bool) {
        if !valid || self.values.len() != raw.len() || exponent >= 1.0 {
            self.values.clear();
            self.values.extend_from_slice(raw);
            return;
        }

        for (iir, &sample) in self.values.iter_mut().zip(raw) {
            *iir *= (sample / *iir).powf(exponent);
        }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl fmt::Debug for SpectrumSmoother {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectrumSmoother")
            .field("bins", &self.values.len())
            .finish()
    }
}
