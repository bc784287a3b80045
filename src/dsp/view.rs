//! Frequency geometry of the visible span and the dB ranges of both panes.

use crate::util::db::power_to_db;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Widest plot the column buffers are sized for.
pub const MAX_SCREEN_WIDTH: usize = 16_384;

pub const MIN_DB: f32 = -160.0;
pub const MAX_DB: f32 = 30.0;
pub const MIN_DB_RANGE: f32 = 2.0;

pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 96_000.0;
pub const DEFAULT_PLOT_RANGE: DbRange = DbRange {
    min_db: -120.0,
    max_db: -20.0,
};
pub const DEFAULT_WATERFALL_RANGE: DbRange = DbRange {
    min_db: -110.0,
    max_db: -30.0,
};

// zooming in stops once a quarter of the FFT is on screen
const MAX_ZOOM_FFT_DIVISOR: f64 = 4.0;

/// Lower and upper display limits of a pane, in dB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DbRange {
    pub min_db: f32,
    pub max_db: f32,
}

impl DbRange {
    /// Returns `None` when either limit lies outside [`MIN_DB`, `MAX_DB`] or the
    /// range is narrower than [`MIN_DB_RANGE`].
    pub fn new(min_db: f32, max_db: f32) -> Option<Self> {
        let range = Self { min_db, max_db };
        range.is_valid().then_some(range)
    }

    pub fn is_valid(&self) -> bool {
        let in_bounds = |db: f32| db.is_finite() && (MIN_DB..=MAX_DB).contains(&db);
        in_bounds(self.min_db) && in_bounds(self.max_db) && self.max_db >= self.min_db + MIN_DB_RANGE
    }

    pub fn span(&self) -> f32 {
        (self.max_db - self.min_db).abs()
    }
}

impl Default for DbRange {
    fn default() -> Self {
        DEFAULT_PLOT_RANGE
    }
}

/// Linear mapping from power to a vertical pixel offset, 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayScale {
    pub max_db: f32,
    pub gain: f32,
    pub height: f32,
}

impl DisplayScale {
    pub fn new(range: DbRange, height: usize) -> Self {
        let height = height as f32;
        let gain = if height > 0.0 {
            height / range.span()
        } else {
            0.0
        };
        Self {
            max_db: range.max_db,
            gain,
            height,
        }
    }

    #[inline]
    pub fn y_for(&self, power: f32) -> f32 {
        (self.gain * (self.max_db - power_to_db(power))).clamp(0.0, self.height)
    }
}

/// Tuning and zoom state of the horizontal axis.
///
/// All frequencies are in Hz. `fft_center_hz` is the offset of the visible
/// span's midpoint from the tuned center frequency.
#[derive(Clone, Copy, PartialEq)]
pub struct ViewState {
    sample_rate_hz: f64,
    center_freq_hz: i64,
    fft_center_hz: i64,
    span_hz: f64,
    width: usize,
}

impl ViewState {
    pub fn new(sample_rate_hz: f64, width: usize) -> Self {
        let sample_rate_hz = sanitize_rate(sample_rate_hz);
        Self {
            sample_rate_hz,
            center_freq_hz: 0,
            fft_center_hz: 0,
            span_hz: sample_rate_hz,
            width: width.min(MAX_SCREEN_WIDTH),
        }
    }

    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    pub fn center_freq_hz(&self) -> i64 {
        self.center_freq_hz
    }

    pub fn fft_center_hz(&self) -> i64 {
        self.fft_center_hz
    }

    pub fn span_hz(&self) -> f64 {
        self.span_hz
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn zoom_level(&self) -> f64 {
        self.sample_rate_hz / self.span_hz
    }

    /// Changing the sample rate resets the span to the full bandwidth.
    pub fn set_sample_rate(&mut self, sample_rate_hz: f64) {
        self.sample_rate_hz = sanitize_rate(sample_rate_hz);
        self.span_hz = self.sample_rate_hz;
        self.set_fft_center(self.fft_center_hz);
    }

    pub fn set_center_freq(&mut self, freq_hz: i64) {
        self.center_freq_hz = freq_hz;
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width.min(MAX_SCREEN_WIDTH);
    }

    pub fn set_span(&mut self, span_hz: f64) {
        if span_hz.is_finite() && span_hz > 0.0 {
            self.span_hz = span_hz.min(self.sample_rate_hz);
        }
        self.set_fft_center(self.fft_center_hz);
    }

    /// Pans the view, keeping the span within the sampled bandwidth.
    pub fn set_fft_center(&mut self, offset_hz: i64) {
        let limit = (((self.sample_rate_hz - self.span_hz) / 2.0) as i64 - 1).max(0);
        self.fft_center_hz = offset_hz.clamp(-limit, limit);
    }

    pub fn reset_zoom(&mut self) {
        self.span_hz = self.sample_rate_hz;
        self.fft_center_hz = 0;
    }

    fn start_freq(&self) -> f64 {
        self.center_freq_hz as f64 + self.fft_center_hz as f64 - self.span_hz / 2.0
    }

    pub fn x_from_freq(&self, freq_hz: i64) -> i64 {
        (self.width as f64 * (freq_hz as f64 - self.start_freq()) / self.span_hz).round() as i64
    }

    pub fn freq_from_x(&self, x: i64) -> i64 {
        let ratio = if self.width > 0 {
            x as f64 / self.width as f64
        } else {
            0.0
        };
        (self.start_freq() + ratio * self.span_hz).round() as i64
    }

    /// Multiplies the span by `step` while keeping the frequency under column
    /// `x` fixed. Returns the new zoom level, or `None` when the step would go
    /// past full bandwidth or past `fft_size / 4` bins on screen.
    pub fn zoom_step(&mut self, step: f64, x: i64, fft_size: usize) -> Option<f64> {
        if !step.is_finite() || step <= 0.0 {
            return None;
        }

        if fft_size != 0 {
            let current = self.zoom_level();
            let max_zoom = fft_size as f64 / MAX_ZOOM_FFT_DIVISOR;
            if (step >= 1.0 && current <= 1.0) || (step < 1.0 && current >= max_zoom) {
                return None;
            }
        }

        let new_span = (self.span_hz * step).min(self.sample_rate_hz);
        let offset = (self.freq_from_x(x) - self.center_freq_hz - self.fft_center_hz) as f64;
        let new_center = self.fft_center_hz as f64 + offset * (1.0 - step);

        let max_limit = self.sample_rate_hz / 2.0;
        let min_limit = -max_limit;
        let mut f_max = new_center + new_span / 2.0;
        let mut f_min = new_center - new_span / 2.0;
        if f_min < min_limit {
            f_min = min_limit;
            f_max = f_min + new_span;
        }
        if f_max > max_limit {
            f_max = max_limit;
            f_min = f_max - new_span;
        }

        let mut span = (f_max - f_min).round().max(2.0) as i64;
        if span & 1 == 1 {
            span -= 1;
        }

        self.span_hz = span as f64;
        self.set_fft_center(((f_max + f_min) / 2.0).round() as i64);
        Some(self.zoom_level())
    }

    /// Zooms to an absolute level around the middle of the plot.
    pub fn zoom_to(&mut self, level: f64, fft_size: usize) -> Option<f64> {
        if !level.is_finite() || level <= 0.0 {
            return None;
        }
        let step = self.zoom_level() / level;
        self.zoom_step(step, (self.width / 2) as i64, fft_size)
    }
}

impl fmt::Debug for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewState")
            .field("center_freq_hz", &self.center_freq_hz)
            .field("fft_center_hz", &self.fft_center_hz)
            .field("span_hz", &self.span_hz)
            .field("width", &self.width)
            .finish()
    }
}

fn sanitize_rate(rate: f64) -> f64 {
    if rate.is_finite() && rate > 0.0 {
        rate
    } else {
        DEFAULT_SAMPLE_RATE_HZ
    }
}

/// Placement of FFT bins on the pixel columns of the current view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinMapping {
    pub fft_size: usize,
    pub width: usize,
    /// Fractional bin shown at column 0.
    pub start_bin_d: f64,
    pub start_bin: usize,
    /// Bins covered by the visible span.
    pub num_bins: usize,
    pub min_bin: usize,
    pub max_bin: usize,
    /// Columns per bin.
    pub x_scale: f64,
    pub x_min: usize,
    pub x_max: usize,
}

impl BinMapping {
    /// Returns `None` for an empty frame, a zero-width view or a degenerate span.
    pub fn new(fft_size: usize, view: &ViewState) -> Option<Self> {
        let width = view.width();
        if fft_size < 2 || width == 0 || view.span_hz() <= 0.0 {
            return None;
        }

        let n = fft_size as f64;
        let fs = view.sample_rate_hz();
        let x_scale = fs * width as f64 / n / view.span_hz();
        let start_freq = view.fft_center_hz() as f64 - view.span_hz() / 2.0;
        let start_bin_d = start_freq * n / fs + n / 2.0;
        let start_bin = (start_bin_d.round().max(0.0) as usize).min(fft_size - 1);
        let num_bins = (view.span_hz() * n / fs).ceil() as usize;
        let end_bin = start_bin + num_bins;
        let min_bin = start_bin.max(1);
        let max_bin = (end_bin + 1).min(fft_size - 1);
        let x_min = ((min_bin - start_bin) as f64 * x_scale).round() as usize;
        let x_max = (((max_bin.saturating_sub(start_bin)) as f64 * x_scale).round() as usize)
            .min(width);

        Some(Self {
            fft_size,
            width,
            start_bin_d,
            start_bin,
            num_bins,
            min_bin,
            max_bin,
            x_scale,
            x_min: x_min.min(x_max),
            x_max,
        })
    }

    /// At least one bin per column: bins are folded into columns.
    pub fn is_oversampled(&self) -> bool {
        self.num_bins >= self.width
    }

    /// Fractional column of bin `bin`.
    #[inline]
    pub fn column_of_bin(&self, bin: usize) -> f64 {
        (bin as f64 - self.start_bin as f64) * self.x_scale
    }

    /// Nearest bin for column `x`, clamped to the frame.
    #[inline]
    pub fn bin_of_column(&self, x: usize) -> usize {
        let bin = (x as f64 / self.x_scale + self.start_bin_d).round();
        (bin.max(0.0) as usize).min(self.fft_size - 1)
    }
}
