//! Vertical density histogram of the visible spectrum.
//!
//! Each column owns up to [`MAX_HISTOGRAM_BINS`] level bins spanning the plot
//! range. Every visible sample is splatted onto the two nearest columns and the
//! two nearest level bins, then the grid is smoothed over time.

use super::view::{BinMapping, DbRange};
use crate::util::db::power_to_db;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const MAX_HISTOGRAM_BINS: usize = 128;
pub const MIN_HISTOGRAM_BINS: usize = 32;

// level bins per 2048 visible FFT bins
const BINS_PER_2048_FFT_BINS: f64 = 32.0;
const WEIGHT_SCALE: f32 = 1.0e7;
const DECAY_RATE: f32 = 4.0;
// normalization maximum follows the grid with a 5 Hz time constant
const MAX_TRACK_RATE: f32 = 5.0;
const COLOR_SPAN: f32 = 255.0 * 0.7;
const COLOR_OFFSET: i32 = 65;

/// Attack behavior of the per-cell smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistogramResponse {
    /// New density is added in full.
    #[default]
    Fast,
    /// New density is scaled down with the averaging setting.
    Slow,
}

/// Number of level bins shown for `visible_bins` FFT bins in the span.
pub fn bins_displayed(visible_bins: usize) -> usize {
    let scaled = (BINS_PER_2048_FFT_BINS * visible_bins as f64 / 2048.0).round() as usize;
    scaled.clamp(MIN_HISTOGRAM_BINS, MAX_HISTOGRAM_BINS)
}

/// Read-only view of the smoothed grid.
#[derive(Debug, Clone, Default)]
pub struct HistogramSnapshot {
    /// Column-major cells, `MAX_HISTOGRAM_BINS` per column. Shared with the
    /// accumulator until the grid is smoothed again.
    pub cells: Arc<[f32]>,
    pub width: usize,
    pub bins: usize,
    pub max: f32,
}

impl HistogramSnapshot {
    pub fn cell(&self, x: usize, bin: usize) -> f32 {
        if x >= self.width || bin >= self.bins {
            return 0.0;
        }
        self.cells[x * MAX_HISTOGRAM_BINS + bin]
    }

    /// Color-table index of a cell, or `None` when the cell is empty enough to
    /// stay transparent. Bin 0 is the top of the plot.
    pub fn color_index(&self, x: usize, bin: usize) -> Option<u8> {
        let index = (self.cell(x, bin) / self.max * COLOR_SPAN).round() as i32;
        (index > 0).then(|| (index + COLOR_OFFSET).clamp(0, u8::MAX as i32) as u8)
    }

    /// Max and average traces are only drawn on top of a dense grid.
    pub fn shows_highlights(&self) -> bool {
        self.bins >= MAX_HISTOGRAM_BINS / 2
    }
}

pub struct HistogramAccumulator {
    width: usize,
    bins: usize,
    frame: Vec<f32>,
    smoothed: Vec<f32>,
    published: Arc<[f32]>,
    smoothed_max: f32,
}

impl HistogramAccumulator {
    pub fn new() -> Self {
        Self {
            width: 0,
            bins: MIN_HISTOGRAM_BINS,
            frame: Vec::new(),
            smoothed: Vec::new(),
            published: Arc::default(),
            smoothed_max: f32::MIN_POSITIVE,
        }
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    #[inline]
    fn index(x: usize, bin: usize) -> usize {
        x * MAX_HISTOGRAM_BINS + bin
    }

    fn resize(&mut self, width: usize) {
        if self.width != width {
            self.width = width;
            self.frame.resize(width * MAX_HISTOGRAM_BINS, 0.0);
            self.smoothed.resize(width * MAX_HISTOGRAM_BINS, 0.0);
            self.publish();
        }
    }

    /// Rebuilds this frame's density grid from the raw spectrum.
    ///
    /// `sampled` holds the per-column raw values used when the span has fewer
    /// bins than columns. Returns the total weight deposited.
    pub fn accumulate(
        &mut self,
        raw: &[f32],
        sampled: &[f32],
        mapping: &BinMapping,
        range: DbRange,
        frame_rate: f32,
    ) -> f32 {
        self.resize(mapping.width);
        self.frame.fill(0.0);
        if raw.len() != mapping.fft_size || mapping.width == 0 {
            return 0.0;
        }

        let bins = bins_displayed(mapping.num_bins);
        self.bins = bins;
        let frame_time = 1.0 / frame_rate.max(1.0);
        let weight = WEIGHT_SCALE * frame_time / bins as f32 / mapping.fft_size as f32;
        let gain = bins as f32 / range.span();
        let level = |power: f32| gain * (range.max_db - power_to_db(power));
        let mut deposited = 0usize;

        if mapping.is_oversampled() {
            let last_column = mapping.width - 1;
            for bin in mapping.min_bin..=mapping.max_bin {
                let x_d = mapping.column_of_bin(bin) as f32;
                let bin_d = level(raw[bin]);
                if !(0.0..bins as f32).contains(&bin_d) {
                    continue;
                }

                let left = ((x_d - 0.5).max(0.0) as usize).min(last_column);
                let right = (left + 1).min(last_column);
                let (low, high) = level_pair(bin_d, bins);
                let w_h = ((x_d - left as f32) / 2.0).clamp(0.0, 1.0);
                let w_v = (bin_d - low as f32) / 2.0;

                self.frame[Self::index(left, low)] += (1.0 - w_v) * (1.0 - w_h) * weight;
                self.frame[Self::index(left, high)] += w_v * (1.0 - w_h) * weight;
                self.frame[Self::index(right, low)] += (1.0 - w_v) * w_h * weight;
                self.frame[Self::index(right, high)] += w_v * w_h * weight;
                deposited += 1;
            }
        } else {
            for x in mapping.x_min..mapping.x_max.min(sampled.len()) {
                let bin_d = level(sampled[x]);
                if !(0.0..bins as f32).contains(&bin_d) {
                    continue;
                }

                let (low, high) = level_pair(bin_d, bins);
                let w_v = (bin_d - low as f32) / 2.0;
                self.frame[Self::index(x, low)] += (1.0 - w_v) * weight;
                self.frame[Self::index(x, high)] += w_v * weight;
                deposited += 1;
            }
        }

        deposited as f32 * weight
    }

    /// Folds the current frame into the smoothed grid over `x_min..x_max`.
    /// An invalid grid is replaced by the frame outright.
    pub fn smooth(
        &mut self,
        x_range: std::ops::Range<usize>,
        averaging: f32,
        frame_rate: f32,
        response: HistogramResponse,
        valid: bool,
    ) {
        let frame_time = 1.0 / frame_rate.max(1.0);
        let a = averaging.clamp(0.0, 1.0);
        let attack = match response {
            HistogramResponse::Fast => 1.0,
            HistogramResponse::Slow => 1.0 - a * frame_time,
        };
        let decay = 1.0 - a.powf(DECAY_RATE * frame_time);

        let mut grid_max = 0.0_f32;
        for x in x_range.start..x_range.end.min(self.width) {
            for bin in 0..self.bins {
                let idx = Self::index(x, bin);
                let previous = self.smoothed[idx];
                let fresh = self.frame[idx];
                let value = if valid {
                    previous + attack * fresh - decay * previous
                } else {
                    fresh
                };
                self.smoothed[idx] = value.max(0.0);
                grid_max = grid_max.max(value);
            }
        }

        let alpha = (MAX_TRACK_RATE * frame_time).min(1.0);
        self.smoothed_max = self.smoothed_max * (1.0 - alpha) + grid_max * alpha;
        self.publish();
    }

    fn publish(&mut self) {
        self.published = Arc::from(self.smoothed.as_slice());
    }

    pub fn smoothed_max(&self) -> f32 {
        self.smoothed_max
    }

    pub fn reset_max(&mut self) {
        self.smoothed_max = f32::MIN_POSITIVE;
    }

    pub fn frame_cell(&self, x: usize, bin: usize) -> f32 {
        if x >= self.width || bin >= MAX_HISTOGRAM_BINS {
            return 0.0;
        }
        self.frame[Self::index(x, bin)]
    }

    pub fn snapshot(&self) -> HistogramSnapshot {
        HistogramSnapshot {
            cells: Arc::clone(&self.published),
            width: self.width,
            bins: self.bins,
            max: self.smoothed_max,
        }
    }

    pub fn clear(&mut self) {
        self.frame.fill(0.0);
        self.smoothed.fill(0.0);
        self.publish();
        self.reset_max();
    }
}

impl Default for HistogramAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HistogramAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistogramAccumulator")
            .field("width", &self.width)
            .field("bins", &self.bins)
            .field("smoothed_max", &self.smoothed_max)
            .finish()
    }
}

#[inline]
fn level_pair(bin_d: f32, bins: usize) -> (usize, usize) {
    let low = ((bin_d - 0.5).max(0.0) as usize).min(bins - 1);
    (low, (low + 1).min(bins - 1))
}
