//! Folding of FFT bins into pixel columns.
//!
//! When the visible span holds at least one bin per column, every bin is
//! assigned to its nearest column and the column keeps the max and mean of its
//! bins. Otherwise each column samples the nearest bin. Max and min hold are
//! updated in the same pass.

use super::view::BinMapping;
use crate::util::db::COLUMN_FLOOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the spectrum trace is drawn. Also selects the hold references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotMode {
    #[default]
    Max,
    Average,
    Filled,
    Histogram,
}

impl PlotMode {
    fn max_hold_tracks_average(self) -> bool {
        self == PlotMode::Average
    }

    fn min_hold_tracks_max(self) -> bool {
        self == PlotMode::Max
    }
}

/// Whether the hold buffers carry data from an earlier pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoldValidity {
    pub max: bool,
    pub min: bool,
}

/// Per-column statistics of one frame, indexed by x.
#[derive(Debug, Clone, Default)]
pub struct ColumnBuffers {
    pub max_raw: Vec<f32>,
    pub avg_raw: Vec<f32>,
    pub max_iir: Vec<f32>,
    pub avg_iir: Vec<f32>,
    pub max_hold: Vec<f32>,
    pub min_hold: Vec<f32>,
}

impl ColumnBuffers {
    fn resize(&mut self, width: usize) {
        for buffer in [
            &mut self.max_raw,
            &mut self.avg_raw,
            &mut self.max_iir,
            &mut self.avg_iir,
            &mut self.max_hold,
            &mut self.min_hold,
        ] {
            buffer.resize(width, COLUMN_FLOOR);
        }
    }

    pub fn width(&self) -> usize {
        self.max_raw.len()
    }
}

#[derive(Clone, Copy)]
struct ColumnAccumulator {
    max_raw: f32,
    sum_raw: f32,
    max_iir: f32,
    sum_iir: f32,
    count: u32,
}

impl ColumnAccumulator {
    const EMPTY: Self = Self {
        max_raw: 0.0,
        sum_raw: 0.0,
        max_iir: 0.0,
        sum_iir: 0.0,
        count: 0,
    };

    #[inline]
    fn push(&mut self, raw: f32, iir: f32) {
        self.max_raw = self.max_raw.max(raw);
        self.sum_raw += raw;
        self.max_iir = self.max_iir.max(iir);
        self.sum_iir += iir;
        self.count += 1;
    }
}

#[derive(Default)]
pub struct BinAggregator {
    columns: ColumnBuffers,
}

impl BinAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &ColumnBuffers {
        &self.columns
    }

    /// Reduces `raw` and `iir` (same length as the mapped frame) into the
    /// column buffers. Columns outside `mapping.x_min..mapping.x_max` keep
    /// their previous contents.
    pub fn aggregate(
        &mut self,
        raw: &[f32],
        iir: &[f32],
        mapping: &BinMapping,
        mode: PlotMode,
        holds: HoldValidity,
    ) {
        debug_assert_eq!(raw.len(), iir.len());
        if raw.len() != mapping.fft_size || iir.len() != mapping.fft_size {
            return;
        }

        self.columns.resize(mapping.width);

        if mapping.is_oversampled() {
            self.fold_bins(raw, iir, mapping, mode, holds);
        } else {
            self.sample_bins(raw, iir, mapping, holds);
        }
    }

    fn fold_bins(
        &mut self,
        raw: &[f32],
        iir: &[f32],
        mapping: &BinMapping,
        mode: PlotMode,
        holds: HoldValidity,
    ) {
        let mut current: Option<usize> = None;
        let mut acc = ColumnAccumulator::EMPTY;

        for bin in mapping.min_bin..=mapping.max_bin {
            let x = mapping.column_of_bin(bin).round() as usize;
            if current != Some(x) {
                if let Some(column) = current {
                    self.flush(column, &acc, mode, holds);
                }
                current = Some(x);
                acc = ColumnAccumulator::EMPTY;
            }
            acc.push(raw[bin], iir[bin]);
        }

        if let Some(column) = current {
            self.flush(column, &acc, mode, holds);
        }
    }

    fn flush(&mut self, x: usize, acc: &ColumnAccumulator, mode: PlotMode, holds: HoldValidity) {
        if x >= self.columns.width() || acc.count == 0 {
            return;
        }

        let count = acc.count as f32;
        let max_raw = acc.max_raw.max(COLUMN_FLOOR);
        let avg_raw = (acc.sum_raw / count).clamp(COLUMN_FLOOR, max_raw);
        let max_iir = acc.max_iir.max(COLUMN_FLOOR);
        let avg_iir = (acc.sum_iir / count).clamp(COLUMN_FLOOR, max_iir);

        let cols = &mut self.columns;
        cols.max_raw[x] = max_raw;
        cols.avg_raw[x] = avg_raw;
        cols.max_iir[x] = max_iir;
        cols.avg_iir[x] = avg_iir;

        let max_ref = if mode.max_hold_tracks_average() {
            avg_iir
        } else {
            max_iir
        };
        let min_ref = if mode.min_hold_tracks_max() {
            max_iir
        } else {
            avg_iir
        };
        self.update_holds(x, max_ref, min_ref, holds);
    }

    fn sample_bins(&mut self, raw: &[f32], iir: &[f32], mapping: &BinMapping, holds: HoldValidity) {
        for x in mapping.x_min..mapping.x_max {
            let bin = mapping.bin_of_column(x);
            let value = raw[bin].max(COLUMN_FLOOR);
            let smoothed = iir[bin].max(COLUMN_FLOOR);

            let cols = &mut self.columns;
            cols.max_raw[x] = value;
            cols.avg_raw[x] = value;
            cols.max_iir[x] = smoothed;
            cols.avg_iir[x] = smoothed;
            self.update_holds(x, smoothed, smoothed, holds);
        }
    }

    #[inline]
    fn update_holds(&mut self, x: usize, max_ref: f32, min_ref: f32, holds: HoldValidity) {
        let cols = &mut self.columns;
        cols.max_hold[x] = if holds.max {
            cols.max_hold[x].max(max_ref)
        } else {
            max_ref
        };
        cols.min_hold[x] = if holds.min {
            cols.min_hold[x].min(min_ref)
        } else {
            min_ref
        };
    }
}

impl fmt::Debug for BinAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinAggregator")
            .field("width", &self.columns.width())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::view::ViewState;

    const ALL_VALID: HoldValidity = HoldValidity {
        max: true,
        min: true,
    };

    fn mapping(fft_size: usize, width: usize) -> BinMapping {
        let view = ViewState::new(96_000.0, width);
        BinMapping::new(fft_size, &view).expect("mapping")
    }

    #[test]
    fn undersampled_columns_sample_the_nearest_bin() {
        let raw: Vec<f32> = (0..1024).map(|i| 1.0 + i as f32).collect();
        let iir: Vec<f32> = raw.iter().map(|v| v * 0.5).collect();
        let map = mapping(1024, 2048);
        assert!(!map.is_oversampled());

        let mut aggregator = BinAggregator::new();
        aggregator.aggregate(&raw, &iir, &map, PlotMode::Max, HoldValidity::default());
        let cols = aggregator.columns();

        assert_eq!(map.x_min, 2);
        assert_eq!(map.x_max, 2046);
        for x in map.x_min..map.x_max {
            let bin = (x as f64 / 2.0).round() as usize;
            assert_eq!(cols.max_raw[x], raw[bin], "column {x}");
            assert_eq!(cols.avg_raw[x], raw[bin]);
            assert_eq!(cols.max_iir[x], iir[bin]);
            assert_eq!(cols.max_hold[x], iir[bin]);
        }
    }

    #[test]
    fn oversampled_columns_keep_max_and_mean() {
        let mut raw = vec![1.0_f32; 2048];
        raw[600] = 9.0;
        let map = mapping(2048, 1024);
        let mut aggregator = BinAggregator::new();
        aggregator.aggregate(&raw, &raw, &map, PlotMode::Max, HoldValidity::default());
        let cols = aggregator.columns();

        // bins 599 and 600 share column 300 at two bins per column
        assert_eq!(cols.max_raw[300], 9.0);
        assert!((cols.avg_raw[300] - 5.0).abs() < 1e-6);
        assert_eq!(cols.max_raw[299], 1.0);
        assert_eq!(cols.max_raw[301], 1.0);
    }

    #[test]
    fn zero_input_is_floored() {
        let raw = vec![0.0_f32; 512];
        let map = mapping(512, 256);
        let mut aggregator = BinAggregator::new();
        aggregator.aggregate(&raw, &raw, &map, PlotMode::Filled, HoldValidity::default());
        let cols = aggregator.columns();
        for x in map.x_min..map.x_max {
            assert_eq!(cols.max_raw[x], COLUMN_FLOOR);
            assert_eq!(cols.avg_iir[x], COLUMN_FLOOR);
        }
    }

    #[test]
    fn holds_follow_mode_references() {
        let map = mapping(256, 128);
        let mut raw = vec![1.0_f32; 256];
        raw[100] = 3.0;

        let mut aggregator = BinAggregator::new();
        aggregator.aggregate(&raw, &raw, &map, PlotMode::Max, HoldValidity::default());
        let cols = aggregator.columns();
        assert_eq!(cols.max_hold[50], 3.0);
        assert_eq!(cols.min_hold[50], 3.0);

        let mut aggregator = BinAggregator::new();
        aggregator.aggregate(&raw, &raw, &map, PlotMode::Average, HoldValidity::default());
        let cols = aggregator.columns();
        assert_eq!(cols.max_hold[50], 2.0);
        assert_eq!(cols.min_hold[50], 2.0);

        let mut aggregator = BinAggregator::new();
        aggregator.aggregate(&raw, &raw, &map, PlotMode::Filled, HoldValidity::default());
        let cols = aggregator.columns();
        assert_eq!(cols.max_hold[50], 3.0);
        assert_eq!(cols.min_hold[50], 2.0);
    }

    #[test]
    fn valid_holds_accumulate_extremes() {
        let map = mapping(256, 256);
        let mut aggregator = BinAggregator::new();

        aggregator.aggregate(&[4.0; 256], &[4.0; 256], &map, PlotMode::Max, HoldValidity::default());
        aggregator.aggregate(&[1.0; 256], &[1.0; 256], &map, PlotMode::Max, ALL_VALID);
        aggregator.aggregate(&[2.0; 256], &[2.0; 256], &map, PlotMode::Max, ALL_VALID);

        let cols = aggregator.columns();
        for x in map.x_min..map.x_max {
            assert_eq!(cols.max_hold[x], 4.0);
            assert_eq!(cols.min_hold[x], 1.0);
            assert!(cols.min_hold[x] <= cols.max_iir[x] && cols.max_iir[x] <= cols.max_hold[x]);
        }

        aggregator.aggregate(&[2.0; 256], &[2.0; 256], &map, PlotMode::Max, HoldValidity::default());
        assert_eq!(aggregator.columns().max_hold[10], 2.0);
    }

    #[test]
    fn mismatched_frame_is_ignored() {
        let map = mapping(256, 128);
        let mut aggregator = BinAggregator::new();
        aggregator.aggregate(&[1.0; 100], &[1.0; 100], &map, PlotMode::Max, ALL_VALID);
        assert_eq!(aggregator.columns().width(), 0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::dsp::view::ViewState;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn folded_columns_report_true_extremes(
            values in proptest::collection::vec(1.0e-6_f32..1.0, 256..2048),
            width in 16usize..256,
        ) {
            let view = ViewState::new(48_000.0, width);
            let map = BinMapping::new(values.len(), &view).expect("mapping");
            prop_assume!(map.is_oversampled());

            let mut aggregator = BinAggregator::new();
            aggregator.aggregate(&values, &values, &map, PlotMode::Max, HoldValidity::default());
            let cols = aggregator.columns();

            for x in map.x_min..map.x_max {
                let expected = (map.min_bin..=map.max_bin)
                    .filter(|&bin| map.column_of_bin(bin).round() as usize == x)
                    .map(|bin| values[bin])
                    .fold(f32::MIN, f32::max);
                prop_assert!(expected > f32::MIN, "column {} left unwritten", x);
                prop_assert_eq!(cols.max_raw[x], expected);
                prop_assert!(cols.max_raw[x] >= cols.avg_raw[x]);
                prop_assert!(cols.max_iir[x] >= cols.avg_iir[x]);
            }
        }
    }
}
