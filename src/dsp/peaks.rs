//! Two-scale peak detection over the aggregated column buffers.

use super::view::DisplayScale;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;
use std::time::{Duration, Instant};

pub const PEAK_WINDOW_HALF_WIDTH: usize = 10;
pub const PEAK_UPDATE_PERIOD: Duration = Duration::from_millis(100);
pub const PEAK_CLICK_MAX_H_DISTANCE: usize = 10;
pub const PEAK_CLICK_MAX_V_DISTANCE: f32 = 20.0;

const WIDE_WINDOW_FACTOR: usize = 5;
const MEAN_RATIO: f32 = 2.0;
const FLOOR_RATIO: f32 = 4.0;

/// Detected peaks keyed by column, valued by display y.
pub type PeakSet = BTreeMap<usize, f32>;

pub struct PeakDetector {
    smoothed: Vec<f32>,
    peaks: PeakSet,
    last_run: Option<Instant>,
}

impl PeakDetector {
    pub fn new() -> Self {
        Self {
            smoothed: Vec::new(),
            peaks: PeakSet::new(),
            last_run: None,
        }
    }

    pub fn peaks(&self) -> &PeakSet {
        &self.peaks
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.last_run
            .is_none_or(|last| now.saturating_duration_since(last) > PEAK_UPDATE_PERIOD)
    }

    /// Rebuilds the peak set from `source` over `columns` when the update
    /// period has elapsed or `force` is set. Returns whether detection ran.
    pub fn detect(
        &mut self,
        source: &[f32],
        columns: Range<usize>,
        scale: &DisplayScale,
        now: Instant,
        force: bool,
    ) -> bool {
        if !force && !self.is_due(now) {
            return false;
        }
        self.last_run = Some(now);
        self.peaks.clear();

        let columns = columns.start.min(source.len())..columns.end.min(source.len());
        self.smoothed.clear();
        self.smoothed.extend_from_slice(source);

        let pw = PEAK_WINDOW_HALF_WIDTH;
        for ix in window_centers(&columns, pw) {
            let stats = WindowStats::over(&source[ix - pw..=ix + pw], source[ix]);
            let mean = stats.sum / (2 * pw + 1) as f32;
            self.smoothed[ix] = mean;
            if stats.is_peak(source[ix], mean) {
                self.peaks.insert(ix, scale.y_for(source[ix]));
            }
        }

        let pw2 = pw * WIDE_WINDOW_FACTOR;
        for ix in window_centers(&columns, pw2) {
            let value = self.smoothed[ix];
            let stats = WindowStats::over(&self.smoothed[ix - pw2..=ix + pw2], value);
            let mean = stats.sum / (2 * pw2) as f32;
            if !stats.is_peak(value, mean) {
                continue;
            }
            let has_narrow_neighbour = self.peaks.range(ix - pw..=ix + pw).next().is_some();
            if !has_narrow_neighbour {
                self.peaks.insert(ix, scale.y_for(value));
            }
        }

        true
    }

    pub fn nearest_peak(&self, x: usize, y: f32) -> Option<usize> {
        nearest_peak(&self.peaks, x, y)
    }

    pub fn clear(&mut self) {
        self.peaks.clear();
        self.last_run = None;
    }
}

impl Default for PeakDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PeakDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeakDetector")
            .field("peaks", &self.peaks.len())
            .field("last_run", &self.last_run)
            .finish()
    }
}

/// Closest peak to a click at (`x`, `y`) within the snap distances.
pub fn nearest_peak(peaks: &PeakSet, x: usize, y: f32) -> Option<usize> {
    let lo = x.saturating_sub(PEAK_CLICK_MAX_H_DISTANCE);
    let hi = x.saturating_add(PEAK_CLICK_MAX_H_DISTANCE);

    peaks
        .range(lo..=hi)
        .filter(|&(_, &py)| (py - y).abs() <= PEAK_CLICK_MAX_V_DISTANCE)
        .map(|(&px, &py)| {
            let dx = px as f32 - x as f32;
            let dy = py - y;
            (px, dx * dx + dy * dy)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(px, _)| px)
}

fn window_centers(columns: &Range<usize>, half_width: usize) -> Range<usize> {
    let start = columns.start + half_width;
    let end = columns.end.saturating_sub(half_width).max(start);
    start..end
}

struct WindowStats {
    sum: f32,
    min: f32,
    max: f32,
}

impl WindowStats {
    fn over(window: &[f32], center: f32) -> Self {
        let mut stats = Self {
            sum: 0.0,
            min: center,
            max: 0.0,
        };
        for &value in window {
            stats.sum += value;
            stats.min = stats.min.min(value);
            stats.max = stats.max.max(value);
        }
        stats
    }

    fn is_peak(&self, center: f32, mean: f32) -> bool {
        center == self.max && center > MEAN_RATIO * mean && center > FLOOR_RATIO * self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::view::DbRange;

    fn scale() -> DisplayScale {
        DisplayScale::new(DbRange::new(-100.0, 0.0).expect("range"), 200)
    }

    #[test]
    fn single_spike_is_reported_once() {
        let mut source = vec![1.0e-6_f32; 300];
        source[100] = 1.0e-5;
        let mut detector = PeakDetector::new();
        assert!(detector.detect(&source, 0..300, &scale(), Instant::now(), false));

        let peaks: Vec<usize> = detector.peaks().keys().copied().collect();
        assert_eq!(peaks, vec![100]);
        assert!((detector.peaks()[&100] - 100.0).abs() < 0.01);
    }

    #[test]
    fn broad_bump_is_found_by_wide_pass() {
        let source: Vec<f32> = (0..300)
            .map(|x| {
                let d = x as f32 - 150.0;
                1.0e-6 * (1.0 + 100.0 * (-d * d / 128.0).exp())
            })
            .collect();
        let mut detector = PeakDetector::new();
        detector.detect(&source, 0..300, &scale(), Instant::now(), true);

        let peaks: Vec<usize> = detector.peaks().keys().copied().collect();
        assert_eq!(peaks, vec![150]);
    }

    #[test]
    fn flat_source_has_no_peaks() {
        let source = vec![1.0e-6_f32; 200];
        let mut detector = PeakDetector::new();
        detector.detect(&source, 0..200, &scale(), Instant::now(), true);
        assert!(detector.peaks().is_empty());
    }

    #[test]
    fn detection_is_rate_limited_unless_forced() {
        let mut source = vec![1.0e-6_f32; 100];
        source[50] = 1.0e-4;
        let start = Instant::now();
        let mut detector = PeakDetector::new();
        assert!(detector.detect(&source, 0..100, &scale(), start, false));
        assert_eq!(detector.peaks().len(), 1);

        source[50] = 1.0e-6;
        let soon = start + Duration::from_millis(50);
        assert!(!detector.detect(&source, 0..100, &scale(), soon, false));
        assert_eq!(detector.peaks().len(), 1);

        assert!(detector.detect(&source, 0..100, &scale(), soon, true));
        assert!(detector.peaks().is_empty());

        let later = soon + Duration::from_millis(101);
        assert!(detector.is_due(later));
    }

    #[test]
    fn narrow_ranges_are_skipped() {
        let source = vec![1.0_f32; 15];
        let mut detector = PeakDetector::new();
        assert!(detector.detect(&source, 0..15, &scale(), Instant::now(), true));
        assert!(detector.peaks().is_empty());
    }

    #[test]
    fn nearest_peak_respects_snap_window() {
        let mut peaks = PeakSet::new();
        peaks.insert(100, 50.0);
        peaks.insert(120, 80.0);

        assert_eq!(nearest_peak(&peaks, 105, 55.0), Some(100));
        assert_eq!(nearest_peak(&peaks, 115, 75.0), Some(120));
        assert_eq!(nearest_peak(&peaks, 105, 90.0), None);
        assert_eq!(nearest_peak(&peaks, 40, 50.0), None);
        assert_eq!(nearest_peak(&peaks, 3, 50.0), None);
    }

    #[test]
    fn clicks_at_the_far_edge_do_not_overflow() {
        let mut peaks = PeakSet::new();
        peaks.insert(usize::MAX - 4, 10.0);
        peaks.insert(200, 10.0);

        assert_eq!(nearest_peak(&peaks, usize::MAX, 12.0), Some(usize::MAX - 4));
        assert_eq!(nearest_peak(&peaks, usize::MAX - 100, 12.0), None);
    }
}
