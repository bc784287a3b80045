//! Waterfall row cadence, multi-frame accumulation and color-mapped rows.
//!
//! With a configured span each row covers `span / height` milliseconds and
//! every frame in between is folded into a per-column accumulator. Rows are
//! scheduled against a fixed epoch so the cadence does not drift with frame
//! jitter. With no span (automatic mode) every frame becomes a row.

use super::colormap::{ColorTable, Rgb, TABLE_SIZE};
use super::view::DbRange;
use crate::util::db::power_to_db;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::time::{Duration, Instant};
use tracing::debug;

/// What a waterfall row shows when several frames fall into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterfallMode {
    /// Peak of the raw per-column maxima.
    #[default]
    Max,
    /// Mean of the raw per-column averages.
    Average,
    /// Mean of whatever the plot trace shows.
    Sync,
}

/// Row-shift RGB image; row 0 is the newest.
#[derive(Clone, Default)]
pub struct WaterfallImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl WaterfallImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    /// Moves every row down by one, drops the oldest and returns a cleared top row.
    fn push_row(&mut self) -> &mut [Rgb] {
        if self.height > 1 {
            let keep = (self.height - 1) * self.width;
            self.pixels.copy_within(0..keep, self.width);
        }
        let top = &mut self.pixels[..self.width];
        top.fill(Rgb::BLACK);
        top
    }

    /// Keeps the newest rows and stretches them to the new width.
    fn resize(&mut self, width: usize, height: usize) {
        if width == self.width && height == self.height {
            return;
        }

        let mut resized = WaterfallImage::new(width, height);
        if self.width > 0 && width > 0 {
            for y in 0..height.min(self.height) {
                let source = self.row(y);
                let target = &mut resized.pixels[y * width..(y + 1) * width];
                for (x, pixel) in target.iter_mut().enumerate() {
                    *pixel = source[x * self.width / width];
                }
            }
        }
        *self = resized;
    }
}

impl fmt::Debug for WaterfallImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaterfallImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

pub struct WaterfallEngine {
    image: WaterfallImage,
    accumulator: Vec<f32>,
    folded: u32,
    span_ms: u64,
    ms_per_row: f64,
    frame_rate: f32,
    epoch: Option<Instant>,
    rows_since_epoch: u64,
    last_row_at: Option<Instant>,
    valid_since: Option<Instant>,
    rows_emitted: u64,
}

impl WaterfallEngine {
    pub fn new(width: usize, height: usize, span_ms: u64, frame_rate: f32) -> Self {
        let mut engine = Self {
            image: WaterfallImage::new(width, height),
            accumulator: vec![0.0; width],
            folded: 0,
            span_ms,
            ms_per_row: 0.0,
            frame_rate: frame_rate.max(1.0),
            epoch: None,
            rows_since_epoch: 0,
            last_row_at: None,
            valid_since: None,
            rows_emitted: 0,
        };
        engine.update_row_duration();
        engine
    }

    pub fn image(&self) -> &WaterfallImage {
        &self.image
    }

    pub fn span_ms(&self) -> u64 {
        self.span_ms
    }

    /// Milliseconds per row in manual mode, 0 in automatic mode.
    pub fn ms_per_row(&self) -> f64 {
        self.ms_per_row
    }

    pub fn rows_emitted(&self) -> u64 {
        self.rows_emitted
    }

    /// Pending per-column accumulation since the last row.
    pub fn accumulated(&self) -> &[f32] {
        &self.accumulator
    }

    pub fn folded_frames(&self) -> u32 {
        self.folded
    }

    fn update_row_duration(&mut self) {
        self.ms_per_row = if self.span_ms > 0 && self.image.height() > 0 {
            self.span_ms as f64 / self.image.height() as f64
        } else {
            0.0
        };
    }

    pub fn set_span(&mut self, span_ms: u64) {
        self.span_ms = span_ms;
        self.update_row_duration();
        self.reset_timing(None);
        self.clear_accumulator();
        debug!(
            "[waterfall] span {span_ms} ms, {:.2} ms per row",
            self.ms_per_row
        );
    }

    /// Keeps the row cadence; rows before the next frame are marked stale.
    pub fn set_frame_rate(&mut self, frame_rate: f32) {
        self.frame_rate = frame_rate.max(1.0);
        self.valid_since = None;
        self.clear_accumulator();
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.image.resize(width, height);
        self.accumulator.clear();
        self.accumulator.resize(width, 0.0);
        self.folded = 0;
        self.update_row_duration();
        self.reset_timing(None);
    }

    /// Restarts row scheduling. With `None` the next processed frame becomes
    /// the epoch.
    pub fn reset_timing(&mut self, at: Option<Instant>) {
        self.epoch = at;
        self.rows_since_epoch = 0;
        self.valid_since = at;
    }

    pub fn clear_accumulator(&mut self) {
        self.accumulator.fill(0.0);
        self.folded = 0;
    }

    pub fn clear_image(&mut self) {
        self.image.clear();
    }

    /// Nominal duration of one row in milliseconds.
    pub fn time_resolution_ms(&self) -> f64 {
        if self.ms_per_row > 0.0 {
            self.ms_per_row
        } else {
            1000.0 / self.frame_rate as f64
        }
    }

    /// Capture time represented by `row`, counted from the newest row.
    pub fn time_of_row(&self, row: usize) -> Option<Instant> {
        let newest = self.last_row_at?;
        let micros = (row as f64 * self.time_resolution_ms() * 1000.0).round() as u64;
        let offset = Duration::from_micros(micros);
        newest.checked_sub(offset)
    }

    /// Whether `row` was produced after the last timing reset or frame-rate
    /// change.
    pub fn row_is_valid(&self, row: usize) -> bool {
        match (self.time_of_row(row), self.valid_since) {
            (Some(time), Some(since)) => time >= since,
            _ => false,
        }
    }

    /// Folds one frame of per-column power and emits a row when one is due.
    /// Returns whether a row was written.
    pub fn process(
        &mut self,
        source: &[f32],
        columns: Range<usize>,
        mode: WaterfallMode,
        now: Instant,
        range: DbRange,
        table: &ColorTable,
    ) -> bool {
        let width = self.image.width();
        if width == 0 || self.image.height() == 0 {
            return false;
        }
        let columns = columns.start.min(width)..columns.end.min(width).min(source.len());
        let epoch = *self.epoch.get_or_insert(now);
        self.valid_since.get_or_insert(now);

        let manual = self.ms_per_row > 0.0;
        if manual {
            let target = &mut self.accumulator[columns.clone()];
            if mode == WaterfallMode::Max {
                for (acc, &value) in target.iter_mut().zip(&source[columns.clone()]) {
                    *acc = acc.max(value);
                }
            } else {
                for (acc, &value) in target.iter_mut().zip(&source[columns.clone()]) {
                    *acc += value;
                }
            }
            self.folded += 1;

            let elapsed_ms = now.saturating_duration_since(epoch).as_secs_f64() * 1000.0;
            if elapsed_ms <= self.rows_since_epoch as f64 * self.ms_per_row {
                return false;
            }
        }
        self.rows_since_epoch += 1;

        let line_factor = if manual && mode != WaterfallMode::Max && self.folded > 0 {
            1.0 / self.folded as f32
        } else {
            1.0
        };
        let gain = TABLE_SIZE as f32 / range.span();
        let values: &[f32] = if manual { &self.accumulator } else { source };

        let row = self.image.push_row();
        for x in columns {
            let level = ((range.max_db - power_to_db(values[x] * line_factor)) * gain).round();
            let index = level.clamp(0.0, (TABLE_SIZE - 1) as f32) as u8;
            row[x] = table.color(u8::MAX - index);
        }

        if manual {
            self.clear_accumulator();
        }
        self.last_row_at = Some(now);
        self.rows_emitted += 1;
        true
    }
}

impl fmt::Debug for WaterfallEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaterfallEngine")
            .field("image", &self.image)
            .field("span_ms", &self.span_ms)
            .field("ms_per_row", &self.ms_per_row)
            .field("rows_emitted", &self.rows_emitted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::colormap::Colormap;
    use crate::util::db::db_to_power;

    fn range() -> DbRange {
        DbRange::new(-100.0, 0.0).expect("range")
    }

    fn gray() -> ColorTable {
        ColorTable::build(Colormap::WhiteHot)
    }

    #[test]
    fn rows_follow_configured_cadence() {
        // 1 s over 100 rows: one row every 10 ms, frames every 4 ms
        let mut engine = WaterfallEngine::new(8, 100, 1000, 250.0);
        let table = gray();
        let source = vec![db_to_power(-50.0); 8];
        let start = Instant::now();
        let frame = Duration::from_millis(4);

        let mut emitted_at = Vec::new();
        for n in 0..=500u32 {
            let now = start + frame * n;
            if engine.process(&source, 0..8, WaterfallMode::Average, now, range(), &table) {
                emitted_at.push(now);
            }
        }

        assert!((199..=201).contains(&emitted_at.len()), "{}", emitted_at.len());
        for pair in emitted_at.windows(2).skip(1) {
            let gap = pair[1] - pair[0];
            assert!(gap >= Duration::from_millis(6) && gap <= Duration::from_millis(14));
        }
    }

    #[test]
    fn frame_rate_jitter_keeps_cadence() {
        let mut engine = WaterfallEngine::new(8, 100, 1000, 250.0);
        let table = gray();
        let source = vec![db_to_power(-50.0); 8];
        let start = Instant::now();

        let mut rows = 0;
        for n in 0..=500u32 {
            engine.set_frame_rate(if n % 2 == 0 { 250.0 } else { 240.0 });
            let now = start + Duration::from_millis(4) * n;
            if engine.process(&source, 0..8, WaterfallMode::Average, now, range(), &table) {
                rows += 1;
            }
        }
        assert!((199..=201).contains(&rows), "{rows}");
    }

    #[test]
    fn frame_rate_change_clears_accumulator_and_marks_older_rows_stale() {
        let mut engine = WaterfallEngine::new(2, 50, 5_000, 10.0);
        let table = gray();
        let start = Instant::now();
        let source = [1.0e-6_f32; 2];

        engine.process(&source, 0..2, WaterfallMode::Max, start, range(), &table);
        let first = start + Duration::from_millis(50);
        assert!(engine.process(&source, 0..2, WaterfallMode::Max, first, range(), &table));
        let folded = start + Duration::from_millis(80);
        assert!(!engine.process(&source, 0..2, WaterfallMode::Max, folded, range(), &table));
        assert_eq!(engine.folded_frames(), 1);

        engine.set_frame_rate(20.0);
        assert_eq!(engine.folded_frames(), 0);
        assert_eq!(engine.accumulated(), &[0.0_f32; 2]);

        let second = start + Duration::from_millis(120);
        assert!(engine.process(&source, 0..2, WaterfallMode::Max, second, range(), &table));
        assert_eq!(engine.rows_emitted(), 2);
        assert!(engine.row_is_valid(0));
        assert!(!engine.row_is_valid(1));
    }

    #[test]
    fn max_mode_accumulates_true_maximum() {
        let mut engine = WaterfallEngine::new(4, 10, 10_000, 10.0);
        let table = gray();
        let start = Instant::now();
        let frames = [
            [1.0_f32, 5.0, 2.0, 0.5],
            [3.0_f32, 1.0, 2.5, 0.25],
            [2.0_f32, 4.0, 7.0, 0.125],
        ];
        // all at the epoch, so no row is due yet
        for frame in &frames {
            assert!(!engine.process(frame, 0..4, WaterfallMode::Max, start, range(), &table));
        }
        assert_eq!(engine.accumulated(), &[3.0_f32, 5.0, 7.0, 0.5]);
        assert_eq!(engine.folded_frames(), 3);
    }

    #[test]
    fn average_mode_divides_by_folded_frames() {
        let mut engine = WaterfallEngine::new(2, 10, 100, 10.0);
        let table = gray();
        let start = Instant::now();
        let loud = [db_to_power(-20.0); 2];
        let quiet = [db_to_power(-80.0); 2];

        engine.process(&loud, 0..2, WaterfallMode::Average, start, range(), &table);
        engine.process(&quiet, 0..2, WaterfallMode::Average, start, range(), &table);
        let emitted = engine.process(
            &quiet,
            0..2,
            WaterfallMode::Average,
            start + Duration::from_millis(5),
            range(),
            &table,
        );
        assert!(emitted);
        assert_eq!(engine.folded_frames(), 0);

        // mean power of one -20 dB and two -80 dB frames is ~-24.8 dB
        let mean = (db_to_power(-20.0) + 2.0 * db_to_power(-80.0)) / 3.0;
        let expected = ((0.0 - power_to_db(mean)) * 2.56).round() as u8;
        assert_eq!(engine.image().pixel(0, 0), Some(table.color(255 - expected)));
    }

    #[test]
    fn automatic_mode_emits_every_frame() {
        let mut engine = WaterfallEngine::new(4, 3, 0, 20.0);
        let table = gray();
        let start = Instant::now();
        let top = [1.0_f32; 4];
        let floor = [db_to_power(-100.0); 4];

        assert!(engine.process(&floor, 0..4, WaterfallMode::Max, start, range(), &table));
        assert!(engine.process(&top, 1..3, WaterfallMode::Max, start, range(), &table));

        let image = engine.image();
        assert_eq!(image.pixel(1, 0), Some(Rgb::new(255, 255, 255)));
        assert_eq!(image.pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(image.pixel(1, 1), Some(Rgb::new(0, 0, 0)));
        assert_eq!(engine.time_resolution_ms(), 50.0);
        assert_eq!(engine.rows_emitted(), 2);
    }

    #[test]
    fn rows_shift_down_and_drop_oldest() {
        let mut engine = WaterfallEngine::new(1, 2, 0, 10.0);
        let table = gray();
        let now = Instant::now();
        for db in [-10.0, -50.0, -90.0] {
            engine.process(&[db_to_power(db)], 0..1, WaterfallMode::Max, now, range(), &table);
        }
        let newest = engine.image().pixel(0, 0).expect("pixel");
        let older = engine.image().pixel(0, 1).expect("pixel");
        assert!(newest.r < older.r);
        assert_eq!(engine.image().height(), 2);
    }

    #[test]
    fn row_times_step_back_by_resolution() {
        let mut engine = WaterfallEngine::new(2, 50, 5_000, 10.0);
        assert_eq!(engine.time_resolution_ms(), 100.0);
        assert!(engine.time_of_row(0).is_none());

        let table = gray();
        let start = Instant::now();
        let source = [1.0e-6_f32; 2];
        engine.process(&source, 0..2, WaterfallMode::Sync, start, range(), &table);
        let now = start + Duration::from_millis(150);
        assert!(engine.process(&source, 0..2, WaterfallMode::Sync, now, range(), &table));

        assert_eq!(engine.time_of_row(0), Some(now));
        assert_eq!(engine.time_of_row(3), Some(now - Duration::from_millis(300)));
        assert!(engine.row_is_valid(1));
        assert!(!engine.row_is_valid(2));
    }

    #[test]
    fn resize_keeps_newest_rows_and_resets_accumulator() {
        let mut engine = WaterfallEngine::new(4, 4, 0, 10.0);
        let table = gray();
        engine.process(&[1.0; 4], 0..4, WaterfallMode::Max, Instant::now(), range(), &table);

        engine.resize(8, 2);
        assert_eq!(engine.accumulated().len(), 8);
        assert_eq!(engine.image().width(), 8);
        assert_eq!(engine.image().pixel(7, 0), Some(Rgb::new(255, 255, 255)));
        assert_eq!(engine.image().as_bytes().len(), 8 * 2 * 3);

        engine.set_span(2_000);
        assert_eq!(engine.ms_per_row(), 1_000.0);
    }

    #[test]
    fn zero_height_never_emits() {
        let mut engine = WaterfallEngine::new(4, 0, 1_000, 10.0);
        let table = gray();
        assert!(!engine.process(&[1.0; 4], 0..4, WaterfallMode::Max, Instant::now(), range(), &table));
    }
}
