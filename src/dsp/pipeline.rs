//! Frame-driven orchestration of the panadapter stages.
//!
//! Each frame runs normalize → smooth → aggregate → (histogram, waterfall,
//! peaks) → snapshot. View and configuration changes invalidate the caches
//! that depend on them before the next frame arrives.

use super::aggregate::{BinAggregator, ColumnBuffers, HoldValidity, PlotMode};
use super::colormap::{ColorTable, Colormap};
use super::histogram::{HistogramAccumulator, HistogramResponse, HistogramSnapshot};
use super::peaks::{PeakDetector, PeakSet};
use super::spectrum::{
    DEFAULT_AVERAGING, DEFAULT_FRAME_RATE, MIN_FRAME_RATE, PlotScale, SpectrumSmoother,
    clamp_averaging, normalize_power, power_scale_factor, smoothing_exponent,
};
use super::view::{
    BinMapping, DEFAULT_PLOT_RANGE, DEFAULT_SAMPLE_RATE_HZ, DEFAULT_WATERFALL_RANGE, DbRange,
    DisplayScale, MAX_SCREEN_WIDTH, ViewState,
};
use super::waterfall::{WaterfallEngine, WaterfallMode};
use super::{FrameProcessor, ProcessorUpdate, Reconfigurable, SpectrumFrame};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Minimum spacing between snapshots handed to the render side.
pub const PLOTTER_UPDATE_LIMIT: Duration = Duration::from_millis(16);

pub const DEFAULT_WIDTH: usize = 1024;
pub const DEFAULT_PLOT_HEIGHT: usize = 256;
pub const DEFAULT_WATERFALL_HEIGHT: usize = 256;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    pub sample_rate_hz: f64,
    /// Time averaging in [0, 1]; 0 shows the raw spectrum.
    pub averaging: f32,
    pub plot_mode: PlotMode,
    pub waterfall_mode: WaterfallMode,
    pub plot_scale: PlotScale,
    pub per_hz: bool,
    pub width: usize,
    pub plot_height: usize,
    pub waterfall_height: usize,
    pub plot_range: DbRange,
    pub waterfall_range: DbRange,
    pub colormap: Colormap,
    pub peak_detection: bool,
    pub max_hold: bool,
    pub min_hold: bool,
    /// Time covered by the waterfall image; 0 emits one row per frame.
    pub waterfall_span_ms: u64,
    pub histogram_response: HistogramResponse,
    /// Nominal frame rate until frames report their own.
    pub frame_rate: f32,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            averaging: DEFAULT_AVERAGING,
            plot_mode: PlotMode::default(),
            waterfall_mode: WaterfallMode::default(),
            plot_scale: PlotScale::default(),
            per_hz: false,
            width: DEFAULT_WIDTH,
            plot_height: DEFAULT_PLOT_HEIGHT,
            waterfall_height: DEFAULT_WATERFALL_HEIGHT,
            plot_range: DEFAULT_PLOT_RANGE,
            waterfall_range: DEFAULT_WATERFALL_RANGE,
            colormap: Colormap::default(),
            peak_detection: false,
            max_hold: false,
            min_hold: false,
            waterfall_span_ms: 0,
            histogram_response: HistogramResponse::default(),
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl PlotterConfig {
    /// Replaces out-of-range values with usable ones.
    pub fn normalize(&mut self) {
        if !(self.sample_rate_hz.is_finite() && self.sample_rate_hz > 0.0) {
            self.sample_rate_hz = DEFAULT_SAMPLE_RATE_HZ;
        }
        self.averaging = clamp_averaging(self.averaging);
        self.width = self.width.min(MAX_SCREEN_WIDTH);
        if !self.plot_range.is_valid() {
            self.plot_range = DEFAULT_PLOT_RANGE;
        }
        if !self.waterfall_range.is_valid() {
            self.waterfall_range = DEFAULT_WATERFALL_RANGE;
        }
        self.frame_rate = if self.frame_rate.is_finite() {
            self.frame_rate.max(MIN_FRAME_RATE)
        } else {
            DEFAULT_FRAME_RATE
        };
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

/// Notifications for whoever owns the surrounding controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlotterEvent {
    ZoomChanged(f64),
    PlotRangeChanged(DbRange),
    WaterfallRangeChanged(DbRange),
}

/// Everything the render side needs to draw one frame.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub timestamp: Instant,
    pub fft_size: usize,
    /// Columns holding data for the current view.
    pub x_range: Range<usize>,
    pub columns: ColumnBuffers,
    pub scale: DisplayScale,
    /// Unit of the level axis, e.g. `dBm/Hz`.
    pub unit: &'static str,
    pub plot_mode: PlotMode,
    pub draw_max_line: bool,
    pub draw_avg_line: bool,
    pub draw_max_hold: bool,
    pub draw_min_hold: bool,
    pub peaks: PeakSet,
    pub histogram: Option<HistogramSnapshot>,
    /// A waterfall row was written for this frame.
    pub waterfall_row: bool,
}

#[derive(Debug, Clone, Copy)]
struct PipelineState {
    holds: HoldValidity,
    iir_valid: bool,
    histogram_valid: bool,
    running: bool,
    overlay_dirty: bool,
}

impl PipelineState {
    fn invalidate_holds(&mut self) {
        self.holds = HoldValidity::default();
    }

    fn invalidate_iir(&mut self) {
        self.iir_valid = false;
    }

    fn invalidate_histogram(&mut self) {
        self.histogram_valid = false;
    }

    fn invalidate_all(&mut self) {
        self.invalidate_holds();
        self.invalidate_iir();
        self.invalidate_histogram();
        self.overlay_dirty = true;
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            holds: HoldValidity::default(),
            iir_valid: false,
            histogram_valid: false,
            running: true,
            overlay_dirty: true,
        }
    }
}

pub struct PlotterPipeline {
    config: PlotterConfig,
    view: ViewState,
    state: PipelineState,
    fft_size: usize,
    frame_rate: f32,
    raw: Vec<f32>,
    smoother: SpectrumSmoother,
    aggregator: BinAggregator,
    histogram: HistogramAccumulator,
    peaks: PeakDetector,
    waterfall: WaterfallEngine,
    color_table: Arc<ColorTable>,
    events: Vec<PlotterEvent>,
    latest: Option<Arc<FrameSnapshot>>,
    render_pending: bool,
    last_render: Option<Instant>,
    frames_processed: u64,
}

impl PlotterPipeline {
    pub fn new(config: PlotterConfig) -> Self {
        let config = config.normalized();
        let view = ViewState::new(config.sample_rate_hz, config.width);
        let waterfall = WaterfallEngine::new(
            config.width,
            config.waterfall_height,
            config.waterfall_span_ms,
            config.frame_rate,
        );

        Self {
            view,
            state: PipelineState::default(),
            fft_size: 0,
            frame_rate: config.frame_rate,
            raw: Vec::new(),
            smoother: SpectrumSmoother::new(),
            aggregator: BinAggregator::new(),
            histogram: HistogramAccumulator::new(),
            peaks: PeakDetector::new(),
            waterfall,
            color_table: config.colormap.table(),
            events: Vec::new(),
            latest: None,
            render_pending: false,
            last_render: None,
            frames_processed: 0,
            config,
        }
    }

    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn waterfall(&self) -> &WaterfallEngine {
        &self.waterfall
    }

    pub fn color_table(&self) -> &ColorTable {
        &self.color_table
    }

    pub fn latest(&self) -> Option<Arc<FrameSnapshot>> {
        self.latest.clone()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn drain_events(&mut self) -> Vec<PlotterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Latest snapshot, if one is pending and the render gate is open.
    pub fn take_render(&mut self, now: Instant) -> Option<Arc<FrameSnapshot>> {
        if !self.render_pending {
            return None;
        }
        let gate_open = self
            .last_render
            .is_none_or(|last| now.saturating_duration_since(last) >= PLOTTER_UPDATE_LIMIT);
        if !gate_open {
            return None;
        }
        self.last_render = Some(now);
        self.render_pending = false;
        self.latest.clone()
    }

    /// Rebuilds the snapshot from the last frame after a view change. The
    /// smoothed spectrum and the waterfall are left untouched.
    pub fn redraw(&mut self, now: Instant) -> Option<Arc<FrameSnapshot>> {
        if self.raw.is_empty() {
            return None;
        }
        self.build_snapshot(now, false)
    }

    pub fn set_plot_mode(&mut self, mode: PlotMode) {
        if mode == PlotMode::Histogram && self.config.plot_mode != PlotMode::Histogram {
            self.state.invalidate_histogram();
        }
        self.config.plot_mode = mode;
        self.state.invalidate_holds();
    }

    pub fn set_plot_scale(&mut self, scale: PlotScale, per_hz: bool) {
        self.config.plot_scale = scale;
        self.config.per_hz = per_hz;
        self.state.invalidate_holds();
        self.state.invalidate_iir();
        self.state.invalidate_histogram();
    }

    pub fn set_averaging(&mut self, averaging: f32) {
        self.config.averaging = clamp_averaging(averaging);
    }

    pub fn set_waterfall_mode(&mut self, mode: WaterfallMode) {
        self.config.waterfall_mode = mode;
        self.waterfall.clear_accumulator();
    }

    pub fn set_histogram_response(&mut self, response: HistogramResponse) {
        self.config.histogram_response = response;
    }

    pub fn set_size(&mut self, width: usize, plot_height: usize, waterfall_height: usize) {
        let width = width.min(MAX_SCREEN_WIDTH);
        self.config.width = width;
        self.config.plot_height = plot_height;
        self.config.waterfall_height = waterfall_height;
        self.view.set_width(width);
        self.waterfall.resize(width, waterfall_height);
        self.state.invalidate_holds();
        self.state.invalidate_histogram();
        self.state.overlay_dirty = true;
        debug!("[pipeline] resized to {width}x{plot_height}, waterfall {waterfall_height} rows");
    }

    /// Returns `false` and keeps the current range when `range` is unusable.
    pub fn set_plot_range(&mut self, range: DbRange) -> bool {
        if !range.is_valid() {
            debug!(
                "[pipeline] rejected plot range {} .. {} dB",
                range.min_db, range.max_db
            );
            return false;
        }
        if range != self.config.plot_range {
            self.config.plot_range = range;
            self.state.invalidate_histogram();
            self.state.overlay_dirty = true;
            self.events.push(PlotterEvent::PlotRangeChanged(range));
        }
        true
    }

    /// Returns `false` and keeps the current range when `range` is unusable.
    pub fn set_waterfall_range(&mut self, range: DbRange) -> bool {
        if !range.is_valid() {
            debug!(
                "[pipeline] rejected waterfall range {} .. {} dB",
                range.min_db, range.max_db
            );
            return false;
        }
        if range != self.config.waterfall_range {
            self.config.waterfall_range = range;
            self.events.push(PlotterEvent::WaterfallRangeChanged(range));
        }
        true
    }

    pub fn set_colormap(&mut self, colormap: Colormap) {
        self.config.colormap = colormap;
        self.color_table = colormap.table();
    }

    pub fn set_peak_detection(&mut self, enabled: bool) {
        self.config.peak_detection = enabled;
        self.peaks.clear();
    }

    pub fn set_max_hold(&mut self, enabled: bool) {
        self.config.max_hold = enabled;
        self.state.holds.max = false;
    }

    pub fn set_min_hold(&mut self, enabled: bool) {
        self.config.min_hold = enabled;
        self.state.holds.min = false;
    }

    pub fn set_waterfall_span(&mut self, span_ms: u64) {
        self.config.waterfall_span_ms = span_ms;
        self.waterfall.set_span(span_ms);
    }

    pub fn set_frame_rate(&mut self, frame_rate: f32) {
        if !frame_rate.is_finite() {
            return;
        }
        self.frame_rate = frame_rate.max(MIN_FRAME_RATE);
        self.waterfall.set_frame_rate(self.frame_rate);
        debug!("[pipeline] frame rate {:.1} Hz", self.frame_rate);
    }

    /// Pausing freezes the waterfall; resuming restarts its timing and drops
    /// every cached state.
    pub fn set_running(&mut self, running: bool) {
        if running && !self.state.running {
            self.waterfall.set_span(self.config.waterfall_span_ms);
            self.state.invalidate_all();
            self.histogram.reset_max();
        }
        self.state.running = running;
        info!("[pipeline] {}", if running { "running" } else { "paused" });
    }

    pub fn set_center_freq(&mut self, freq_hz: i64) {
        self.view.set_center_freq(freq_hz);
        self.state.invalidate_holds();
        self.state.invalidate_iir();
        self.state.invalidate_histogram();
        self.state.overlay_dirty = true;
    }

    pub fn set_sample_rate(&mut self, sample_rate_hz: f64) {
        self.view.set_sample_rate(sample_rate_hz);
        self.config.sample_rate_hz = self.view.sample_rate_hz();
        self.state.invalidate_all();
        self.events.push(PlotterEvent::ZoomChanged(self.view.zoom_level()));
    }

    pub fn zoom_step(&mut self, step: f64, x: i64) -> Option<f64> {
        let level = self.view.zoom_step(step, x, self.fft_size)?;
        self.on_view_changed(level);
        Some(level)
    }

    pub fn zoom_to(&mut self, level: f64) -> Option<f64> {
        let level = self.view.zoom_to(level, self.fft_size)?;
        self.on_view_changed(level);
        Some(level)
    }

    pub fn reset_zoom(&mut self) {
        self.view.reset_zoom();
        self.on_view_changed(self.view.zoom_level());
    }

    pub fn set_fft_center(&mut self, offset_hz: i64) {
        self.view.set_fft_center(offset_hz);
        self.state.invalidate_holds();
        self.state.invalidate_histogram();
        self.state.overlay_dirty = true;
    }

    /// Column of the detected peak closest to a click at (`x`, `y`).
    pub fn nearest_peak(&self, x: usize, y: f32) -> Option<usize> {
        self.peaks.nearest_peak(x, y)
    }

    fn on_view_changed(&mut self, level: f64) {
        self.state.invalidate_holds();
        self.state.invalidate_histogram();
        self.state.overlay_dirty = true;
        self.events.push(PlotterEvent::ZoomChanged(level));
    }

    fn on_fft_size_changed(&mut self, fft_size: usize) {
        debug!("[pipeline] fft size {} -> {fft_size}", self.fft_size);
        self.fft_size = fft_size;
        self.state.invalidate_holds();
        self.state.invalidate_iir();
        self.state.invalidate_histogram();
        self.histogram.reset_max();

        let max_zoom = fft_size as f64 / 4.0;
        if self.view.zoom_level() > max_zoom
            && let Some(level) = self.view.zoom_to(max_zoom, fft_size)
        {
            self.on_view_changed(level);
        }
    }

    fn build_snapshot(&mut self, now: Instant, new_frame: bool) -> Option<Arc<FrameSnapshot>> {
        let mapping = BinMapping::new(self.fft_size, &self.view)?;
        let mode = self.config.plot_mode;
        let scale = DisplayScale::new(self.config.plot_range, self.config.plot_height);

        self.aggregator
            .aggregate(&self.raw, self.smoother.values(), &mapping, mode, self.state.holds);
        self.state.holds = HoldValidity {
            max: true,
            min: true,
        };
        let columns = self.aggregator.columns();
        let x_range = mapping.x_min..mapping.x_max;

        let histogram = if mode == PlotMode::Histogram {
            if new_frame || !self.state.histogram_valid {
                self.histogram.accumulate(
                    &self.raw,
                    &columns.max_raw,
                    &mapping,
                    self.config.plot_range,
                    self.frame_rate,
                );
                self.histogram.smooth(
                    x_range.clone(),
                    self.config.averaging,
                    self.frame_rate,
                    self.config.histogram_response,
                    self.state.histogram_valid,
                );
                self.state.histogram_valid = true;
            }
            Some(self.histogram.snapshot())
        } else {
            None
        };

        let mut waterfall_row = false;
        if new_frame && self.state.running {
            let source = match self.config.waterfall_mode {
                WaterfallMode::Average => &columns.avg_raw,
                WaterfallMode::Max => &columns.max_raw,
                WaterfallMode::Sync if mode == PlotMode::Max => &columns.max_iir,
                WaterfallMode::Sync => &columns.avg_iir,
            };
            waterfall_row = self.waterfall.process(
                source,
                x_range.clone(),
                self.config.waterfall_mode,
                now,
                self.config.waterfall_range,
                &self.color_table,
            );
        }

        if self.config.peak_detection {
            let source = if self.config.max_hold {
                &columns.max_hold
            } else if mode == PlotMode::Average {
                &columns.avg_iir
            } else {
                &columns.max_iir
            };
            let force = !new_frame || self.state.overlay_dirty;
            self.peaks.detect(source, x_range.clone(), &scale, now, force);
        }
        self.state.overlay_dirty = false;

        let show_highlights = histogram.as_ref().is_none_or(|h| h.shows_highlights());
        let snapshot = Arc::new(FrameSnapshot {
            timestamp: now,
            fft_size: self.fft_size,
            x_range,
            columns: columns.clone(),
            scale,
            unit: self.config.plot_scale.unit_label(self.config.per_hz),
            plot_mode: mode,
            draw_max_line: mode != PlotMode::Average && mode != PlotMode::Histogram,
            draw_avg_line: mode != PlotMode::Max && show_highlights,
            draw_max_hold: self.config.max_hold,
            draw_min_hold: self.config.min_hold,
            peaks: if self.config.peak_detection {
                self.peaks.peaks().clone()
            } else {
                PeakSet::new()
            },
            histogram,
            waterfall_row,
        });

        self.latest = Some(Arc::clone(&snapshot));
        self.render_pending = true;
        Some(snapshot)
    }
}

impl FrameProcessor for PlotterPipeline {
    type Output = Arc<FrameSnapshot>;

    fn process_frame(&mut self, frame: &SpectrumFrame<'_>) -> ProcessorUpdate<Self::Output> {
        let fft_size = frame.fft_size();
        if fft_size < 2 {
            return ProcessorUpdate::None;
        }

        // measured rates wobble; only a change of whole Hz counts
        if frame.frame_rate.is_finite() {
            let rate = frame.frame_rate.max(MIN_FRAME_RATE);
            if rate.round() != self.frame_rate.round() {
                self.set_frame_rate(rate);
            } else {
                self.frame_rate = rate;
            }
        }
        if fft_size != self.fft_size {
            self.on_fft_size_changed(fft_size);
        }

        let factor = power_scale_factor(
            self.config.plot_scale,
            self.config.per_hz,
            fft_size,
            self.view.sample_rate_hz(),
        );
        normalize_power(frame.magnitudes, factor, &mut self.raw);

        let exponent = smoothing_exponent(self.frame_rate, self.config.averaging);
        self.smoother.update(&self.raw, exponent, self.state.iir_valid);
        self.state.iir_valid = true;
        self.frames_processed += 1;

        match self.build_snapshot(frame.timestamp, true) {
            Some(snapshot) => ProcessorUpdate::Snapshot(snapshot),
            None => ProcessorUpdate::None,
        }
    }

    fn reset(&mut self) {
        self.raw.clear();
        self.smoother.clear();
        self.aggregator = BinAggregator::new();
        self.histogram.clear();
        self.peaks.clear();
        self.waterfall.clear_accumulator();
        self.waterfall.clear_image();
        self.waterfall.reset_timing(None);
        self.state.invalidate_all();
        self.latest = None;
        self.render_pending = false;
    }
}

impl Reconfigurable<PlotterConfig> for PlotterPipeline {
    fn update_config(&mut self, config: PlotterConfig) {
        let config = config.normalized();
        let previous = self.config.clone();

        if config.sample_rate_hz != previous.sample_rate_hz {
            self.set_sample_rate(config.sample_rate_hz);
        }
        if (config.width, config.plot_height, config.waterfall_height)
            != (previous.width, previous.plot_height, previous.waterfall_height)
        {
            self.set_size(config.width, config.plot_height, config.waterfall_height);
        }
        if config.plot_mode != previous.plot_mode {
            self.set_plot_mode(config.plot_mode);
        }
        if (config.plot_scale, config.per_hz) != (previous.plot_scale, previous.per_hz) {
            self.set_plot_scale(config.plot_scale, config.per_hz);
        }
        self.set_plot_range(config.plot_range);
        self.set_waterfall_range(config.waterfall_range);
        if config.colormap != previous.colormap {
            self.set_colormap(config.colormap);
        }
        if config.peak_detection != previous.peak_detection {
            self.set_peak_detection(config.peak_detection);
        }
        if config.max_hold != previous.max_hold {
            self.set_max_hold(config.max_hold);
        }
        if config.min_hold != previous.min_hold {
            self.set_min_hold(config.min_hold);
        }
        if config.waterfall_span_ms != previous.waterfall_span_ms {
            self.set_waterfall_span(config.waterfall_span_ms);
        }
        if config.waterfall_mode != previous.waterfall_mode {
            self.set_waterfall_mode(config.waterfall_mode);
        }
        if config.frame_rate != previous.frame_rate {
            self.set_frame_rate(config.frame_rate);
        }

        self.config = config;
    }
}

impl fmt::Debug for PlotterPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotterPipeline")
            .field("view", &self.view)
            .field("fft_size", &self.fft_size)
            .field("frame_rate", &self.frame_rate)
            .field("running", &self.state.running)
            .field("frames_processed", &self.frames_processed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::colormap::Rgb;
    use crate::dsp::histogram::MIN_HISTOGRAM_BINS;
    use crate::util::db::power_to_db;

    fn config(width: usize) -> PlotterConfig {
        PlotterConfig {
            width,
            plot_height: 200,
            waterfall_height: 64,
            averaging: 0.0,
            ..PlotterConfig::default()
        }
    }

    fn tone(fft_size: usize, bin: usize, level: f32) -> Vec<f32> {
        let mut magnitudes = vec![1.0_f32; fft_size];
        magnitudes[bin] = level;
        magnitudes
    }

    fn feed(pipeline: &mut PlotterPipeline, magnitudes: &[f32], at: Instant) -> Arc<FrameSnapshot> {
        match pipeline.process_frame(&SpectrumFrame::new(magnitudes, 15.0, at)) {
            ProcessorUpdate::Snapshot(snapshot) => snapshot,
            ProcessorUpdate::None => panic!("expected a snapshot"),
        }
    }

    fn feed_at_rate(
        pipeline: &mut PlotterPipeline,
        magnitudes: &[f32],
        frame_rate: f32,
        at: Instant,
    ) -> Arc<FrameSnapshot> {
        match pipeline.process_frame(&SpectrumFrame::new(magnitudes, frame_rate, at)) {
            ProcessorUpdate::Snapshot(snapshot) => snapshot,
            ProcessorUpdate::None => panic!("expected a snapshot"),
        }
    }

    fn buffer<'a>(columns: &'a ColumnBuffers, name: &str) -> &'a [f32] {
        match name {
            "max_raw" => &columns.max_raw,
            "avg_raw" => &columns.avg_raw,
            "max_iir" => &columns.max_iir,
            "avg_iir" => &columns.avg_iir,
            other => panic!("unknown buffer {other}"),
        }
    }

    // one automatic-mode row rendered from `values` with the pipeline's range and colors
    fn rendered_row(pipeline: &PlotterPipeline, snapshot: &FrameSnapshot, values: &[f32]) -> Vec<Rgb> {
        let mut engine = WaterfallEngine::new(pipeline.waterfall().image().width(), 1, 0, 15.0);
        engine.process(
            values,
            snapshot.x_range.clone(),
            WaterfallMode::Max,
            snapshot.timestamp,
            pipeline.config().waterfall_range,
            pipeline.color_table(),
        );
        engine.image().row(0).to_vec()
    }

    fn argmax(values: &[f32]) -> usize {
        values
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .expect("non-empty")
    }

    #[test]
    fn tone_lands_in_center_column() {
        let mut pipeline = PlotterPipeline::new(config(512));
        let snapshot = feed(&mut pipeline, &tone(1024, 512, 1.0e6), Instant::now());

        assert_eq!(snapshot.columns.width(), 512);
        assert_eq!(argmax(&snapshot.columns.max_raw), 256);
        let expected = 1.0e6 / (1024.0 * 1024.0);
        assert!((snapshot.columns.max_raw[256] - expected).abs() < expected * 1.0e-4);
        assert!(snapshot.draw_max_line);
        assert!(!snapshot.draw_avg_line);
        assert!(snapshot.histogram.is_none());
    }

    #[test]
    fn empty_frames_are_ignored() {
        let mut pipeline = PlotterPipeline::new(config(64));
        let update = pipeline.process_frame(&SpectrumFrame::new(&[], 15.0, Instant::now()));
        assert!(matches!(update, ProcessorUpdate::None));
        assert!(pipeline.redraw(Instant::now()).is_none());
        assert_eq!(pipeline.frames_processed(), 0);
    }

    #[test]
    fn render_gate_limits_snapshot_rate() {
        let mut pipeline = PlotterPipeline::new(config(128));
        let frame = tone(256, 100, 100.0);
        let start = Instant::now();

        feed(&mut pipeline, &frame, start);
        assert!(pipeline.take_render(start).is_some());
        assert!(pipeline.take_render(start).is_none());

        let soon = start + Duration::from_millis(5);
        feed(&mut pipeline, &frame, soon);
        assert!(pipeline.take_render(soon).is_none());

        let later = start + PLOTTER_UPDATE_LIMIT;
        let snapshot = pipeline.take_render(later).expect("gate open");
        assert_eq!(snapshot.timestamp, soon);
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let mut pipeline = PlotterPipeline::new(config(64));
        let before = pipeline.config().plot_range;

        assert!(!pipeline.set_plot_range(DbRange {
            min_db: -50.0,
            max_db: -49.0,
        }));
        assert!(!pipeline.set_waterfall_range(DbRange {
            min_db: -200.0,
            max_db: 0.0,
        }));
        assert_eq!(pipeline.config().plot_range, before);
        assert!(pipeline.drain_events().is_empty());

        let range = DbRange::new(-90.0, -10.0).expect("range");
        assert!(pipeline.set_plot_range(range));
        assert_eq!(
            pipeline.drain_events(),
            vec![PlotterEvent::PlotRangeChanged(range)]
        );
    }

    #[test]
    fn zoom_reports_level_and_respects_fft_limit() {
        let mut pipeline = PlotterPipeline::new(config(256));
        feed(&mut pipeline, &tone(1024, 512, 10.0), Instant::now());

        let level = pipeline.zoom_step(0.5, 128).expect("zoom in");
        assert!((level - 2.0).abs() < 1.0e-6);
        assert_eq!(pipeline.drain_events(), vec![PlotterEvent::ZoomChanged(level)]);

        assert!(pipeline.zoom_to(256.0).is_some());
        assert!(pipeline.view().zoom_level() <= 257.0);
        assert!(pipeline.zoom_step(0.5, 128).is_none());

        pipeline.reset_zoom();
        assert_eq!(pipeline.view().zoom_level(), 1.0);
    }

    #[test]
    fn shrinking_fft_pulls_zoom_back() {
        let mut pipeline = PlotterPipeline::new(config(512));
        let start = Instant::now();
        feed(&mut pipeline, &tone(4096, 2048, 10.0), start);
        pipeline.zoom_to(512.0).expect("zoom in");
        assert!(pipeline.view().zoom_level() > 64.0);
        pipeline.drain_events();

        feed(&mut pipeline, &tone(256, 128, 10.0), start + Duration::from_millis(70));
        assert!(pipeline.view().zoom_level() <= 64.5);
        assert!(matches!(
            pipeline.drain_events().as_slice(),
            [PlotterEvent::ZoomChanged(_)]
        ));
    }

    #[test]
    fn waterfall_only_advances_while_running() {
        let mut pipeline = PlotterPipeline::new(config(64));
        let frame = tone(128, 64, 1.0e4);
        let start = Instant::now();

        assert!(feed(&mut pipeline, &frame, start).waterfall_row);
        assert_eq!(pipeline.waterfall().rows_emitted(), 1);

        pipeline.set_running(false);
        let paused = feed(&mut pipeline, &frame, start + Duration::from_millis(70));
        assert!(!paused.waterfall_row);
        assert_eq!(pipeline.waterfall().rows_emitted(), 1);

        pipeline.set_running(true);
        assert!(feed(&mut pipeline, &frame, start + Duration::from_millis(140)).waterfall_row);
        assert_eq!(pipeline.waterfall().rows_emitted(), 2);
    }

    #[test]
    fn measured_frame_rate_jitter_keeps_waterfall_rows() {
        let spectrum = tone(1024, 512, 1.0e4);
        let start = Instant::now();
        let run = |rates: [f32; 2]| {
            let mut pipeline = PlotterPipeline::new(PlotterConfig {
                waterfall_span_ms: 6_400,
                ..config(64)
            });
            for n in 0..300u32 {
                let at = start + Duration::from_millis(67) * n;
                feed_at_rate(&mut pipeline, &spectrum, rates[n as usize % 2], at);
            }
            pipeline.waterfall().rows_emitted()
        };

        // 100 ms rows over ~20 s of frames
        let steady = run([15.0, 15.0]);
        assert!((195..=205).contains(&steady), "{steady}");
        assert_eq!(run([15.0, 15.1]), steady);
        assert_eq!(run([14.4, 15.6]), steady);
    }

    #[test]
    fn frame_rate_change_restarts_accumulation_but_not_cadence() {
        let mut pipeline = PlotterPipeline::new(PlotterConfig {
            waterfall_span_ms: 6_400,
            ..config(64)
        });
        let spectrum = tone(128, 64, 1.0e4);
        let start = Instant::now();
        let at = |ms: u64| start + Duration::from_millis(ms);

        assert!(!feed_at_rate(&mut pipeline, &spectrum, 15.0, at(0)).waterfall_row);
        assert!(feed_at_rate(&mut pipeline, &spectrum, 15.0, at(50)).waterfall_row);
        assert!(!feed_at_rate(&mut pipeline, &spectrum, 15.0, at(80)).waterfall_row);
        assert_eq!(pipeline.waterfall().folded_frames(), 1);

        assert!(!feed_at_rate(&mut pipeline, &spectrum, 30.0, at(90)).waterfall_row);
        assert_eq!(pipeline.waterfall().folded_frames(), 1);

        assert!(feed_at_rate(&mut pipeline, &spectrum, 30.0, at(120)).waterfall_row);
        assert_eq!(pipeline.waterfall().rows_emitted(), 2);
        assert!(pipeline.waterfall().row_is_valid(0));
        assert!(!pipeline.waterfall().row_is_valid(1));
    }

    #[test]
    fn waterfall_reads_the_buffer_its_mode_selects() {
        let quiet = vec![1.0e-2_f32; 1024];
        let loud: Vec<f32> = (0..1024)
            .map(|i| if i % 2 == 0 { 1.0e2 } else { 1.0 })
            .collect();
        let start = Instant::now();
        let names = ["max_raw", "avg_raw", "max_iir", "avg_iir"];
        let cases = [
            (WaterfallMode::Average, PlotMode::Max, "avg_raw"),
            (WaterfallMode::Max, PlotMode::Average, "max_raw"),
            (WaterfallMode::Sync, PlotMode::Max, "max_iir"),
            (WaterfallMode::Sync, PlotMode::Filled, "avg_iir"),
        ];

        for (waterfall_mode, plot_mode, expected) in cases {
            let mut pipeline = PlotterPipeline::new(PlotterConfig {
                averaging: 0.3,
                waterfall_mode,
                plot_mode,
                colormap: Colormap::WhiteHot,
                ..config(64)
            });
            feed(&mut pipeline, &quiet, start);
            let snapshot = feed(&mut pipeline, &loud, start + Duration::from_millis(70));
            assert!(snapshot.waterfall_row);

            let drawn = pipeline.waterfall().image().row(0).to_vec();
            for name in names {
                let row = rendered_row(&pipeline, &snapshot, buffer(&snapshot.columns, name));
                assert_eq!(
                    drawn == row,
                    name == expected,
                    "{waterfall_mode:?}/{plot_mode:?} against {name}"
                );
            }
        }
    }

    #[test]
    fn undersampled_histogram_uses_sampled_columns() {
        let mut pipeline = PlotterPipeline::new(PlotterConfig {
            plot_mode: PlotMode::Histogram,
            ..config(512)
        });
        // 64 bins across 512 columns; bin 40 sits at -56 dB, the rest at -36 dB
        let spectrum = tone(64, 40, 1.0e-2);
        let now = Instant::now();
        let snapshot = feed(&mut pipeline, &spectrum, now);
        let histogram = snapshot.histogram.clone().expect("histogram");
        assert!(snapshot.x_range.len() > 64);

        let range = pipeline.config().plot_range;
        let gain = histogram.bins as f32 / range.span();
        let mut quiet_columns = 0;
        for x in snapshot.x_range.clone() {
            let level_db = power_to_db(snapshot.columns.max_raw[x]);
            let level = gain * (range.max_db - level_db);
            let low = (level - 0.5).max(0.0) as usize;
            assert!(histogram.cell(x, low) > 0.0, "column {x}");
            if level_db < -50.0 {
                quiet_columns += 1;
            }
        }
        assert!(quiet_columns > 1);

        let redrawn = pipeline.redraw(now).expect("redraw");
        let shared = redrawn.histogram.as_ref().expect("histogram");
        assert!(Arc::ptr_eq(&histogram.cells, &shared.cells));
    }

    #[test]
    fn snapshot_carries_the_level_unit() {
        let mut pipeline = PlotterPipeline::new(config(64));
        assert_eq!(feed(&mut pipeline, &tone(128, 10, 5.0), Instant::now()).unit, "dBFS");

        pipeline.set_plot_scale(PlotScale::Dbm50, true);
        let snapshot = pipeline.redraw(Instant::now()).expect("redraw");
        assert_eq!(snapshot.unit, "dBm/Hz");
    }

    #[test]
    fn line_visibility_follows_plot_mode() {
        let mut pipeline = PlotterPipeline::new(config(128));
        let frame = tone(1024, 300, 50.0);
        let now = Instant::now();

        let cases = [
            (PlotMode::Max, true, false),
            (PlotMode::Average, false, true),
            (PlotMode::Filled, true, true),
            (PlotMode::Histogram, false, false),
        ];
        for (mode, max_line, avg_line) in cases {
            pipeline.set_plot_mode(mode);
            let snapshot = feed(&mut pipeline, &frame, now);
            assert_eq!(snapshot.draw_max_line, max_line, "{mode:?}");
            assert_eq!(snapshot.draw_avg_line, avg_line, "{mode:?}");
        }

        let histogram = pipeline
            .latest()
            .and_then(|snapshot| snapshot.histogram.clone())
            .expect("histogram");
        assert_eq!(histogram.bins, MIN_HISTOGRAM_BINS);
        assert_eq!(histogram.width, 128);
    }

    #[test]
    fn center_change_reseeds_smoothing() {
        let mut pipeline = PlotterPipeline::new(PlotterConfig {
            averaging: 0.9,
            ..config(64)
        });
        let start = Instant::now();
        let quiet = vec![1.0_f32; 128];
        let loud = vec![1.0e4_f32; 128];

        feed(&mut pipeline, &quiet, start);
        let smoothed = feed(&mut pipeline, &loud, start + Duration::from_millis(70));
        assert!(smoothed.columns.max_iir[10] < smoothed.columns.max_raw[10]);

        pipeline.set_center_freq(100_000_000);
        let reseeded = feed(&mut pipeline, &loud, start + Duration::from_millis(140));
        assert_eq!(reseeded.columns.max_iir[10], reseeded.columns.max_raw[10]);
    }

    #[test]
    fn max_hold_keeps_the_loudest_frame() {
        let mut pipeline = PlotterPipeline::new(PlotterConfig {
            max_hold: true,
            ..config(64)
        });
        let start = Instant::now();
        feed(&mut pipeline, &vec![1.0e4_f32; 128], start);
        let after = feed(&mut pipeline, &vec![1.0_f32; 128], start + Duration::from_millis(70));
        assert!(after.columns.max_hold[20] > after.columns.max_raw[20] * 1.0e3);
        assert!(after.draw_max_hold);

        pipeline.set_max_hold(true);
        let fresh = feed(&mut pipeline, &vec![1.0_f32; 128], start + Duration::from_millis(140));
        assert_eq!(fresh.columns.max_hold[20], fresh.columns.max_iir[20]);
    }

    #[test]
    fn peaks_are_reported_when_enabled() {
        let mut pipeline = PlotterPipeline::new(PlotterConfig {
            peak_detection: true,
            ..config(512)
        });
        let snapshot = feed(&mut pipeline, &tone(512, 200, 1.0e3), Instant::now());
        let columns: Vec<usize> = snapshot.peaks.keys().copied().collect();
        assert_eq!(columns, vec![200]);
        assert_eq!(pipeline.nearest_peak(195, snapshot.peaks[&200]), Some(200));

        pipeline.set_peak_detection(false);
        let snapshot = pipeline.redraw(Instant::now()).expect("redraw");
        assert!(snapshot.peaks.is_empty());
    }

    #[test]
    fn update_config_applies_changes() {
        let mut pipeline = PlotterPipeline::new(config(64));
        let updated = PlotterConfig {
            colormap: Colormap::Plasma,
            waterfall_span_ms: 6_400,
            width: 96,
            ..config(64)
        };
        pipeline.update_config(updated.clone());

        assert_eq!(pipeline.config(), &updated);
        assert_eq!(pipeline.waterfall().ms_per_row(), 100.0);
        assert_eq!(pipeline.waterfall().image().width(), 96);
        assert_eq!(pipeline.view().width(), 96);
        assert_eq!(
            pipeline.color_table().color(0),
            Colormap::Plasma.table().color(0)
        );
    }

    #[test]
    fn config_normalization_repairs_bad_values() {
        let config = PlotterConfig {
            sample_rate_hz: -1.0,
            averaging: 4.0,
            width: 1 << 20,
            plot_range: DbRange {
                min_db: 0.0,
                max_db: -10.0,
            },
            frame_rate: f32::NAN,
            ..PlotterConfig::default()
        }
        .normalized();

        assert_eq!(config.sample_rate_hz, DEFAULT_SAMPLE_RATE_HZ);
        assert_eq!(config.averaging, 1.0);
        assert_eq!(config.width, MAX_SCREEN_WIDTH);
        assert_eq!(config.plot_range, DEFAULT_PLOT_RANGE);
        assert_eq!(config.frame_rate, DEFAULT_FRAME_RATE);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let json = r#"{ "plot_mode": "histogram", "colormap": "viridis", "width": 800 }"#;
        let config: PlotterConfig = serde_json::from_str(json).expect("config");
        assert_eq!(config.plot_mode, PlotMode::Histogram);
        assert_eq!(config.colormap, Colormap::Viridis);
        assert_eq!(config.width, 800);
        assert_eq!(config.waterfall_range, DEFAULT_WATERFALL_RANGE);
    }

    #[test]
    fn reset_clears_history() {
        let mut pipeline = PlotterPipeline::new(config(64));
        feed(&mut pipeline, &tone(128, 10, 5.0), Instant::now());
        pipeline.reset();
        assert!(pipeline.latest().is_none());
        assert!(pipeline.redraw(Instant::now()).is_none());
    }
}
