//! JSON settings for the driver binary.

use crate::dsp::pipeline::PlotterConfig;
use crate::source::{MAX_FFT_SIZE, MIN_FFT_SIZE, Tone};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const DEFAULT_FFT_SIZE: usize = 4096;
const DEFAULT_FRAME_COUNT: u64 = 300;
const DEFAULT_RENDER_QUEUE: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub fft_size: usize,
    pub frame_count: u64,
    /// Pace frames against the wall clock instead of synthesizing timestamps.
    pub realtime: bool,
    pub center_freq_hz: i64,
    pub noise_floor_db: f32,
    pub seed: u64,
    pub tones: Vec<Tone>,
    /// Snapshots buffered for the render thread before new ones are dropped.
    pub render_queue: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            fft_size: DEFAULT_FFT_SIZE,
            frame_count: DEFAULT_FRAME_COUNT,
            realtime: false,
            center_freq_hz: 100_000_000,
            noise_floor_db: -70.0,
            seed: 0,
            tones: vec![
                Tone {
                    offset_hz: 12_000.0,
                    level_db: -30.0,
                },
                Tone {
                    offset_hz: -25_000.0,
                    level_db: -45.0,
                },
            ],
            render_queue: DEFAULT_RENDER_QUEUE,
        }
    }
}

impl DriverConfig {
    pub fn normalize(&mut self) {
        self.fft_size = self.fft_size.clamp(MIN_FFT_SIZE, MAX_FFT_SIZE);
        self.render_queue = self.render_queue.max(1);
        if !self.noise_floor_db.is_finite() {
            self.noise_floor_db = DriverConfig::default().noise_floor_db;
        }
        self.tones
            .retain(|tone| tone.offset_hz.is_finite() && tone.level_db.is_finite());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub plotter: PlotterConfig,
    pub driver: DriverConfig,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        Ok(settings.normalized())
    }

    /// Falls back to defaults when `path` is absent or unreadable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => {
                info!("[settings] loaded {path:?}");
                settings
            }
            Err(err) => {
                warn!("[settings] {err:#}; using defaults");
                Self::default()
            }
        }
    }

    pub fn normalize(&mut self) {
        self.plotter.normalize();
        self.driver.normalize();
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}
