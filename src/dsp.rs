//! Numeric core of the panadapter display.
//!
//! Frames of linear FFT power enter through [`FrameProcessor`]; every stage
//! below works on plain slices so the pieces can be exercised on their own.

pub mod aggregate;
pub mod colormap;
pub mod histogram;
pub mod peaks;
pub mod pipeline;
pub mod spectrum;
pub mod view;
pub mod waterfall;

use std::time::Instant;

/// Borrowed FFT output provided to the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumFrame<'a> {
    /// Squared magnitudes in FFT-shifted order (DC in the middle).
    pub magnitudes: &'a [f32],
    /// Rate at which frames are produced, in Hz.
    pub frame_rate: f32,
    /// Capture time of this frame.
    pub timestamp: Instant,
}

impl<'a> SpectrumFrame<'a> {
    pub fn new(magnitudes: &'a [f32], frame_rate: f32, timestamp: Instant) -> Self {
        Self {
            magnitudes,
            frame_rate,
            timestamp,
        }
    }

    pub fn fft_size(&self) -> usize {
        self.magnitudes.len()
    }
}

/// Output emitted by a processor after consuming a [`SpectrumFrame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessorUpdate<T> {
    /// No new result is ready for downstream consumers.
    None,
    /// A fresh snapshot is available.
    Snapshot(T),
}

/// Shared contract for stages fed with spectrum frames.
pub trait FrameProcessor {
    type Output;

    /// Consume a frame and optionally output an updated snapshot.
    fn process_frame(&mut self, frame: &SpectrumFrame<'_>) -> ProcessorUpdate<Self::Output>;

    /// Reset the processor, clearing any accumulated history.
    fn reset(&mut self);
}

/// Optional helper trait for processors that expose lightweight configuration updates.
pub trait Reconfigurable<Cfg> {
    fn update_config(&mut self, config: Cfg);
}
