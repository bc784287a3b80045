//! Synthetic IQ source: tones plus white noise, windowed and transformed into
//! FFT-shifted power frames.

use crate::util::db::db_to_power;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustfft::num_complex::Complex32;
use rustfft::{Fft, FftPlanner};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use std::sync::Arc;

pub const MIN_FFT_SIZE: usize = 64;
pub const MAX_FFT_SIZE: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// Offset from the tuned center, in Hz.
    pub offset_hz: f64,
    /// Amplitude relative to full scale, in dB.
    pub level_db: f32,
}

struct Oscillator {
    amplitude: f32,
    step: f64,
    phase: f64,
}

pub struct ToneSource {
    sample_rate_hz: f64,
    oscillators: Vec<Oscillator>,
    noise_spread: f32,
    rng: StdRng,
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    buffer: Vec<Complex32>,
    scratch: Vec<Complex32>,
    power: Vec<f32>,
}

impl ToneSource {
    /// `noise_floor_db` is the total noise power per sample relative to full
    /// scale. `seed` makes the noise reproducible.
    pub fn new(
        sample_rate_hz: f64,
        fft_size: usize,
        tones: &[Tone],
        noise_floor_db: f32,
        seed: u64,
    ) -> Self {
        let fft_size = fft_size.clamp(MIN_FFT_SIZE, MAX_FFT_SIZE);
        let fft = FftPlanner::<f32>::new().plan_fft_forward(fft_size);
        let scratch = vec![Complex32::default(); fft.get_inplace_scratch_len()];

        let oscillators = tones
            .iter()
            .map(|tone| Oscillator {
                amplitude: db_to_power(tone.level_db).sqrt(),
                step: TAU * tone.offset_hz / sample_rate_hz,
                phase: 0.0,
            })
            .collect();

        // uniform on [-s, s] has variance s^2 / 3 per component
        let noise_spread = db_to_power(noise_floor_db).sqrt() * 1.5_f32.sqrt();

        Self {
            sample_rate_hz,
            oscillators,
            noise_spread,
            rng: StdRng::seed_from_u64(seed),
            fft,
            window: hann_window(fft_size),
            buffer: vec![Complex32::default(); fft_size],
            scratch,
            power: vec![0.0; fft_size],
        }
    }

    pub fn fft_size(&self) -> usize {
        self.window.len()
    }

    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    /// Produces the next block of samples and returns its power spectrum,
    /// DC in the middle.
    pub fn next_frame(&mut self) -> &[f32] {
        let spread = self.noise_spread;
        for sample in self.buffer.iter_mut() {
            let mut value = if spread > 0.0 {
                Complex32::new(
                    self.rng.random_range(-spread..spread),
                    self.rng.random_range(-spread..spread),
                )
            } else {
                Complex32::default()
            };
            for osc in &mut self.oscillators {
                value += Complex32::from_polar(osc.amplitude, osc.phase as f32);
                osc.phase = (osc.phase + osc.step).rem_euclid(TAU);
            }
            *sample = value;
        }

        remove_dc(&mut self.buffer);
        for (sample, &coeff) in self.buffer.iter_mut().zip(&self.window) {
            *sample *= coeff;
        }
        self.fft.process_with_scratch(&mut self.buffer, &mut self.scratch);

        let n = self.buffer.len();
        let half = n / 2;
        for (i, power) in self.power.iter_mut().enumerate() {
            *power = self.buffer[(i + half) % n].norm_sqr();
        }
        &self.power
    }
}

impl fmt::Debug for ToneSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToneSource")
            .field("sample_rate_hz", &self.sample_rate_hz)
            .field("fft_size", &self.window.len())
            .field("tones", &self.oscillators.len())
            .finish()
    }
}

/// Periodic Hann window scaled to unit coherent gain.
fn hann_window(len: usize) -> Vec<f32> {
    (0..len)
        .map(|n| {
            let phase = (n as f32) * core::f32::consts::TAU / (len as f32);
            1.0 - phase.cos()
        })
        .collect()
}

fn remove_dc(buffer: &mut [Complex32]) {
    if buffer.is_empty() {
        return;
    }

    let mean = buffer.iter().sum::<Complex32>() / buffer.len() as f32;
    if mean.norm() <= f32::EPSILON {
        return;
    }

    for sample in buffer.iter_mut() {
        *sample -= mean;
    }
}
