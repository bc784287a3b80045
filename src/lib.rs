//! Spectrum and waterfall display core for a software-defined radio panadapter.

pub mod dsp;
pub mod settings;
pub mod source;
pub mod util;
