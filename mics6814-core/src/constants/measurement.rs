//! Resistance Oversampling
//!
//! A single resistance reading averages a burst of raw samples to knock
//! down ADC noise before the ratio transform amplifies it.

/// Raw samples averaged into one resistance reading.
pub const RESISTANCE_SAMPLES: u16 = 100;

/// Delay after each resistance sample (milliseconds).
///
/// 100 samples at 2 ms bound one reading to roughly 200 ms per channel.
pub const RESISTANCE_SAMPLE_SPACING_MS: u32 = 2;

/// Sentinel returned by [`Mics6814::measure`](crate::Mics6814::measure)
/// when the concentration is not a usable number.
pub const INVALID_MEASUREMENT: f32 = -1.0;
