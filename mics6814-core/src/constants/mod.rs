//! Constants for the MICS-6814 driver
//!
//! Every numeric value the calibration and conversion code relies on is
//! defined here, with its unit and where it comes from.
//!
//! ## Organization
//!
//! - **Adc**: converter resolution and full-scale reference
//! - **Calibration**: sliding-window size, stability tolerance, tick timing
//! - **Measurement**: oversampling used for a single resistance reading
//! - **Curves**: power-law coefficients per gas
//!
//! ## Usage Guidelines
//!
//! 1. Use these constants instead of magic numbers
//! 2. Keep units in the name (`_MS`, `_COUNTS`)
//! 3. Runtime-tunable values also appear as [`SensorConfig`](crate::SensorConfig)
//!    defaults; change the default there, not at call sites

/// ADC resolution and reference values.
pub mod adc;

/// Calibration window and timing.
pub mod calibration;

/// Resistance oversampling.
pub mod measurement;

/// Concentration curve coefficients.
pub mod curves;

// Re-export commonly used constants for convenience
pub use adc::ADC_FULL_SCALE;

pub use calibration::{
    WINDOW_SIZE, STABILITY_DELTA, TICK_INTERVAL_MS, CHANNEL_SETTLE_MS,
    CALIBRATION_SAMPLES, CALIBRATION_SAMPLE_SPACING_MS,
};

pub use measurement::{INVALID_MEASUREMENT, RESISTANCE_SAMPLES, RESISTANCE_SAMPLE_SPACING_MS};
