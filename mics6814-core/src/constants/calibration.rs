//! Calibration Window and Timing
//!
//! Calibration keeps a moving average per channel and declares the sensor
//! settled once the newest reading sits within [`STABILITY_DELTA`] of it on
//! all three channels at once.

// ===== WINDOW =====

/// Samples kept in each channel's sliding window.
///
/// One sample per tick, so this is also the minimum warm-up in seconds.
/// The firmware this was sized for used a 16-bit accumulator, which caps
/// the window below 64 samples of a 10-bit reading.
pub const WINDOW_SIZE: usize = 10;

/// Allowed distance between the newest reading and the window average
/// (ADC counts, exclusive).
pub const STABILITY_DELTA: u16 = 2;

// ===== TIMING =====

/// Delay before each calibration tick (milliseconds).
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Delay before sampling each channel within a tick (milliseconds).
///
/// Lets the ADC input settle after the multiplexer switches channels.
pub const CHANNEL_SETTLE_MS: u32 = 50;

/// Raw samples averaged into one calibration reading.
pub const CALIBRATION_SAMPLES: u8 = 3;

/// Delay before each calibration sample (milliseconds).
pub const CALIBRATION_SAMPLE_SPACING_MS: u32 = 1;
