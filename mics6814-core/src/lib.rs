//! Calibration and concentration estimation for the MICS-6814 gas sensor
//!
//! The MICS-6814 carries three metal-oxide sensing elements (CO, NO2, NH3),
//! each wired as a voltage divider into its own ADC channel. This crate turns
//! the raw ADC counts into parts-per-million estimates.
//!
//! Two pieces do the real work:
//! - [`Calibrator`] watches a sliding window per channel and reports the
//!   clean-air baseline once all three channels have settled.
//! - [`concentration`] converts the current-to-baseline resistance ratio into
//!   ppm with a per-gas power-law curve.
//!
//! [`Mics6814`] ties both to the hardware through two small seams: an
//! [`AnalogReader`] for samples and an [`embedded_hal::delay::DelayNs`] for
//! the settle delays.
//!
//! Key constraints:
//! - No heap allocation (all windows are fixed arrays)
//! - Single-threaded and blocking, like the sensor it drives
//! - `no_std` with the `std` feature disabled
//!
//! ```
//! # #[cfg(feature = "std")] {
//! use mics6814_core::{ChannelMap, Gas, Mics6814, SensorConfig};
//! use mics6814_core::sim::{RecordingDelay, SimulatedAdc};
//!
//! let mut adc = SimulatedAdc::new();
//! adc.set_level(0, 512);
//! adc.set_level(1, 512);
//! adc.set_level(2, 512);
//!
//! let pins = ChannelMap::new(0u8, 1, 2); // CO, NO2, NH3
//! let mut sensor = Mics6814::with_config(
//!     adc,
//!     RecordingDelay::new(),
//!     pins,
//!     SensorConfig::simulation(),
//! ).unwrap();
//!
//! let baselines = sensor.calibrate();
//! assert_eq!(baselines.co, 512);
//!
//! let ppm = sensor.measure(Gas::Co);
//! assert!((ppm - 4.385).abs() < 1e-4);
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod calibration;
pub mod channel;
pub mod concentration;
pub mod config;
pub mod constants;
pub mod errors;
pub mod ratio;
pub mod sensor;
#[cfg(feature = "std")]
pub mod sim;
pub mod stability;
pub mod traits;

// Public API
pub use calibration::{CalibrationProgress, CalibrationStatus, Calibrator};
pub use channel::{Baselines, Channel, ChannelMap, Gas};
pub use concentration::{concentration, GasCurve};
pub use config::{InvalidPolicy, SensorConfig};
pub use errors::{SensorError, SensorResult};
pub use ratio::current_ratio;
pub use sensor::Mics6814;
pub use stability::StabilityTracker;
pub use traits::AnalogReader;

/// Crate version, as published
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
