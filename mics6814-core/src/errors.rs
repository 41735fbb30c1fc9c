//! Error Types for Sensor Operations
//!
//! ## Design Philosophy
//!
//! The sensor's native contract is sentinel based: [`Mics6814::measure`]
//! returns `-1.0` for an invalid concentration and [`Mics6814::calibrate`]
//! blocks until the readings settle. This type backs the strict
//! counterparts that callers reach for when they want to branch on failure:
//!
//! - [`Mics6814::try_measure`] reports why a concentration is unusable.
//! - [`Mics6814::calibrate_within`] gives up after a caller-chosen tick count.
//! - [`Mics6814::with_config`] rejects configurations that would divide by
//!   zero or never take a sample.
//!
//! Like the rest of the crate the errors are built for small targets: every
//! variant is inline data (`&'static str` at most), the enum is `Copy`, and
//! nothing allocates.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use mics6814_core::{Gas, SensorError};
//!
//! fn report(result: Result<f32, SensorError>) {
//!     match result {
//!         Ok(_ppm) => {
//!             // publish(ppm);
//!         }
//!         Err(SensorError::Uncalibrated { .. }) => {
//!             // run calibration or load stored baselines first
//!         }
//!         Err(SensorError::InvalidConcentration { gas: Gas::No2 }) => {
//!             // NO2 rail reading saturated the ADC
//!         }
//!         Err(_) => {
//!             // log and retry on the next cycle
//!         }
//!     }
//! }
//! # report(Ok(1.0));
//! ```
//!
//! [`Mics6814::measure`]: crate::Mics6814::measure
//! [`Mics6814::calibrate`]: crate::Mics6814::calibrate
//! [`Mics6814::try_measure`]: crate::Mics6814::try_measure
//! [`Mics6814::calibrate_within`]: crate::Mics6814::calibrate_within
//! [`Mics6814::with_config`]: crate::Mics6814::with_config

use thiserror_no_std::Error;

use crate::channel::{Channel, Gas};

/// Result type for sensor operations
pub type SensorResult<T> = Result<T, SensorError>;

/// Sensor errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Baseline resistance is zero, so the ratio would divide by zero
    #[error("Channel {channel} has no baseline resistance")]
    Uncalibrated {
        /// Channel whose baseline is missing
        channel: Channel,
    },

    /// Power-law curve produced NaN or infinity
    #[error("Concentration for {gas} is not a finite number")]
    InvalidConcentration {
        /// Gas species being measured
        gas: Gas,
    },

    /// Readings did not settle within the allowed number of ticks
    #[error("Calibration did not converge within {ticks} ticks")]
    CalibrationTimeout {
        /// Ticks spent before giving up
        ticks: u32,
    },

    /// Configuration rejected at construction time
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Which setting was rejected
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Uncalibrated { channel } =>
                defmt::write!(fmt, "Channel {} uncalibrated", channel),
            Self::InvalidConcentration { gas } =>
                defmt::write!(fmt, "Invalid {} concentration", gas),
            Self::CalibrationTimeout { ticks } =>
                defmt::write!(fmt, "Calibration timeout after {} ticks", ticks),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_small() {
        assert!(core::mem::size_of::<SensorError>() <= 24);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_names_the_channel() {
        let err = SensorError::Uncalibrated { channel: Channel::No2 };
        assert_eq!(err.to_string(), "Channel NO2 has no baseline resistance");

        let err = SensorError::CalibrationTimeout { ticks: 64 };
        assert_eq!(err.to_string(), "Calibration did not converge within 64 ticks");
    }
}
