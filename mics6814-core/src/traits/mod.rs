//! Hardware Seams
//!
//! The driver needs exactly two capabilities from the platform:
//!
//! - [`AnalogReader`] - one raw sample from a named analog input
//! - [`DelayNs`] - block the calling context for a duration
//!
//! The delay is `embedded-hal` 1.0's [`DelayNs`], so every HAL that
//! implements it (esp-idf-hal, embassy, rp2040-hal, linux-embedded-hal)
//! plugs in as-is. There is no ADC trait in `embedded-hal` 1.0, hence the
//! crate's own [`AnalogReader`].
//!
//! ## Design Philosophy
//!
//! Both traits are used through generics, never `dyn`, so the sampling loops
//! monomorphize down to direct HAL calls.

pub mod analog;

pub use analog::{AnalogReader, FnReader};
pub use embedded_hal::delay::DelayNs;
