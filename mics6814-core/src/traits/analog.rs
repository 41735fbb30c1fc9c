//! Analog Input Abstraction
//!
//! This module provides the [`AnalogReader`] trait, the only way the driver
//! touches the converter. It is deliberately narrower than a full ADC HAL:
//! the sensor needs "give me one raw count from this input", nothing more.
//!
//! ## Design Goals
//!
//! - **Platform Independence**: ESP-IDF oneshot, RP2040, AVR, Linux IIO
//! - **Testability**: Trivial to script for deterministic tests
//! - **Efficiency**: Static dispatch, no allocation
//!
//! ## Implementations
//!
//! - [`SimulatedAdc`](crate::sim::SimulatedAdc): scripted levels for tests
//!   and host tools (`std` feature)
//! - [`FnReader`]: wraps a `FnMut(Pin) -> u16` closure around a HAL driver
//! - `&mut R` for any `R: AnalogReader`, so a shared converter can be lent
//!   to the sensor without giving it away

/// Source of raw analog samples
///
/// ## Implementation Requirements
///
/// - `read()` returns the raw converter count, expected in
///   `0..=full_scale` (1023 for the 10-bit reference design)
/// - Each call takes a fresh sample; the driver does its own averaging
/// - Reads are infallible at this seam. A converter that can fail should
///   retry or substitute its last good value internally
///
/// ## Example Implementation
///
/// ```rust
/// use mics6814_core::AnalogReader;
///
/// struct Mcp3008 {
///     // ... SPI handle
/// }
///
/// impl AnalogReader for Mcp3008 {
///     type Pin = u8;
///
///     fn read(&mut self, pin: u8) -> u16 {
///         // start conversion on `pin`, clock out 10 bits
///         let _ = pin;
///         512 // placeholder
///     }
/// }
/// ```
pub trait AnalogReader {
    /// Identifier of an analog input (GPIO number, mux channel, ...)
    type Pin: Copy;

    /// Take one raw sample from `pin`
    fn read(&mut self, pin: Self::Pin) -> u16;
}

impl<R: AnalogReader + ?Sized> AnalogReader for &mut R {
    type Pin = R::Pin;

    fn read(&mut self, pin: Self::Pin) -> u16 {
        (**self).read(pin)
    }
}

/// Adapter that turns a closure into an [`AnalogReader`]
///
/// ```rust
/// use mics6814_core::traits::{AnalogReader, FnReader};
///
/// let mut reader = FnReader::new(|pin: u8| u16::from(pin) * 100);
/// assert_eq!(reader.read(3), 300);
/// ```
pub struct FnReader<P, F> {
    read: F,
    _pin: core::marker::PhantomData<fn(P)>,
}

impl<P, F> FnReader<P, F>
where
    P: Copy,
    F: FnMut(P) -> u16,
{
    /// Wrap `read`
    pub fn new(read: F) -> Self {
        Self {
            read,
            _pin: core::marker::PhantomData,
        }
    }
}

impl<P, F> AnalogReader for FnReader<P, F>
where
    P: Copy,
    F: FnMut(P) -> u16,
{
    type Pin = P;

    fn read(&mut self, pin: P) -> u16 {
        (self.read)(pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_seven<R: AnalogReader<Pin = u8>>(mut reader: R) -> u16 {
        reader.read(7)
    }

    #[test]
    fn borrowed_reader_forwards() {
        let mut calls = 0u32;
        let mut reader = FnReader::new(|pin: u8| {
            calls += 1;
            u16::from(pin)
        });

        assert_eq!(sample_seven(&mut reader), 7);
        assert_eq!(reader.read(9), 9);
        drop(reader);
        assert_eq!(calls, 2);
    }
}
