//! Simulated hardware for tests and host tools
//!
//! - [`SimulatedAdc`]: per-pin constant level plus an optional queue of
//!   scripted samples consumed first
//! - [`RecordingDelay`]: a [`DelayNs`] that returns immediately and adds up
//!   how long it was asked to wait
//!
//! Both are deterministic, so calibration runs can be replayed tick for tick.

use std::collections::{BTreeMap, VecDeque};

use embedded_hal::delay::DelayNs;

use crate::traits::AnalogReader;

#[derive(Debug, Clone, Default)]
struct PinState {
    level: u16,
    queued: VecDeque<u16>,
    reads: usize,
}

/// Scripted analog reader keyed by `u8` pin number
///
/// Unknown pins read as 0. Queued samples are returned in order before the
/// pin falls back to its level.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAdc {
    pins: BTreeMap<u8, PinState>,
}

impl SimulatedAdc {
    /// All pins at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Steady reading for `pin` once its queue is empty
    pub fn set_level(&mut self, pin: u8, level: u16) {
        self.pins.entry(pin).or_default().level = level;
    }

    /// Append samples that `pin` returns before its steady level
    pub fn queue_samples(&mut self, pin: u8, samples: impl IntoIterator<Item = u16>) {
        self.pins.entry(pin).or_default().queued.extend(samples);
    }

    /// Scripted samples not yet consumed on `pin`
    pub fn pending(&self, pin: u8) -> usize {
        self.pins.get(&pin).map_or(0, |state| state.queued.len())
    }

    /// Samples taken from `pin` so far
    pub fn reads(&self, pin: u8) -> usize {
        self.pins.get(&pin).map_or(0, |state| state.reads)
    }

    /// Samples taken across all pins
    pub fn total_reads(&self) -> usize {
        self.pins.values().map(|state| state.reads).sum()
    }
}

impl AnalogReader for SimulatedAdc {
    type Pin = u8;

    fn read(&mut self, pin: u8) -> u16 {
        let state = self.pins.entry(pin).or_default();
        state.reads += 1;
        state.queued.pop_front().unwrap_or(state.level)
    }
}

/// Delay provider that only keeps count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordingDelay {
    elapsed_ns: u64,
    calls: u64,
}

impl RecordingDelay {
    /// Nothing recorded yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requested delay in nanoseconds
    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }

    /// Total requested delay in whole milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }

    /// Number of delay requests, at any granularity
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
        self.calls += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_ns += u64::from(us) * 1_000;
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
        self.calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_samples_come_first() {
        let mut adc = SimulatedAdc::new();
        adc.set_level(3, 500);
        adc.queue_samples(3, [1, 2]);

        assert_eq!(adc.read(3), 1);
        assert_eq!(adc.read(3), 2);
        assert_eq!(adc.read(3), 500);
        assert_eq!(adc.reads(3), 3);
        assert_eq!(adc.pending(3), 0);
    }

    #[test]
    fn unknown_pin_reads_zero() {
        let mut adc = SimulatedAdc::new();
        assert_eq!(adc.read(42), 0);
        assert_eq!(adc.total_reads(), 1);
    }

    #[test]
    fn delay_accumulates() {
        let mut delay = RecordingDelay::new();
        delay.delay_ms(1000);
        delay.delay_us(500);
        delay.delay_ns(250);
        assert_eq!(delay.elapsed_ns(), 1_000_500_250);
        assert_eq!(delay.elapsed_ms(), 1000);
        assert_eq!(delay.calls(), 3);
    }
}
