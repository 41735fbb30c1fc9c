//! Shared fixtures for integration tests
//!
//! - A fixed pin map and rig builders around the simulated ADC
//! - Tick-level scripting helpers (one calibration tick = 3 raw samples)
//! - A small deterministic noise source

#![allow(dead_code)]

use mics6814_core::sim::{RecordingDelay, SimulatedAdc};
use mics6814_core::{ChannelMap, Mics6814, SensorConfig};

pub const CO_PIN: u8 = 0;
pub const NO2_PIN: u8 = 1;
pub const NH3_PIN: u8 = 2;

/// Raw samples averaged per channel per calibration tick (default config)
pub const SAMPLES_PER_TICK: usize = 3;

pub type SimSensor = Mics6814<SimulatedAdc, RecordingDelay>;

pub fn pins() -> ChannelMap<u8> {
    ChannelMap::new(CO_PIN, NO2_PIN, NH3_PIN)
}

/// Simulated ADC with a steady level per channel
pub fn adc_with_levels(levels: ChannelMap<u16>) -> SimulatedAdc {
    let mut adc = SimulatedAdc::new();
    adc.set_level(CO_PIN, levels.co);
    adc.set_level(NO2_PIN, levels.no2);
    adc.set_level(NH3_PIN, levels.nh3);
    adc
}

/// Sensor with reference timing; delays are recorded, not slept
pub fn rig(adc: SimulatedAdc) -> SimSensor {
    Mics6814::new(adc, RecordingDelay::new(), pins())
}

/// Sensor with a custom configuration
pub fn rig_with(adc: SimulatedAdc, config: SensorConfig) -> SimSensor {
    Mics6814::with_config(adc, RecordingDelay::new(), pins(), config)
        .expect("test configuration should be valid")
}

/// Queue one reading per calibration tick on `pin`
///
/// Each value is repeated for every raw sample of the tick, so the tick
/// average is exactly that value.
pub fn queue_ticks(adc: &mut SimulatedAdc, pin: u8, ticks: &[u16]) {
    for &value in ticks {
        adc.queue_samples(pin, [value; SAMPLES_PER_TICK]);
    }
}

/// Linear congruential noise, reproducible across runs
pub struct Jitter {
    seed: u32,
}

impl Jitter {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    fn random_float(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.seed as f32) / (u32::MAX as f32)
    }

    /// `center` plus a uniform offset in `-amplitude..=amplitude`
    pub fn sample(&mut self, center: u16, amplitude: u16) -> u16 {
        let span = 2 * i32::from(amplitude) + 1;
        let offset = ((self.random_float() * span as f32) as i32).min(span - 1) - i32::from(amplitude);
        (i32::from(center) + offset).clamp(0, 1023) as u16
    }

    pub fn series(&mut self, center: u16, amplitude: u16, len: usize) -> Vec<u16> {
        (0..len).map(|_| self.sample(center, amplitude)).collect()
    }
}

pub fn approx_eq(a: f32, b: f32, rel: f32) -> bool {
    (a - b).abs() <= rel * b.abs().max(1.0)
}
