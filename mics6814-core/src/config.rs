//! Runtime configuration
//!
//! Defaults reproduce the reference timing: one calibration tick per
//! second, three 1 ms-spaced samples per channel per tick, and 100 samples
//! 2 ms apart for every resistance reading. Host-side tools usually want
//! [`SensorConfig::simulation`], which keeps the sampling counts but drops
//! every delay.

use crate::constants::{
    ADC_FULL_SCALE, CALIBRATION_SAMPLES, CALIBRATION_SAMPLE_SPACING_MS, CHANNEL_SETTLE_MS,
    RESISTANCE_SAMPLES, RESISTANCE_SAMPLE_SPACING_MS, STABILITY_DELTA, TICK_INTERVAL_MS,
};
use crate::errors::{SensorError, SensorResult};

/// Which concentration results [`Mics6814::measure`](crate::Mics6814::measure)
/// replaces with the `-1.0` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidPolicy {
    /// Only NaN is invalid; infinite results are returned as-is
    NanOnly,
    /// NaN and both infinities are invalid
    #[default]
    NonFinite,
}

impl InvalidPolicy {
    /// Whether `value` should be reported as invalid under this policy
    pub fn rejects(self, value: f32) -> bool {
        match self {
            InvalidPolicy::NanOnly => value.is_nan(),
            InvalidPolicy::NonFinite => !value.is_finite(),
        }
    }
}

/// Sampling, timing and validity settings for one sensor instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    /// Exclusive stability tolerance (ADC counts)
    pub stability_delta: u16,

    /// Delay before every calibration tick (ms)
    pub tick_interval_ms: u32,

    /// Delay before sampling each channel within a tick (ms)
    pub channel_settle_ms: u32,

    /// Samples averaged per channel per calibration tick
    pub calibration_samples: u8,

    /// Delay before each calibration sample (ms)
    pub calibration_sample_spacing_ms: u32,

    /// Samples averaged into one resistance reading
    pub resistance_samples: u16,

    /// Delay after each resistance sample (ms)
    pub resistance_sample_spacing_ms: u32,

    /// Full-scale ADC count used by the ratio transform
    pub adc_full_scale: u16,

    /// Sentinel policy for [`measure`](crate::Mics6814::measure)
    pub invalid_policy: InvalidPolicy,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            stability_delta: STABILITY_DELTA,
            tick_interval_ms: TICK_INTERVAL_MS,
            channel_settle_ms: CHANNEL_SETTLE_MS,
            calibration_samples: CALIBRATION_SAMPLES,
            calibration_sample_spacing_ms: CALIBRATION_SAMPLE_SPACING_MS,
            resistance_samples: RESISTANCE_SAMPLES,
            resistance_sample_spacing_ms: RESISTANCE_SAMPLE_SPACING_MS,
            adc_full_scale: ADC_FULL_SCALE,
            invalid_policy: InvalidPolicy::NonFinite,
        }
    }
}

impl SensorConfig {
    /// Default sample counts with every delay set to zero
    ///
    /// For simulated hardware and replaying recorded traces.
    pub fn simulation() -> Self {
        Self {
            tick_interval_ms: 0,
            channel_settle_ms: 0,
            calibration_sample_spacing_ms: 0,
            resistance_sample_spacing_ms: 0,
            ..Self::default()
        }
    }

    /// Same settings with a different sentinel policy
    pub fn with_invalid_policy(mut self, policy: InvalidPolicy) -> Self {
        self.invalid_policy = policy;
        self
    }

    /// Total delay spent by one calibration tick (ms)
    pub fn tick_duration_ms(&self) -> u64 {
        let per_channel = u64::from(self.channel_settle_ms)
            + u64::from(self.calibration_samples) * u64::from(self.calibration_sample_spacing_ms);
        u64::from(self.tick_interval_ms) + 3 * per_channel
    }

    /// Reject settings that would never sample or always divide by zero
    pub fn validate(&self) -> SensorResult<()> {
        if self.calibration_samples == 0 {
            return Err(SensorError::InvalidConfig {
                reason: "calibration_samples must be non-zero",
            });
        }

        if self.resistance_samples == 0 {
            return Err(SensorError::InvalidConfig {
                reason: "resistance_samples must be non-zero",
            });
        }

        if self.stability_delta == 0 {
            // |avg - x| < 0 can never hold
            return Err(SensorError::InvalidConfig {
                reason: "stability_delta must be non-zero",
            });
        }

        if self.adc_full_scale == 0 {
            return Err(SensorError::InvalidConfig {
                reason: "adc_full_scale must be non-zero",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_timing() {
        let config = SensorConfig::default();
        assert!(config.validate().is_ok());
        // 1000 + 3 * (50 + 3 * 1)
        assert_eq!(config.tick_duration_ms(), 1159);
    }

    #[test]
    fn simulation_has_no_delays() {
        let config = SensorConfig::simulation();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_duration_ms(), 0);
        assert_eq!(config.resistance_samples, RESISTANCE_SAMPLES);
    }

    #[test]
    fn zero_counts_rejected() {
        let config = SensorConfig { resistance_samples: 0, ..SensorConfig::default() };
        assert!(matches!(config.validate(), Err(SensorError::InvalidConfig { .. })));

        let config = SensorConfig { stability_delta: 0, ..SensorConfig::default() };
        assert!(matches!(config.validate(), Err(SensorError::InvalidConfig { .. })));
    }

    #[test]
    fn policies_differ_on_infinity() {
        assert!(InvalidPolicy::NanOnly.rejects(f32::NAN));
        assert!(!InvalidPolicy::NanOnly.rejects(f32::INFINITY));
        assert!(InvalidPolicy::NonFinite.rejects(f32::NAN));
        assert!(InvalidPolicy::NonFinite.rejects(f32::NEG_INFINITY));
        assert!(!InvalidPolicy::NonFinite.rejects(4.385));
    }
}
