//! MICS-6814 driver
//!
//! [`Mics6814`] owns the analog reader, the delay provider, the three pin
//! assignments and the per-channel baselines. Everything it does is
//! blocking:
//!
//! | Operation                  | Approximate duration (default config)  |
//! |----------------------------|----------------------------------------|
//! | one calibration tick       | 1159 ms                                |
//! | [`calibrate`]              | at least 10 ticks, unbounded           |
//! | [`get_resistance`]         | 200 ms                                 |
//! | [`measure`]                | 200 ms                                 |
//!
//! ## Typical Flow
//!
//! ```text
//! boot ──► stored baselines? ──yes──► load_calibration_data()
//!                 │                               │
//!                 no                              │
//!                 ▼                               ▼
//!            calibrate() ──► persist baselines ──► measure() every cycle
//! ```
//!
//! [`calibrate`]: Mics6814::calibrate
//! [`get_resistance`]: Mics6814::get_resistance
//! [`measure`]: Mics6814::measure

use embedded_hal::delay::DelayNs;

use crate::calibration::{CalibrationStatus, Calibrator};
use crate::channel::{Baselines, Channel, ChannelMap, Gas};
use crate::concentration::concentration;
use crate::config::SensorConfig;
use crate::constants::{INVALID_MEASUREMENT, WINDOW_SIZE};
use crate::errors::{SensorError, SensorResult};
use crate::ratio::current_ratio;
use crate::traits::AnalogReader;

/// Three-channel MICS-6814 gas sensor
///
/// `A` supplies raw samples, `D` supplies the settle delays. Pins are bound
/// at construction and never change. Baselines start at zero, so a fresh
/// instance must be calibrated or loaded before its readings mean anything.
pub struct Mics6814<A: AnalogReader, D> {
    adc: A,
    delay: D,
    pins: ChannelMap<A::Pin>,
    baselines: Baselines,
    config: SensorConfig,
}

impl<A, D> Mics6814<A, D>
where
    A: AnalogReader,
    D: DelayNs,
{
    /// Driver with the reference timing and sampling counts
    pub fn new(adc: A, delay: D, pins: ChannelMap<A::Pin>) -> Self {
        Self {
            adc,
            delay,
            pins,
            baselines: Baselines::default(),
            config: SensorConfig::default(),
        }
    }

    /// Driver with custom settings
    ///
    /// Fails with [`SensorError::InvalidConfig`] if `config` would never
    /// take a sample or could never report stability.
    pub fn with_config(
        adc: A,
        delay: D,
        pins: ChannelMap<A::Pin>,
        config: SensorConfig,
    ) -> SensorResult<Self> {
        config.validate()?;

        Ok(Self {
            adc,
            delay,
            pins,
            baselines: Baselines::default(),
            config,
        })
    }

    /// Block until all three channels settle, then store their baselines
    ///
    /// Samples once per tick and feeds a [`Calibrator`] with the default
    /// ten-sample window. There is no tick limit: a channel whose noise
    /// never drops inside the tolerance keeps this call spinning forever.
    /// Use [`calibrate_within`](Self::calibrate_within) or drive
    /// [`calibration_step`](Self::calibration_step) yourself if that is not
    /// acceptable.
    pub fn calibrate(&mut self) -> Baselines {
        let mut calibrator: Calibrator<WINDOW_SIZE> = Calibrator::new(self.config.stability_delta);
        log_info!("calibrating, window {} ticks", WINDOW_SIZE);

        loop {
            if let CalibrationStatus::Ready(baselines) = self.calibration_step(&mut calibrator) {
                return baselines;
            }
        }
    }

    /// [`calibrate`](Self::calibrate) with a tick limit
    ///
    /// Returns [`SensorError::CalibrationTimeout`] after `max_ticks` ticks
    /// without convergence. Stored baselines are left untouched in that
    /// case.
    pub fn calibrate_within(&mut self, max_ticks: u32) -> SensorResult<Baselines> {
        let mut calibrator: Calibrator<WINDOW_SIZE> = Calibrator::new(self.config.stability_delta);
        log_info!("calibrating, at most {} ticks", max_ticks);

        for _ in 0..max_ticks {
            if let CalibrationStatus::Ready(baselines) = self.calibration_step(&mut calibrator) {
                return Ok(baselines);
            }
        }

        log_warn!("calibration did not settle within {} ticks", max_ticks);
        Err(SensorError::CalibrationTimeout { ticks: max_ticks })
    }

    /// Run one calibration tick against a caller-owned [`Calibrator`]
    ///
    /// Sleeps and samples exactly like one iteration of
    /// [`calibrate`](Self::calibrate). When the tick converges the new
    /// baselines are stored before returning.
    pub fn calibration_step<const N: usize>(
        &mut self,
        calibrator: &mut Calibrator<N>,
    ) -> CalibrationStatus {
        let readings = self.sample_calibration_tick();
        let status = calibrator.step(readings);

        if let CalibrationStatus::Ready(baselines) = status {
            self.baselines = baselines;
            log_info!(
                "calibrated after {} ticks: NH3 {} CO {} NO2 {}",
                calibrator.ticks(),
                baselines.nh3,
                baselines.co,
                baselines.no2
            );
        }

        status
    }

    /// Sleep one tick interval, then take one averaged reading per channel
    ///
    /// Channels are polled NH3, CO, NO2. Each waits the channel settle
    /// delay and averages `calibration_samples` raw samples, each preceded
    /// by the sample spacing delay.
    pub fn sample_calibration_tick(&mut self) -> ChannelMap<u16> {
        self.delay.delay_ms(self.config.tick_interval_ms);
        ChannelMap::from_fn(|channel| self.calibration_reading(channel))
    }

    fn calibration_reading(&mut self, channel: Channel) -> u16 {
        let pin = self.pins[channel];
        let samples = u32::from(self.config.calibration_samples);

        self.delay.delay_ms(self.config.channel_settle_ms);

        let mut sum: u32 = 0;
        for _ in 0..samples {
            self.delay.delay_ms(self.config.calibration_sample_spacing_ms);
            sum += u32::from(self.adc.read(pin));
        }

        sum.checked_div(samples).unwrap_or(0) as u16
    }

    /// Overwrite the baselines with previously saved values
    ///
    /// No validation: whatever is passed in is used as-is by every later
    /// measurement. Argument order is NH3, CO, NO2.
    pub fn load_calibration_data(&mut self, base_nh3: u16, base_co: u16, base_no2: u16) {
        self.load_baselines(ChannelMap::new(base_co, base_no2, base_nh3));
    }

    /// [`load_calibration_data`](Self::load_calibration_data) taking a map
    pub fn load_baselines(&mut self, baselines: Baselines) {
        log_info!(
            "baselines loaded: NH3 {} CO {} NO2 {}",
            baselines.nh3,
            baselines.co,
            baselines.no2
        );
        self.baselines = baselines;
    }

    /// Current baselines, for persisting
    pub fn baselines(&self) -> Baselines {
        self.baselines
    }

    /// Whether every channel has a non-zero baseline
    pub fn is_calibrated(&self) -> bool {
        self.baselines.all(|&base| base != 0)
    }

    /// Average of `resistance_samples` raw samples from `channel`
    ///
    /// Each sample is followed by the resistance spacing delay. Only the
    /// requested channel is sampled.
    pub fn get_resistance(&mut self, channel: Channel) -> u16 {
        let pin = self.pins[channel];

        let mut sum: u32 = 0;
        let mut count: u32 = 0;
        for _ in 0..self.config.resistance_samples {
            sum += u32::from(self.adc.read(pin));
            count += 1;
            self.delay.delay_ms(self.config.resistance_sample_spacing_ms);
        }

        sum.checked_div(count).unwrap_or(0) as u16
    }

    /// Stored baseline for `channel`
    pub fn get_base_resistance(&self, channel: Channel) -> u16 {
        self.baselines[channel]
    }

    /// Fresh resistance reading divided by the baseline, normalized
    ///
    /// See [`current_ratio`] for the transform and its degenerate cases.
    pub fn get_current_ratio(&mut self, channel: Channel) -> f32 {
        let baseline = self.get_base_resistance(channel);
        let resistance = self.get_resistance(channel);

        current_ratio(resistance, baseline, self.config.adc_full_scale)
    }

    /// Concentration of `gas` in ppm, or `-1.0` if invalid
    ///
    /// What counts as invalid follows the configured
    /// [`InvalidPolicy`](crate::InvalidPolicy): NaN always, infinities by
    /// default. Negative or very large finite values are returned as-is.
    pub fn measure(&mut self, gas: Gas) -> f32 {
        let ratio = self.get_current_ratio(gas.channel());
        let ppm = concentration(gas, ratio);

        if self.config.invalid_policy.rejects(ppm) {
            log_warn!("{} reading invalid (ratio {})", gas, ratio);
            return INVALID_MEASUREMENT;
        }

        ppm
    }

    /// Strict [`measure`](Self::measure)
    ///
    /// Fails before sampling when the channel has no baseline, and after
    /// sampling when the result is NaN or infinite.
    pub fn try_measure(&mut self, gas: Gas) -> SensorResult<f32> {
        let channel = gas.channel();
        if self.get_base_resistance(channel) == 0 {
            return Err(SensorError::Uncalibrated { channel });
        }

        let ppm = concentration(gas, self.get_current_ratio(channel));
        if !ppm.is_finite() {
            return Err(SensorError::InvalidConcentration { gas });
        }

        Ok(ppm)
    }

    /// [`measure`](Self::measure) every gas, in NH3, CO, NO2 order
    pub fn measure_all(&mut self) -> ChannelMap<f32> {
        ChannelMap::from_fn(|channel| self.measure(channel.gas()))
    }

    /// Active configuration
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Pin bound to each channel
    pub fn pins(&self) -> ChannelMap<A::Pin> {
        self.pins
    }

    /// Give back the reader and delay provider
    pub fn release(self) -> (A, D) {
        (self.adc, self.delay)
    }
}
