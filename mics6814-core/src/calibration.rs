//! Calibration convergence
//!
//! [`Calibrator`] is the resumable form of the calibration loop. It owns one
//! [`StabilityTracker`] per channel and consumes one set of readings per
//! call to [`step`](Calibrator::step). It does no I/O and never sleeps, so
//! the caller decides how readings are taken and when to give up.
//!
//! ```text
//!   readings ──► step() ──► Calibrating(progress)   (feed the next tick)
//!                      └──► Ready(baselines)        (all three stable)
//! ```
//!
//! The blocking [`Mics6814::calibrate`](crate::Mics6814::calibrate) is a thin
//! loop around this type.

use heapless::Vec;

use crate::channel::{Baselines, Channel, ChannelMap};
use crate::constants::{STABILITY_DELTA, WINDOW_SIZE};
use crate::stability::StabilityTracker;

/// Snapshot of an unfinished calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationProgress {
    /// Ticks consumed so far
    pub tick: u32,
    /// Per-channel result of the latest tick
    pub stable: ChannelMap<bool>,
    /// Per-channel moving average after the latest tick
    pub averages: ChannelMap<u16>,
}

impl CalibrationProgress {
    /// Channels that were not stable on the latest tick
    pub fn unstable_channels(&self) -> Vec<Channel, 3> {
        let mut unstable = Vec::new();
        for (channel, &stable) in self.stable.iter() {
            if !stable {
                // capacity equals the channel count
                let _ = unstable.push(channel);
            }
        }
        unstable
    }
}

/// Outcome of one calibration tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationStatus {
    /// At least one channel is still settling
    Calibrating(CalibrationProgress),
    /// All channels stable on the same tick; moving averages per channel
    Ready(Baselines),
}

impl CalibrationStatus {
    /// Baselines, once converged
    pub fn baselines(&self) -> Option<Baselines> {
        match self {
            CalibrationStatus::Ready(baselines) => Some(*baselines),
            CalibrationStatus::Calibrating(_) => None,
        }
    }

    /// Whether calibration has converged
    pub fn is_ready(&self) -> bool {
        matches!(self, CalibrationStatus::Ready(_))
    }
}

/// Resumable three-channel calibration state
///
/// Create one per calibration run and drop it afterwards; the windows are
/// only meaningful while calibrating.
#[derive(Debug, Clone)]
pub struct Calibrator<const N: usize = WINDOW_SIZE> {
    trackers: ChannelMap<StabilityTracker<N>>,
    ticks: u32,
}

impl<const N: usize> Calibrator<N> {
    /// Fresh calibrator with zero-filled windows
    pub fn new(stability_delta: u16) -> Self {
        Self {
            trackers: ChannelMap::from_fn(|_| StabilityTracker::new(stability_delta)),
            ticks: 0,
        }
    }

    /// Feed one averaged reading per channel
    ///
    /// Returns [`CalibrationStatus::Ready`] with each channel's moving
    /// average when every channel is stable on this tick. Calling `step`
    /// again after that keeps sliding the windows.
    pub fn step(&mut self, readings: ChannelMap<u16>) -> CalibrationStatus {
        self.ticks = self.ticks.saturating_add(1);

        for channel in Channel::ALL {
            self.trackers[channel].push(readings[channel]);
        }

        let stable = ChannelMap::from_fn(|channel| self.trackers[channel].is_stable());
        let averages = ChannelMap::from_fn(|channel| self.trackers[channel].average());

        log_debug!(
            "calibration tick {}: NH3 {}/{} CO {}/{} NO2 {}/{}",
            self.ticks,
            readings.nh3,
            averages.nh3,
            readings.co,
            averages.co,
            readings.no2,
            averages.no2
        );

        if stable.all(|&s| s) {
            return CalibrationStatus::Ready(averages);
        }

        CalibrationStatus::Calibrating(CalibrationProgress {
            tick: self.ticks,
            stable,
            averages,
        })
    }

    /// Ticks consumed since construction or the last reset
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Window state for one channel
    pub fn tracker(&self, channel: Channel) -> &StabilityTracker<N> {
        &self.trackers[channel]
    }

    /// Start over with zero-filled windows
    pub fn reset(&mut self) {
        for channel in Channel::ALL {
            self.trackers[channel].reset();
        }
        self.ticks = 0;
    }
}

impl<const N: usize> Default for Calibrator<N> {
    fn default() -> Self {
        Self::new(STABILITY_DELTA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_readings_converge_after_window() {
        let mut calibrator: Calibrator = Calibrator::new(2);
        let readings = ChannelMap::splat(512);

        for tick in 1..WINDOW_SIZE as u32 {
            match calibrator.step(readings) {
                CalibrationStatus::Calibrating(progress) => assert_eq!(progress.tick, tick),
                CalibrationStatus::Ready(_) => panic!("converged early at tick {tick}"),
            }
        }

        let status = calibrator.step(readings);
        assert_eq!(status, CalibrationStatus::Ready(ChannelMap::splat(512)));
        assert_eq!(calibrator.ticks(), WINDOW_SIZE as u32);
    }

    #[test]
    fn one_noisy_channel_holds_back_the_rest() {
        let mut calibrator: Calibrator<4> = Calibrator::new(2);

        let mut last = None;
        for tick in 0..8u16 {
            // NO2 keeps climbing by 10 counts per tick
            let readings = ChannelMap::new(300, 100 + tick * 10, 700);
            last = Some(calibrator.step(readings));
        }

        let Some(CalibrationStatus::Calibrating(progress)) = last else {
            panic!("NO2 should still be settling");
        };
        assert!(progress.stable.co);
        assert!(progress.stable.nh3);
        assert!(!progress.stable.no2);
        assert_eq!(progress.unstable_channels().as_slice(), &[Channel::No2]);
    }

    #[test]
    fn baselines_are_moving_averages() {
        let mut calibrator: Calibrator<4> = Calibrator::new(3);

        // Settle on 400 with +-1 jitter on CO
        let co = [401, 399, 400, 401];
        let mut status = None;
        for sample in co {
            status = Some(calibrator.step(ChannelMap::new(sample, 250, 800)));
        }

        // CO window sums to 1601, average 400
        let baselines = status.and_then(|s| s.baselines()).expect("should converge");
        assert_eq!(baselines, ChannelMap::new(400, 250, 800));
    }

    #[test]
    fn reset_restarts_warm_up() {
        let mut calibrator: Calibrator<2> = Calibrator::new(2);
        calibrator.step(ChannelMap::splat(10));
        assert!(calibrator.step(ChannelMap::splat(10)).is_ready());

        calibrator.reset();
        assert_eq!(calibrator.ticks(), 0);
        assert!(!calibrator.step(ChannelMap::splat(10)).is_ready());
    }
}
