//! Sliding-Window Stability Detector
//!
//! ## Overview
//!
//! Calibration needs to know when a channel's raw reading has stopped
//! drifting. [`StabilityTracker`] keeps the last `N` readings of one channel
//! in a fixed ring, maintains their running sum, and flags the channel as
//! stable when the newest reading lands within `delta` counts of the window
//! average. Three trackers (one per channel) make up a
//! [`Calibrator`](crate::Calibrator).
//!
//! ## Design Rationale
//!
//! ### Running Sum
//!
//! Recomputing the average from scratch every tick is `O(N)`. Instead the
//! tracker updates the sum incrementally:
//!
//! ```text
//! sum = sum - window[cursor] + sample    (evict oldest, add newest)
//! window[cursor] = sample
//! cursor = (cursor + 1) % N
//! ```
//!
//! Invariant: `sum` always equals the arithmetic sum of `window`. The
//! accumulator is 32-bit so any practical `N` of 16-bit samples fits.
//!
//! ### Zero-Filled Start
//!
//! The window starts full of zeros, so for the first `N` ticks the average
//! is dragged down by padding. Stability is additionally gated on the window
//! having been filled once ([`is_primed`](StabilityTracker::is_primed)),
//! which makes the warm-up exactly `N` ticks regardless of the reading's
//! magnitude. Without the gate a very low reading (say a constant 1) would
//! sit within `delta` of the padded average on the first tick.
//!
//! ### Memory Layout
//!
//! ```text
//! StabilityTracker<10> memory layout:
//! ┌────┬────┬────┬────┬────┬────┬────┬────┬────┬────┐
//! │ s0 │ s1 │ s2 │ s3 │ s4 │ s5 │ s6 │ s7 │ s8 │ s9 │  ← u16 samples
//! └────┴────┴────┴────┴────┴────┴────┴────┴────┴────┘
//!    ↑
//!    └── cursor: slot the next sample overwrites
//!
//! Total size = 2 * N + 8 (cursor) + 4 (sum) + 4 (count) + 2 (delta) + 1 (flag)
//!            + padding
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use mics6814_core::StabilityTracker;
//!
//! let mut tracker: StabilityTracker<4> = StabilityTracker::new(2);
//!
//! // Warm-up: never stable until the window has been filled once
//! assert!(!tracker.push(300));
//! assert!(!tracker.push(300));
//! assert!(!tracker.push(300));
//!
//! // Fourth sample fills the window; 300 is within 2 of the average 300
//! assert!(tracker.push(300));
//! assert_eq!(tracker.average(), 300);
//! ```

use crate::constants::WINDOW_SIZE;

/// Moving-average stability detector for one channel
///
/// ## Type Parameter
///
/// - `N`: window length in samples. Must be non-zero. Defaults to
///   [`WINDOW_SIZE`] (10 samples, one per calibration tick).
///
/// ## Internal Invariants
///
/// - `cursor < N`
/// - `sum == window.iter().sum()`
/// - `stable` implies `samples >= N`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StabilityTracker<const N: usize = WINDOW_SIZE> {
    /// Ring of the last N samples, zero-filled at start
    window: [u16; N],

    /// Slot the next sample overwrites
    cursor: usize,

    /// Running sum of `window`
    sum: u32,

    /// Exclusive tolerance between newest sample and average
    delta: u16,

    /// Result of the most recent push
    stable: bool,

    /// Samples pushed since construction or reset (saturating)
    samples: u32,
}

impl<const N: usize> StabilityTracker<N> {
    /// Creates a tracker with a zero-filled window
    ///
    /// `delta` is exclusive: a reading exactly `delta` counts away from the
    /// average is not stable.
    pub const fn new(delta: u16) -> Self {
        assert!(N > 0, "stability window must hold at least one sample");

        Self {
            window: [0; N],
            cursor: 0,
            sum: 0,
            delta,
            stable: false,
            samples: 0,
        }
    }

    /// Adds one sample and returns whether the channel is now stable
    ///
    /// Evicts the sample under the cursor, stores the new one, recomputes
    /// stability against the updated average, then advances the cursor.
    pub fn push(&mut self, sample: u16) -> bool {
        let evicted = self.window[self.cursor];

        // evicted is part of sum, so this never underflows
        self.sum = self.sum - u32::from(evicted) + u32::from(sample);
        self.window[self.cursor] = sample;
        self.samples = self.samples.saturating_add(1);

        self.stable = self.is_primed() && self.average().abs_diff(sample) < self.delta;

        self.cursor = (self.cursor + 1) % N;

        self.stable
    }

    /// Integer moving average of the window (`sum / N`)
    pub fn average(&self) -> u16 {
        (self.sum / N as u32) as u16
    }

    /// Running sum of the window contents
    pub fn sum(&self) -> u32 {
        self.sum
    }

    /// Raw window contents in storage order (not chronological)
    pub fn window(&self) -> &[u16; N] {
        &self.window
    }

    /// Slot the next sample overwrites
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Most recent sample, if any has been pushed
    pub fn latest(&self) -> Option<u16> {
        if self.samples == 0 {
            return None;
        }

        let idx = if self.cursor == 0 { N - 1 } else { self.cursor - 1 };
        Some(self.window[idx])
    }

    /// Whether the most recent push was within tolerance of the average
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Whether the window has been completely filled at least once
    pub fn is_primed(&self) -> bool {
        self.samples >= N as u32
    }

    /// Samples pushed since construction or the last reset (saturating)
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Stability tolerance in ADC counts
    pub fn delta(&self) -> u16 {
        self.delta
    }

    /// Back to a zero-filled window, keeping the tolerance
    pub fn reset(&mut self) {
        *self = Self::new(self.delta);
    }
}

impl<const N: usize> Default for StabilityTracker<N> {
    fn default() -> Self {
        Self::new(crate::constants::STABILITY_DELTA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_sum<const N: usize>(tracker: &StabilityTracker<N>) -> u32 {
        tracker.window().iter().map(|&s| u32::from(s)).sum()
    }

    #[test]
    fn starts_zeroed() {
        let tracker: StabilityTracker<5> = StabilityTracker::new(2);
        assert_eq!(tracker.sum(), 0);
        assert_eq!(tracker.average(), 0);
        assert_eq!(tracker.cursor(), 0);
        assert!(tracker.latest().is_none());
        assert!(!tracker.is_stable());
        assert!(!tracker.is_primed());
    }

    #[test]
    fn constant_reading_settles_after_exactly_n_samples() {
        let mut tracker: StabilityTracker<10> = StabilityTracker::new(2);

        for tick in 1..10 {
            assert!(!tracker.push(512), "stable too early at tick {tick}");
        }
        assert!(tracker.push(512));
        assert_eq!(tracker.average(), 512);
    }

    #[test]
    fn low_readings_wait_for_warm_up() {
        // Padded average of 0 is within 2 of 1, but the window is not full
        let mut tracker: StabilityTracker<10> = StabilityTracker::new(2);
        assert!(!tracker.push(1));
        assert_eq!(tracker.average(), 0);
    }

    #[test]
    fn sum_tracks_evictions() {
        let mut tracker: StabilityTracker<3> = StabilityTracker::new(2);
        for sample in [10, 20, 30, 40, 50] {
            tracker.push(sample);
            assert_eq!(tracker.sum(), window_sum(&tracker));
        }
        // 10 and 20 evicted
        assert_eq!(tracker.sum(), 120);
        assert_eq!(tracker.average(), 40);
        assert_eq!(tracker.latest(), Some(50));
    }

    #[test]
    fn cursor_wraps() {
        let mut tracker: StabilityTracker<3> = StabilityTracker::new(2);
        for _ in 0..3 {
            tracker.push(1);
        }
        assert_eq!(tracker.cursor(), 0);
        tracker.push(1);
        assert_eq!(tracker.cursor(), 1);
    }

    #[test]
    fn delta_is_exclusive() {
        let mut tracker: StabilityTracker<2> = StabilityTracker::new(2);
        tracker.push(100);
        // average (100 + 104) / 2 = 102, distance 2: not stable
        assert!(!tracker.push(104));
        // average (104 + 103) / 2 = 103, distance 0: stable
        assert!(tracker.push(103));
    }

    #[test]
    fn noisy_reading_is_unstable() {
        let mut tracker: StabilityTracker<4> = StabilityTracker::new(2);
        for sample in [500, 500, 500, 520] {
            tracker.push(sample);
        }
        // average 505, newest 520
        assert!(!tracker.is_stable());
    }

    #[test]
    fn reset_keeps_delta() {
        let mut tracker: StabilityTracker<2> = StabilityTracker::new(7);
        tracker.push(3);
        tracker.push(3);
        tracker.reset();
        assert_eq!(tracker, StabilityTracker::new(7));
        assert_eq!(tracker.delta(), 7);
    }
}
