//! Normalized resistance ratio
//!
//! Each sensing element sits in a voltage divider against a fixed pull-up,
//! so the ADC count `r` is proportional to `Rs / (Rs + Rpullup)`. Solving for
//! `Rs` and dividing by the clean-air value gives
//!
//! ```text
//!          r     (full - base)
//! ratio = ---- * -------------
//!         base    (full - r)
//! ```
//!
//! which is `Rs / R0` with the pull-up cancelled out.

/// Current-to-baseline resistance ratio for one channel
///
/// Evaluated left to right in `f32`. Degenerate inputs are not rejected:
/// a zero `baseline` or a `resistance` at `full_scale` yields infinity or
/// NaN, which the concentration step turns into an invalid reading.
pub fn current_ratio(resistance: u16, baseline: u16, full_scale: u16) -> f32 {
    let resistance = f32::from(resistance);
    let baseline = f32::from(baseline);
    let full_scale = f32::from(full_scale);

    resistance / baseline * (full_scale - baseline) / (full_scale - resistance)
}
