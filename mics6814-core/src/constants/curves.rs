//! Concentration Curve Coefficients
//!
//! Each gas follows `ppm = scale(ratio ^ exponent)` where the ratio is the
//! normalized current-to-baseline resistance. Coefficients are fitted to the
//! sensitivity curves in the MICS-6814 datasheet.

// ===== CO (reducing element) =====

/// CO curve exponent. Resistance drops as CO rises.
pub const CO_EXPONENT: f32 = -1.179;

/// CO curve multiplier.
pub const CO_MULTIPLIER: f32 = 4.385;

// ===== NO2 (oxidising element) =====

/// NO2 curve exponent. Resistance rises with NO2.
pub const NO2_EXPONENT: f32 = 1.007;

/// NO2 curve divisor.
pub const NO2_DIVISOR: f32 = 6.855;

// ===== NH3 =====

/// NH3 curve exponent.
pub const NH3_EXPONENT: f32 = -1.67;

/// NH3 curve divisor.
pub const NH3_DIVISOR: f32 = 1.47;
