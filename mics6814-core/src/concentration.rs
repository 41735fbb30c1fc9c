//! Ratio-to-ppm conversion
//!
//! Each gas is a straight line on the datasheet's log-log sensitivity plot,
//! i.e. a power law in the resistance ratio:
//!
//! | Gas | Curve                        |
//! |-----|------------------------------|
//! | CO  | `ratio ^ -1.179 * 4.385`     |
//! | NO2 | `ratio ^  1.007 / 6.855`     |
//! | NH3 | `ratio ^ -1.67  / 1.47`      |
//!
//! No clamping is applied. Degenerate ratios propagate as NaN or infinity;
//! deciding what counts as invalid is left to the caller (see
//! [`InvalidPolicy`](crate::InvalidPolicy)).

use libm::powf;

use crate::channel::Gas;
use crate::constants::curves::{
    CO_EXPONENT, CO_MULTIPLIER, NH3_DIVISOR, NH3_EXPONENT, NO2_DIVISOR, NO2_EXPONENT,
};

/// How the powered ratio is scaled into ppm
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveScale {
    /// `ratio^e * k`
    Multiply(f32),
    /// `ratio^e / k`
    Divide(f32),
}

/// Power-law sensitivity curve for one gas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasCurve {
    /// Exponent applied to the ratio
    pub exponent: f32,
    /// Scaling applied after the power
    pub scale: CurveScale,
}

impl GasCurve {
    /// Datasheet curve for `gas`
    pub const fn for_gas(gas: Gas) -> Self {
        match gas {
            Gas::Co => Self {
                exponent: CO_EXPONENT,
                scale: CurveScale::Multiply(CO_MULTIPLIER),
            },
            Gas::No2 => Self {
                exponent: NO2_EXPONENT,
                scale: CurveScale::Divide(NO2_DIVISOR),
            },
            Gas::Nh3 => Self {
                exponent: NH3_EXPONENT,
                scale: CurveScale::Divide(NH3_DIVISOR),
            },
        }
    }

    /// Concentration in ppm for `ratio`
    pub fn evaluate(&self, ratio: f32) -> f32 {
        let powered = powf(ratio, self.exponent);
        match self.scale {
            CurveScale::Multiply(k) => powered * k,
            CurveScale::Divide(k) => powered / k,
        }
    }
}

/// Concentration in ppm of `gas` at resistance `ratio`
pub fn concentration(gas: Gas, ratio: f32) -> f32 {
    GasCurve::for_gas(gas).evaluate(ratio)
}
