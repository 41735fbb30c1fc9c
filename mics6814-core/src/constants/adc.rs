//! ADC Resolution and Reference Values
//!
//! The sensor's three outputs are voltage dividers against a fixed pull-up,
//! sampled by a 10-bit converter.

/// Full-scale ADC reading (counts).
///
/// A 10-bit converter reports 0..=1023. The ratio transform references the
/// divider against this value, so a reading at full scale means the sensing
/// element looks like an open circuit.
///
/// Source: MICS-6814 breakout reference design, 10-bit AVR ADC
pub const ADC_FULL_SCALE: u16 = 1023;

/// ADC resolution (bits).
pub const ADC_RESOLUTION_BITS: u8 = 10;
