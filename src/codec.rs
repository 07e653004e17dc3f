//! Conversions between caller-side value widths and the driver's native
//! grayscale width.
//!
//! The TLC5955 stages 16-bit grayscale words, but callers address the array
//! with booleans and 8-bit values as well. All conversions are linear,
//! exact at both endpoints and monotonic.

/// Largest native value representable at `bit_depth` bits.
pub const fn full_scale(bit_depth: u32) -> u16 {
    ((1u32 << bit_depth) - 1) as u16
}

/// Rescales an 8-bit value to `bit_depth` bits.
///
/// `0` maps to `0` and `255` maps to [`full_scale`] with no rounding error.
pub const fn from_u8(value: u8, bit_depth: u32) -> u16 {
    (value as u32 * full_scale(bit_depth) as u32 / u8::MAX as u32) as u16
}

/// Maps `true` to [`full_scale`] and `false` to zero.
pub const fn from_bool(value: bool, bit_depth: u32) -> u16 {
    if value {
        full_scale(bit_depth)
    } else {
        0
    }
}

/// Clamps an already-native value to the range of `bit_depth` bits.
///
/// Values beyond full scale are clamped rather than passed through, so a
/// variant with a narrower grayscale word never receives out-of-range data.
pub const fn clamp(value: u16, bit_depth: u32) -> u16 {
    let max = full_scale(bit_depth);
    if value > max {
        max
    } else {
        value
    }
}
