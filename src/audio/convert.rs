//! Audio sample conversion utilities

use super::format::{INT24_MAX, INT24_MIN};

/// Map an integer in `min..=max` onto `-1.0..=1.0`.
///
/// Exact at both endpoints: `min` gives -1.0 and `max` gives 1.0.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn normalize(value: i32, min: i32, max: i32) -> f32 {
    let offset = i64::from(value) - i64::from(min);
    let span = i64::from(max) - i64::from(min);
    (offset as f32 / span as f32) * 2.0 - 1.0
}

/// Normalize an unsigned 8-bit sample
#[must_use]
pub fn u8_to_f32(raw: u8) -> f32 {
    normalize(i32::from(raw), 0, i32::from(u8::MAX))
}

/// Normalize a signed 16-bit sample
#[must_use]
pub fn i16_to_f32(raw: i16) -> f32 {
    normalize(i32::from(raw), i32::from(i16::MIN), i32::from(i16::MAX))
}

/// Normalize a 24-bit sample that has already been sign-extended
#[must_use]
pub fn i24_to_f32(raw: i32) -> f32 {
    normalize(raw, INT24_MIN, INT24_MAX)
}

/// Sign-extend a zero-extended 24-bit value into a full `i32`.
///
/// Bit 23 is replicated into bits 24..31; bits above 23 in the input are ignored.
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn sign_extend_24(raw: u32) -> i32 {
    let raw = raw & 0x00FF_FFFF;
    if raw & 0x0080_0000 == 0 {
        raw as i32
    } else {
        (raw | 0xFF00_0000) as i32
    }
}
