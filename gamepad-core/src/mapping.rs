//! Axis value mapping into the report's signed 8-bit range.
//!
//! Two input conventions are supported (see [`AxisMode`]): signed 8-bit values
//! that are saturated to [-127, 127], and legacy unsigned 10-bit values
//! (0..=1023) that are rescaled linearly onto the same range.

use crate::config::AxisMode;

/// Smallest value an axis can carry. -128 is never produced.
pub const AXIS_MIN: i8 = -127;

/// Largest value an axis can carry.
pub const AXIS_MAX: i8 = 127;

/// Upper bound of the unsigned 10-bit input convention.
pub const UNSIGNED_AXIS_MAX: i32 = 1023;

/// Map a caller-supplied axis value into the report range.
///
/// # Example
///
/// ```
/// use gamepad_core::{normalize, AxisMode};
///
/// assert_eq!(normalize(0, AxisMode::Unsigned10Bit), -127);
/// assert_eq!(normalize(512, AxisMode::Unsigned10Bit), 0);
/// assert_eq!(normalize(200, AxisMode::Signed8Bit), 127);
/// ```
#[inline]
#[must_use]
pub fn normalize(value: i32, mode: AxisMode) -> i8 {
    match mode {
        AxisMode::Signed8Bit => value.clamp(AXIS_MIN as i32, AXIS_MAX as i32) as i8,
        AxisMode::Unsigned10Bit => map_range(
            value.clamp(0, UNSIGNED_AXIS_MAX),
            0,
            UNSIGNED_AXIS_MAX,
            AXIS_MIN as i32,
            AXIS_MAX as i32,
        ) as i8,
    }
}

/// Linear interpolation with integer division (truncates toward zero).
#[inline]
const fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
