//! Core gamepad types: Buttons, Hat, GamepadReport and the axis selectors.

use core::ops::BitOr;

/// Number of logical buttons carried by the report.
pub const BUTTON_COUNT: u8 = 32;

/// Size of the encoded report in bytes (without the report ID prefix).
pub const REPORT_SIZE: usize = 11;

/// Report ID the gamepad report is tagged with on the wire.
pub const DEFAULT_REPORT_ID: u8 = 1;

/// Button state represented as a 32-bit bitfield.
///
/// Bit `k` holds logical button `k + 1`, matching HID usages Button 1..32.
///
/// # Example
///
/// ```
/// use gamepad_core::Buttons;
///
/// let mut buttons = Buttons::NONE;
/// buttons.set_number(1, true);
/// buttons.set_number(32, true);
/// assert_eq!(buttons.raw(), 0x8000_0001);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u32);

impl Buttons {
    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Mask for a single 1-based button number, or `None` outside 1..=32.
    #[inline]
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        if number >= 1 && number <= BUTTON_COUNT {
            Some(Self(1 << (number - 1)))
        } else {
            None
        }
    }

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Check if the 1-based button `number` is pressed.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self, number: u8) -> bool {
        match Self::from_number(number) {
            Some(mask) => self.contains(mask),
            None => false,
        }
    }

    /// Set or clear button(s).
    #[inline]
    pub fn set(&mut self, button: Buttons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Set or clear the 1-based button `number`.
    ///
    /// Returns `false` and leaves every bit untouched when `number` is outside 1..=32.
    #[inline]
    pub fn set_number(&mut self, number: u8, pressed: bool) -> bool {
        match Self::from_number(number) {
            Some(mask) => {
                self.set(mask, pressed);
                true
            }
            None => false,
        }
    }

    /// Get the raw u32 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Zero-based button indices for [`Gamepad::set_button`](crate::Gamepad::set_button).
///
/// Several names alias the same index so Xbox, Nintendo and PlayStation style
/// labels all work.
pub mod button {
    pub const A: u8 = 0;
    pub const SOUTH: u8 = 0;
    pub const CROSS: u8 = 0;

    pub const B: u8 = 1;
    pub const EAST: u8 = 1;
    pub const CIRCLE: u8 = 1;

    pub const C: u8 = 2;

    pub const X: u8 = 3;
    pub const NORTH: u8 = 3;
    pub const TRIANGLE: u8 = 3;

    pub const Y: u8 = 4;
    pub const WEST: u8 = 4;
    pub const SQUARE: u8 = 4;

    pub const Z: u8 = 5;
    pub const TL: u8 = 6; // Left bumper
    pub const TR: u8 = 7; // Right bumper
    pub const TL2: u8 = 8;
    pub const TR2: u8 = 9;
    pub const SELECT: u8 = 10;
    pub const START: u8 = 11;
    pub const MODE: u8 = 12; // Home/Guide
    pub const THUMBL: u8 = 13; // Left stick press
    pub const THUMBR: u8 = 14; // Right stick press
}

/// Direction codes accepted by [`Gamepad::set_hat`](crate::Gamepad::set_hat).
pub mod dpad {
    pub const RELEASE: i8 = 0;
    pub const UP: i8 = 1;
    pub const UPPER_RIGHT: i8 = 2;
    pub const RIGHT: i8 = 3;
    pub const LOWER_RIGHT: i8 = 4;
    pub const DOWN: i8 = 5;
    pub const LOWER_LEFT: i8 = 6;
    pub const LEFT: i8 = 7;
    pub const UPPER_LEFT: i8 = 8;
}

/// 8-way hat switch position.
///
/// The discriminant is the wire value: 0 is the null (centered) state and
/// 1..=8 run clockwise starting at up.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Hat {
    #[default]
    Centered = 0,
    Up = 1,
    UpRight = 2,
    Right = 3,
    DownRight = 4,
    Down = 5,
    DownLeft = 6,
    Left = 7,
    UpLeft = 8,
}

impl Hat {
    /// Map a direction code (see [`dpad`]) to a hat position.
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            0 => Some(Self::Centered),
            1 => Some(Self::Up),
            2 => Some(Self::UpRight),
            3 => Some(Self::Right),
            4 => Some(Self::DownRight),
            5 => Some(Self::Down),
            6 => Some(Self::DownLeft),
            7 => Some(Self::Left),
            8 => Some(Self::UpLeft),
            _ => None,
        }
    }

    /// Wire value of this position.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Single axis selector used by the per-axis setters.
///
/// The report only has one x/y pair for these: `LeftX` and `RightX` both land
/// in `x`, `LeftY` and `RightY` both land in `y`. Use
/// [`Gamepad::set_position_r`](crate::Gamepad::set_position_r) to drive `z`/`rz`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    LeftX,
    LeftY,
    RightX,
    RightY,
}

/// Left/right selector for stick pairs and triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

/// HID gamepad report.
///
/// This matches the report descriptor the firmware registers.
/// Total size: 11 bytes (axes: 4x1, triggers: 2x1, hat: 1, buttons: 4)
///
/// All axis and trigger values stay within [-127, 127].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadReport {
    /// Left stick X (or the shared X of the per-axis setters)
    pub x: i8,
    /// Left stick Y (or the shared Y of the per-axis setters)
    pub y: i8,
    /// Right stick X
    pub z: i8,
    /// Right stick Y
    pub rz: i8,
    /// Left trigger
    pub rx: i8,
    /// Right trigger
    pub ry: i8,
    pub hat: Hat,
    pub buttons: Buttons,
}

impl GamepadReport {
    /// Size of the report in bytes.
    pub const SIZE: usize = REPORT_SIZE;

    /// Neutral/zero report: sticks and triggers at 0, hat centered, no buttons.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            x: 0,
            y: 0,
            z: 0,
            rz: 0,
            rx: 0,
            ry: 0,
            hat: Hat::Centered,
            buttons: Buttons::NONE,
        }
    }

    /// Convert the report to its wire bytes.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; Self::SIZE] {
        let buttons_bytes = self.buttons.raw().to_le_bytes();
        [
            self.x as u8,
            self.y as u8,
            self.z as u8,
            self.rz as u8,
            self.rx as u8,
            self.ry as u8,
            self.hat.code(),
            buttons_bytes[0],
            buttons_bytes[1],
            buttons_bytes[2],
            buttons_bytes[3],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_from_number_bounds() {
        assert_eq!(Buttons::from_number(0), None);
        assert_eq!(Buttons::from_number(1), Some(Buttons(1)));
        assert_eq!(Buttons::from_number(32), Some(Buttons(0x8000_0000)));
        assert_eq!(Buttons::from_number(33), None);
    }

    #[test]
    fn test_buttons_set_number_out_of_range_keeps_bits() {
        let mut buttons = Buttons(0xA5A5_5A5A);
        assert!(!buttons.set_number(0, true));
        assert!(!buttons.set_number(33, false));
        assert!(!buttons.set_number(255, true));
        assert_eq!(buttons.raw(), 0xA5A5_5A5A);
    }

    #[test]
    fn test_buttons_bitwise_or() {
        let a = Buttons::from_number(1).unwrap();
        let b = Buttons::from_number(2).unwrap();
        let buttons = a | b;
        assert!(buttons.contains(a));
        assert!(buttons.is_pressed(2));
        assert!(!buttons.is_pressed(3));
    }

    #[test]
    fn test_hat_codes() {
        for code in 0..=8i8 {
            let hat = Hat::from_code(code).unwrap();
            assert_eq!(hat.code(), code as u8);
        }
        assert_eq!(Hat::from_code(-1), None);
        assert_eq!(Hat::from_code(9), None);
        assert_eq!(Hat::from_code(dpad::UPPER_LEFT), Some(Hat::UpLeft));
    }

    #[test]
    fn test_report_neutral_is_default() {
        assert_eq!(GamepadReport::neutral(), GamepadReport::default());
        assert_eq!(GamepadReport::neutral().as_bytes(), [0u8; REPORT_SIZE]);
    }

    #[test]
    fn test_report_byte_layout() {
        let report = GamepadReport {
            x: -127,
            y: 127,
            z: 1,
            rz: -1,
            rx: 64,
            ry: -64,
            hat: Hat::DownLeft,
            buttons: Buttons(0x8000_0201),
        };
        assert_eq!(
            report.as_bytes(),
            [0x81, 0x7F, 0x01, 0xFF, 0x40, 0xC0, 6, 0x01, 0x02, 0x00, 0x80]
        );
    }
}
