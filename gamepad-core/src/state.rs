//! ReportState: the canonical gamepad report and its mutators.
//!
//! All mutators normalize their input and edit the report in place. Nothing
//! here touches the transport; see [`Gamepad`](crate::Gamepad) for the
//! auto-send behavior.

use crate::config::{AxisMode, GamepadConfig, SendMode};
use crate::mapping::normalize;
use crate::types::{Axis, GamepadReport, Hat, Side};

/// Outcome of a mutation.
///
/// Out-of-range indices are not errors: the call is ignored and the report is
/// left as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Update {
    /// The report was updated.
    Applied,
    /// The input was out of range; the report is unchanged.
    Ignored,
}

impl Update {
    #[inline]
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Update::Applied)
    }
}

/// Current gamepad report plus the configuration that shapes its mutations.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReportState {
    report: GamepadReport,
    config: GamepadConfig,
}

impl ReportState {
    /// Create a zeroed report with the given configuration.
    #[must_use]
    pub const fn new(config: GamepadConfig) -> Self {
        Self {
            report: GamepadReport::neutral(),
            config,
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GamepadConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GamepadConfig) {
        self.config = config;
    }

    /// Enable or disable manual-send mode.
    pub fn set_manual_send_mode(&mut self, enabled: bool) {
        self.config.send_mode = if enabled {
            SendMode::Manual
        } else {
            SendMode::Auto
        };
    }

    /// Switch the axis setters between signed 8-bit and unsigned 10-bit input.
    pub fn set_axis_is_8bit(&mut self, enabled: bool) {
        self.config.axis_mode = if enabled {
            AxisMode::Signed8Bit
        } else {
            AxisMode::Unsigned10Bit
        };
    }

    /// Press or release the 1-based button `number` (1..=32).
    pub fn button(&mut self, number: u8, pressed: bool) -> Update {
        if self.report.buttons.set_number(number, pressed) {
            Update::Applied
        } else {
            debug!("Ignoring out-of-range button {}", number);
            Update::Ignored
        }
    }

    /// Press or release the zero-based button `index` (0..=31).
    pub fn set_button(&mut self, index: u8, pressed: bool) -> Update {
        match index.checked_add(1) {
            Some(number) => self.button(number, pressed),
            None => {
                debug!("Ignoring out-of-range button index {}", index);
                Update::Ignored
            }
        }
    }

    /// Set one axis. `LeftX`/`RightX` share `x`, `LeftY`/`RightY` share `y`.
    pub fn set_axis(&mut self, axis: Axis, value: i32) -> Update {
        let value = self.normalize(value);
        match axis {
            Axis::LeftX | Axis::RightX => self.report.x = value,
            Axis::LeftY | Axis::RightY => self.report.y = value,
        }
        Update::Applied
    }

    /// Set a stick pair: `Left` writes `x`/`y`, `Right` writes `z`/`rz`.
    pub fn set_position(&mut self, side: Side, x: i32, y: i32) -> Update {
        let (x, y) = (self.normalize(x), self.normalize(y));
        match side {
            Side::Left => {
                self.report.x = x;
                self.report.y = y;
            }
            Side::Right => {
                self.report.z = x;
                self.report.rz = y;
            }
        }
        Update::Applied
    }

    /// Set a trigger: `Left` writes `rx`, `Right` writes `ry`.
    pub fn set_trigger(&mut self, side: Side, value: i32) -> Update {
        let value = self.normalize(value);
        match side {
            Side::Left => self.report.rx = value,
            Side::Right => self.report.ry = value,
        }
        Update::Applied
    }

    /// Set the hat from a direction code (0 = centered, 1..=8 clockwise from up).
    pub fn set_hat(&mut self, code: i8) -> Update {
        match Hat::from_code(code) {
            Some(hat) => self.set_hat_direction(hat),
            None => {
                debug!("Ignoring out-of-range hat code {}", code);
                Update::Ignored
            }
        }
    }

    pub fn set_hat_direction(&mut self, hat: Hat) -> Update {
        self.report.hat = hat;
        Update::Applied
    }

    /// Copy of the current report.
    #[inline]
    #[must_use]
    pub const fn snapshot(&self) -> GamepadReport {
        self.report
    }

    #[inline]
    #[must_use]
    pub const fn report(&self) -> &GamepadReport {
        &self.report
    }

    #[inline]
    fn normalize(&self, value: i32) -> i8 {
        normalize(value, self.config.axis_mode)
    }
}
