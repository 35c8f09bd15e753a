//! Gamepad configuration: send mode and axis input convention.

/// When reports are transmitted.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendMode {
    /// Every applied mutation transmits the report immediately.
    #[default]
    Auto,
    /// Mutations only update the report; call `send_now` to transmit.
    Manual,
}

/// Input convention accepted by the axis and trigger setters.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisMode {
    /// Values in 0..=1023, rescaled to -127..=127.
    #[default]
    Unsigned10Bit,
    /// Values in -127..=127, passed through with saturation.
    Signed8Bit,
}

/// Per-session gamepad configuration.
///
/// Set once during setup; the setters exist for compatibility with call sites
/// that flip modes at runtime, which is not synchronized against concurrent
/// mutators.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadConfig {
    pub send_mode: SendMode,
    pub axis_mode: AxisMode,
}

impl GamepadConfig {
    /// Auto-send with 10-bit unsigned axis input.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            send_mode: SendMode::Auto,
            axis_mode: AxisMode::Unsigned10Bit,
        }
    }

    #[must_use]
    pub const fn with_send_mode(self, send_mode: SendMode) -> Self {
        Self { send_mode, ..self }
    }

    #[must_use]
    pub const fn with_axis_mode(self, axis_mode: AxisMode) -> Self {
        Self { axis_mode, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn is_manual_send(&self) -> bool {
        matches!(self.send_mode, SendMode::Manual)
    }

    #[inline]
    #[must_use]
    pub const fn is_axis_8bit(&self) -> bool {
        matches!(self.axis_mode, AxisMode::Signed8Bit)
    }
}
