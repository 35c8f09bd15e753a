//! Gamepad: the public report API, bound to one transport.

use crate::config::{GamepadConfig, SendMode};
use crate::state::{ReportState, Update};
use crate::transmitter::{ReportTransmitter, SendOutcome};
use crate::transport::{HidTransport, SharedTransport};
use crate::types::{Axis, GamepadReport, Hat, Side, DEFAULT_REPORT_ID};
use embassy_sync::blocking_mutex::raw::RawMutex;

/// Virtual USB HID gamepad.
///
/// Owns the report and transmits it through a shared transport. In auto-send
/// mode (the default) every applied mutation is followed by exactly one
/// transmission attempt; in manual-send mode nothing is transmitted until
/// [`send_now`](Self::send_now).
///
/// # Example
///
/// ```
/// use embassy_sync::blocking_mutex::raw::NoopRawMutex;
/// use gamepad_core::{shared, Gamepad, HidTransport};
///
/// struct Null;
///
/// impl HidTransport for Null {
///     fn step(&mut self) {}
///     fn ready(&self) -> bool { false }
///     fn send(&mut self, _report_id: u8, _report: &[u8]) {}
/// }
///
/// let transport = shared::<NoopRawMutex, _>(Null);
/// let mut gamepad = Gamepad::new(&transport);
/// gamepad.set_manual_send_mode(true);
/// gamepad.set_button(0, true);
/// gamepad.set_button(31, true);
/// assert_eq!(gamepad.snapshot().buttons.raw(), 0x8000_0001);
/// ```
pub struct Gamepad<'t, M: RawMutex, T: HidTransport> {
    state: ReportState,
    transmitter: ReportTransmitter<'t, M, T>,
}

impl<'t, M: RawMutex, T: HidTransport> Gamepad<'t, M, T> {
    /// Create a gamepad with the default configuration and report ID.
    pub fn new(transport: &'t SharedTransport<M, T>) -> Self {
        Self::with_config(transport, GamepadConfig::default(), DEFAULT_REPORT_ID)
    }

    pub fn with_config(
        transport: &'t SharedTransport<M, T>,
        config: GamepadConfig,
        report_id: u8,
    ) -> Self {
        Self {
            state: ReportState::new(config),
            transmitter: ReportTransmitter::new(transport, report_id),
        }
    }

    /// Setup hook. Currently does nothing.
    pub fn begin(&mut self) {}

    /// Teardown hook. Currently does nothing.
    pub fn end(&mut self) {}

    /// Press or release the zero-based button `index` (0..=31).
    ///
    /// Out-of-range indices are ignored and not transmitted.
    pub fn set_button(&mut self, index: u8, pressed: bool) -> Update {
        let update = self.state.set_button(index, pressed);
        self.send_if_applied(update)
    }

    /// Press or release the 1-based button `number` (1..=32).
    pub fn button(&mut self, number: u8, pressed: bool) -> Update {
        let update = self.state.button(number, pressed);
        self.send_if_applied(update)
    }

    /// Set the X axis. Shares the `x` field with [`set_axis_rx`](Self::set_axis_rx).
    pub fn set_axis_lx(&mut self, value: i32) -> Update {
        self.set_axis(Axis::LeftX, value)
    }

    /// Set the Y axis. Shares the `y` field with [`set_axis_ry`](Self::set_axis_ry).
    pub fn set_axis_ly(&mut self, value: i32) -> Update {
        self.set_axis(Axis::LeftY, value)
    }

    /// Set the X axis. Writes the same `x` field as [`set_axis_lx`](Self::set_axis_lx).
    pub fn set_axis_rx(&mut self, value: i32) -> Update {
        self.set_axis(Axis::RightX, value)
    }

    /// Set the Y axis. Writes the same `y` field as [`set_axis_ly`](Self::set_axis_ly).
    pub fn set_axis_ry(&mut self, value: i32) -> Update {
        self.set_axis(Axis::RightY, value)
    }

    pub fn set_axis(&mut self, axis: Axis, value: i32) -> Update {
        let update = self.state.set_axis(axis, value);
        self.send_if_applied(update)
    }

    /// Set the left stick (`x`, `y`).
    pub fn set_position_l(&mut self, x: i32, y: i32) -> Update {
        let update = self.state.set_position(Side::Left, x, y);
        self.send_if_applied(update)
    }

    /// Set the right stick (`z`, `rz`).
    pub fn set_position_r(&mut self, x: i32, y: i32) -> Update {
        let update = self.state.set_position(Side::Right, x, y);
        self.send_if_applied(update)
    }

    pub fn set_trigger_left(&mut self, value: i32) -> Update {
        let update = self.state.set_trigger(Side::Left, value);
        self.send_if_applied(update)
    }

    pub fn set_trigger_right(&mut self, value: i32) -> Update {
        let update = self.state.set_trigger(Side::Right, value);
        self.send_if_applied(update)
    }

    /// Set the hat from a direction code (see [`dpad`](crate::dpad)).
    ///
    /// An out-of-range code leaves the hat unchanged, but in auto-send mode
    /// the current report is still transmitted.
    pub fn set_hat(&mut self, code: i8) -> Update {
        let update = self.state.set_hat(code);
        self.auto_send();
        update
    }

    pub fn set_hat_direction(&mut self, hat: Hat) -> Update {
        let update = self.state.set_hat_direction(hat);
        self.send_if_applied(update)
    }

    /// Defer transmission to [`send_now`](Self::send_now) when `enabled`.
    pub fn set_manual_send_mode(&mut self, enabled: bool) {
        self.state.set_manual_send_mode(enabled);
    }

    /// Accept -127..=127 axis input when `enabled`, 0..=1023 otherwise.
    pub fn set_axis_is_8bit(&mut self, enabled: bool) {
        self.state.set_axis_is_8bit(enabled);
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> GamepadConfig {
        self.state.config()
    }

    pub fn set_config(&mut self, config: GamepadConfig) {
        self.state.set_config(config);
    }

    /// Transmit the current report immediately.
    pub fn send_now(&self) -> SendOutcome {
        self.transmitter.send_now(self.state.report())
    }

    /// Copy of the last-applied report.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> GamepadReport {
        self.state.snapshot()
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &ReportState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn transmitter(&self) -> &ReportTransmitter<'t, M, T> {
        &self.transmitter
    }

    fn send_if_applied(&mut self, update: Update) -> Update {
        if update.is_applied() {
            self.auto_send();
        }
        update
    }

    fn auto_send(&mut self) {
        if self.state.config().send_mode == SendMode::Auto {
            let outcome = self.send_now();
            if outcome != SendOutcome::Sent {
                trace!("Auto-send dropped report: {:?}", outcome);
            }
        }
    }
}
