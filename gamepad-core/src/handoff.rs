//! Latest-value report handoff between the gamepad and an async HID writer.
//!
//! [`SignalTransport`] implements [`HidTransport`] by overwriting a
//! [`Signal`]. The writer task waits on the same signal and writes whatever is
//! there, so a burst of sends between two writer wakeups collapses into the
//! last report of the burst.

use crate::transport::HidTransport;
use crate::types::REPORT_SIZE;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, Ordering};

/// Signal carrying the most recent report to the HID writer.
pub type ReportSignal<M> = Signal<M, PendingReport>;

/// One report waiting for the HID endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingReport {
    pub report_id: u8,
    pub bytes: [u8; REPORT_SIZE],
}

impl PendingReport {
    /// Size on the wire: report ID prefix plus the report.
    pub const FRAME_SIZE: usize = REPORT_SIZE + 1;

    /// Report bytes prefixed with the report ID.
    #[must_use]
    pub fn frame(&self) -> [u8; Self::FRAME_SIZE] {
        let mut frame = [0u8; Self::FRAME_SIZE];
        frame[0] = self.report_id;
        frame[1..].copy_from_slice(&self.bytes);
        frame
    }
}

/// [`HidTransport`] that hands reports to a [`ReportSignal`].
///
/// Ready whenever the device is configured. Sending never waits: a report
/// that the writer has not picked up yet is replaced by the newer one.
pub struct SignalTransport<'d, M: RawMutex> {
    reports: &'d ReportSignal<M>,
    configured: &'d AtomicBool,
}

impl<'d, M: RawMutex> SignalTransport<'d, M> {
    pub fn new(reports: &'d ReportSignal<M>, configured: &'d AtomicBool) -> Self {
        Self {
            reports,
            configured,
        }
    }
}

impl<M: RawMutex> HidTransport for SignalTransport<'_, M> {
    fn step(&mut self) {
        // The USB device runs in its own task; nothing to pump here.
    }

    fn ready(&self) -> bool {
        self.configured.load(Ordering::Relaxed)
    }

    fn send(&mut self, report_id: u8, report: &[u8]) {
        let Ok(bytes) = <[u8; REPORT_SIZE]>::try_from(report) else {
            warn!("Unexpected report length {}, dropping", report.len());
            return;
        };
        if self.reports.signaled() {
            trace!("Replacing unsent report {}", report_id);
        }
        self.reports.signal(PendingReport { report_id, bytes });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamepad::Gamepad;
    use crate::transmitter::SendOutcome;
    use crate::transport::{shared, SharedTransport};
    use crate::types::{Buttons, GamepadReport, DEFAULT_REPORT_ID};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_frame_prefixes_report_id() {
        let report = GamepadReport {
            x: -1,
            buttons: Buttons(0x8000_0001),
            ..GamepadReport::neutral()
        };
        let pending = PendingReport {
            report_id: 4,
            bytes: report.as_bytes(),
        };

        let frame = pending.frame();
        assert_eq!(frame.len(), REPORT_SIZE + 1);
        assert_eq!(frame[0], 4);
        assert_eq!(frame[1..], report.as_bytes());
        assert_eq!(frame[8..], [0x01, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn test_not_ready_until_configured() {
        let reports = ReportSignal::<NoopRawMutex>::new();
        let configured = AtomicBool::new(false);
        let mut transport = SignalTransport::new(&reports, &configured);
        assert!(!transport.ready());

        configured.store(true, Ordering::Relaxed);
        assert!(transport.ready());
        transport.send(DEFAULT_REPORT_ID, &[0; REPORT_SIZE]);
        assert!(transport.ready());
    }

    #[test]
    fn test_burst_keeps_latest_report() {
        let reports = ReportSignal::<NoopRawMutex>::new();
        let configured = AtomicBool::new(true);
        let mut transport = SignalTransport::new(&reports, &configured);

        let mut first = [0u8; REPORT_SIZE];
        first[0] = 1;
        let mut second = [0u8; REPORT_SIZE];
        second[0] = 2;
        transport.send(DEFAULT_REPORT_ID, &first);
        transport.send(DEFAULT_REPORT_ID, &second);

        let pending = reports.try_take().unwrap();
        assert_eq!(pending.bytes, second);
        assert!(reports.try_take().is_none());
    }

    #[test]
    fn test_wrong_length_is_dropped() {
        let reports = ReportSignal::<NoopRawMutex>::new();
        let configured = AtomicBool::new(true);
        let mut transport = SignalTransport::new(&reports, &configured);

        transport.send(DEFAULT_REPORT_ID, &[0; REPORT_SIZE - 1]);
        assert!(!reports.signaled());
    }

    #[test]
    fn test_demo_frame_reaches_writer_with_latest_state() {
        let reports = ReportSignal::<NoopRawMutex>::new();
        let configured = AtomicBool::new(true);
        let transport: SharedTransport<NoopRawMutex, _> =
            shared(SignalTransport::new(&reports, &configured));
        let mut gamepad = Gamepad::new(&transport);
        gamepad.set_axis_is_8bit(true);

        // One frame without the writer running in between.
        gamepad.set_button(31, false);
        gamepad.set_button(0, true);
        gamepad.set_manual_send_mode(true);
        gamepad.set_position_l(-127, 127);
        gamepad.set_hat(1);
        assert_eq!(gamepad.send_now(), SendOutcome::Sent);

        let pending = reports.try_take().unwrap();
        assert_eq!(pending.report_id, DEFAULT_REPORT_ID);
        assert_eq!(pending.bytes, gamepad.snapshot().as_bytes());
        assert_eq!(pending.bytes[0], 0x81);
        assert_eq!(pending.bytes[7..], [0x01, 0x00, 0x00, 0x00]);
    }
}
