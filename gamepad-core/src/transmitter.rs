//! ReportTransmitter: delivers report snapshots to the shared transport.

use crate::transport::{HidTransport, SharedTransport};
use crate::types::GamepadReport;
use embassy_sync::blocking_mutex::raw::RawMutex;

/// Outcome of a transmission attempt.
///
/// None of these are errors; a report that was not sent is simply dropped and
/// the next attempt carries the latest state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendOutcome {
    /// The report was handed to the transport.
    Sent,
    /// The transport was not ready (e.g., USB not enumerated, endpoint busy).
    NotReady,
    /// The transport was already borrowed on this call path.
    Busy,
}

/// Sends gamepad reports through a [`SharedTransport`].
///
/// Holds no report state of its own: every call transmits the report it is
/// given, exactly once, or drops it.
pub struct ReportTransmitter<'t, M: RawMutex, T: HidTransport> {
    transport: &'t SharedTransport<M, T>,
    report_id: u8,
}

impl<'t, M: RawMutex, T: HidTransport> ReportTransmitter<'t, M, T> {
    /// Create a transmitter tagging reports with `report_id`.
    pub fn new(transport: &'t SharedTransport<M, T>, report_id: u8) -> Self {
        Self {
            transport,
            report_id,
        }
    }

    #[inline]
    #[must_use]
    pub fn report_id(&self) -> u8 {
        self.report_id
    }

    /// Attempt to transmit `report` now.
    ///
    /// Pumps the transport before and after the attempt while holding the lock.
    /// Never waits for the host and never retries.
    pub fn send_now(&self, report: &GamepadReport) -> SendOutcome {
        let bytes = report.as_bytes();
        self.transport.lock(|cell| {
            let Ok(mut transport) = cell.try_borrow_mut() else {
                warn!("Transport re-entered, dropping report");
                return SendOutcome::Busy;
            };

            transport.step();
            let outcome = if transport.ready() {
                transport.send(self.report_id, &bytes);
                SendOutcome::Sent
            } else {
                SendOutcome::NotReady
            };
            transport.step();

            trace!("Report {} send outcome: {:?}", self.report_id, outcome);
            outcome
        })
    }
}
