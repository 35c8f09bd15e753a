//! USB transport contract and the lock that guards it.

use core::cell::RefCell;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// Device-side HID transport the gamepad report is delivered through.
///
/// This trait abstracts the USB device stack so the report logic can run on
/// host for testing. Implementations must never block.
pub trait HidTransport {
    /// Advance the transport's internal state machine by one cooperative step.
    ///
    /// Must be cheap and safe to call when idle.
    fn step(&mut self);

    /// Check if the gamepad endpoint can accept a report right now.
    fn ready(&self) -> bool;

    /// Hand one report to the transport, tagged with `report_id`.
    ///
    /// Best effort: failures surface as `ready()` returning `false` later.
    fn send(&mut self, report_id: u8, report: &[u8]);
}

/// Transport guarded by a blocking mutex.
///
/// Every report producer bound to the same transport must go through the
/// same `SharedTransport`.
pub type SharedTransport<M, T> = Mutex<M, RefCell<T>>;

/// Wrap a transport for sharing between report producers.
#[must_use]
pub fn shared<M: RawMutex, T: HidTransport>(transport: T) -> SharedTransport<M, T> {
    Mutex::new(RefCell::new(transport))
}
