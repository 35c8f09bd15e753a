//! Platform-agnostic USB HID gamepad report state and transmission.
//!
//! This crate provides the core of a virtual HID gamepad without any
//! platform-specific dependencies. It can be used both in embedded `no_std`
//! environments and on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`types`]: Report data structures ([`GamepadReport`], [`Buttons`], [`Hat`])
//! - [`config`]: Send and axis modes ([`GamepadConfig`])
//! - [`mapping`]: Axis range mapping ([`normalize`])
//! - [`state`]: The canonical report and its mutators ([`ReportState`])
//! - [`transport`]: USB transport contract ([`HidTransport`], [`SharedTransport`])
//! - [`transmitter`]: Locked, non-blocking report delivery ([`ReportTransmitter`])
//! - [`handoff`]: Latest-value handoff to an async HID writer ([`SignalTransport`])
//! - [`gamepad`]: The public API tying it together ([`Gamepad`])
//!
//! # Report Layout
//!
//! ```text
//! x:i8 y:i8 z:i8 rz:i8 rx:i8 ry:i8 hat:u8 buttons:u32le   (11 bytes)
//! ```
//!
//! # Send Discipline
//!
//! Each transmission takes the transport lock, pumps the transport, sends the
//! current report only if the transport is ready, and pumps again. A report
//! that cannot be sent is dropped; the next attempt carries the latest state.
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and logging (for embedded targets)
//! - **`log`**: Route internal logging through the `log` facade
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod fmt;

pub mod config;
pub mod gamepad;
pub mod handoff;
pub mod mapping;
pub mod state;
pub mod transmitter;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use config::{AxisMode, GamepadConfig, SendMode};
pub use gamepad::Gamepad;
pub use handoff::{PendingReport, ReportSignal, SignalTransport};
pub use mapping::{normalize, AXIS_MAX, AXIS_MIN, UNSIGNED_AXIS_MAX};
pub use state::{ReportState, Update};
pub use transmitter::{ReportTransmitter, SendOutcome};
pub use transport::{shared, HidTransport, SharedTransport};
pub use types::{
    button, dpad, Axis, Buttons, GamepadReport, Hat, Side, BUTTON_COUNT, DEFAULT_REPORT_ID,
    REPORT_SIZE,
};
