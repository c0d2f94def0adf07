//! Platform-agnostic analog joystick driver.
//!
//! This crate turns two analog axis voltages and an active-low push button
//! into calibrated readings and discrete events, without any
//! platform-specific dependencies. It can be used both in embedded `no_std`
//! environments and on host for testing.
//!
//! # Overview
//!
//! - [`transform`]: Voltage to axis value mapping ([`normalize`], [`round`])
//! - [`calibration`]: Rest-position measurement ([`calibrate`])
//! - [`sampler`]: Change detection between samples ([`Sampler`])
//! - [`button`]: Key state machine ([`ButtonMonitor`])
//! - [`join`]: Concurrent fan-out of fallible futures ([`try_join_array`])
//! - [`timer`]: Cancellable sample schedule ([`SampleTimer`], [`PeriodicTimer`])
//! - [`input`]: Collaborator traits ([`AnalogInput`], [`KeyInput`])
//! - [`events`]: Event sink trait ([`EventSink`], [`JoystickEvent`])
//! - [`driver`]: Everything wired together ([`JoystickDriver`])
//!
//! # Value mapping
//!
//! With the rest voltage `m` of an axis and a supply of [`MAX_VOLTAGE`]:
//!
//! ```text
//! v >  m : (v - m) / (MAX_VOLTAGE - m)
//! v <= m : v / m - 1
//! ```
//!
//! The result is rounded to the configured accuracy (0.1 by default).
//!
//! # Example
//!
//! ```rust
//! use joystick_core::{normalize, round};
//!
//! let value = round(normalize(3.0, 2.5), 0.1);
//! assert!((value - 0.2).abs() < 1e-6);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and logging (for embedded use)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod fmt;

pub mod button;
pub mod calibration;
pub mod config;
pub mod driver;
pub mod events;
pub mod input;
pub mod join;
pub mod sampler;
pub mod timer;
pub mod transform;
pub mod types;

#[cfg(test)]
mod test_util;

// Re-export main types at crate root
pub use button::ButtonMonitor;
pub use calibration::calibrate;
pub use config::{JoystickArgs, JoystickConfig, DEFAULT_ACCURACY, DEFAULT_INTERVAL_MS};
pub use driver::JoystickDriver;
pub use events::{EventSink, JoystickEvent};
pub use input::{read_axes, AnalogInput, KeyInput, ReadError};
pub use join::{try_join_array, TryJoinArray};
pub use sampler::Sampler;
pub use timer::{PeriodicTimer, SampleTimer};
pub use transform::{normalize, round, MAX_VOLTAGE};
pub use types::{AxisChange, KeyEvent, KeyState, MiddleVoltages};
