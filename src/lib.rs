//! Ramping LED using Smart I/O, CM33 side.
//!
//! A TCPWM counter feeds the Smart I/O block on port 11, which turns the
//! PWM output into a breathing LED waveform with no CPU involvement. Once
//! both peripherals run, the CM55 is released and the CM33 idles.
//!
//! The bring-up sequence is written against the traits in [`board`] so it
//! can be exercised on the host with `mock::MockBoard`. The real board
//! lives in `psoc_edge`, behind the `psoc-edge` feature.

#![cfg_attr(not(test), no_std)]

// must go first so the other modules see the logging macros
mod fmt;

pub mod board;
pub mod config;
pub mod console;
mod error;
pub mod sequencer;
pub mod state;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(feature = "psoc-edge")]
pub mod psoc_edge;

pub use error::{BringUpError, Peripheral};
pub use sequencer::{bring_up, halt, run, System};
