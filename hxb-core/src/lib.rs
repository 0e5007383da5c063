//! Core calibration, body model, and tripod-gait control for the Hexapod Bot
//! on no-std embedded platforms.
//!
//! For a runnable host-side demo, see the `mock-mcu` binary.
#![no_std]

pub mod utils;
