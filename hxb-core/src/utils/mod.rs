//! Utility re-exports for the Hexapod Bot.
//!
//! This module re-exports the body model, gait sequencing, and hardware
//! controllers:
//!
//! - `body`: joint calibration, legs, and the `Hexapod` ownership root
//! - `gait`: tripod-gait primitives and repeated movement routines
//! - `controllers`: the PCA9685 actuator port and the command loop

pub mod body;
pub mod controllers;
pub mod gait;

pub use body::hexapod::Hexapod;
pub use body::joint::ActuatorPort;
pub use controllers::SystemController;
pub use embassy_time::*;
pub use gait::PhaseClock;
