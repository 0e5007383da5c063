//! Body model for the Hexapod Bot.
//!
//! This module provides the per-joint calibration table, the angle-to-pulse
//! joint model, three-joint legs, and the `Hexapod` that owns all of them.

pub mod calibration;
pub mod hexapod;
pub mod joint;
pub mod leg;

pub use calibration::{joint_calibration, Direction, DriverBank, JointCalibration, JointKey, JointLimits};
pub use hexapod::{Hexapod, LEFT_LEGS, RIGHT_LEGS, TRIPOD_A, TRIPOD_B};
pub use joint::{ActuatorPort, Joint};
pub use leg::{JointKind, Leg, LegId};
