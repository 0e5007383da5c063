//! Per-joint servo calibration for the Hexapod Bot.
//!
//! Each joint maps a signed logical angle onto a calibrated pulse range on
//! one of two PCA9685 drivers. The table below was recorded against the
//! physical robot; a few servos still carry factory-default ranges.

use super::leg::{JointKind, LegId};

/// Sign applied to the logical angle before the pulse remap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Multiplier form of the direction (`+1.0` or `-1.0`).
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

/// Which of the two PCA9685 drivers a joint is wired to.
///
/// The split is fixed by the harness: bank A (0x41) serves both front legs,
/// the left middle leg, and the neck; bank B (0x40) serves the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverBank {
    A,
    B,
}

impl DriverBank {
    /// I2C address of the driver for this bank.
    pub fn address(self) -> u8 {
        match self {
            DriverBank::A => 0x41,
            DriverBank::B => 0x40,
        }
    }
}

/// Immutable pulse calibration for one servo.
#[derive(Debug, Clone, Copy)]
pub struct JointCalibration {
    pub bank: DriverBank,
    pub channel: u8,
    pub min_pulse: u16,
    pub max_pulse: u16,
    pub direction: Direction,
}

impl JointCalibration {
    /// Build a calibration entry.
    ///
    /// # Panics
    ///
    /// Panics if `min_pulse >= max_pulse` or the channel is out of range.
    pub const fn new(
        bank: DriverBank,
        channel: u8,
        min_pulse: u16,
        max_pulse: u16,
        direction: Direction,
    ) -> Self {
        assert!(min_pulse < max_pulse);
        assert!(channel < 16);
        JointCalibration {
            bank,
            channel,
            min_pulse,
            max_pulse,
            direction,
        }
    }
}

/// Symmetric logical-angle limits for one joint instance.
///
/// The logical domain is `[-max_angle, +max_angle]` degrees and commanded
/// angles are clamped to `±(max_angle + leeway)`.
#[derive(Debug, Clone, Copy)]
pub struct JointLimits {
    pub max_angle: f32,
    pub leeway: f32,
}

impl JointLimits {
    /// Limits with the full ±90° baseline domain and no leeway.
    pub const fn full() -> Self {
        JointLimits::symmetric(90.0)
    }

    /// Limits with a `[-max_angle, +max_angle]` domain and no leeway.
    pub const fn symmetric(max_angle: f32) -> Self {
        assert!(max_angle > 0.0);
        JointLimits {
            max_angle,
            leeway: 0.0,
        }
    }

    /// Extend the clamp range by `leeway` degrees on both sides.
    pub const fn with_leeway(mut self, leeway: f32) -> Self {
        self.leeway = leeway;
        self
    }
}

/// Key identifying one of the nineteen servos.
///
/// This is the Rust form of the original 2–3 letter joint codes
/// (side, position, joint type — e.g. `RFH` = right front hip).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointKey {
    Neck,
    Leg(LegId, JointKind),
}

/// Static calibration table, one entry per joint key.
///
/// Exhaustive over `JointKey`, so completeness is checked at compile time
/// rather than at first use.
pub fn joint_calibration(key: JointKey) -> JointCalibration {
    use Direction::{Forward, Reverse};
    use DriverBank::{A, B};
    use JointKind::{Ankle, Hip, Knee};
    use LegId::*;

    match key {
        JointKey::Neck => JointCalibration::new(A, 9, 170, 620, Reverse),

        JointKey::Leg(RightFront, Hip) => JointCalibration::new(A, 6, 135, 405, Reverse),
        JointKey::Leg(RightFront, Knee) => JointCalibration::new(A, 7, 260, 645, Forward),
        JointKey::Leg(RightFront, Ankle) => JointCalibration::new(A, 8, 260, 630, Forward),

        JointKey::Leg(LeftFront, Hip) => JointCalibration::new(A, 3, 155, 420, Reverse),
        JointKey::Leg(LeftFront, Knee) => JointCalibration::new(A, 4, 275, 630, Forward),
        JointKey::Leg(LeftFront, Ankle) => JointCalibration::new(A, 5, 220, 650, Forward),

        JointKey::Leg(LeftMiddle, Hip) => JointCalibration::new(A, 0, 175, 415, Reverse),
        JointKey::Leg(LeftMiddle, Knee) => JointCalibration::new(A, 1, 310, 600, Forward),
        JointKey::Leg(LeftMiddle, Ankle) => JointCalibration::new(A, 2, 250, 650, Forward),

        // Factory defaults below, not yet calibrated against the chassis.
        JointKey::Leg(RightMiddle, Hip) => JointCalibration::new(B, 6, 140, 470, Forward),
        JointKey::Leg(RightMiddle, Knee) => JointCalibration::new(B, 7, 340, 670, Forward),
        JointKey::Leg(RightMiddle, Ankle) => JointCalibration::new(B, 8, 290, 680, Forward),

        JointKey::Leg(RightBack, Hip) => JointCalibration::new(B, 3, 150, 490, Forward),
        JointKey::Leg(RightBack, Knee) => JointCalibration::new(B, 4, 300, 670, Forward),
        JointKey::Leg(RightBack, Ankle) => JointCalibration::new(B, 5, 300, 670, Forward),

        JointKey::Leg(LeftBack, Hip) => JointCalibration::new(B, 0, 150, 500, Forward),
        JointKey::Leg(LeftBack, Knee) => JointCalibration::new(B, 1, 330, 690, Forward),
        JointKey::Leg(LeftBack, Ankle) => JointCalibration::new(B, 2, 290, 680, Forward),
    }
}
