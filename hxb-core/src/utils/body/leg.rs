//! Three-joint leg model.
//!
//! A leg owns its hip, knee, and ankle joints and is always addressed as a
//! unit when posed. There is deliberately no cross-joint validation: the
//! control is open loop and geometrically implausible combinations are
//! accepted, each joint clamping independently.

use embassy_time::Duration;

use super::calibration::{JointKey, JointLimits};
use super::joint::{ActuatorPort, Joint};
use crate::utils::gait::PhaseClock;

/// Rest angle a joint falls back to when `move_to` is asked to reuse the
/// angle of a de-energized joint.
const REST_ANGLE: f32 = 0.0;

/// Default ankle compensation for `move_to`, best between 80 and 110.
pub const MOVE_OFFSET: f32 = 100.0;

/// The six leg positions, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegId {
    LeftFront,
    RightFront,
    LeftMiddle,
    RightMiddle,
    LeftBack,
    RightBack,
}

impl LegId {
    /// All legs, in body order.
    pub const ALL: [LegId; 6] = [
        LegId::LeftFront,
        LegId::RightFront,
        LegId::LeftMiddle,
        LegId::RightMiddle,
        LegId::LeftBack,
        LegId::RightBack,
    ];

    /// Human-readable leg name.
    pub fn name(self) -> &'static str {
        match self {
            LegId::LeftFront => "left front",
            LegId::RightFront => "right front",
            LegId::LeftMiddle => "left middle",
            LegId::RightMiddle => "right middle",
            LegId::LeftBack => "left back",
            LegId::RightBack => "right back",
        }
    }
}

/// The three joint types of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointKind {
    Hip,
    Knee,
    Ankle,
}

/// One leg: hip, knee, and ankle joints plus a display name.
#[derive(Debug)]
pub struct Leg {
    name: &'static str,
    pub hip: Joint,
    pub knee: Joint,
    pub ankle: Joint,
}

impl Leg {
    /// Build the leg for `id` with the chassis joint limits
    /// (hip ±45°, knee ±50° with 10° leeway, ankle ±90°).
    pub fn new(id: LegId) -> Self {
        let (max_hip, max_knee, knee_leeway) = (45.0, 50.0, 10.0);

        Leg {
            name: id.name(),
            hip: Joint::new(
                JointKey::Leg(id, JointKind::Hip),
                JointLimits::symmetric(max_hip),
            ),
            knee: Joint::new(
                JointKey::Leg(id, JointKind::Knee),
                JointLimits::symmetric(max_knee).with_leeway(knee_leeway),
            ),
            ankle: Joint::new(JointKey::Leg(id, JointKind::Ankle), JointLimits::full()),
        }
    }

    /// Pose all three joints, each clamped by its own limits.
    pub fn pose<P: ActuatorPort>(
        &mut self,
        port: &mut P,
        hip_angle: f32,
        knee_angle: f32,
        ankle_angle: f32,
    ) -> Result<(), P::Error> {
        self.hip.pose(port, hip_angle)?;
        self.knee.pose(port, knee_angle)?;
        self.ankle.pose(port, ankle_angle)?;
        Ok(())
    }

    /// Raise or plant the leg from a single knee angle.
    ///
    /// `knee_angle < 0` means the thigh is raised. An omitted angle reuses
    /// the joint's last commanded angle (rest angle if de-energized). The
    /// ankle is derived as `knee_angle - offset` to keep the foot roughly
    /// level through a step.
    pub fn move_to<P: ActuatorPort>(
        &mut self,
        port: &mut P,
        knee_angle: Option<f32>,
        hip_angle: Option<f32>,
        offset: f32,
    ) -> Result<(), P::Error> {
        let knee_angle = knee_angle
            .or(self.knee.current_angle())
            .unwrap_or(REST_ANGLE);
        let hip_angle = hip_angle.or(self.hip.current_angle()).unwrap_or(REST_ANGLE);

        self.pose(port, hip_angle, knee_angle, knee_angle - offset)
    }

    /// Atomic stepping primitive: raise the leg, hold, plant it, hold.
    pub fn replant<P: ActuatorPort, C: PhaseClock>(
        &mut self,
        port: &mut P,
        clock: &mut C,
        raised: f32,
        floor: f32,
        offset: f32,
        hold: Duration,
    ) -> Result<(), P::Error> {
        self.move_to(port, Some(raised), None, MOVE_OFFSET)?;
        clock.hold(hold);

        self.move_to(port, Some(floor), None, offset)?;
        clock.hold(hold);
        Ok(())
    }

    /// De-energize all three joints.
    pub fn off<P: ActuatorPort>(&mut self, port: &mut P) -> Result<(), P::Error> {
        self.hip.off(port)?;
        self.knee.off(port)?;
        self.ankle.off(port)?;
        Ok(())
    }

    /// Display name, e.g. `"left front"`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}
