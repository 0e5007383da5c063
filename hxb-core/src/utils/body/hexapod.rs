//! The hexapod body: six legs, a neck, and the actuator port they share.
//!
//! `Hexapod` is the sole ownership root for legs and joints. The two tripod
//! groups and the side groups are a fixed partition decided at construction;
//! gait sequencing walks these groups but keeps no state of its own here.

use embassy_time::Duration;

use super::calibration::{JointKey, JointLimits};
use super::joint::{ActuatorPort, Joint};
use super::leg::{Leg, LegId};
use crate::utils::gait::PhaseClock;

/// Tripod A: left front, right middle, left back.
pub const TRIPOD_A: [LegId; 3] = [LegId::LeftFront, LegId::RightMiddle, LegId::LeftBack];

/// Tripod B: right front, left middle, right back.
pub const TRIPOD_B: [LegId; 3] = [LegId::RightFront, LegId::LeftMiddle, LegId::RightBack];

/// Left side group, front to back.
pub const LEFT_LEGS: [LegId; 3] = [LegId::LeftFront, LegId::LeftMiddle, LegId::LeftBack];

/// Right side group, front to back.
pub const RIGHT_LEGS: [LegId; 3] = [LegId::RightFront, LegId::RightMiddle, LegId::RightBack];

/// The whole body: neck joint, six legs, and the injected actuator port.
pub struct Hexapod<P: ActuatorPort> {
    port: P,
    pub neck: Joint,
    legs: [Leg; 6],
}

impl<P: ActuatorPort> Hexapod<P> {
    /// Build the body over `port`. All joints start de-energized.
    pub fn new(port: P) -> Self {
        Hexapod {
            port,
            neck: Joint::new(JointKey::Neck, JointLimits::full()),
            legs: LegId::ALL.map(Leg::new),
        }
    }

    // LegId discriminants follow `LegId::ALL` order.
    fn index(id: LegId) -> usize {
        id as usize
    }

    /// Shared borrow of a leg, for inspection.
    pub fn leg(&self, id: LegId) -> &Leg {
        &self.legs[Self::index(id)]
    }

    /// Pose all three joints of `id`.
    pub fn pose_leg(
        &mut self,
        id: LegId,
        hip_angle: f32,
        knee_angle: f32,
        ankle_angle: f32,
    ) -> Result<(), P::Error> {
        self.legs[Self::index(id)].pose(&mut self.port, hip_angle, knee_angle, ankle_angle)
    }

    /// Raise or plant `id` from a single knee angle (see [`Leg::move_to`]).
    pub fn move_leg(
        &mut self,
        id: LegId,
        knee_angle: Option<f32>,
        hip_angle: Option<f32>,
        offset: f32,
    ) -> Result<(), P::Error> {
        self.legs[Self::index(id)].move_to(&mut self.port, knee_angle, hip_angle, offset)
    }

    /// Step `id` in place: raise, hold, plant, hold.
    pub fn replant_leg<C: PhaseClock>(
        &mut self,
        clock: &mut C,
        id: LegId,
        raised: f32,
        floor: f32,
        offset: f32,
        hold: Duration,
    ) -> Result<(), P::Error> {
        self.legs[Self::index(id)].replant(&mut self.port, clock, raised, floor, offset, hold)
    }

    /// Pose only the hip of `id`, leaving knee and ankle untouched.
    pub fn pose_hip(&mut self, id: LegId, angle: f32) -> Result<u16, P::Error> {
        self.legs[Self::index(id)].hip.pose(&mut self.port, angle)
    }

    /// Pose the neck joint.
    pub fn pose_neck(&mut self, angle: f32) -> Result<u16, P::Error> {
        self.neck.pose(&mut self.port, angle)
    }

    /// De-energize the neck and every leg.
    pub fn off(&mut self) -> Result<(), P::Error> {
        self.neck.off(&mut self.port)?;
        for leg in &mut self.legs {
            leg.off(&mut self.port)?;
        }
        Ok(())
    }

    /// Mutable access to the underlying port.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Tear the body down, returning the port.
    pub fn into_port(self) -> P {
        self.port
    }
}
