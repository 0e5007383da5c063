//! Angle-to-pulse joint model.
//!
//! A `Joint` clamps a commanded logical angle to its limits, applies the
//! calibration direction, and linearly remaps the result from the joint's
//! logical-angle domain onto its calibrated pulse range. Pulses are issued
//! through an injected [`ActuatorPort`] rather than a global driver handle.

use libm::roundf;

use super::calibration::{joint_calibration, DriverBank, JointCalibration, JointKey, JointLimits};

/// Pulse-width output channel consumed by the body model.
///
/// `set_pulse(bank, channel, 0)` is the de-energize signal. The port is
/// expected to accept a burst of independent-channel writes and apply them
/// effectively simultaneously; any reported failure is a fatal fault and is
/// propagated unchanged.
pub trait ActuatorPort {
    type Error: core::fmt::Debug;

    fn set_pulse(
        &mut self,
        bank: DriverBank,
        channel: u8,
        pulse: u16,
    ) -> Result<(), Self::Error>;
}

/// Clamp `val` into `[min_val, max_val]`.
pub fn constrain(val: f32, min_val: f32, max_val: f32) -> f32 {
    if val < min_val {
        min_val
    } else if val > max_val {
        max_val
    } else {
        val
    }
}

/// Linearly remap `old_val` from `[old_min, old_max]` onto
/// `[new_min, new_max]`, rounding to the nearest integer pulse.
///
/// Rounds half away from zero. Values a leeway beyond the source domain
/// extrapolate past the pulse range, which is what the physical servos
/// expect. The caller guarantees a non-degenerate source domain.
pub fn remap(old_val: f32, (old_min, old_max): (f32, f32), (new_min, new_max): (u16, u16)) -> u16 {
    let new_diff = (new_max - new_min) as f32 * (old_val - old_min) / (old_max - old_min);
    (roundf(new_diff) as i32 + new_min as i32) as u16
}

/// One servo: immutable calibration plus the last commanded angle.
///
/// `current_angle` is `None` while the servo is de-energized.
#[derive(Debug)]
pub struct Joint {
    calibration: JointCalibration,
    limits: JointLimits,
    current_angle: Option<f32>,
}

impl Joint {
    /// Build the joint for `key` with the given logical limits.
    ///
    /// The joint starts de-energized; the caller is expected to issue the
    /// matching zero pulse when the port comes up.
    pub fn new(key: JointKey, limits: JointLimits) -> Self {
        Joint {
            calibration: joint_calibration(key),
            limits,
            current_angle: None,
        }
    }

    /// Clamp `angle`, remap it onto the pulse range, and issue it.
    ///
    /// Returns the pulse that was written. Out-of-range angles are silently
    /// clamped; with no position feedback a clamp is the only corrective
    /// action available. Posing the same angle twice issues the same pulse.
    pub fn pose<P: ActuatorPort>(&mut self, port: &mut P, angle: f32) -> Result<u16, P::Error> {
        let reach = self.limits.max_angle + self.limits.leeway;
        let angle = constrain(angle, -reach, reach);

        let pulse = remap(
            angle * self.calibration.direction.sign(),
            (-self.limits.max_angle, self.limits.max_angle),
            (self.calibration.min_pulse, self.calibration.max_pulse),
        );

        port.set_pulse(self.calibration.bank, self.calibration.channel, pulse)?;
        self.current_angle = Some(angle);
        Ok(pulse)
    }

    /// De-energize the servo (zero pulse) and clear the recorded angle.
    ///
    /// Used between gait phases to keep idle servos from overheating.
    pub fn off<P: ActuatorPort>(&mut self, port: &mut P) -> Result<(), P::Error> {
        port.set_pulse(self.calibration.bank, self.calibration.channel, 0)?;
        self.current_angle = None;
        Ok(())
    }

    /// Last commanded angle, or `None` while de-energized.
    pub fn current_angle(&self) -> Option<f32> {
        self.current_angle
    }

    /// Calibration entry backing this joint.
    pub fn calibration(&self) -> &JointCalibration {
        &self.calibration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::body::leg::{JointKind, LegId};

    /// Port that records the last write per call site.
    struct LastWrite(Option<(DriverBank, u8, u16)>);

    impl ActuatorPort for LastWrite {
        type Error = core::convert::Infallible;

        fn set_pulse(
            &mut self,
            bank: DriverBank,
            channel: u8,
            pulse: u16,
        ) -> Result<(), Self::Error> {
            self.0 = Some((bank, channel, pulse));
            Ok(())
        }
    }

    fn rfh() -> Joint {
        // (channel 6, 135..405, reversed), hips run on a ±45° domain.
        Joint::new(
            JointKey::Leg(LegId::RightFront, JointKind::Hip),
            JointLimits::symmetric(45.0),
        )
    }

    #[test]
    fn test_remap_extremes() {
        assert_eq!(remap(-45.0, (-45.0, 45.0), (135, 405)), 135);
        assert_eq!(remap(45.0, (-45.0, 45.0), (135, 405)), 405);
    }

    #[test]
    fn test_midpoint_pulse() {
        let mut port = LastWrite(None);
        let mut joint = rfh();
        let pulse = joint.pose(&mut port, 0.0).unwrap();
        assert_eq!(pulse, 270);
    }

    #[test]
    fn test_direction_inverts_extreme() {
        // Reversed direction: +45° lands on min_pulse.
        let mut port = LastWrite(None);
        let mut joint = rfh();
        assert_eq!(joint.pose(&mut port, 45.0).unwrap(), 135);
        assert_eq!(joint.pose(&mut port, -45.0).unwrap(), 405);
    }

    #[test]
    fn test_clamp_idempotence() {
        let mut port = LastWrite(None);
        let mut joint = rfh();
        let at_bound = joint.pose(&mut port, 45.0).unwrap();
        let beyond = joint.pose(&mut port, 500.0).unwrap();
        assert_eq!(at_bound, beyond);
        assert_eq!(joint.current_angle(), Some(45.0));
    }

    #[test]
    fn test_leeway_extends_clamp() {
        let mut port = LastWrite(None);
        let mut joint = Joint::new(
            JointKey::Leg(LegId::RightFront, JointKind::Knee),
            JointLimits::symmetric(50.0).with_leeway(10.0),
        );
        joint.pose(&mut port, 100.0).unwrap();
        assert_eq!(joint.current_angle(), Some(60.0));
    }

    #[test]
    fn test_off_issues_zero_pulse() {
        let mut port = LastWrite(None);
        let mut joint = rfh();
        joint.pose(&mut port, 30.0).unwrap();
        joint.off(&mut port).unwrap();
        assert_eq!(port.0, Some((DriverBank::A, 6, 0)));
        assert_eq!(joint.current_angle(), None);
    }
}
