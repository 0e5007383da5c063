//! Repeated movement routines.
//!
//! A routine repeats its base primitive `r` times and then returns the body
//! to the neutral stance, so no routine ever leaves the hexapod in an
//! asymmetric pose.

use super::primitives::*;
use super::{PhaseClock, ROTATE_OFFSET, STANCE_OFFSET, WALK_SWING};
use crate::utils::body::hexapod::Hexapod;
use crate::utils::body::joint::ActuatorPort;

/// Walk forward `r` cycles, then return to neutral.
pub fn walk_forward<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    for _ in 0..r {
        walk(hexy, clock, WALK_SWING)?;
    }
    neutral_stance(hexy, clock)
}

/// Walk backward `r` cycles, then return to neutral.
pub fn walk_backward<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    for _ in 0..r {
        walk(hexy, clock, -WALK_SWING)?;
    }
    neutral_stance(hexy, clock)
}

/// Rotate clockwise `r` cycles, then return to neutral.
pub fn rotate_cw<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    for _ in 0..r {
        rotate(hexy, clock, ROTATE_OFFSET)?;
    }
    neutral_stance(hexy, clock)
}

/// Rotate counter-clockwise `r` cycles, then return to neutral.
pub fn rotate_ccw<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    for _ in 0..r {
        rotate(hexy, clock, -ROTATE_OFFSET)?;
    }
    neutral_stance(hexy, clock)
}

/// Crouch `r` times, then return to neutral.
pub fn squat_routine<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    for _ in 0..r {
        squat(hexy, clock)?;
    }
    neutral_stance(hexy, clock)
}

/// Stretch onto tip-toes `r` times, then return to neutral.
pub fn tiptoe_routine<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    for _ in 0..r {
        tiptoe(hexy, clock)?;
    }
    neutral_stance(hexy, clock)
}

/// Alternate tilts `r` times from the walk stance, then return to neutral.
pub fn dance_routine<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    walk_stance(hexy, clock, STANCE_OFFSET)?;

    for _ in 0..r {
        tilt_left(hexy, clock, STANCE_OFFSET)?;
        tilt_right(hexy, clock, STANCE_OFFSET)?;
    }
    neutral_stance(hexy, clock)
}

/// Tip-toe walk forward `r` cycles, then return to neutral.
pub fn tiptoe_walk_forward<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    for _ in 0..r {
        tiptoe_walk(hexy, clock, WALK_SWING)?;
    }
    neutral_stance(hexy, clock)
}

/// Tip-toe walk backward `r` cycles, then return to neutral.
pub fn tiptoe_walk_backward<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    for _ in 0..r {
        tiptoe_walk(hexy, clock, -WALK_SWING)?;
    }
    neutral_stance(hexy, clock)
}

/// Tip-toe rotate clockwise `r` cycles, then return to neutral.
pub fn tiptoe_rotate_cw<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    for _ in 0..r {
        tiptoe_rotate(hexy, clock, ROTATE_OFFSET)?;
    }
    neutral_stance(hexy, clock)
}

/// Tip-toe rotate counter-clockwise `r` cycles, then return to neutral.
pub fn tiptoe_rotate_ccw<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    for _ in 0..r {
        tiptoe_rotate(hexy, clock, -ROTATE_OFFSET)?;
    }
    neutral_stance(hexy, clock)
}

/// Alternate tip-toe tilts `r` times from the walk stance, then return to
/// neutral.
pub fn tiptoe_dance_routine<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    r: u8,
) -> Result<(), P::Error> {
    walk_stance(hexy, clock, STANCE_OFFSET)?;

    for _ in 0..r {
        tiptoe_tilt_left(hexy, clock, STANCE_OFFSET)?;
        tiptoe_tilt_right(hexy, clock, STANCE_OFFSET)?;
    }
    neutral_stance(hexy, clock)
}
