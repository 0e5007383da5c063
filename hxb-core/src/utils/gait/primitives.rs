//! Movement primitives.
//!
//! Each primitive runs the canonical four-phase tripod cycle (raise A, plant
//! A, raise B, plant B) unless noted, with a hold and a whole-body rest after
//! every phase. "Concurrent" sub-steps are bursts of pose commands issued
//! before the shared hold; the actuator applies them effectively at once.

use tracing::debug;

use super::{settle, walk_hips, PhaseClock, Stance};
use crate::utils::body::hexapod::{Hexapod, LEFT_LEGS, RIGHT_LEGS, TRIPOD_A, TRIPOD_B};
use crate::utils::body::joint::ActuatorPort;
use crate::utils::body::leg::LegId;

/// Pose one leg into `stance` at the given hip angle.
fn stance_leg<P: ActuatorPort>(
    hexy: &mut Hexapod<P>,
    id: LegId,
    stance: Stance,
    hip_angle: f32,
) -> Result<(), P::Error> {
    hexy.pose_leg(id, hip_angle, stance.knee(), stance.ankle())
}

/// Pose a three-leg group into `stance` with per-leg hip angles.
fn stance_group<P: ActuatorPort>(
    hexy: &mut Hexapod<P>,
    group: [LegId; 3],
    stance: Stance,
    hips: [f32; 3],
) -> Result<(), P::Error> {
    for (id, hip) in group.into_iter().zip(hips) {
        stance_leg(hexy, id, stance, hip)?;
    }
    Ok(())
}

/// Raise a tripod into `Bend`, settle, then plant it into `grounded`.
fn raise_and_plant<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    tripod: [LegId; 3],
    hips: [f32; 3],
    grounded: Stance,
) -> Result<(), P::Error> {
    stance_group(hexy, tripod, Stance::Bend, hips)?;
    settle(hexy, clock)?;

    stance_group(hexy, tripod, grounded, hips)?;
    settle(hexy, clock)
}

/// Cycle both tripods through bend → neutral at hip 0, levelling the body.
pub fn neutral_stance<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
) -> Result<(), P::Error> {
    debug!("neutral stance");
    raise_and_plant(hexy, clock, TRIPOD_A, [0.0; 3], Stance::Neutral)?;
    raise_and_plant(hexy, clock, TRIPOD_B, [0.0; 3], Stance::Neutral)
}

/// Pre-position the hips for walking: each tripod raises and plants with
/// fixed `(offset, 0, -offset)` hip angles, mirrored between tripods.
pub fn walk_stance<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    offset: f32,
) -> Result<(), P::Error> {
    debug!("walk stance: offset {}", offset);
    raise_and_plant(hexy, clock, TRIPOD_A, [offset, 0.0, -offset], Stance::Neutral)?;
    raise_and_plant(hexy, clock, TRIPOD_B, [-offset, 0.0, offset], Stance::Neutral)
}

/// Continuous yaw. Positive and negative offsets are mirror images.
///
/// While tripod B is airborne, tripod A's already-grounded hips are swung to
/// `-offset` in the same burst, which is what keeps the body turning.
pub fn rotate<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    offset: f32,
) -> Result<(), P::Error> {
    rotate_with(hexy, clock, offset, Stance::Neutral)
}

/// `rotate` on extended legs.
pub fn tiptoe_rotate<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    offset: f32,
) -> Result<(), P::Error> {
    rotate_with(hexy, clock, offset, Stance::Stretch)
}

fn rotate_with<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    offset: f32,
    grounded: Stance,
) -> Result<(), P::Error> {
    debug!("rotate: offset {} grounded {:?}", offset, grounded);

    // Raise tripod A, hips rotated toward the turn.
    stance_group(hexy, TRIPOD_A, Stance::Bend, [offset; 3])?;
    settle(hexy, clock)?;

    stance_group(hexy, TRIPOD_A, grounded, [offset; 3])?;
    settle(hexy, clock)?;

    // Raise tripod B to the other side while tripod A's grounded hips swing
    // back in the same burst.
    stance_group(hexy, TRIPOD_B, Stance::Bend, [-offset; 3])?;
    for id in TRIPOD_A {
        hexy.pose_hip(id, -offset)?;
    }
    settle(hexy, clock)?;

    stance_group(hexy, TRIPOD_B, grounded, [0.0; 3])?;
    settle(hexy, clock)
}

/// Straight-line translation; the sign of `swing` picks the direction.
pub fn walk<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    swing: f32,
) -> Result<(), P::Error> {
    walk_with(hexy, clock, swing, Stance::Neutral)
}

/// `walk` on extended legs.
pub fn tiptoe_walk<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    swing: f32,
) -> Result<(), P::Error> {
    walk_with(hexy, clock, swing, Stance::Stretch)
}

fn walk_with<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    swing: f32,
    grounded: Stance,
) -> Result<(), P::Error> {
    debug!("walk: swing {} grounded {:?}", swing, grounded);
    let (hip1, hip2, hip3) = walk_hips(swing);

    // Tripod A steps forward while tripod B's grounded hips retract by the
    // mirrored deltas in the same burst.
    stance_group(hexy, TRIPOD_A, Stance::Bend, [hip1, hip2, hip3])?;
    stance_group(hexy, TRIPOD_B, grounded, [hip3, hip2, hip1])?;
    settle(hexy, clock)?;

    stance_group(hexy, TRIPOD_A, grounded, [hip1, hip2, hip3])?;
    settle(hexy, clock)?;

    // Roles swap with negated deltas.
    stance_group(hexy, TRIPOD_B, Stance::Bend, [-hip1, -hip2, -hip3])?;
    stance_group(hexy, TRIPOD_A, grounded, [-hip3, -hip2, -hip1])?;
    settle(hexy, clock)?;

    stance_group(hexy, TRIPOD_B, grounded, [-hip1, -hip2, -hip3])?;
    settle(hexy, clock)
}

/// Static weight-shift onto the left side: one hold, no phase alternation.
pub fn tilt_left<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    offset: f32,
) -> Result<(), P::Error> {
    debug!("tilt left: offset {}", offset);
    stance_group(hexy, RIGHT_LEGS, Stance::Neutral, [-offset, 0.0, offset])?;
    stance_group(hexy, LEFT_LEGS, Stance::Bend, [offset, 0.0, -offset])?;
    settle(hexy, clock)
}

/// Static weight-shift onto the right side.
pub fn tilt_right<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    offset: f32,
) -> Result<(), P::Error> {
    debug!("tilt right: offset {}", offset);
    stance_group(hexy, RIGHT_LEGS, Stance::Bend, [-offset, 0.0, offset])?;
    stance_group(hexy, LEFT_LEGS, Stance::Neutral, [offset, 0.0, -offset])?;
    settle(hexy, clock)
}

/// Tip-toe weight-shift leftwards: the right side extends instead of the
/// left side lifting.
pub fn tiptoe_tilt_left<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    offset: f32,
) -> Result<(), P::Error> {
    debug!("tiptoe tilt left: offset {}", offset);
    stance_group(hexy, RIGHT_LEGS, Stance::Stretch, [-offset, 0.0, offset])?;
    stance_group(hexy, LEFT_LEGS, Stance::Neutral, [offset, 0.0, -offset])?;
    settle(hexy, clock)
}

/// Tip-toe weight-shift rightwards.
pub fn tiptoe_tilt_right<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    offset: f32,
) -> Result<(), P::Error> {
    debug!("tiptoe tilt right: offset {}", offset);
    stance_group(hexy, RIGHT_LEGS, Stance::Neutral, [-offset, 0.0, offset])?;
    stance_group(hexy, LEFT_LEGS, Stance::Stretch, [offset, 0.0, -offset])?;
    settle(hexy, clock)
}

/// Symmetric crouch: all six legs bend then return to neutral, no tripod
/// alternation.
pub fn squat<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
) -> Result<(), P::Error> {
    debug!("squat");
    all_legs(hexy, clock, Stance::Bend)
}

/// Extended-leg stance: all six legs stretch then return to neutral.
pub fn tiptoe<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
) -> Result<(), P::Error> {
    debug!("tiptoe");
    all_legs(hexy, clock, Stance::Stretch)
}

fn all_legs<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
    stance: Stance,
) -> Result<(), P::Error> {
    for id in LegId::ALL {
        stance_leg(hexy, id, stance, 0.0)?;
    }
    settle(hexy, clock)?;

    for id in LegId::ALL {
        stance_leg(hexy, id, Stance::Neutral, 0.0)?;
    }
    settle(hexy, clock)
}
