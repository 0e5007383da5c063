//! Tripod-gait sequencing for the Hexapod Bot.
//!
//! Every movement primitive is a linear, timed sequence of leg poses over a
//! [`Hexapod`](crate::utils::body::hexapod::Hexapod): one tripod is raised
//! into the `Bend` stance while the other stays grounded, then the roles
//! alternate. There is no branching and no state kept between calls; a
//! primitive is a pure function from (body, parameters) to actuator writes
//! plus holds, and must not be interleaved with another primitive.

pub mod primitives;
pub mod routines;

use embassy_time::Duration;

use crate::utils::body::hexapod::Hexapod;
use crate::utils::body::joint::ActuatorPort;

pub use primitives::*;
pub use routines::*;

/// Elapsed-time wait between gait phases.
///
/// A pure blocking hold: hosts back it with `std::thread::sleep`, targets
/// with a HAL delay, and a cooperative scheduler may substitute a
/// suspend-point without changing the sequencing contract.
pub trait PhaseClock {
    fn hold(&mut self, duration: Duration);
}

/// Hold after each phase; covers the motion plus a short servo rest.
pub const PHASE_HOLD: Duration = Duration::from_millis(250);

/// Hold between the raise and plant halves of a single-leg replant.
pub const REPLANT_HOLD: Duration = Duration::from_millis(100);

/// Default hip excursion for `walk_stance` and the tilt primitives.
pub const STANCE_OFFSET: f32 = 35.0;

/// Default hip excursion for `rotate`; negate for the other direction.
pub const ROTATE_OFFSET: f32 = 35.0;

/// Default longitudinal hip swing for `walk`; negate to walk the other way.
pub const WALK_SWING: f32 = 15.0;

/// Fixed retraction added to the walk swing when computing hip deltas.
pub const WALK_RETRACT: f32 = 20.0;

/// Fixed knee/ankle pairs for the three leg configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    /// Leg lifted off the ground.
    Bend,
    /// Grounded, body-neutral.
    Neutral,
    /// Grounded with the leg extended, for tip-toe variants.
    Stretch,
}

impl Stance {
    pub fn knee(self) -> f32 {
        match self {
            Stance::Bend => 100.0,
            Stance::Neutral => 0.0,
            Stance::Stretch => -70.0,
        }
    }

    pub fn ankle(self) -> f32 {
        match self {
            Stance::Bend => 60.0,
            Stance::Neutral => 0.0,
            Stance::Stretch => -30.0,
        }
    }
}

/// Hip deltas `(hip1, hip2, hip3)` for a walk cycle with the given swing.
///
/// Applied front-to-back across the stepping tripod; the grounded tripod
/// retracts by the same deltas mirrored back-to-front. Negating `swing`
/// mirrors the deltas leg-for-leg, which is what reverses the direction of
/// travel.
pub fn walk_hips(swing: f32) -> (f32, f32, f32) {
    (swing - WALK_RETRACT, swing, -(WALK_RETRACT + swing))
}

/// End a phase: hold, then de-energize the whole body.
///
/// The rest keeps idle servos from overloading between phases; unpowered
/// servos hold their pose passively under the body's weight.
fn settle<P: ActuatorPort, C: PhaseClock>(
    hexy: &mut Hexapod<P>,
    clock: &mut C,
) -> Result<(), P::Error> {
    clock.hold(PHASE_HOLD);
    hexy.off()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_hips_forward_backward_mirror() {
        // Negating the swing mirrors the deltas leg-for-leg.
        let (h1, h2, h3) = walk_hips(15.0);
        let (r1, r2, r3) = walk_hips(-15.0);
        assert_eq!(h1, -r3);
        assert_eq!(h2, -r2);
        assert_eq!(h3, -r1);
    }

    #[test]
    fn test_walk_hips_default_swing() {
        assert_eq!(walk_hips(15.0), (-5.0, 15.0, -35.0));
    }

    #[test]
    fn test_stance_pairs() {
        assert_eq!((Stance::Bend.knee(), Stance::Bend.ankle()), (100.0, 60.0));
        assert_eq!((Stance::Neutral.knee(), Stance::Neutral.ankle()), (0.0, 0.0));
        assert_eq!(
            (Stance::Stretch.knee(), Stance::Stretch.ankle()),
            (-70.0, -30.0)
        );
    }
}
