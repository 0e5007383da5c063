//! Module Exports
//!
//! This file exports the hardware-facing controllers of the robot.
//!
//! - `i2c`: the dual PCA9685 actuator port shared over one I2C bus.
//!
//! It also defines the gait command set and the `SystemController` that
//! drains `GAIT_CHANNEL` and drives the body.

pub mod i2c;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use serde::{Deserialize, Serialize};

use crate::utils::body::hexapod::Hexapod;
use crate::utils::body::joint::ActuatorPort;
use crate::utils::gait::{self, PhaseClock, STANCE_OFFSET};

/// Channel used to receive gait commands (`GaitCommand` messages).
pub static GAIT_CHANNEL: embassy_sync::channel::Channel<CriticalSectionRawMutex, GaitCommand, 16> =
    embassy_sync::channel::Channel::new();

/// Repeat count used when a routine command omits `r`.
const DEFAULT_REPEATS: u8 = 2;

/// Gait command variants, one per independently callable primitive.
///
/// Serialized as JSON with tag `"gc"`. Routine commands carry an optional
/// repeat count `r`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(tag = "gc", rename_all = "snake_case")]
pub enum GaitCommand {
    // Stances
    NeutralStance,
    WalkStance,

    // Single weight shifts
    TiltLeft,
    TiltRight,
    TiptoeTiltLeft,
    TiptoeTiltRight,

    // Repeated routines
    WalkForward { r: Option<u8> },
    WalkBackward { r: Option<u8> },
    RotateCw { r: Option<u8> },
    RotateCcw { r: Option<u8> },
    Squat { r: Option<u8> },
    Tiptoe { r: Option<u8> },
    Dance { r: Option<u8> },
    TiptoeWalkForward { r: Option<u8> },
    TiptoeWalkBackward { r: Option<u8> },
    TiptoeRotateCw { r: Option<u8> },
    TiptoeRotateCcw { r: Option<u8> },
    TiptoeDance { r: Option<u8> },

    /// De-energize every servo.
    Off,
}

/// High-level controller owning the hexapod body and the phase clock.
pub struct SystemController<P: ActuatorPort, C: PhaseClock> {
    pub body: Hexapod<P>,
    clock: C,
}

impl<P, C> SystemController<P, C>
where
    P: ActuatorPort,
    C: PhaseClock,
{
    /// Build the controller over an already-initialized actuator port.
    pub fn new(port: P, clock: C) -> Self {
        SystemController {
            body: Hexapod::new(port),
            clock,
        }
    }

    /// Drain `GAIT_CHANNEL` forever, executing each command in turn.
    ///
    /// A primitive runs to completion before the next command is received,
    /// so phase sequences never interleave.
    pub async fn gait_ch(&mut self) -> ! {
        loop {
            let cmd = GAIT_CHANNEL.receiver().receive().await;
            tracing::info!("Received gait command: {:?}", cmd);
            match self.execute(cmd) {
                Ok(()) => tracing::info!("Gait command executed successfully"),
                Err(e) => tracing::error!("Gait command failed: {:?}", e),
            }
        }
    }

    /// Execute a single `GaitCommand` against the body.
    pub fn execute(&mut self, cmd: GaitCommand) -> Result<(), P::Error> {
        let (body, clock) = (&mut self.body, &mut self.clock);
        let reps = |r: Option<u8>| r.unwrap_or(DEFAULT_REPEATS);

        match cmd {
            GaitCommand::NeutralStance => gait::neutral_stance(body, clock),
            GaitCommand::WalkStance => gait::walk_stance(body, clock, STANCE_OFFSET),

            GaitCommand::TiltLeft => gait::tilt_left(body, clock, STANCE_OFFSET),
            GaitCommand::TiltRight => gait::tilt_right(body, clock, STANCE_OFFSET),
            GaitCommand::TiptoeTiltLeft => gait::tiptoe_tilt_left(body, clock, STANCE_OFFSET),
            GaitCommand::TiptoeTiltRight => gait::tiptoe_tilt_right(body, clock, STANCE_OFFSET),

            GaitCommand::WalkForward { r } => gait::walk_forward(body, clock, reps(r)),
            GaitCommand::WalkBackward { r } => gait::walk_backward(body, clock, reps(r)),
            GaitCommand::RotateCw { r } => gait::rotate_cw(body, clock, reps(r)),
            GaitCommand::RotateCcw { r } => gait::rotate_ccw(body, clock, reps(r)),
            GaitCommand::Squat { r } => gait::squat_routine(body, clock, reps(r)),
            GaitCommand::Tiptoe { r } => gait::tiptoe_routine(body, clock, reps(r)),
            GaitCommand::Dance { r } => gait::dance_routine(body, clock, reps(r)),
            GaitCommand::TiptoeWalkForward { r } => gait::tiptoe_walk_forward(body, clock, reps(r)),
            GaitCommand::TiptoeWalkBackward { r } => {
                gait::tiptoe_walk_backward(body, clock, reps(r))
            }
            GaitCommand::TiptoeRotateCw { r } => gait::tiptoe_rotate_cw(body, clock, reps(r)),
            GaitCommand::TiptoeRotateCcw { r } => gait::tiptoe_rotate_ccw(body, clock, reps(r)),
            GaitCommand::TiptoeDance { r } => gait::tiptoe_dance_routine(body, clock, reps(r)),

            GaitCommand::Off => body.off(),
        }
    }
}
