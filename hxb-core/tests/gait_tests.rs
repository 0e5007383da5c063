//! Gait sequencing tests over a recording actuator port.
//!
//! The port captures every `(bank, channel, pulse)` write so the tests can
//! check terminal poses and per-channel command sequences without hardware.

use embassy_time::Duration;
use hxb_core::utils::body::calibration::{joint_calibration, DriverBank, JointKey};
use hxb_core::utils::body::hexapod::{Hexapod, TRIPOD_A};
use hxb_core::utils::body::joint::{remap, ActuatorPort};
use hxb_core::utils::body::leg::{JointKind, LegId};
use hxb_core::utils::controllers::{GaitCommand, SystemController};
use hxb_core::utils::gait::{self, PhaseClock, REPLANT_HOLD};

#[derive(Default)]
struct RecordingPort {
    writes: Vec<(DriverBank, u8, u16)>,
}

impl ActuatorPort for RecordingPort {
    type Error = std::convert::Infallible;

    fn set_pulse(&mut self, bank: DriverBank, channel: u8, pulse: u16) -> Result<(), Self::Error> {
        self.writes.push((bank, channel, pulse));
        Ok(())
    }
}

#[derive(Default)]
struct NullClock {
    holds: usize,
}

impl PhaseClock for NullClock {
    fn hold(&mut self, _duration: Duration) {
        self.holds += 1;
    }
}

/// Chassis logical-angle limit per joint kind.
fn max_angle(kind: JointKind) -> f32 {
    match kind {
        JointKind::Hip => 45.0,
        JointKind::Knee => 50.0,
        JointKind::Ankle => 90.0,
    }
}

/// All pulses written to the joint's channel, in order.
fn pulses_for(port: &RecordingPort, key: JointKey) -> Vec<u16> {
    let cal = joint_calibration(key);
    port.writes
        .iter()
        .filter(|&&(bank, channel, _)| bank == cal.bank && channel == cal.channel)
        .map(|&(_, _, pulse)| pulse)
        .collect()
}

/// Pose pulses only (de-energize writes dropped; pose pulses are never 0).
fn energized_pulses(port: &RecordingPort, key: JointKey) -> Vec<u16> {
    pulses_for(port, key)
        .into_iter()
        .filter(|&p| p != 0)
        .collect()
}

/// Expected pulse for posing the given joint at `angle`.
fn expected_pulse(key: JointKey, kind: JointKind, angle: f32) -> u16 {
    let cal = joint_calibration(key);
    let max = max_angle(kind);
    remap(
        angle * cal.direction.sign(),
        (-max, max),
        (cal.min_pulse, cal.max_pulse),
    )
}

fn hip_pulse(id: LegId, angle: f32) -> u16 {
    expected_pulse(JointKey::Leg(id, JointKind::Hip), JointKind::Hip, angle)
}

#[test]
fn test_routine_terminates_at_neutral() {
    let mut hexy = Hexapod::new(RecordingPort::default());
    let mut clock = NullClock::default();
    gait::walk_forward(&mut hexy, &mut clock, 1).unwrap();

    // One walk cycle plus the trailing neutral stance: eight settled phases.
    assert_eq!(clock.holds, 8);

    let port = hexy.into_port();
    for id in LegId::ALL {
        for kind in [JointKind::Hip, JointKind::Knee, JointKind::Ankle] {
            let key = JointKey::Leg(id, kind);
            let seq = pulses_for(&port, key);

            // Terminal write is the de-energize pulse.
            assert_eq!(*seq.last().unwrap(), 0);

            // Last pose before it is the neutral stance.
            let last_pose = *energized_pulses(&port, key).last().unwrap();
            assert_eq!(last_pose, expected_pulse(key, kind, 0.0));
        }
    }
}

#[test]
fn test_rotate_directions_are_mirror_images() {
    let run = |offset: f32| {
        let mut hexy = Hexapod::new(RecordingPort::default());
        let mut clock = NullClock::default();
        gait::rotate(&mut hexy, &mut clock, offset).unwrap();
        hexy.into_port()
    };

    let cw = run(35.0);
    let ccw = run(-35.0);

    for id in LegId::ALL {
        // Hip angle schedule per tripod: the stepping tripod goes
        // offset, offset, -offset; the other bends at -offset and plants
        // at zero.
        let angles: &[f32] = if TRIPOD_A.contains(&id) {
            &[35.0, 35.0, -35.0]
        } else {
            &[-35.0, 0.0]
        };

        let key = JointKey::Leg(id, JointKind::Hip);
        let expect = |sign: f32| {
            angles
                .iter()
                .map(|&a| hip_pulse(id, sign * a))
                .collect::<Vec<_>>()
        };

        assert_eq!(energized_pulses(&cw, key), expect(1.0));
        // The opposite rotation commands the pointwise negated hip angles.
        assert_eq!(energized_pulses(&ccw, key), expect(-1.0));
    }
}

#[test]
fn test_walk_pair_restores_neutral_hips() {
    let mut hexy = Hexapod::new(RecordingPort::default());
    let mut clock = NullClock::default();
    gait::walk_forward(&mut hexy, &mut clock, 1).unwrap();
    gait::walk_backward(&mut hexy, &mut clock, 1).unwrap();

    let port = hexy.into_port();
    for id in LegId::ALL {
        let key = JointKey::Leg(id, JointKind::Hip);
        let last = *energized_pulses(&port, key).last().unwrap();
        assert_eq!(last, hip_pulse(id, 0.0));
    }
}

#[test]
fn test_off_writes_zero_on_every_channel() {
    let mut hexy = Hexapod::new(RecordingPort::default());
    hexy.pose_neck(10.0).unwrap();
    hexy.off().unwrap();

    let port = hexy.into_port();
    let zeros: Vec<_> = port.writes.iter().filter(|&&(_, _, p)| p == 0).collect();
    // Neck plus six legs of three joints.
    assert_eq!(zeros.len(), 19);
}

#[test]
fn test_move_reuses_last_commanded_angles() {
    let mut hexy = Hexapod::new(RecordingPort::default());
    hexy.pose_leg(LegId::LeftFront, 10.0, 0.0, 0.0).unwrap();
    hexy.move_leg(LegId::LeftFront, Some(-30.0), None, 100.0)
        .unwrap();

    let leg = hexy.leg(LegId::LeftFront);
    assert_eq!(leg.hip.current_angle(), Some(10.0));
    assert_eq!(leg.knee.current_angle(), Some(-30.0));
    // Derived ankle angle -130 clamps to the ankle's ±90 domain.
    assert_eq!(leg.ankle.current_angle(), Some(-90.0));
}

#[test]
fn test_replant_raises_then_plants() {
    let mut hexy = Hexapod::new(RecordingPort::default());
    let mut clock = NullClock::default();
    hexy.replant_leg(&mut clock, LegId::RightBack, -30.0, 0.0, 100.0, REPLANT_HOLD)
        .unwrap();

    assert_eq!(clock.holds, 2);
    let leg = hexy.leg(LegId::RightBack);
    assert_eq!(leg.knee.current_angle(), Some(0.0));

    let port = hexy.into_port();
    let key = JointKey::Leg(LegId::RightBack, JointKind::Knee);
    let expected = vec![
        expected_pulse(key, JointKind::Knee, -30.0),
        expected_pulse(key, JointKind::Knee, 0.0),
    ];
    assert_eq!(energized_pulses(&port, key), expected);
}

#[test]
fn test_controller_executes_json_commands() {
    let mut ctrl = SystemController::new(RecordingPort::default(), NullClock::default());

    let cmd: GaitCommand = serde_json::from_str(r#"{"gc":"squat","r":1}"#).unwrap();
    ctrl.execute(cmd).unwrap();

    let cmd: GaitCommand = serde_json::from_str(r#"{"gc":"off"}"#).unwrap();
    ctrl.execute(cmd).unwrap();

    let port = ctrl.body.into_port();
    // off() ends with the right back ankle (bank B, channel 5).
    assert_eq!(port.writes.last(), Some(&(DriverBank::B, 5, 0)));
}
