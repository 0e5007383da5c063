use clap::Parser;
use embassy_executor::{Executor, Spawner};
use hxb_core::utils::body::calibration::DriverBank;
use hxb_core::utils::body::joint::ActuatorPort;
use hxb_core::utils::controllers::{GaitCommand, GAIT_CHANNEL};
use hxb_core::utils::{Duration, PhaseClock, SystemController};
use rand_core::{OsRng, TryRngCore};
use static_cell::StaticCell;
use std::convert::Infallible;
use tracing::{error, info};

#[derive(Parser)]
#[clap(version = "1.0")]
struct Opts {
    /// JSON gait command to run once, e.g. '{"gc":"walk_forward","r":2}'
    #[clap(long)]
    command: Option<String>,
    /// run the sensor-driven behaviour loop after startup
    #[clap(long)]
    behave: bool,
}

/// Actuator that logs pulse writes to the console instead of an I2C bus.
struct SerialActuator;

impl ActuatorPort for SerialActuator {
    type Error = Infallible;

    fn set_pulse(&mut self, bank: DriverBank, channel: u8, pulse: u16) -> Result<(), Self::Error> {
        info!(
            "PWM 0x{:02X} ch{:<2} -> {}",
            bank.address(),
            channel,
            pulse
        );
        Ok(())
    }
}

/// Phase clock backed by a plain thread sleep.
struct StdClock;

impl PhaseClock for StdClock {
    fn hold(&mut self, duration: Duration) {
        std::thread::sleep(std::time::Duration::from_millis(duration.as_millis()));
    }
}

/// Map a differential sensor magnitude onto a behaviour, as the robot's
/// outer selection loop does. Bands outside the table are ignored.
fn select_behaviour(magnitude: u32) -> Option<GaitCommand> {
    match magnitude {
        0..=4 => Some(GaitCommand::NeutralStance),
        5..=45 => Some(GaitCommand::RotateCw { r: Some(3) }),
        46..=150 => Some(GaitCommand::RotateCcw { r: Some(3) }),
        151..=660 => Some(GaitCommand::WalkForward { r: Some(5) }),
        661..=950 => Some(GaitCommand::WalkBackward { r: Some(5) }),
        951..=1400 => Some(GaitCommand::Squat { r: Some(2) }),
        1801..=1900 => Some(GaitCommand::TiltRight),
        1901..=2200 => Some(GaitCommand::TiltLeft),
        _ => None,
    }
}

#[embassy_executor::task]
async fn gait_task(mut ctrl: SystemController<SerialActuator, StdClock>) -> ! {
    ctrl.gait_ch().await
}

#[embassy_executor::task]
async fn main_task(spawner: Spawner) {
    let ctrl = SystemController::new(SerialActuator, StdClock);
    spawner.spawn(gait_task(ctrl)).unwrap();

    let opts: Opts = Opts::parse();
    let sender = GAIT_CHANNEL.sender();

    // Level the body before anything else, as the robot does on boot.
    sender.send(GaitCommand::NeutralStance).await;

    if let Some(json) = opts.command {
        match serde_json::from_str::<GaitCommand>(&json) {
            Ok(cmd) => sender.send(cmd).await,
            Err(e) => error!("Invalid gait command: {e}"),
        }
    }

    if opts.behave {
        loop {
            // Simulated differential ADC reading; the real robot polls an
            // ADS1115 here.
            let reading = OsRng.try_next_u32().unwrap_or(0) % 2200;
            info!("sensor reading: {reading}");

            if let Some(cmd) = select_behaviour(reading) {
                sender.send(cmd).await;
            }

            // The robot idles a randomized interval between behaviours;
            // compressed to a few seconds for the mock.
            let idle = 1 + u64::from(OsRng.try_next_u32().unwrap_or(0) % 3);
            std::thread::sleep(std::time::Duration::from_secs(idle));
        }
    }
}

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(main_task(spawner)).unwrap();
    });
}
