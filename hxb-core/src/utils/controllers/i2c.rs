//! I2C actuator port for the Hexapod Bot.
//!
//! Nineteen servos are split across two PCA9685 PWM drivers sharing one I2C
//! bus. This module owns both drivers and implements [`ActuatorPort`] so the
//! body model never touches the bus directly.

use core::cell::RefCell;

use embedded_hal::i2c::I2c;
use embedded_hal_bus::i2c::RefCellDevice;
use pwm_pca9685::{Address as PwmAddress, Channel, Error as PwmError, Pca9685};

use crate::utils::body::calibration::DriverBank;
use crate::utils::body::joint::ActuatorPort;

/// Prescale value used on both drivers; a 60 Hz servo frame.
const SERVO_PRESCALE: u8 = 100;

/// Errors that can occur when driving the PWM hardware.
#[derive(Debug)]
pub enum DeviceError<E: core::fmt::Debug> {
    PwmError(PwmError<E>),
    InvalidChannel(u8),
}

/// Both PCA9685 drivers over a shared I2C bus.
pub struct DualPca9685<'a, I2C: 'static> {
    i2c: &'a RefCell<I2C>,
    bank_a: Pca9685<RefCellDevice<'a, I2C>>,
    bank_b: Pca9685<RefCellDevice<'a, I2C>>,
}

impl<'a, I2C, E> DualPca9685<'a, I2C>
where
    I2C: I2c<Error = E> + 'static,
    E: core::fmt::Debug,
{
    /// Create the driver pair at their fixed bank addresses.
    pub fn new(i2c_bus: &'a RefCell<I2C>) -> Result<Self, DeviceError<E>> {
        let bank_a = Pca9685::new(
            RefCellDevice::new(i2c_bus),
            PwmAddress::from(DriverBank::A.address()),
        )
        .map_err(DeviceError::PwmError)?;
        let bank_b = Pca9685::new(
            RefCellDevice::new(i2c_bus),
            PwmAddress::from(DriverBank::B.address()),
        )
        .map_err(DeviceError::PwmError)?;

        Ok(DualPca9685 {
            i2c: i2c_bus,
            bank_a,
            bank_b,
        })
    }

    /// Enable both drivers and set the 60 Hz servo frame.
    pub fn init_drivers(&mut self) -> Result<(), DeviceError<E>> {
        for pca in [&mut self.bank_a, &mut self.bank_b] {
            pca.enable().map_err(DeviceError::PwmError)?;
            pca.set_prescale(SERVO_PRESCALE)
                .map_err(DeviceError::PwmError)?;
        }
        tracing::info!("PWM drivers enabled, prescale set to 60Hz");
        Ok(())
    }

    /// Scan the I2C bus for devices and log any found addresses.
    pub fn scan_bus(&self) {
        let mut bus = self.i2c.borrow_mut();
        for addr in 0x03..0x78 {
            if bus.write(addr, &[]).is_ok() {
                tracing::warn!("I2C device found at 0x{:02X}", addr);
            }
        }
    }

    fn driver(&mut self, bank: DriverBank) -> &mut Pca9685<RefCellDevice<'a, I2C>> {
        match bank {
            DriverBank::A => &mut self.bank_a,
            DriverBank::B => &mut self.bank_b,
        }
    }
}

fn pwm_channel(channel: u8) -> Option<Channel> {
    Some(match channel {
        0 => Channel::C0,
        1 => Channel::C1,
        2 => Channel::C2,
        3 => Channel::C3,
        4 => Channel::C4,
        5 => Channel::C5,
        6 => Channel::C6,
        7 => Channel::C7,
        8 => Channel::C8,
        9 => Channel::C9,
        10 => Channel::C10,
        11 => Channel::C11,
        12 => Channel::C12,
        13 => Channel::C13,
        14 => Channel::C14,
        15 => Channel::C15,
        _ => return None,
    })
}

impl<'a, I2C, E> ActuatorPort for DualPca9685<'a, I2C>
where
    I2C: I2c<Error = E> + 'static,
    E: core::fmt::Debug,
{
    type Error = DeviceError<E>;

    fn set_pulse(&mut self, bank: DriverBank, channel: u8, pulse: u16) -> Result<(), Self::Error> {
        // Calibration guarantees channel < 16, so the conversion only fails
        // on a port used outside the body model.
        let channel = pwm_channel(channel).ok_or(DeviceError::InvalidChannel(channel))?;
        self.driver(bank)
            .set_channel_on_off(channel, 0, pulse)
            .map_err(DeviceError::PwmError)
    }
}
