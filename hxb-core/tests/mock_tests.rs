use core::cell::RefCell;

use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use hxb_core::utils::body::calibration::DriverBank;
use hxb_core::utils::body::joint::ActuatorPort;
use hxb_core::utils::controllers::i2c::DualPca9685;

/// I2C address of driver bank A (front legs, left middle, neck).
pub const BANK_A_ADDRESS: u8 = 0x41;
/// I2C address of driver bank B (remaining legs).
pub const BANK_B_ADDRESS: u8 = 0x40;

/// Create a write transaction for the given I2C address and data payload.
pub fn write(addr: u8, data: Vec<u8>) -> I2cTrans {
    I2cTrans::write(addr, data)
}

#[test]
fn test_init_drivers() {
    // Enable + 60Hz prescale (with sleep handling) on both banks, A first.
    let expectations = [
        write(BANK_A_ADDRESS, vec![0x00, 0x01]),
        write(BANK_A_ADDRESS, vec![0x00, 0x11]),
        write(BANK_A_ADDRESS, vec![0xFE, 100]),
        write(BANK_A_ADDRESS, vec![0x00, 0x01]),
        write(BANK_B_ADDRESS, vec![0x00, 0x01]),
        write(BANK_B_ADDRESS, vec![0x00, 0x11]),
        write(BANK_B_ADDRESS, vec![0xFE, 100]),
        write(BANK_B_ADDRESS, vec![0x00, 0x01]),
    ];

    let mock = I2cMock::new(&expectations);
    let i2c_bus = RefCell::new(mock);
    let mut port = DualPca9685::new(&i2c_bus).unwrap();
    port.init_drivers().unwrap();
    i2c_bus.borrow_mut().done();
}

#[test]
fn test_set_pulse_register_format() {
    // First write per bank issues one auto-increment, then the LEDn block.
    // Channel 6 -> register 0x1E, pulse 270 = 0x010E.
    let expectations = [
        write(BANK_A_ADDRESS, vec![0x00, 0x31]),
        write(BANK_A_ADDRESS, vec![0x1E, 0x00, 0x00, 0x0E, 0x01]),
        write(BANK_B_ADDRESS, vec![0x00, 0x31]),
        write(BANK_B_ADDRESS, vec![0x06, 0x00, 0x00, 0xEA, 0x01]),
    ];

    let mock = I2cMock::new(&expectations);
    let i2c_bus = RefCell::new(mock);
    let mut port = DualPca9685::new(&i2c_bus).unwrap();
    port.set_pulse(DriverBank::A, 6, 270).unwrap();
    port.set_pulse(DriverBank::B, 0, 490).unwrap();
    i2c_bus.borrow_mut().done();
}

#[test]
fn test_zero_pulse_deenergizes() {
    // Neck channel 9 -> register 0x2A; pulse 0 clears the whole block.
    let expectations = [
        write(BANK_A_ADDRESS, vec![0x00, 0x31]),
        write(BANK_A_ADDRESS, vec![0x2A, 0x00, 0x00, 0x00, 0x00]),
    ];

    let mock = I2cMock::new(&expectations);
    let i2c_bus = RefCell::new(mock);
    let mut port = DualPca9685::new(&i2c_bus).unwrap();
    port.set_pulse(DriverBank::A, 9, 0).unwrap();
    i2c_bus.borrow_mut().done();
}

#[test]
fn test_invalid_channel_rejected() {
    let mock = I2cMock::new(&[]);
    let i2c_bus = RefCell::new(mock);
    let mut port = DualPca9685::new(&i2c_bus).unwrap();
    assert!(port.set_pulse(DriverBank::A, 16, 300).is_err());
    i2c_bus.borrow_mut().done();
}
