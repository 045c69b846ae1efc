#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod bma250;
pub mod interface;
pub mod lsm9ds1;
pub mod registers;
pub mod sensors;
pub mod setup;

// Re-export main types
pub use bma250::{Bma250Driver, Bma250Range, Bma250UpdateTime};
pub use interface::{AddressedInterface, I2cInterface};
pub use lsm9ds1::Lsm9ds1Driver;
pub use sensors::{
    AccelBandwidth, AccelOdr, AccelScale, AccelSettings, CommInterface, DeviceSettings, GyroOdr,
    GyroScale, GyroSettings, HighResBandwidth, Lsm9ds1Settings, MagMode, MagOdr, MagPerformance,
    MagScale, MagSettings,
};
pub use setup::{Imu, SensorProfile};

/// LSM9DS1 magnetometer I2C address with `SDO_M` pulled high (0x1C)
///
/// This is the wiring the 9-axis profile is built for.
pub const LSM9DS1_MAG_ADDRESS: u8 = 0x1C;

/// LSM9DS1 accelerometer/gyroscope I2C address with `SDO_AG` pulled high (0x6A)
pub const LSM9DS1_AG_ADDRESS: u8 = 0x6A;

/// LSM9DS1 magnetometer I2C address with `SDO_M` pulled low (0x1E)
pub const LSM9DS1_MAG_ADDRESS_ALT: u8 = 0x1E;

/// LSM9DS1 accelerometer/gyroscope I2C address with `SDO_AG` pulled low (0x6B)
pub const LSM9DS1_AG_ADDRESS_ALT: u8 = 0x6B;

/// BMA250 I2C address when SDO is low (0x18)
pub const BMA250_ADDRESS: u8 = 0x18;

/// BMA250 I2C address when SDO is high (0x19)
///
/// [`Bma250Driver::begin`] falls back to this address when 0x18 does not answer.
pub const BMA250_ADDRESS_ALT: u8 = 0x19;

/// Expected value of the accelerometer/gyroscope `WHO_AM_I` register
pub const WHO_AM_I_AG_VALUE: u8 = 0x68;

/// Expected value of the magnetometer `WHO_AM_I_M` register
pub const WHO_AM_I_M_VALUE: u8 = 0x3D;

/// Combined identifier returned by a successful LSM9DS1 `begin`
///
/// Accelerometer/gyroscope ID in the high byte, magnetometer ID in the low byte.
pub const WHO_AM_I_COMBINED: u16 = ((WHO_AM_I_AG_VALUE as u16) << 8) | WHO_AM_I_M_VALUE as u16;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device (no acknowledge or transfer failure)
    Bus(E),
    /// Identification registers did not match (contains the combined value read)
    InvalidDevice(u16),
    /// Settings record holds a value outside its documented range
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
