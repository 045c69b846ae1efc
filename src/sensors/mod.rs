//! LSM9DS1 settings record
//!
//! The settings record groups one sub-record per concern:
//! - Device (bus kind and addresses)
//! - Gyroscope
//! - Accelerometer
//! - Magnetometer
//!
//! It is plain data, populated before [`Lsm9ds1Driver::begin`](crate::Lsm9ds1Driver::begin)
//! applies it to the hardware.

pub mod accelerometer;
pub mod gyroscope;
pub mod magnetometer;

// Re-export main types
pub use accelerometer::{AccelBandwidth, AccelOdr, AccelScale, AccelSettings, HighResBandwidth};
pub use gyroscope::{GyroOdr, GyroScale, GyroSettings};
pub use magnetometer::{MagMode, MagOdr, MagPerformance, MagScale, MagSettings};

use crate::{LSM9DS1_AG_ADDRESS_ALT, LSM9DS1_MAG_ADDRESS_ALT};

/// Communication interface kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum CommInterface {
    /// Two-wire I2C bus
    I2c,
}

/// Device communication settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceSettings {
    /// Bus kind
    pub comm_interface: CommInterface,
    /// 7-bit magnetometer address
    pub mag_address: u8,
    /// 7-bit accelerometer/gyroscope address
    pub ag_address: u8,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            comm_interface: CommInterface::I2c,
            mag_address: LSM9DS1_MAG_ADDRESS_ALT,
            ag_address: LSM9DS1_AG_ADDRESS_ALT,
        }
    }
}

impl DeviceSettings {
    /// Both addresses are 7-bit and distinct
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.mag_address < 0x80 && self.ag_address < 0x80 && self.mag_address != self.ag_address
    }
}

/// Complete LSM9DS1 settings record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lsm9ds1Settings {
    /// Device communication settings
    pub device: DeviceSettings,
    /// Gyroscope settings
    pub gyro: GyroSettings,
    /// Accelerometer settings
    pub accel: AccelSettings,
    /// Magnetometer settings
    pub mag: MagSettings,
}

impl Lsm9ds1Settings {
    /// Every field holds a value the register encoding accepts
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.device.is_valid() && self.gyro.is_valid()
    }
}
