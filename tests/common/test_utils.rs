//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use imu_init::{Bma250Driver, Lsm9ds1Driver};

/// Create a mock LSM9DS1 driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_imu() -> (Lsm9ds1Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    (Lsm9ds1Driver::new(interface), interface_clone)
}

/// Create a mock BMA250 driver for testing
pub fn create_mock_accel() -> (Bma250Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    (Bma250Driver::new(interface), interface_clone)
}

/// LSM9DS1 accelerometer/gyroscope address used by the nine-axis profile
pub const AG: u8 = 0x6A;

/// LSM9DS1 magnetometer address used by the nine-axis profile
pub const MAG: u8 = 0x1C;
