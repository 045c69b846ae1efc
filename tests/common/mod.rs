//! Common test utilities and mock implementations

pub mod mock_interface;
pub mod test_utils;

pub use mock_i2c::{MockI2c, MockI2cError, Transaction};
pub use mock_interface::{MockError, Operation};
pub use test_utils::{AG, MAG, create_mock_accel, create_mock_imu};
