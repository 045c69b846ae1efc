//! Fixed bring-up profiles
//!
//! Two alternative ways to bring an IMU up at startup:
//!
//! - **Accelerometer only**: a BMA250 at ±8g with an 8 ms update time.
//! - **Nine axis**: an LSM9DS1 with both address-select pins pulled high
//!   (magnetometer at 0x1C, accelerometer/gyroscope at 0x6A), gyroscope at
//!   ±245°/s and 952 Hz with the high-pass filter on, accelerometer at ±16g.
//!
//! The sub-configuration functions only write the settings record; all bus
//! traffic happens in the driver's `begin`.
//!
//! # Example
//!
//! ```ignore
//! let interface = I2cInterface::new(i2c);
//! let imu = SensorProfile::NineAxis.setup(interface)?;
//! ```

use crate::bma250::{Bma250Driver, Bma250Range, Bma250UpdateTime};
use crate::interface::AddressedInterface;
use crate::lsm9ds1::Lsm9ds1Driver;
use crate::sensors::{
    AccelBandwidth, AccelOdr, AccelScale, AccelSettings, CommInterface, DeviceSettings, GyroOdr,
    GyroScale, GyroSettings, HighResBandwidth, Lsm9ds1Settings,
};
use crate::{Error, LSM9DS1_AG_ADDRESS, LSM9DS1_MAG_ADDRESS};

/// Accelerometer-only profile range
pub const ACCEL_ONLY_RANGE: Bma250Range = Bma250Range::G8;

/// Accelerometer-only profile update time
pub const ACCEL_ONLY_UPDATE_TIME: Bma250UpdateTime = Bma250UpdateTime::Ms8;

/// Nine-axis profile gyroscope settings
pub const GYRO_PROFILE: GyroProfile = GyroProfile {
    enabled: true,
    scale: GyroScale::Dps245,
    sample_rate: GyroOdr::Hz952,
    bandwidth: 0,
    low_power_enable: false,
    hpf_enable: true,
    hpf_cutoff: 1,
    flip_x: false,
    flip_y: false,
    flip_z: false,
};

/// Nine-axis profile accelerometer settings
pub const ACCEL_PROFILE: AccelProfile = AccelProfile {
    enabled: true,
    enable_x: true,
    enable_y: true,
    enable_z: true,
    scale: AccelScale::G16,
    sample_rate: AccelOdr::Hz10,
    bandwidth: AccelBandwidth::Hz408,
    high_res_enable: false,
    high_res_bandwidth: HighResBandwidth::OdrDiv50,
};

/// The gyroscope fields a profile pins down
///
/// Fields not listed (axis enables, interrupt latch, orientation) keep
/// whatever the record already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct GyroProfile {
    /// See [`GyroSettings::enabled`]
    pub enabled: bool,
    /// See [`GyroSettings::scale`]
    pub scale: GyroScale,
    /// See [`GyroSettings::sample_rate`]
    pub sample_rate: GyroOdr,
    /// See [`GyroSettings::bandwidth`]
    pub bandwidth: u8,
    /// See [`GyroSettings::low_power_enable`]
    pub low_power_enable: bool,
    /// See [`GyroSettings::hpf_enable`]
    pub hpf_enable: bool,
    /// See [`GyroSettings::hpf_cutoff`]
    pub hpf_cutoff: u8,
    /// See [`GyroSettings::flip_x`]
    pub flip_x: bool,
    /// See [`GyroSettings::flip_y`]
    pub flip_y: bool,
    /// See [`GyroSettings::flip_z`]
    pub flip_z: bool,
}

impl GyroProfile {
    /// Copy the profile into a gyroscope record
    pub const fn apply(&self, gyro: &mut GyroSettings) {
        gyro.enabled = self.enabled;
        gyro.scale = self.scale;
        gyro.sample_rate = self.sample_rate;
        gyro.bandwidth = self.bandwidth;
        gyro.low_power_enable = self.low_power_enable;
        gyro.hpf_enable = self.hpf_enable;
        gyro.hpf_cutoff = self.hpf_cutoff;
        gyro.flip_x = self.flip_x;
        gyro.flip_y = self.flip_y;
        gyro.flip_z = self.flip_z;
    }
}

/// The accelerometer fields a profile pins down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct AccelProfile {
    /// See [`AccelSettings::enabled`]
    pub enabled: bool,
    /// See [`AccelSettings::enable_x`]
    pub enable_x: bool,
    /// See [`AccelSettings::enable_y`]
    pub enable_y: bool,
    /// See [`AccelSettings::enable_z`]
    pub enable_z: bool,
    /// See [`AccelSettings::scale`]
    pub scale: AccelScale,
    /// See [`AccelSettings::sample_rate`]
    pub sample_rate: AccelOdr,
    /// See [`AccelSettings::bandwidth`]
    pub bandwidth: AccelBandwidth,
    /// See [`AccelSettings::high_res_enable`]
    pub high_res_enable: bool,
    /// See [`AccelSettings::high_res_bandwidth`]
    pub high_res_bandwidth: HighResBandwidth,
}

impl AccelProfile {
    /// Copy the profile into an accelerometer record
    pub const fn apply(&self, accel: &mut AccelSettings) {
        accel.enabled = self.enabled;
        accel.enable_x = self.enable_x;
        accel.enable_y = self.enable_y;
        accel.enable_z = self.enable_z;
        accel.scale = self.scale;
        accel.sample_rate = self.sample_rate;
        accel.bandwidth = self.bandwidth;
        accel.high_res_enable = self.high_res_enable;
        accel.high_res_bandwidth = self.high_res_bandwidth;
    }
}

/// Populate the gyroscope record with the nine-axis profile
pub const fn configure_gyro(gyro: &mut GyroSettings) {
    GYRO_PROFILE.apply(gyro);
}

/// Populate the accelerometer record with the nine-axis profile
pub const fn configure_accel(accel: &mut AccelSettings) {
    ACCEL_PROFILE.apply(accel);
}

/// Populate the device record: I2C, magnetometer 0x1C, accelerometer/gyroscope 0x6A
pub const fn configure_device(device: &mut DeviceSettings) {
    device.comm_interface = CommInterface::I2c;
    device.mag_address = LSM9DS1_MAG_ADDRESS;
    device.ag_address = LSM9DS1_AG_ADDRESS;
}

/// Populate every sub-record the nine-axis profile defines
///
/// The gyroscope and accelerometer records are disjoint, so their order
/// does not matter. The magnetometer record is left untouched.
pub const fn prepare_imu(settings: &mut Lsm9ds1Settings) {
    configure_device(&mut settings.device);
    configure_accel(&mut settings.accel);
    configure_gyro(&mut settings.gyro);
}

/// Bring up an LSM9DS1 with the nine-axis profile
///
/// The driver must own an interface built on an initialized bus. Returns
/// the combined identifier (`0x683D`) reported by the device.
///
/// # Errors
///
/// Returns an error if the device does not acknowledge or identifies as
/// something else. Nothing is retried.
pub fn setup_imu<I>(imu: &mut Lsm9ds1Driver<I>) -> Result<u16, Error<I::Error>>
where
    I: AddressedInterface,
{
    prepare_imu(imu.settings_mut());
    imu.begin()
}

/// Bring up a BMA250 with the accelerometer-only profile
///
/// # Errors
///
/// Returns an error if the device does not acknowledge on either address.
pub fn setup_accelerometer<I>(accel: &mut Bma250Driver<I>) -> Result<(), Error<I::Error>>
where
    I: AddressedInterface,
{
    accel.begin(ACCEL_ONLY_RANGE, ACCEL_ONLY_UPDATE_TIME)
}

/// Bring up a BMA250 and report success unconditionally
///
/// Kept for callers that depend on the historical contract, where the
/// outcome of the device setup was never inspected. Prefer
/// [`setup_accelerometer`].
pub fn setup_accelerometer_legacy<I>(accel: &mut Bma250Driver<I>) -> bool
where
    I: AddressedInterface,
{
    if setup_accelerometer(accel).is_err() {
        #[cfg(feature = "defmt")]
        defmt::warn!("BMA250 setup failed, reporting success anyway");
    }
    true
}

/// Which IMU the board carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorProfile {
    /// BMA250 accelerometer
    AccelerometerOnly,
    /// LSM9DS1 accelerometer, gyroscope and magnetometer
    NineAxis,
}

impl SensorProfile {
    /// Build the matching driver and run its bring-up
    ///
    /// # Errors
    ///
    /// Returns the bring-up error of the selected profile.
    pub fn setup<I>(self, interface: I) -> Result<Imu<I>, Error<I::Error>>
    where
        I: AddressedInterface,
    {
        match self {
            Self::AccelerometerOnly => {
                let mut accel = Bma250Driver::new(interface);
                setup_accelerometer(&mut accel)?;
                Ok(Imu::Accelerometer(accel))
            }
            Self::NineAxis => {
                let mut imu = Lsm9ds1Driver::new(interface);
                setup_imu(&mut imu)?;
                Ok(Imu::NineAxis(imu))
            }
        }
    }
}

/// An IMU brought up by [`SensorProfile::setup`]
pub enum Imu<I> {
    /// BMA250 driver
    Accelerometer(Bma250Driver<I>),
    /// LSM9DS1 driver
    NineAxis(Lsm9ds1Driver<I>),
}

impl<I> Imu<I>
where
    I: AddressedInterface,
{
    /// Profile this IMU was brought up with
    pub const fn profile(&self) -> SensorProfile {
        match self {
            Self::Accelerometer(_) => SensorProfile::AccelerometerOnly,
            Self::NineAxis(_) => SensorProfile::NineAxis,
        }
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        match self {
            Self::Accelerometer(accel) => accel.release(),
            Self::NineAxis(imu) => imu.release(),
        }
    }
}
