//! Gyroscope settings for the LSM9DS1
//!
//! Provides the gyroscope sub-record of the LSM9DS1 settings and its enumerations.

/// Gyroscope full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroScale {
    /// ±245°/s range
    Dps245,
    /// ±500°/s range
    Dps500,
    /// ±2000°/s range
    Dps2000,
}

impl GyroScale {
    /// Register encoding for `CTRL_REG1_G.FS`
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Dps245 => 0,
            Self::Dps500 => 1,
            Self::Dps2000 => 3,
        }
    }

    /// Full-scale value in °/s
    #[must_use]
    pub const fn dps(self) -> u16 {
        match self {
            Self::Dps245 => 245,
            Self::Dps500 => 500,
            Self::Dps2000 => 2000,
        }
    }

    /// Resolution in (°/s)/LSB
    #[must_use]
    pub const fn resolution(self) -> f32 {
        match self {
            Self::Dps245 => 0.008_75,
            Self::Dps500 => 0.017_5,
            Self::Dps2000 => 0.07,
        }
    }
}

/// Gyroscope output data rate
///
/// The discriminant is the `CTRL_REG1_G.ODR` value. While the gyroscope is
/// enabled the accelerometer also runs at this rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroOdr {
    /// 14.9 Hz
    Hz14_9 = 1,
    /// 59.5 Hz
    Hz59_5 = 2,
    /// 119 Hz
    Hz119 = 3,
    /// 238 Hz
    Hz238 = 4,
    /// 476 Hz
    Hz476 = 5,
    /// 952 Hz
    Hz952 = 6,
}

impl GyroOdr {
    /// Register encoding for `CTRL_REG1_G.ODR`
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Output data rate in Hz
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::Hz14_9 => 14.9,
            Self::Hz59_5 => 59.5,
            Self::Hz119 => 119.0,
            Self::Hz238 => 238.0,
            Self::Hz476 => 476.0,
            Self::Hz952 => 952.0,
        }
    }
}

/// Highest valid gyroscope bandwidth selection
pub const GYRO_BANDWIDTH_MAX: u8 = 3;

/// Highest valid gyroscope high-pass filter cutoff selection
pub const GYRO_HPF_CUTOFF_MAX: u8 = 9;

/// Highest valid gyroscope orientation selection
pub const GYRO_ORIENTATION_MAX: u8 = 7;

/// Gyroscope settings
///
/// `bandwidth` and `hpf_cutoff` are raw selections whose cutoff frequency
/// depends on the output data rate (see the LSM9DS1 datasheet tables 46/52).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct GyroSettings {
    /// Gyroscope enabled (powered down when false)
    pub enabled: bool,
    /// X-axis output enable
    pub enable_x: bool,
    /// Y-axis output enable
    pub enable_y: bool,
    /// Z-axis output enable
    pub enable_z: bool,
    /// Full-scale range
    pub scale: GyroScale,
    /// Output data rate
    pub sample_rate: GyroOdr,
    /// Bandwidth selection (0-3)
    pub bandwidth: u8,
    /// Low-power mode
    pub low_power_enable: bool,
    /// High-pass filter enable
    pub hpf_enable: bool,
    /// High-pass filter cutoff selection (0-9)
    pub hpf_cutoff: u8,
    /// Invert the X-axis sign
    pub flip_x: bool,
    /// Invert the Y-axis sign
    pub flip_y: bool,
    /// Invert the Z-axis sign
    pub flip_z: bool,
    /// Latch interrupt requests
    pub latch_interrupt: bool,
    /// Directional orientation selection (0-7)
    pub orientation: u8,
}

impl Default for GyroSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_x: true,
            enable_y: true,
            enable_z: true,
            scale: GyroScale::Dps245,
            sample_rate: GyroOdr::Hz952,
            bandwidth: 0,
            low_power_enable: false,
            hpf_enable: false,
            hpf_cutoff: 0,
            flip_x: false,
            flip_y: false,
            flip_z: false,
            latch_interrupt: true,
            orientation: 0,
        }
    }
}

impl GyroSettings {
    /// Check the raw selections against their documented ranges
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.bandwidth <= GYRO_BANDWIDTH_MAX
            && self.hpf_cutoff <= GYRO_HPF_CUTOFF_MAX
            && self.orientation <= GYRO_ORIENTATION_MAX
    }
}
