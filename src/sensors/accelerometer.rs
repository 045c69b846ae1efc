//! Accelerometer settings for the LSM9DS1
//!
//! Provides the accelerometer sub-record of the LSM9DS1 settings and its enumerations.

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelScale {
    /// ±2g range
    G2,
    /// ±4g range
    G4,
    /// ±8g range
    G8,
    /// ±16g range
    G16,
}

impl AccelScale {
    /// Register encoding for `CTRL_REG6_XL.FS_XL`
    ///
    /// The LSM9DS1 encoding is not monotonic: 16g sits at 0b01.
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::G2 => 0,
            Self::G16 => 1,
            Self::G4 => 2,
            Self::G8 => 3,
        }
    }

    /// Full-scale value in g
    #[must_use]
    pub const fn g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Resolution in g/LSB
    #[must_use]
    pub const fn resolution(self) -> f32 {
        match self {
            Self::G2 => 0.000_061,
            Self::G4 => 0.000_122,
            Self::G8 => 0.000_244,
            Self::G16 => 0.000_732,
        }
    }
}

/// Accelerometer output data rate
///
/// Only effective while the gyroscope is disabled; otherwise the accelerometer
/// follows the gyroscope rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelOdr {
    /// 10 Hz
    Hz10 = 1,
    /// 50 Hz
    Hz50 = 2,
    /// 119 Hz
    Hz119 = 3,
    /// 238 Hz
    Hz238 = 4,
    /// 476 Hz
    Hz476 = 5,
    /// 952 Hz
    Hz952 = 6,
}

impl AccelOdr {
    /// Register encoding for `CTRL_REG6_XL.ODR_XL`
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Output data rate in Hz
    #[must_use]
    pub const fn hz(self) -> u16 {
        match self {
            Self::Hz10 => 10,
            Self::Hz50 => 50,
            Self::Hz119 => 119,
            Self::Hz238 => 238,
            Self::Hz476 => 476,
            Self::Hz952 => 952,
        }
    }
}

/// Accelerometer anti-aliasing filter bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelBandwidth {
    /// Bandwidth derived from the output data rate
    Auto,
    /// 408 Hz
    Hz408,
    /// 211 Hz
    Hz211,
    /// 105 Hz
    Hz105,
    /// 50 Hz
    Hz50,
}

impl AccelBandwidth {
    /// Register encoding for `CTRL_REG6_XL.BW_XL`, `None` for [`Auto`](Self::Auto)
    #[must_use]
    pub const fn bits(self) -> Option<u8> {
        match self {
            Self::Auto => None,
            Self::Hz408 => Some(0),
            Self::Hz211 => Some(1),
            Self::Hz105 => Some(2),
            Self::Hz50 => Some(3),
        }
    }

    /// Selection index as used by reference drivers (-1 for automatic)
    #[must_use]
    pub const fn index(self) -> i8 {
        match self.bits() {
            #[allow(clippy::cast_possible_wrap)]
            Some(bits) => bits as i8,
            None => -1,
        }
    }
}

/// High-resolution mode filter cutoff, as a fraction of the output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HighResBandwidth {
    /// ODR/50
    OdrDiv50 = 0,
    /// ODR/100
    OdrDiv100 = 1,
    /// ODR/9
    OdrDiv9 = 2,
    /// ODR/400
    OdrDiv400 = 3,
}

impl HighResBandwidth {
    /// Register encoding for `CTRL_REG7_XL.DCF`
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Accelerometer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct AccelSettings {
    /// Accelerometer enabled (powered down when false and the gyroscope is off)
    pub enabled: bool,
    /// X-axis output enable
    pub enable_x: bool,
    /// Y-axis output enable
    pub enable_y: bool,
    /// Z-axis output enable
    pub enable_z: bool,
    /// Full-scale range
    pub scale: AccelScale,
    /// Output data rate (ignored while the gyroscope is enabled)
    pub sample_rate: AccelOdr,
    /// Anti-aliasing filter bandwidth
    pub bandwidth: AccelBandwidth,
    /// High-resolution mode
    pub high_res_enable: bool,
    /// High-resolution filter cutoff
    pub high_res_bandwidth: HighResBandwidth,
}

impl Default for AccelSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_x: true,
            enable_y: true,
            enable_z: true,
            scale: AccelScale::G2,
            sample_rate: AccelOdr::Hz952,
            bandwidth: AccelBandwidth::Auto,
            high_res_enable: false,
            high_res_bandwidth: HighResBandwidth::OdrDiv50,
        }
    }
}
