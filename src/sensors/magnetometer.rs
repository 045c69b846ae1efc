//! Magnetometer settings for the LSM9DS1

/// Magnetometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagScale {
    /// ±4 gauss
    Gauss4 = 0,
    /// ±8 gauss
    Gauss8 = 1,
    /// ±12 gauss
    Gauss12 = 2,
    /// ±16 gauss
    Gauss16 = 3,
}

impl MagScale {
    /// Register encoding for `CTRL_REG2_M.FS`
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Full-scale value in gauss
    #[must_use]
    pub const fn gauss(self) -> u8 {
        match self {
            Self::Gauss4 => 4,
            Self::Gauss8 => 8,
            Self::Gauss12 => 12,
            Self::Gauss16 => 16,
        }
    }

    /// Resolution in gauss/LSB
    #[must_use]
    pub const fn resolution(self) -> f32 {
        match self {
            Self::Gauss4 => 0.000_14,
            Self::Gauss8 => 0.000_29,
            Self::Gauss12 => 0.000_43,
            Self::Gauss16 => 0.000_58,
        }
    }
}

/// Magnetometer output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagOdr {
    /// 0.625 Hz
    Hz0_625 = 0,
    /// 1.25 Hz
    Hz1_25 = 1,
    /// 2.5 Hz
    Hz2_5 = 2,
    /// 5 Hz
    Hz5 = 3,
    /// 10 Hz
    Hz10 = 4,
    /// 20 Hz
    Hz20 = 5,
    /// 40 Hz
    Hz40 = 6,
    /// 80 Hz
    Hz80 = 7,
}

impl MagOdr {
    /// Register encoding for `CTRL_REG1_M.DO`
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Magnetometer operative mode (per axis group)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagPerformance {
    /// Low-power mode
    LowPower = 0,
    /// Medium-performance mode
    Medium = 1,
    /// High-performance mode
    High = 2,
    /// Ultra-high performance mode
    UltraHigh = 3,
}

impl MagPerformance {
    /// Register encoding for `CTRL_REG1_M.OM` / `CTRL_REG4_M.OMZ`
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Magnetometer conversion mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagMode {
    /// Continuous conversion
    Continuous = 0,
    /// Single conversion
    Single = 1,
    /// Power-down
    PowerDown = 2,
}

impl MagMode {
    /// Register encoding for `CTRL_REG3_M.MD`
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Magnetometer settings
///
/// The bring-up profiles leave these at their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagSettings {
    /// Magnetometer enabled (forced to power-down when false)
    pub enabled: bool,
    /// Full-scale range
    pub scale: MagScale,
    /// Output data rate
    pub sample_rate: MagOdr,
    /// Temperature compensation
    pub temp_compensation_enable: bool,
    /// X/Y axes operative mode
    pub xy_performance: MagPerformance,
    /// Z axis operative mode
    pub z_performance: MagPerformance,
    /// Low-power mode
    pub low_power_enable: bool,
    /// Conversion mode
    pub operating_mode: MagMode,
}

impl Default for MagSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            scale: MagScale::Gauss4,
            sample_rate: MagOdr::Hz80,
            temp_compensation_enable: false,
            xy_performance: MagPerformance::UltraHigh,
            z_performance: MagPerformance::UltraHigh,
            low_power_enable: false,
            operating_mode: MagMode::Continuous,
        }
    }
}

impl MagSettings {
    /// Conversion mode actually written to the device
    #[must_use]
    pub const fn effective_mode(&self) -> MagMode {
        if self.enabled {
            self.operating_mode
        } else {
            MagMode::PowerDown
        }
    }
}
