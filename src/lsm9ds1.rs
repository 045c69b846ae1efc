//! LSM9DS1 nine-axis driver
//!
//! Owns the register interface and the settings record. Callers populate the
//! record through [`Lsm9ds1Driver::settings_mut`], then call
//! [`Lsm9ds1Driver::begin`] once to verify the device and apply every setting.

use crate::interface::AddressedInterface;
use crate::registers::Lsm9ds1 as RegisterDevice;
use crate::sensors::Lsm9ds1Settings;
use crate::{Error, WHO_AM_I_COMBINED};

/// Which half of the LSM9DS1 a register access targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    /// Accelerometer and gyroscope
    AccelGyro,
    /// Magnetometer
    Magnetometer,
}

/// Driver for the LSM9DS1
pub struct Lsm9ds1Driver<I> {
    device: RegisterDevice<I>,
    settings: Lsm9ds1Settings,
}

impl<I> Lsm9ds1Driver<I>
where
    I: AddressedInterface,
{
    /// Create a new driver with default settings
    ///
    /// No bus traffic happens until [`begin`](Self::begin).
    pub fn new(interface: I) -> Self {
        Self::with_settings(interface, Lsm9ds1Settings::default())
    }

    /// Create a new driver with a prepared settings record
    pub fn with_settings(interface: I, settings: Lsm9ds1Settings) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            settings,
        }
    }

    /// Current settings record
    pub const fn settings(&self) -> &Lsm9ds1Settings {
        &self.settings
    }

    /// Mutable access to the settings record
    ///
    /// Changes take effect on the next [`begin`](Self::begin).
    pub const fn settings_mut(&mut self) -> &mut Lsm9ds1Settings {
        &mut self.settings
    }

    /// Point the bus at one half of the device
    pub fn select_target(&mut self, target: Target) {
        let address = match target {
            Target::AccelGyro => self.settings.device.ag_address,
            Target::Magnetometer => self.settings.device.mag_address,
        };
        if self.device.interface.address() != address {
            self.device.interface.set_address(address);
        }
    }

    /// Read both identification registers
    ///
    /// Returns the accelerometer/gyroscope ID in the high byte and the
    /// magnetometer ID in the low byte. A healthy device reads `0x683D`.
    ///
    /// # Errors
    ///
    /// Returns an error if either address does not acknowledge.
    pub fn read_who_am_i(&mut self) -> Result<u16, Error<I::Error>> {
        self.select_target(Target::Magnetometer);
        let mag = self.device.mag_who_am_i().read()?.who_am_i();

        self.select_target(Target::AccelGyro);
        let ag = self.device.who_am_i().read()?.who_am_i();

        Ok((u16::from(ag) << 8) | u16::from(mag))
    }

    /// Verify the device and apply the settings record
    ///
    /// Sequence:
    /// 1. Reject a record holding out-of-range values (no bus traffic)
    /// 2. Read both `WHO_AM_I` registers and compare against `0x683D`
    /// 3. Write gyroscope, accelerometer and magnetometer control registers
    ///
    /// Returns the combined identifier on success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings record is invalid ([`Error::InvalidConfig`])
    /// - Communication with the device fails ([`Error::Bus`])
    /// - The identification registers do not match ([`Error::InvalidDevice`])
    pub fn begin(&mut self) -> Result<u16, Error<I::Error>> {
        if !self.settings.is_valid() {
            return Err(Error::InvalidConfig);
        }

        let who_am_i = self.read_who_am_i()?;
        if who_am_i != WHO_AM_I_COMBINED {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "LSM9DS1 identification mismatch: read {=u16:#x}, expected {=u16:#x}",
                who_am_i,
                WHO_AM_I_COMBINED
            );
            return Err(Error::InvalidDevice(who_am_i));
        }

        self.init_gyro()?;
        self.init_accel()?;
        self.init_mag()?;

        #[cfg(feature = "defmt")]
        defmt::info!("LSM9DS1 ready (id {=u16:#x})", who_am_i);

        Ok(who_am_i)
    }

    /// Write the gyroscope control registers
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn init_gyro(&mut self) -> Result<(), Error<I::Error>> {
        let gyro = self.settings.gyro;
        self.select_target(Target::AccelGyro);

        #[cfg(feature = "defmt")]
        defmt::debug!("Applying gyroscope settings: {}", gyro);

        // ODR of zero powers the gyroscope down
        self.device.ctrl_reg_1_g().write(|w| {
            if gyro.enabled {
                w.set_odr(gyro.sample_rate.bits());
            }
            w.set_fs(gyro.scale.bits());
            w.set_bw(gyro.bandwidth & 0x03);
        })?;

        self.device.ctrl_reg_2_g().write(|_| {})?;

        self.device.ctrl_reg_3_g().write(|w| {
            w.set_lp_mode(gyro.low_power_enable);
            if gyro.hpf_enable {
                w.set_hp_en(true);
                w.set_hpcf(gyro.hpf_cutoff & 0x0F);
            }
        })?;

        self.device.ctrl_reg_4().write(|w| {
            w.set_zen_g(gyro.enable_z);
            w.set_yen_g(gyro.enable_y);
            w.set_xen_g(gyro.enable_x);
            w.set_lir_xl(gyro.latch_interrupt);
        })?;

        self.device.orient_cfg_g().write(|w| {
            w.set_sign_x(gyro.flip_x);
            w.set_sign_y(gyro.flip_y);
            w.set_sign_z(gyro.flip_z);
            w.set_orient(gyro.orientation & 0x07);
        })?;

        Ok(())
    }

    /// Write the accelerometer control registers
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn init_accel(&mut self) -> Result<(), Error<I::Error>> {
        let accel = self.settings.accel;
        self.select_target(Target::AccelGyro);

        #[cfg(feature = "defmt")]
        defmt::debug!("Applying accelerometer settings: {}", accel);

        self.device.ctrl_reg_5_xl().write(|w| {
            w.set_zen_xl(accel.enable_z);
            w.set_yen_xl(accel.enable_y);
            w.set_xen_xl(accel.enable_x);
        })?;

        self.device.ctrl_reg_6_xl().write(|w| {
            if accel.enabled {
                w.set_odr_xl(accel.sample_rate.bits());
            }
            w.set_fs_xl(accel.scale.bits());
            if let Some(bw) = accel.bandwidth.bits() {
                w.set_bw_scal_odr(true);
                w.set_bw_xl(bw);
            }
        })?;

        self.device.ctrl_reg_7_xl().write(|w| {
            if accel.high_res_enable {
                w.set_hr(true);
                w.set_dcf(accel.high_res_bandwidth.bits());
            }
        })?;

        Ok(())
    }

    /// Write the magnetometer control registers
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn init_mag(&mut self) -> Result<(), Error<I::Error>> {
        let mag = self.settings.mag;
        self.select_target(Target::Magnetometer);

        #[cfg(feature = "defmt")]
        defmt::debug!("Applying magnetometer settings: {}", mag);

        self.device.mag_ctrl_reg_1().write(|w| {
            w.set_temp_comp(mag.temp_compensation_enable);
            w.set_om(mag.xy_performance.bits());
            w.set_data_rate(mag.sample_rate.bits());
        })?;

        self.device.mag_ctrl_reg_2().write(|w| {
            w.set_fs_m(mag.scale.bits());
        })?;

        self.device.mag_ctrl_reg_3().write(|w| {
            w.set_lp(mag.low_power_enable);
            w.set_md(mag.effective_mode().bits());
        })?;

        self.device.mag_ctrl_reg_4().write(|w| {
            w.set_omz(mag.z_performance.bits());
        })?;

        self.device.mag_ctrl_reg_5().write(|_| {})?;

        self.select_target(Target::AccelGyro);
        Ok(())
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Get a mutable reference to the underlying register device (for advanced usage)
    ///
    /// Register accesses go to whichever address [`select_target`](Self::select_target)
    /// last chose.
    pub const fn device_mut(&mut self) -> &mut RegisterDevice<I> {
        &mut self.device
    }
}
