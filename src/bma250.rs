//! BMA250 accelerometer driver
//!
//! Bring-up only: locate the device on the bus, then program the measurement
//! range and the filter bandwidth (which sets the data update time).

use crate::interface::AddressedInterface;
use crate::registers::bma250::Bma250 as RegisterDevice;
use crate::{BMA250_ADDRESS, BMA250_ADDRESS_ALT, Error};

/// BMA250 measurement range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bma250Range {
    /// ±2g
    G2 = 0x03,
    /// ±4g
    G4 = 0x05,
    /// ±8g
    G8 = 0x08,
    /// ±16g
    G16 = 0x0C,
}

impl Bma250Range {
    /// Register encoding for `PMU_RANGE`
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
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
}

/// BMA250 data update time
///
/// Each step halves the update time and doubles the filter bandwidth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bma250UpdateTime {
    /// 64 ms (7.81 Hz bandwidth)
    Ms64 = 0x08,
    /// 32 ms (15.63 Hz bandwidth)
    Ms32 = 0x09,
    /// 16 ms (31.25 Hz bandwidth)
    Ms16 = 0x0A,
    /// 8 ms (62.5 Hz bandwidth)
    Ms8 = 0x0B,
    /// 4 ms (125 Hz bandwidth)
    Ms4 = 0x0C,
    /// 2 ms (250 Hz bandwidth)
    Ms2 = 0x0D,
    /// 1 ms (500 Hz bandwidth)
    Ms1 = 0x0E,
    /// 0.5 ms (1000 Hz bandwidth)
    Us500 = 0x0F,
}

impl Bma250UpdateTime {
    /// Register encoding for `PMU_BW`
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Update time in microseconds
    #[must_use]
    pub const fn micros(self) -> u32 {
        // 0x08 -> 64ms, each code halves it
        64_000 >> (self as u8 - 0x08)
    }

    /// Filter bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> f32 {
        match self {
            Self::Ms64 => 7.81,
            Self::Ms32 => 15.63,
            Self::Ms16 => 31.25,
            Self::Ms8 => 62.5,
            Self::Ms4 => 125.0,
            Self::Ms2 => 250.0,
            Self::Ms1 => 500.0,
            Self::Us500 => 1000.0,
        }
    }
}

/// Driver for the BMA250
pub struct Bma250Driver<I> {
    device: RegisterDevice<I>,
    chip_id: Option<u8>,
}

impl<I> Bma250Driver<I>
where
    I: AddressedInterface,
{
    /// Create a new driver
    ///
    /// No bus traffic happens until [`begin`](Self::begin).
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            chip_id: None,
        }
    }

    /// Locate the device and program range and update time
    ///
    /// The device is looked for at 0x18 first and at 0x19 if that address
    /// does not answer. The chip ID read during the probe is kept (see
    /// [`chip_id`](Self::chip_id)) but not checked, so BMA250 and BMA250E
    /// parts are both accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if neither address acknowledges, or if programming
    /// the registers fails.
    pub fn begin(
        &mut self,
        range: Bma250Range,
        update_time: Bma250UpdateTime,
    ) -> Result<(), Error<I::Error>> {
        self.chip_id = None;
        let chip_id = self.probe()?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "BMA250 found at {=u8:#x} (chip id {=u8:#x}), range {}, update time {}",
            self.address(),
            chip_id,
            range,
            update_time
        );

        self.device.pmu_range().write(|w| {
            w.set_range(range.bits());
        })?;

        self.device.pmu_bw().write(|w| {
            w.set_bw(update_time.bits());
        })?;

        self.chip_id = Some(chip_id);
        Ok(())
    }

    fn probe(&mut self) -> Result<u8, Error<I::Error>> {
        self.device.interface.set_address(BMA250_ADDRESS);
        if let Ok(reg) = self.device.chip_id().read() {
            return Ok(reg.chip_id());
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("BMA250 not at {=u8:#x}, trying {=u8:#x}", BMA250_ADDRESS, BMA250_ADDRESS_ALT);

        self.device.interface.set_address(BMA250_ADDRESS_ALT);
        let reg = self.device.chip_id().read()?;
        Ok(reg.chip_id())
    }

    /// Chip ID read by the last successful [`begin`](Self::begin)
    ///
    /// `None` before the first call and after a failed one.
    pub const fn chip_id(&self) -> Option<u8> {
        self.chip_id
    }

    /// Bus address the driver is talking to
    pub fn address(&self) -> u8 {
        self.device.interface.address()
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }
}
