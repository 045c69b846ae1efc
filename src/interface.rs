//! Bus interface implementation for the supported IMUs
//!
//! Both chips sit on a two-wire bus and the LSM9DS1 answers on two addresses
//! (accelerometer/gyroscope and magnetometer). The register interface therefore
//! carries a switchable target address, much like a register bank selector.

use crate::LSM9DS1_AG_ADDRESS;
use device_driver::RegisterInterface;
use embedded_hal::i2c::Operation;

/// A register interface whose bus target address can be changed
///
/// Drivers call [`set_address`](Self::set_address) before touching registers
/// that live behind a different bus address. Test doubles implement this
/// alongside [`RegisterInterface`].
pub trait AddressedInterface: RegisterInterface<AddressType = u8> {
    /// Current 7-bit target address
    fn address(&self) -> u8;

    /// Point subsequent register accesses at another 7-bit address
    fn set_address(&mut self, address: u8);
}

/// I2C interface shared by the LSM9DS1 and BMA250 drivers
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface
    ///
    /// The initial target is the LSM9DS1 accelerometer/gyroscope address (0x6A).
    /// Drivers retarget the interface as needed, so the initial value only
    /// matters for direct register access.
    ///
    /// # Arguments
    /// * `i2c` - An initialized I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::new(i2c);
    /// let mut imu = Lsm9ds1Driver::new(interface);
    /// ```
    pub const fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: LSM9DS1_AG_ADDRESS,
        }
    }

    /// Create a new I2C interface aimed at a specific device address
    ///
    /// # Arguments
    /// * `i2c` - An initialized I2C peripheral
    /// * `address` - The 7-bit device address
    pub const fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        // Adjacent writes share one start condition, so this is a single
        // `[reg, data..]` transfer on the wire
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[address]), Operation::Write(write_data)],
        )
    }
}

impl<I2C, E> AddressedInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    fn address(&self) -> u8 {
        self.address
    }

    fn set_address(&mut self, address: u8) {
        self.address = address;
    }
}
