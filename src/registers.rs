//! Register definitions for the LSM9DS1 and BMA250
//!
//! The LSM9DS1 answers on two I2C addresses: one for the accelerometer/gyroscope
//! and one for the magnetometer. Both register sets live in the same device map;
//! the driver retargets the bus address before touching magnetometer registers,
//! so registers that share an address across the two sets use
//! `ALLOW_ADDRESS_OVERLAP = true`.
//!
//! Only the identification and control registers needed for bring-up are mapped.

device_driver::create_device!(
    device_name: Lsm9ds1,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        // ==================== ACCELEROMETER / GYROSCOPE ====================

        /// WHO_AM_I - Accelerometer/gyroscope ID (0x0F)
        /// Expected value: 0x68
        register WhoAmI {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Device ID (should read 0x68)
            who_am_i: uint = 0..8,
        },

        /// CTRL_REG1_G - Angular rate sensor control 1 (0x10)
        register CtrlReg1G {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;

            /// Bandwidth selection (meaning depends on ODR)
            bw: uint = 0..2,
            reserved_2: uint = 2..3,
            /// Full-scale selection (0=245dps, 1=500dps, 3=2000dps)
            fs: uint = 3..5,
            /// Output data rate (0=power-down, 1..6 = 14.9..952Hz)
            odr: uint = 5..8,
        },

        /// CTRL_REG2_G - Angular rate sensor control 2 (0x11)
        register CtrlReg2G {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;

            /// Output selection
            out_sel: uint = 0..2,
            /// Interrupt generator selection
            int_sel: uint = 2..4,
            reserved_7_4: uint = 4..8,
        },

        /// CTRL_REG3_G - Angular rate sensor control 3 (0x12)
        register CtrlReg3G {
            const ADDRESS = 0x12;
            const SIZE_BITS = 8;

            /// High-pass filter cutoff (0..9)
            hpcf: uint = 0..4,
            reserved_5_4: uint = 4..6,
            /// High-pass filter enable
            hp_en: bool = 6,
            /// Low-power mode enable
            lp_mode: bool = 7,
        },

        /// ORIENT_CFG_G - Angular rate sign and orientation (0x13)
        register OrientCfgG {
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;

            /// Directional user orientation selection
            orient: uint = 0..3,
            /// Pitch (Z) angular rate sign
            sign_z: bool = 3,
            /// Roll (Y) angular rate sign
            sign_y: bool = 4,
            /// Yaw (X) angular rate sign
            sign_x: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// CTRL_REG4 - Gyroscope axis enables and interrupt latch (0x1E)
        register CtrlReg4 {
            const ADDRESS = 0x1E;
            const SIZE_BITS = 8;

            /// 4D option on interrupt
            four_d_xl: bool = 0,
            /// Latched interrupt
            lir_xl: bool = 1,
            reserved_2: uint = 2..3,
            /// Gyroscope X-axis output enable
            xen_g: bool = 3,
            /// Gyroscope Y-axis output enable
            yen_g: bool = 4,
            /// Gyroscope Z-axis output enable
            zen_g: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// CTRL_REG5_XL - Accelerometer axis enables (0x1F)
        register CtrlReg5Xl {
            const ADDRESS = 0x1F;
            const SIZE_BITS = 8;

            reserved_2_0: uint = 0..3,
            /// Accelerometer X-axis output enable
            xen_xl: bool = 3,
            /// Accelerometer Y-axis output enable
            yen_xl: bool = 4,
            /// Accelerometer Z-axis output enable
            zen_xl: bool = 5,
            /// Decimation of acceleration data
            dec: uint = 6..8,
        },

        /// CTRL_REG6_XL - Accelerometer control 6 (0x20)
        register CtrlReg6Xl {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Anti-aliasing filter bandwidth (0=408Hz, 1=211Hz, 2=105Hz, 3=50Hz)
            bw_xl: uint = 0..2,
            /// Use `bw_xl` instead of the ODR-derived bandwidth
            bw_scal_odr: bool = 2,
            /// Full-scale selection (0=2g, 1=16g, 2=4g, 3=8g)
            fs_xl: uint = 3..5,
            /// Output data rate (0=power-down, 1..6 = 10..952Hz)
            odr_xl: uint = 5..8,
        },

        /// CTRL_REG7_XL - Accelerometer control 7 (0x21)
        register CtrlReg7Xl {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Internal filter bypass
            hpis: bool = 0,
            reserved_1: uint = 1..2,
            /// Filtered data selection
            fds: bool = 2,
            reserved_4_3: uint = 3..5,
            /// High-resolution digital filter cutoff (0=ODR/50 .. 3=ODR/400)
            dcf: uint = 5..7,
            /// High-resolution mode
            hr: bool = 7,
        },

        // ==================== MAGNETOMETER ====================
        // Reached through the magnetometer bus address

        /// WHO_AM_I_M - Magnetometer ID (0x0F)
        /// Expected value: 0x3D
        register MagWhoAmI {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Device ID (should read 0x3D)
            who_am_i: uint = 0..8,
        },

        /// CTRL_REG1_M - Magnetometer control 1 (0x20)
        register MagCtrlReg1 {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Self-test enable
            st: bool = 0,
            /// Output data rates above 80Hz
            fast_odr: bool = 1,
            /// Output data rate (0=0.625Hz .. 7=80Hz)
            data_rate: uint = 2..5,
            /// X and Y axes operative mode (0=low power .. 3=ultra-high)
            om: uint = 5..7,
            /// Temperature compensation enable
            temp_comp: bool = 7,
        },

        /// CTRL_REG2_M - Magnetometer control 2 (0x21)
        register MagCtrlReg2 {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_1_0: uint = 0..2,
            /// Configuration register and user register reset
            soft_rst: bool = 2,
            /// Reboot memory content
            reboot: bool = 3,
            reserved_4: uint = 4..5,
            /// Full-scale selection (0=4 gauss .. 3=16 gauss)
            fs_m: uint = 5..7,
            reserved_7: uint = 7..8,
        },

        /// CTRL_REG3_M - Magnetometer control 3 (0x22)
        register MagCtrlReg3 {
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Operating mode (0=continuous, 1=single, 2/3=power-down)
            md: uint = 0..2,
            /// SPI serial interface mode
            sim: bool = 2,
            reserved_4_3: uint = 3..5,
            /// Low-power mode
            lp: bool = 5,
            reserved_6: uint = 6..7,
            /// Disable I2C interface
            iic_disable: bool = 7,
        },

        /// CTRL_REG4_M - Magnetometer control 4 (0x23)
        register MagCtrlReg4 {
            const ADDRESS = 0x23;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_0: uint = 0..1,
            /// Big/little endian data selection
            ble: bool = 1,
            /// Z axis operative mode (0=low power .. 3=ultra-high)
            omz: uint = 2..4,
            reserved_7_4: uint = 4..8,
        },

        /// CTRL_REG5_M - Magnetometer control 5 (0x24)
        register MagCtrlReg5 {
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_5_0: uint = 0..6,
            /// Block data update
            bdu: bool = 6,
            /// Fast read
            fast_read: bool = 7,
        }
    }
);

// Re-export commonly used types for convenience
pub use Lsm9ds1 as RegisterDevice;

/// BMA250 accelerometer register definitions
///
/// Separate chip with its own address space; only the identification and
/// range/bandwidth registers are used.
pub mod bma250 {
    device_driver::create_device!(
        device_name: Bma250,
        dsl: {
            config {
                type RegisterAddressType = u8;
                type DefaultByteOrder = LE;
            }

            /// BGW_CHIPID - Chip identification (0x00)
            register ChipId {
                const ADDRESS = 0x00;
                const SIZE_BITS = 8;

                /// Chip ID (0x03 for BMA250, 0xF9 for BMA250E)
                chip_id: uint = 0..8,
            },

            /// PMU_RANGE - Acceleration range (0x0F)
            register PmuRange {
                const ADDRESS = 0x0F;
                const SIZE_BITS = 8;

                /// Range code (0x03=2g, 0x05=4g, 0x08=8g, 0x0C=16g)
                range: uint = 0..4,
                reserved_7_4: uint = 4..8,
            },

            /// PMU_BW - Filter bandwidth / data update time (0x10)
            register PmuBw {
                const ADDRESS = 0x10;
                const SIZE_BITS = 8;

                /// Bandwidth code (0x08=7.81Hz/64ms .. 0x0F=1000Hz/0.5ms)
                bw: uint = 0..5,
                reserved_7_5: uint = 5..8,
            }
        }
    );

    // Re-export accelerometer device
    pub use Bma250 as AccelerometerDevice;
}
