//! Integration tests for the nine-axis profile

use crate::common::{AG, MAG, Operation, create_mock_imu};
use imu_init::lsm9ds1::Target;
use imu_init::setup::{prepare_imu, setup_imu};
use imu_init::{AddressedInterface, CommInterface, WHO_AM_I_COMBINED};

#[test]
fn test_setup_reports_identity() {
    let (mut imu, _interface) = create_mock_imu();

    let id = setup_imu(&mut imu).unwrap();
    assert_eq!(id, WHO_AM_I_COMBINED);
    assert_eq!(id, 0x683D);
}

#[test]
fn test_device_record_before_begin() {
    let (mut imu, interface) = create_mock_imu();

    prepare_imu(imu.settings_mut());

    let device = imu.settings().device;
    assert_eq!(device.comm_interface, CommInterface::I2c);
    assert_eq!(device.mag_address, 0x1C);
    assert_eq!(device.ag_address, 0x6A);
    assert!(interface.operations().is_empty(), "Preparing must not touch the bus");
}

#[test]
fn test_identification_reads_both_addresses() {
    let (mut imu, interface) = create_mock_imu();
    setup_imu(&mut imu).unwrap();

    let ops = interface.operations();
    assert_eq!(
        ops[0],
        Operation::ReadRegister {
            device: MAG,
            address: 0x0F,
            value: 0x3D,
        }
    );
    assert_eq!(
        ops[1],
        Operation::ReadRegister {
            device: AG,
            address: 0x0F,
            value: 0x68,
        }
    );
}

#[test]
fn test_setup_twice_is_idempotent() {
    let (mut imu, interface) = create_mock_imu();

    setup_imu(&mut imu).unwrap();
    let settings_first = *imu.settings();
    let registers_first = interface.register_snapshot();
    let writes_first = interface.writes();

    interface.clear_operations();
    setup_imu(&mut imu).unwrap();

    assert_eq!(*imu.settings(), settings_first);
    assert_eq!(interface.register_snapshot(), registers_first);
    assert_eq!(interface.writes(), writes_first);
}

#[test]
fn test_setup_overrides_custom_addresses() {
    let (mut imu, interface) = create_mock_imu();
    imu.settings_mut().device.ag_address = 0x6B;
    imu.settings_mut().device.mag_address = 0x1E;

    setup_imu(&mut imu).unwrap();

    assert!(interface.operations().iter().all(|op| match op {
        Operation::ReadRegister { device, .. } | Operation::WriteRegister { device, .. } => {
            *device == AG || *device == MAG
        }
    }));
}

#[test]
fn test_bus_left_on_accel_gyro() {
    let (mut imu, _interface) = create_mock_imu();
    setup_imu(&mut imu).unwrap();

    let interface = imu.release();
    assert_eq!(interface.address(), AG);
}

#[test]
fn test_select_target() {
    let (mut imu, interface) = create_mock_imu();
    prepare_imu(imu.settings_mut());

    imu.select_target(Target::Magnetometer);
    assert_eq!(interface.address(), MAG);

    imu.select_target(Target::AccelGyro);
    assert_eq!(interface.address(), AG);
}

#[test]
fn test_read_who_am_i_on_foreign_device() {
    let (mut imu, interface) = create_mock_imu();
    prepare_imu(imu.settings_mut());
    interface.set_register(AG, 0x0F, 0x6C);

    assert_eq!(imu.read_who_am_i().unwrap(), 0x6C3D);
}
