//! Unit tests for the BMA250 driver

use crate::common::{MockError, create_mock_accel};
use imu_init::{Bma250Range, Bma250UpdateTime, Error};

const PMU_RANGE: u8 = 0x0F;
const PMU_BW: u8 = 0x10;

#[test]
fn test_begin_programs_range_and_bandwidth() {
    let (mut accel, interface) = create_mock_accel();

    accel
        .begin(Bma250Range::G4, Bma250UpdateTime::Ms32)
        .unwrap();

    assert_eq!(interface.get_register(0x18, PMU_RANGE), 0x05);
    assert_eq!(interface.get_register(0x18, PMU_BW), 0x09);
    assert_eq!(accel.address(), 0x18);
}

#[test]
fn test_begin_records_chip_id() {
    let (mut accel, interface) = create_mock_accel();
    assert_eq!(accel.chip_id(), None);

    interface.set_register(0x18, 0x00, 0xF9);
    accel
        .begin(Bma250Range::G2, Bma250UpdateTime::Ms64)
        .unwrap();

    // BMA250E parts are accepted as well
    assert_eq!(accel.chip_id(), Some(0xF9));
}

#[test]
fn test_fallback_address() {
    let (mut accel, interface) = create_mock_accel();
    interface.move_bma250(0x19);

    accel
        .begin(Bma250Range::G16, Bma250UpdateTime::Us500)
        .unwrap();

    assert_eq!(accel.address(), 0x19);
    assert_eq!(interface.get_register(0x19, PMU_RANGE), 0x0C);
    assert_eq!(interface.get_register(0x19, PMU_BW), 0x0F);
    assert_eq!(interface.get_register(0x18, PMU_RANGE), 0x00);
}

#[test]
fn test_absent_device() {
    let (mut accel, interface) = create_mock_accel();
    interface.remove_device(0x18);
    interface.remove_device(0x19);

    let result = accel.begin(Bma250Range::G8, Bma250UpdateTime::Ms8);
    assert!(matches!(
        result,
        Err(Error::Bus(MockError::NoAcknowledge(0x19)))
    ));
    assert_eq!(accel.chip_id(), None);
    assert!(interface.writes().is_empty());
}

#[test]
fn test_write_failure() {
    let (mut accel, interface) = create_mock_accel();
    interface.fail_next_write();

    let result = accel.begin(Bma250Range::G8, Bma250UpdateTime::Ms8);
    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
    assert_eq!(accel.chip_id(), None);
}

#[test]
fn test_failed_begin_clears_previous_chip_id() {
    let (mut accel, interface) = create_mock_accel();
    accel
        .begin(Bma250Range::G8, Bma250UpdateTime::Ms8)
        .unwrap();
    assert_eq!(accel.chip_id(), Some(0x03));

    interface.fail_next_write();
    assert!(accel.begin(Bma250Range::G8, Bma250UpdateTime::Ms8).is_err());
    assert_eq!(accel.chip_id(), None);
}

#[test]
fn test_release_returns_interface() {
    let (mut accel, _interface) = create_mock_accel();
    accel
        .begin(Bma250Range::G8, Bma250UpdateTime::Ms8)
        .unwrap();

    let interface = accel.release();
    assert_eq!(interface.get_register(0x18, PMU_RANGE), 0x08);
}
