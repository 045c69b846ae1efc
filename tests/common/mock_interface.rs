//! Mock interface implementation for testing the IMU drivers

use device_driver::RegisterInterface;
use imu_init::AddressedInterface;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Read register operation
    ReadRegister {
        /// Bus address the read went to
        device: u8,
        /// Register address
        address: u8,
        /// Value that was returned
        value: u8,
    },
    /// Write register operation
    WriteRegister {
        /// Bus address the write went to
        device: u8,
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values (bus address, register) -> value
    registers: HashMap<(u8, u8), u8>,

    /// Current bus target
    current_device: u8,

    /// Bus addresses that do not acknowledge
    absent: HashSet<u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            current_device: 0x6A,
            absent: HashSet::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
        };

        // LSM9DS1 with both SDO pins high
        state.registers.insert((0x6A, 0x0F), 0x68);
        state.registers.insert((0x1C, 0x0F), 0x3D);

        // BMA250 with SDO low
        state.registers.insert((0x18, 0x00), 0x03);

        state
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with a responsive LSM9DS1 and BMA250
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    pub fn set_register(&self, device: u8, address: u8, value: u8) {
        self.state
            .borrow_mut()
            .registers
            .insert((device, address), value);
    }

    /// Get a register value
    pub fn get_register(&self, device: u8, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&(device, address))
            .copied()
            .unwrap_or(0)
    }

    /// Make a bus address stop acknowledging
    pub fn remove_device(&self, device: u8) {
        self.state.borrow_mut().absent.insert(device);
    }

    /// Move the simulated BMA250 to another address
    pub fn move_bma250(&self, to: u8) {
        let mut state = self.state.borrow_mut();
        let chip_id = state.registers.remove(&(0x18, 0x00)).unwrap_or(0x03);
        state.registers.insert((to, 0x00), chip_id);
        state.absent.insert(0x18);
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Writes in the order they happened, as (bus address, register, value)
    pub fn writes(&self) -> Vec<(u8, u8, u8)> {
        self.state
            .borrow()
            .operations
            .iter()
            .filter_map(|op| match op {
                Operation::WriteRegister {
                    device,
                    address,
                    value,
                } => Some((*device, *address, *value)),
                Operation::ReadRegister { .. } => None,
            })
            .collect()
    }

    /// Snapshot of every register value
    pub fn register_snapshot(&self) -> Vec<((u8, u8), u8)> {
        let mut snapshot: Vec<_> = self
            .state
            .borrow()
            .registers
            .iter()
            .map(|(key, value)| (*key, *value))
            .collect();
        snapshot.sort_unstable();
        snapshot
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
    /// Nothing answered at the target address
    NoAcknowledge(u8),
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        let device = state.current_device;
        if state.absent.contains(&device) {
            return Err(MockError::NoAcknowledge(device));
        }

        for (i, byte) in read_data.iter_mut().enumerate() {
            let reg_addr = address.wrapping_add(u8::try_from(i).unwrap_or(u8::MAX));
            *byte = state
                .registers
                .get(&(device, reg_addr))
                .copied()
                .unwrap_or(0);

            state.operations.push(Operation::ReadRegister {
                device,
                address: reg_addr,
                value: *byte,
            });
        }

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        let device = state.current_device;
        if state.absent.contains(&device) {
            return Err(MockError::NoAcknowledge(device));
        }

        for (i, &byte) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(u8::try_from(i).unwrap_or(u8::MAX));
            state.registers.insert((device, reg_addr), byte);

            state.operations.push(Operation::WriteRegister {
                device,
                address: reg_addr,
                value: byte,
            });
        }

        Ok(())
    }
}

impl AddressedInterface for MockInterface {
    fn address(&self) -> u8 {
        self.state.borrow().current_device
    }

    fn set_address(&mut self, address: u8) {
        self.state.borrow_mut().current_device = address;
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
