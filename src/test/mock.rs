// SPDX-License-Identifier: Apache-2.0

//! A mocked camera module for exercising the driver without hardware.
//!
//! One [`MockCamera`] holds the simulated chip and sensor state behind an
//! `Rc<RefCell<..>>`; [`MockCamera::handles`] hands out cloneable SPI, I²C,
//! chip select, and delay handles over that shared state, so tests can keep
//! inspecting the device while the driver owns the peripherals. Every bus
//! operation is recorded for assertions on wire framing and transfer counts.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;
use embedded_hal::blocking::spi;
use embedded_hal::digital::v2::OutputPin;

use crate::chip::{BURST_READ_COMMAND, CAPTURE_DONE_MASK, FIFO_START_MASK};
use crate::ov2640;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MockError {
    /// An SPI byte was clocked while chip select was deasserted.
    ChipSelectDeasserted,

    /// A frame shape the chip doesn't understand.
    UnexpectedFrame,

    /// An address outside the simulated register map.
    UnknownAddress(u8),

    /// Failure injected through [`MockCamera::fail_next_spi`].
    Forced,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SpiOperation {
    Write(Vec<u8>),
    Transfer(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpiPhase {
    Idle,
    /// A register read was issued; the next transfer shifts this value out.
    RespondWith(u8),
    Burst,
}

struct CameraState {
    test_register: u8,
    control_writes: Vec<u8>,
    /// Number of trigger-register polls after which the done bit reads set;
    /// `None` simulates a capture that never completes.
    polls_until_done: Option<u32>,
    polls_observed: u32,
    size_register_reads: u32,
    fifo_size: [u8; 3],
    fifo_data: Vec<u8>,
    burst_cursor: usize,
    burst_transfers: Vec<usize>,
    chip_selected: bool,
    chip_select_assertions: u32,
    spi_phase: SpiPhase,
    spi_operations: Vec<SpiOperation>,
    fail_next_spi: bool,
    sensor_registers: BTreeMap<u8, u8>,
    i2c_writes: Vec<(u8, u8)>,
    delay_calls: Vec<u32>,
}

impl CameraState {
    fn write_chip_register(&mut self, address: u8, value: u8) -> Result<(), MockError> {
        match address {
            0x00 => self.test_register = value,
            0x04 => {
                self.control_writes.push(value);
                if value & FIFO_START_MASK != 0 {
                    self.polls_observed = 0;
                }
            }
            _ => return Err(MockError::UnknownAddress(address)),
        }
        Ok(())
    }

    fn read_chip_register(&mut self, address: u8) -> Result<u8, MockError> {
        match address {
            0x00 => Ok(self.test_register),
            0x41 => {
                self.polls_observed += 1;
                let done = self
                    .polls_until_done
                    .map_or(false, |polls| self.polls_observed >= polls);
                Ok(if done { CAPTURE_DONE_MASK } else { 0x00 })
            }
            0x42 => {
                self.size_register_reads += 1;
                Ok(self.fifo_size[0])
            }
            0x43 => {
                self.size_register_reads += 1;
                Ok(self.fifo_size[1])
            }
            0x44 => {
                self.size_register_reads += 1;
                Ok(self.fifo_size[2])
            }
            _ => Err(MockError::UnknownAddress(address)),
        }
    }
}

#[derive(Clone)]
pub(crate) struct MockCamera {
    state: Rc<RefCell<CameraState>>,
}

impl MockCamera {
    pub(crate) fn new() -> Self {
        let mut sensor_registers = BTreeMap::new();
        // A healthy OV2640 reports its chip id without any setup.
        sensor_registers.insert(ov2640::CHIP_ID_HIGH, ov2640::KNOWN_CHIP_IDS[0][0]);
        sensor_registers.insert(ov2640::CHIP_ID_LOW, ov2640::KNOWN_CHIP_IDS[0][1]);
        MockCamera {
            state: Rc::new(RefCell::new(CameraState {
                test_register: 0x00,
                control_writes: Vec::new(),
                polls_until_done: Some(1),
                polls_observed: 0,
                size_register_reads: 0,
                fifo_size: [0x00; 3],
                fifo_data: Vec::new(),
                burst_cursor: 0,
                burst_transfers: Vec::new(),
                chip_selected: false,
                chip_select_assertions: 0,
                spi_phase: SpiPhase::Idle,
                spi_operations: Vec::new(),
                fail_next_spi: false,
                sensor_registers,
                i2c_writes: Vec::new(),
                delay_calls: Vec::new(),
            })),
        }
    }

    pub(crate) fn handles(&self) -> (MockSpi, MockI2c, MockCs, MockDelay) {
        (
            MockSpi {
                state: Rc::clone(&self.state),
            },
            MockI2c {
                state: Rc::clone(&self.state),
            },
            MockCs {
                state: Rc::clone(&self.state),
            },
            MockDelay {
                state: Rc::clone(&self.state),
            },
        )
    }

    /// Fill the FIFO and set the size registers to match.
    pub(crate) fn load_fifo(&self, data: &[u8]) {
        let mut state = self.state.borrow_mut();
        let length = data.len() as u32;
        state.fifo_data = data.to_vec();
        state.fifo_size = [
            length as u8,
            (length >> 8) as u8,
            ((length >> 16) & 0x7F) as u8,
        ];
        state.burst_cursor = 0;
    }

    pub(crate) fn set_fifo_size_registers(&self, low: u8, mid: u8, high: u8) {
        self.state.borrow_mut().fifo_size = [low, mid, high];
    }

    pub(crate) fn set_test_register(&self, value: u8) {
        self.state.borrow_mut().test_register = value;
    }

    pub(crate) fn set_sensor_register(&self, register: u8, value: u8) {
        self.state
            .borrow_mut()
            .sensor_registers
            .insert(register, value);
    }

    pub(crate) fn complete_after_polls(&self, polls: u32) {
        let mut state = self.state.borrow_mut();
        state.polls_until_done = Some(polls);
        state.polls_observed = 0;
    }

    pub(crate) fn never_complete(&self) {
        self.state.borrow_mut().polls_until_done = None;
    }

    pub(crate) fn fail_next_spi(&self) {
        self.state.borrow_mut().fail_next_spi = true;
    }

    pub(crate) fn spi_operations(&self) -> Vec<SpiOperation> {
        self.state.borrow().spi_operations.clone()
    }

    pub(crate) fn burst_transfers(&self) -> Vec<usize> {
        self.state.borrow().burst_transfers.clone()
    }

    /// Values written to the FIFO control register, in order.
    pub(crate) fn control_writes(&self) -> Vec<u8> {
        self.state.borrow().control_writes.clone()
    }

    pub(crate) fn i2c_writes(&self) -> Vec<(u8, u8)> {
        self.state.borrow().i2c_writes.clone()
    }

    pub(crate) fn delay_calls(&self) -> Vec<u32> {
        self.state.borrow().delay_calls.clone()
    }

    pub(crate) fn slept_ms(&self) -> u32 {
        self.state.borrow().delay_calls.iter().sum()
    }

    pub(crate) fn size_register_reads(&self) -> u32 {
        self.state.borrow().size_register_reads
    }

    pub(crate) fn chip_select_assertions(&self) -> u32 {
        self.state.borrow().chip_select_assertions
    }

    pub(crate) fn clear_operations(&self) {
        let mut state = self.state.borrow_mut();
        state.spi_operations.clear();
        state.burst_transfers.clear();
        state.control_writes.clear();
        state.i2c_writes.clear();
        state.delay_calls.clear();
        state.chip_select_assertions = 0;
        state.size_register_reads = 0;
    }
}

pub(crate) struct MockSpi {
    state: Rc<RefCell<CameraState>>,
}

impl spi::Write<u8> for MockSpi {
    type Error = MockError;

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.fail_next_spi {
            state.fail_next_spi = false;
            return Err(MockError::Forced);
        }
        if !state.chip_selected {
            return Err(MockError::ChipSelectDeasserted);
        }
        state.spi_operations.push(SpiOperation::Write(words.to_vec()));
        match (state.spi_phase, words) {
            (SpiPhase::Idle, [BURST_READ_COMMAND]) => {
                state.spi_phase = SpiPhase::Burst;
                state.burst_cursor = 0;
            }
            (SpiPhase::Idle, [address, value]) if address & 0x80 != 0 => {
                state.write_chip_register(address & 0x7F, *value)?;
            }
            (SpiPhase::Idle, [address]) => {
                let response = state.read_chip_register(*address)?;
                state.spi_phase = SpiPhase::RespondWith(response);
            }
            _ => return Err(MockError::UnexpectedFrame),
        }
        Ok(())
    }
}

impl spi::Transfer<u8> for MockSpi {
    type Error = MockError;

    fn transfer<'w>(&mut self, words: &'w mut [u8]) -> Result<&'w [u8], Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.fail_next_spi {
            state.fail_next_spi = false;
            return Err(MockError::Forced);
        }
        if !state.chip_selected {
            return Err(MockError::ChipSelectDeasserted);
        }
        state
            .spi_operations
            .push(SpiOperation::Transfer(words.len()));
        match state.spi_phase {
            SpiPhase::RespondWith(value) => {
                if words.len() != 1 {
                    return Err(MockError::UnexpectedFrame);
                }
                words[0] = value;
                state.spi_phase = SpiPhase::Idle;
            }
            SpiPhase::Burst => {
                state.burst_transfers.push(words.len());
                let start = state.burst_cursor;
                for (offset, word) in words.iter_mut().enumerate() {
                    *word = state.fifo_data.get(start + offset).copied().unwrap_or(0x00);
                }
                state.burst_cursor = start + words.len();
            }
            SpiPhase::Idle => return Err(MockError::UnexpectedFrame),
        }
        Ok(words)
    }
}

pub(crate) struct MockCs {
    state: Rc<RefCell<CameraState>>,
}

impl OutputPin for MockCs {
    type Error = MockError;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if !state.chip_selected {
            state.chip_select_assertions += 1;
        }
        state.chip_selected = true;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.chip_selected = false;
        state.spi_phase = SpiPhase::Idle;
        Ok(())
    }
}

pub(crate) struct MockI2c {
    state: Rc<RefCell<CameraState>>,
}

impl i2c::Write for MockI2c {
    type Error = MockError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if address != ov2640::I2C_ADDRESS {
            return Err(MockError::UnknownAddress(address));
        }
        match bytes {
            [register, value] => {
                state.i2c_writes.push((*register, *value));
                state.sensor_registers.insert(*register, *value);
                Ok(())
            }
            _ => Err(MockError::UnexpectedFrame),
        }
    }
}

impl i2c::WriteRead for MockI2c {
    type Error = MockError;

    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        let state = self.state.borrow();
        if address != ov2640::I2C_ADDRESS {
            return Err(MockError::UnknownAddress(address));
        }
        if bytes.len() != 1 || buffer.len() != 1 {
            return Err(MockError::UnexpectedFrame);
        }
        buffer[0] = state
            .sensor_registers
            .get(&bytes[0])
            .copied()
            .unwrap_or(0x00);
        Ok(())
    }
}

pub(crate) struct MockDelay {
    state: Rc<RefCell<CameraState>>,
}

impl DelayMs<u32> for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.state.borrow_mut().delay_calls.push(ms);
    }
}
