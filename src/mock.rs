//! Simulated sensor bus and power rails for testing without hardware.
//!
//! Both simulators are cheap handles onto shared state, so a test can keep
//! a clone and inspect what the driver did after handing the original over.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use embedded_hal::i2c::{self, ErrorKind, I2c, NoAcknowledgeSource, Operation};
use parking_lot::Mutex;

use crate::error::PowerError;
use crate::modes::{CHIP_ID, REG_CHIP_ID};
use crate::traits::PowerControl;

/// One register write seen on the simulated bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterWrite {
    /// 7-bit device address.
    pub device: u8,
    /// First register address written.
    pub address: u16,
    /// Value bytes, most significant first.
    pub data: Vec<u8>,
}

impl RegisterWrite {
    /// Value bytes assembled big-endian.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.data
            .iter()
            .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte))
    }
}

/// Error returned by the simulated bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError(pub ErrorKind);

impl i2c::Error for MockBusError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

#[derive(Debug, Default)]
struct BusState {
    registers: BTreeMap<u16, u8>,
    writes: Vec<RegisterWrite>,
    fail_address: Option<u16>,
    fail_countdown: Option<usize>,
    absent: bool,
}

impl BusState {
    fn should_fail(&mut self, address: u16) -> bool {
        if self.fail_address == Some(address) {
            return true;
        }
        match self.fail_countdown {
            Some(0) => true,
            Some(remaining) => {
                self.fail_countdown = Some(remaining - 1);
                false
            }
            None => false,
        }
    }
}

/// Simulated I²C register file of the sensor.
///
/// Starts with the chip id programmed so identification succeeds.
#[derive(Debug, Clone)]
pub struct MockBus {
    state: Arc<Mutex<BusState>>,
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBus {
    /// Create a bus holding a responsive Arducam 64MP.
    #[must_use]
    pub fn new() -> Self {
        let bus = Self {
            state: Arc::new(Mutex::new(BusState::default())),
        };
        bus.set_chip_id(CHIP_ID);
        bus
    }

    /// Program the identity register pair.
    pub fn set_chip_id(&self, id: u16) {
        self.set_registers(REG_CHIP_ID, &id.to_be_bytes());
    }

    /// Preload consecutive registers starting at `address`.
    pub fn set_registers(&self, address: u16, bytes: &[u8]) {
        let mut state = self.state.lock();
        for (reg, byte) in (address..).zip(bytes) {
            state.registers.insert(reg, *byte);
        }
    }

    /// Current content of a register, `None` if never written.
    #[must_use]
    pub fn register(&self, address: u16) -> Option<u8> {
        self.state.lock().registers.get(&address).copied()
    }

    /// All writes since creation or the last [`clear_writes`](Self::clear_writes).
    #[must_use]
    pub fn writes(&self) -> Vec<RegisterWrite> {
        self.state.lock().writes.clone()
    }

    /// Writes that started at `address`.
    #[must_use]
    pub fn writes_to(&self, address: u16) -> Vec<RegisterWrite> {
        self.state
            .lock()
            .writes
            .iter()
            .filter(|write| write.address == address)
            .cloned()
            .collect()
    }

    /// Value of the most recent write that started at `address`.
    #[must_use]
    pub fn last_value(&self, address: u16) -> Option<u32> {
        self.writes_to(address).last().map(RegisterWrite::value)
    }

    /// Forget the write log.
    pub fn clear_writes(&self) {
        self.state.lock().writes.clear();
    }

    /// Fail every write that starts at `address`.
    pub fn fail_writes_to(&self, address: u16) {
        self.state.lock().fail_address = Some(address);
    }

    /// Let `count` more writes succeed, then fail all following ones.
    pub fn fail_after_writes(&self, count: usize) {
        self.state.lock().fail_countdown = Some(count);
    }

    /// Remove all injected write failures.
    pub fn clear_failures(&self) {
        let mut state = self.state.lock();
        state.fail_address = None;
        state.fail_countdown = None;
    }

    /// Make the device stop acknowledging its address.
    pub fn set_absent(&self, absent: bool) {
        self.state.lock().absent = absent;
    }
}

impl i2c::ErrorType for MockBus {
    type Error = MockBusError;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.lock();
        if state.absent {
            return Err(MockBusError(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Address,
            )));
        }

        let mut pointer = 0u16;
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    let Some((addr, data)) = bytes.split_first_chunk::<2>() else {
                        return Err(MockBusError(ErrorKind::Other));
                    };
                    pointer = u16::from_be_bytes(*addr);
                    if data.is_empty() {
                        continue;
                    }
                    if state.should_fail(pointer) {
                        return Err(MockBusError(ErrorKind::NoAcknowledge(
                            NoAcknowledgeSource::Data,
                        )));
                    }
                    for (reg, byte) in (pointer..).zip(data.iter()) {
                        state.registers.insert(reg, *byte);
                    }
                    state.writes.push(RegisterWrite {
                        device: address,
                        address: pointer,
                        data: data.to_vec(),
                    });
                }
                Operation::Read(buf) => {
                    for (reg, byte) in (pointer..).zip(buf.iter_mut()) {
                        *byte = state.registers.get(&reg).copied().unwrap_or(0);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Power sequencing event recorded by [`MockPower`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerEvent {
    /// Supplies enabled.
    SuppliesOn,
    /// Supplies disabled.
    SuppliesOff,
    /// Clock enabled.
    ClockOn,
    /// Clock disabled.
    ClockOff,
    /// Reset line driven.
    Reset(bool),
    /// Settling wait requested.
    Settle(RangeInclusive<Duration>),
}

#[derive(Debug, Default)]
struct PowerState {
    events: Vec<PowerEvent>,
    supplies: bool,
    clock: bool,
    fail_supplies: bool,
    fail_clock: bool,
    real_delay: bool,
}

/// Simulated supplies, clock and reset line.
#[derive(Debug, Clone)]
pub struct MockPower {
    state: Arc<Mutex<PowerState>>,
}

impl Default for MockPower {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPower {
    /// Create powered-down rails that record events and never sleep.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(PowerState::default())),
        }
    }

    /// Sleep for real in [`PowerControl::settle`].
    #[must_use]
    pub fn with_real_delay(self) -> Self {
        self.state.lock().real_delay = true;
        self
    }

    /// Recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<PowerEvent> {
        self.state.lock().events.clone()
    }

    /// Forget recorded events.
    pub fn clear_events(&self) {
        self.state.lock().events.clear();
    }

    /// Whether both supplies and clock are on.
    #[must_use]
    pub fn is_powered(&self) -> bool {
        let state = self.state.lock();
        state.supplies && state.clock
    }

    /// Whether the supplies are on.
    #[must_use]
    pub fn supplies_on(&self) -> bool {
        self.state.lock().supplies
    }

    /// Make enabling the supplies fail.
    pub fn fail_supplies(&self, fail: bool) {
        self.state.lock().fail_supplies = fail;
    }

    /// Make enabling the clock fail.
    pub fn fail_clock(&self, fail: bool) {
        self.state.lock().fail_clock = fail;
    }
}

impl PowerControl for MockPower {
    fn enable_supplies(&mut self) -> Result<(), PowerError> {
        let mut state = self.state.lock();
        if state.fail_supplies {
            return Err(PowerError("VANA regulator refused to enable".to_owned()));
        }
        state.supplies = true;
        state.events.push(PowerEvent::SuppliesOn);
        Ok(())
    }

    fn disable_supplies(&mut self) {
        let mut state = self.state.lock();
        state.supplies = false;
        state.events.push(PowerEvent::SuppliesOff);
    }

    fn enable_clock(&mut self) -> Result<(), PowerError> {
        let mut state = self.state.lock();
        if state.fail_clock {
            return Err(PowerError("xclk prepare failed".to_owned()));
        }
        state.clock = true;
        state.events.push(PowerEvent::ClockOn);
        Ok(())
    }

    fn disable_clock(&mut self) {
        let mut state = self.state.lock();
        state.clock = false;
        state.events.push(PowerEvent::ClockOff);
    }

    fn set_reset(&mut self, asserted: bool) -> Result<(), PowerError> {
        self.state.lock().events.push(PowerEvent::Reset(asserted));
        Ok(())
    }

    fn settle(&mut self, window: RangeInclusive<Duration>) {
        let real_delay = {
            let mut state = self.state.lock();
            state.events.push(PowerEvent::Settle(window.clone()));
            state.real_delay
        };
        if real_delay {
            std::thread::sleep(*window.start());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_bus_starts_with_chip_id() {
        let bus = MockBus::new();
        assert_eq!(bus.register(REG_CHIP_ID), Some(0x41));
        assert_eq!(bus.register(REG_CHIP_ID + 1), Some(0x36));
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn test_mock_bus_handles_share_state() {
        let bus = MockBus::new();
        let mut handle = bus.clone();

        handle
            .write(0x1a, &[0x01, 0x00, 0x01])
            .expect("write should succeed");

        assert_eq!(bus.register(0x0100), Some(0x01));
        assert_eq!(bus.last_value(0x0100), Some(1));
    }

    #[test]
    fn test_mock_bus_fail_after_writes() {
        let mut bus = MockBus::new();
        bus.fail_after_writes(1);

        bus.write(0x1a, &[0x00, 0x01, 0xaa])
            .expect("first write should succeed");
        let err = bus
            .write(0x1a, &[0x00, 0x02, 0xbb])
            .expect_err("second write should fail");
        assert_eq!(
            i2c::Error::kind(&err),
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)
        );

        bus.clear_failures();
        bus.write(0x1a, &[0x00, 0x02, 0xbb])
            .expect("write should succeed after clearing");
    }

    #[test]
    fn test_mock_power_tracks_rails() {
        let mut power = MockPower::new();
        power.enable_supplies().expect("supplies should enable");
        power.enable_clock().expect("clock should enable");
        assert!(power.is_powered());

        power.disable_clock();
        assert!(!power.is_powered());
        assert!(power.supplies_on());
        assert_eq!(
            power.events(),
            vec![PowerEvent::SuppliesOn, PowerEvent::ClockOn, PowerEvent::ClockOff]
        );
    }

    #[test]
    fn test_mock_power_injected_failure() {
        let mut power = MockPower::new();
        power.fail_clock(true);
        assert!(power.enable_clock().is_err());
        assert!(power.events().is_empty());
    }
}
