//! Big-endian register access over an I²C bus.
//!
//! Every register has a 16-bit address. A write sends the address followed
//! by 1 to 4 value bytes, most significant first. A read sends the address
//! and reads the value back in the same order.

use embedded_hal::i2c::{Error as _, I2c};
use tracing::error;

use crate::error::{Result, SensorError};

/// One entry of a register programming table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg {
    /// Register address.
    pub address: u16,
    /// 8-bit value.
    pub value: u8,
}

impl Reg {
    /// Create a table entry.
    #[must_use]
    pub const fn new(address: u16, value: u8) -> Self {
        Self { address, value }
    }
}

/// Width of a register value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegWidth {
    /// One byte.
    U8,
    /// Two bytes.
    U16,
    /// Three bytes.
    U24,
    /// Four bytes.
    U32,
}

impl RegWidth {
    /// Number of value bytes.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U24 => 3,
            Self::U32 => 4,
        }
    }
}

/// Register access to one device on the bus.
#[derive(Debug)]
pub struct Registers<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Registers<I2C> {
    /// Wrap a bus for the device at the 7-bit `address`.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Read a register of the given width.
    pub fn read(&mut self, reg: u16, width: RegWidth) -> Result<u32> {
        self.read_from(self.address, reg, width)
    }

    /// Read a register from another device sharing the bus.
    pub fn read_from(&mut self, device: u8, reg: u16, width: RegWidth) -> Result<u32> {
        let mut data = [0u8; 4];
        let start = 4 - width.bytes();
        let buf = data.get_mut(start..).unwrap_or_default();

        self.i2c
            .write_read(device, &reg.to_be_bytes(), buf)
            .map_err(|err| SensorError::Bus {
                address: reg,
                kind: err.kind(),
            })?;

        Ok(u32::from_be_bytes(data))
    }

    /// Write a register of the given width. Bits above the width are dropped.
    pub fn write(&mut self, reg: u16, width: RegWidth, value: u32) -> Result<()> {
        let mut buf = [0u8; 6];
        let [addr_hi, addr_lo] = reg.to_be_bytes();
        buf[0] = addr_hi;
        buf[1] = addr_lo;
        let value_bytes = value.to_be_bytes();
        let len = width.bytes();
        for (dst, src) in buf
            .iter_mut()
            .skip(2)
            .zip(value_bytes.iter().skip(4 - len))
        {
            *dst = *src;
        }

        let frame = buf.get(..len + 2).unwrap_or(&buf);
        self.i2c
            .write(self.address, frame)
            .map_err(|err| SensorError::Bus {
                address: reg,
                kind: err.kind(),
            })
    }

    /// Apply a table in order, one byte per entry.
    ///
    /// Stops at the first failure; entries before it stay applied.
    pub fn write_list(&mut self, regs: &[Reg]) -> Result<()> {
        for reg in regs {
            if let Err(err) = self.write(reg.address, RegWidth::U8, u32::from(reg.value)) {
                error!(address = reg.address, "Failed to write reg 0x{:04x}: {err}", reg.address);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
