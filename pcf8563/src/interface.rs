//! I²C access to the register file

use crate::{Error, Pcf8563, StatusFlags, DEVICE_ADDRESS};
use log::trace;

impl<I2C> Pcf8563<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Create a new instance of the PCF8563 device.
    ///
    /// No bus traffic happens here. The cached status starts at the
    /// power-on-reset value (all zero).
    pub fn new(i2c: I2C) -> Self {
        Pcf8563 {
            i2c,
            status: StatusFlags::default(),
        }
    }

    /// Destroy driver instance, return I²C bus instance.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Write one register.
    ///
    /// Bypasses the status cache: after a raw write to a control/status
    /// register call [`read_status()`](#method.read_status).
    pub fn write_register(&mut self, register: u8, data: u8) -> Result<(), Error> {
        self.write_data(&[register, data])
    }

    /// Write `payload[1..]` to consecutive registers starting at `payload[0]`.
    pub fn write_data(&mut self, payload: &[u8]) -> Result<(), Error> {
        trace!("pcf8563 write {:02x?}", payload);
        self.i2c.write(DEVICE_ADDRESS, payload).map_err(comm_error)
    }

    /// Read one register.
    pub fn read_register(&mut self, register: u8) -> Result<u8, Error> {
        let mut data = [0];
        self.read_data(register, &mut data)?;
        Ok(data[0])
    }

    /// Fill `data` from consecutive registers starting at `register`.
    pub fn read_data(&mut self, register: u8, data: &mut [u8]) -> Result<(), Error> {
        self.i2c
            .write_read(DEVICE_ADDRESS, &[register], data)
            .map_err(comm_error)?;
        trace!("pcf8563 read {:#04x}: {:02x?}", register, data);
        Ok(())
    }
}

fn comm_error<E: embedded_hal::i2c::Error>(err: E) -> Error {
    Error::Comm(err.kind())
}
