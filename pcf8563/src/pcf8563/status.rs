//! Control/status registers and the alarm interrupt bits

use crate::{BitFlags, Error, Pcf8563, Register, StatusFlags};
use log::debug;

impl<I2C> Pcf8563<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Status as of the last read or write, without bus traffic.
    ///
    /// Refreshed by [`time()`](#method.time) and [`read_status()`](#method.read_status).
    pub fn status(&self) -> StatusFlags {
        self.status
    }

    /// Read both control/status registers and refresh the cached copy.
    pub fn read_status(&mut self) -> Result<StatusFlags, Error> {
        let mut data = [0; 2];
        self.read_data(Register::CONTROL_STATUS_1, &mut data)?;
        self.status = StatusFlags {
            control_status_1: data[0],
            control_status_2: data[1],
        };
        Ok(self.status)
    }

    /// Clear the alarm flag and enable the alarm interrupt.
    ///
    /// Updates the cached status2, so call [`read_status()`](#method.read_status)
    /// first to keep the chip's other status2 bits.
    pub fn enable_alarm(&mut self) -> Result<(), Error> {
        let status = self.status.control_status_2;
        self.write_status2((status & !BitFlags::ALARM_FLAG) | BitFlags::ALARM_INT_EN)
    }

    /// Clear the alarm flag, leaving the interrupt enable unchanged.
    ///
    /// Works on the cached status2; refresh it first.
    pub fn reset_alarm(&mut self) -> Result<(), Error> {
        let status = self.status.control_status_2;
        self.write_status2(status & !BitFlags::ALARM_FLAG)
    }

    /// Clear the alarm flag and disable the alarm interrupt.
    ///
    /// Works on the cached status2; refresh it first.
    pub fn clear_alarm(&mut self) -> Result<(), Error> {
        let status = self.status.control_status_2;
        self.write_status2(status & !(BitFlags::ALARM_FLAG | BitFlags::ALARM_INT_EN))
    }

    /// Read whether the alarm interrupt is enabled (AIE).
    ///
    /// Always reads the chip and leaves the cached status untouched.
    pub fn alarm_enabled(&mut self) -> Result<bool, Error> {
        let status = self.read_register(Register::CONTROL_STATUS_2)?;
        Ok(status & BitFlags::ALARM_INT_EN != 0)
    }

    /// Read whether the alarm has fired (AF).
    ///
    /// Always reads the chip and leaves the cached status untouched.
    pub fn alarm_active(&mut self) -> Result<bool, Error> {
        let status = self.read_register(Register::CONTROL_STATUS_2)?;
        Ok(status & BitFlags::ALARM_FLAG != 0)
    }

    fn write_status2(&mut self, status: u8) -> Result<(), Error> {
        self.write_register(Register::CONTROL_STATUS_2, status)?;
        self.status.control_status_2 = status;
        debug!("pcf8563 control/status 2 set to {:#010b}", status);
        Ok(())
    }
}
