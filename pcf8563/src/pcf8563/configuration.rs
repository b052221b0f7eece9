//! Device configuration

use crate::{BitFlags, Error, Pcf8563, Register, SquareWaveFreq, StatusFlags};
use log::debug;

/// Registers 0x00..=0x0E after a reset: status cleared, every time and
/// date field at its lowest BCD value, alarms disabled, CLKOUT and timer off.
const RESET_BLOCK: [u8; 16] = [
    Register::CONTROL_STATUS_1,
    0x00,
    0x00,
    0x01,
    0x01,
    0x01,
    0x01,
    0x01,
    0x01,
    0x01,
    BitFlags::ALARM_DISABLED,
    BitFlags::ALARM_DISABLED,
    BitFlags::ALARM_DISABLED,
    BitFlags::ALARM_DISABLED,
    SquareWaveFreq::Disabled.bits(),
    0x00,
];

impl<I2C> Pcf8563<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Reset the whole register file to known values.
    ///
    /// Clears both control/status registers, sets the date and time to
    /// 01:01:01 on day 1, weekday 1, month 1 of year 2001, disables all
    /// alarm fields and turns off CLKOUT and the timer.
    pub fn init_clock(&mut self) -> Result<(), Error> {
        self.write_data(&RESET_BLOCK)?;
        self.status = StatusFlags::default();
        debug!("pcf8563 registers reset");
        Ok(())
    }

    /// Zero both control/status registers, leaving time, date and alarm alone.
    pub fn clear_status(&mut self) -> Result<(), Error> {
        self.write_data(&[Register::CONTROL_STATUS_1, 0, 0])?;
        self.status = StatusFlags::default();
        Ok(())
    }

    /// Set the CLKOUT square-wave output.
    pub fn set_square_wave(&mut self, freq: SquareWaveFreq) -> Result<(), Error> {
        self.write_register(Register::CLKOUT_CONTROL, freq.bits())
    }

    /// Disable the CLKOUT square-wave output.
    pub fn clear_square_wave(&mut self) -> Result<(), Error> {
        self.set_square_wave(SquareWaveFreq::Disabled)
    }
}
