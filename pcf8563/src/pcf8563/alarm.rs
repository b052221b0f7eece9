//! Alarm registers

use crate::codec;
use crate::{AlarmSetting, Error, Pcf8563, Register};

impl<I2C> Pcf8563<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Program the alarm and enable the alarm interrupt.
    ///
    /// Armed fields are clamped to their valid range. The alarm flag is
    /// cleared before the new match values are written.
    pub fn set_alarm(&mut self, alarm: &AlarmSetting) -> Result<(), Error> {
        let [minute, hour, day, weekday] = codec::encode_alarm_setting(alarm);
        self.enable_alarm()?;
        self.write_data(&[Register::MINUTE_ALARM, minute, hour, day, weekday])
    }

    /// Disable the alarm interrupt, then mark every match field disabled.
    ///
    /// The interrupt is never armed on the way, unlike
    /// `set_alarm(&AlarmSetting::disabled())`. Starts from the cached
    /// status2 like [`clear_alarm()`](#method.clear_alarm).
    pub fn disable_alarm(&mut self) -> Result<(), Error> {
        let [minute, hour, day, weekday] = codec::encode_alarm_setting(&AlarmSetting::disabled());
        self.clear_alarm()?;
        self.write_data(&[Register::MINUTE_ALARM, minute, hour, day, weekday])
    }

    /// Read the alarm match values.
    pub fn alarm(&mut self) -> Result<AlarmSetting, Error> {
        let mut data = [0; 4];
        self.read_data(Register::MINUTE_ALARM, &mut data)?;
        Ok(codec::decode_alarm_setting(&data))
    }
}
