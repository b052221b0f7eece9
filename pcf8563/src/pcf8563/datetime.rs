//! Time and date registers

use crate::codec;
use crate::{
    BitFlags, CalendarDate, Century, ClockTime, DateString, DateStyle, Error, Pcf8563, Register,
    StatusFlags, TimeString, TimeStyle,
};
use rtcc::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, Timelike};

impl<I2C> Pcf8563<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Set the time.
    ///
    /// Returns `Error::InvalidInputData` if any field is out of range.
    pub fn set_time(&mut self, time: &ClockTime) -> Result<(), Error> {
        if !time.is_valid() {
            return Err(Error::InvalidInputData);
        }
        let [seconds, minutes, hours] = codec::encode_time(time);
        self.write_data(&[Register::SECONDS, seconds, minutes, hours])
    }

    /// Read the time.
    ///
    /// The two control/status registers come along in the same burst, so
    /// this refreshes the cached status as well.
    pub fn time(&mut self) -> Result<ClockTime, Error> {
        let mut data = [0; 5];
        self.read_data(Register::CONTROL_STATUS_1, &mut data)?;
        self.status = StatusFlags {
            control_status_1: data[0],
            control_status_2: data[1],
        };
        Ok(codec::decode_time(&[data[2], data[3], data[4]]))
    }

    /// Set the date.
    ///
    /// Returns `Error::InvalidInputData` if any field is out of range.
    pub fn set_date(&mut self, date: &CalendarDate) -> Result<(), Error> {
        if !date.is_valid() {
            return Err(Error::InvalidInputData);
        }
        let [day, weekday, month, year] = codec::encode_date(date);
        self.write_data(&[Register::DAY, day, weekday, month, year])
    }

    /// Read the date.
    pub fn date(&mut self) -> Result<CalendarDate, Error> {
        let mut data = [0; 4];
        self.read_data(Register::DAY, &mut data)?;
        Ok(codec::decode_date(&data))
    }

    /// Read the time and format it.
    pub fn format_time(&mut self, style: TimeStyle) -> Result<TimeString, Error> {
        Ok(self.time()?.format(style))
    }

    /// Read the date and format it.
    pub fn format_date(&mut self, style: DateStyle) -> Result<DateString, Error> {
        Ok(self.date()?.format(style))
    }

    /// Read the voltage-low flag.
    ///
    /// When set, the supply dropped far enough that the clock may have
    /// stopped. Writing the time clears it.
    pub fn voltage_low(&mut self) -> Result<bool, Error> {
        let seconds = self.read_register(Register::SECONDS)?;
        Ok(seconds & BitFlags::VOLTAGE_LOW != 0)
    }
}

impl<I2C> DateTimeAccess for Pcf8563<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = Error;

    fn datetime(&mut self) -> Result<NaiveDateTime, Self::Error> {
        let mut data = [0; 7];
        self.read_data(Register::SECONDS, &mut data)?;
        let time = codec::decode_time(&[data[0], data[1], data[2]]);
        let date = codec::decode_date(&[data[3], data[4], data[5], data[6]]);

        NaiveDate::from_ymd_opt(
            i32::from(date.full_year()),
            u32::from(date.month),
            u32::from(date.day),
        )
        .and_then(|d| {
            d.and_hms_opt(
                u32::from(time.hour),
                u32::from(time.minute),
                u32::from(time.second),
            )
        })
        .ok_or(Error::InvalidDeviceState)
    }

    fn set_datetime(&mut self, datetime: &NaiveDateTime) -> Result<(), Self::Error> {
        let (century, year) = Century::split_year(datetime.year()).ok_or(Error::InvalidInputData)?;
        let time = ClockTime::new(
            datetime.hour() as u8,
            datetime.minute() as u8,
            datetime.second() as u8,
        );
        let date = CalendarDate::new(
            datetime.day() as u8,
            datetime.weekday().num_days_from_sunday() as u8,
            datetime.month() as u8,
            century,
            year,
        );
        let [seconds, minutes, hours] = codec::encode_time(&time);
        let [day, weekday, month, year] = codec::encode_date(&date);
        self.write_data(&[
            Register::SECONDS,
            seconds,
            minutes,
            hours,
            day,
            weekday,
            month,
            year,
        ])
    }
}
