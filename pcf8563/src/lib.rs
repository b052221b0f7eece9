//! Platform-agnostic driver for the NXP PCF8563 real-time clock.
//!
//! The driver talks to the chip through any [`embedded_hal::i2c::I2c`] bus.
//! Every read returns a fresh snapshot ([`ClockTime`], [`CalendarDate`],
//! [`AlarmSetting`], [`StatusFlags`]); nothing but the two control/status
//! registers is cached.
//!
//! ```no_run
//! # fn demo<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), pcf8563::Error> {
//! use pcf8563::{AlarmSetting, DateStyle, Pcf8563};
//!
//! let mut rtc = Pcf8563::new(i2c);
//! let date = rtc.format_date(DateStyle::Asia)?;
//! rtc.set_alarm(&AlarmSetting::new(Some(30), Some(7), None, None))?;
//! # let _ = date;
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]
#![no_std]

pub use rtcc::{DateTimeAccess, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use embedded_hal::i2c::ErrorKind;

/// All possible errors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// I²C bus error, with the kind reported by the bus implementation
    Comm(ErrorKind),
    /// Invalid input data provided
    InvalidInputData,
    /// Internal device state is invalid.
    ///
    /// It was not possible to read a valid date and/or time.
    /// The device is probably missing initialization.
    InvalidDeviceState,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Comm(kind) => write!(f, "I2C bus error: {kind:?}"),
            Error::InvalidInputData => f.write_str("invalid input data"),
            Error::InvalidDeviceState => f.write_str("RTC registers hold no valid date/time"),
        }
    }
}

impl core::error::Error for Error {}

/// Square-wave (CLKOUT) output frequency
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SquareWaveFreq {
    /// Output disabled (default)
    #[default]
    Disabled,
    /// 32.768 kHz
    _32_768kHz,
    /// 1.024 kHz
    _1_024Hz,
    /// 32 Hz
    _32Hz,
    /// 1 Hz
    _1Hz,
}

impl SquareWaveFreq {
    /// Value of the CLKOUT control register for this frequency.
    pub const fn bits(self) -> u8 {
        match self {
            SquareWaveFreq::Disabled => 0,
            SquareWaveFreq::_32_768kHz => BitFlags::CLKOUT_ENABLE,
            SquareWaveFreq::_1_024Hz => BitFlags::CLKOUT_ENABLE | 0b01,
            SquareWaveFreq::_32Hz => BitFlags::CLKOUT_ENABLE | 0b10,
            SquareWaveFreq::_1Hz => BitFlags::CLKOUT_ENABLE | 0b11,
        }
    }
}

struct Register;

impl Register {
    const CONTROL_STATUS_1: u8 = 0x00;
    const CONTROL_STATUS_2: u8 = 0x01;
    const SECONDS: u8 = 0x02;
    const DAY: u8 = 0x05;
    const MINUTE_ALARM: u8 = 0x09;
    const CLKOUT_CONTROL: u8 = 0x0D;
}

struct BitFlags;

impl BitFlags {
    const STOP: u8 = 0b0010_0000;
    const ALARM_FLAG: u8 = 0b0000_1000;
    const TIMER_FLAG: u8 = 0b0000_0100;
    const ALARM_INT_EN: u8 = 0b0000_0010;
    const TIMER_INT_EN: u8 = 0b0000_0001;
    const VOLTAGE_LOW: u8 = 0b1000_0000;
    const CENTURY: u8 = 0b1000_0000;
    const ALARM_DISABLED: u8 = 0b1000_0000;
    const CLKOUT_ENABLE: u8 = 0b1000_0000;
}

/// 7-bit I²C address of the PCF8563 (0xA2 on the wire).
pub const DEVICE_ADDRESS: u8 = 0xA2 >> 1;

/// Alarm value meaning "field disabled" in the sentinel form of an alarm.
///
/// See [`AlarmSetting::from_sentinels`] and [`AlarmSetting::to_sentinels`].
pub const NO_ALARM: u8 = 99;

/// Driver version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// PCF8563 RTC driver
#[derive(Debug, Default)]
pub struct Pcf8563<I2C> {
    i2c: I2C,
    status: StatusFlags,
}

pub mod codec;
mod format;
mod interface;
mod pcf8563;
mod types;

pub use crate::format::{DateString, DateStyle, TimeString, TimeStyle};
pub use crate::types::{AlarmSetting, CalendarDate, Century, ClockTime, StatusFlags};
