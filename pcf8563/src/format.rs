//! Text rendering of time and date snapshots

use core::fmt::{self, Write};

use crate::{CalendarDate, ClockTime};

/// Formatted time, `HH:MM` or `HH:MM:SS`
pub type TimeString = heapless::String<8>;
/// Formatted date, always ten characters
pub type DateString = heapless::String<10>;

/// Date layout
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY-MM-DD`
    Asia,
    /// `MM/DD/YYYY`
    Us,
    /// `DD-MM-YYYY` (default)
    #[default]
    World,
}

/// Time layout
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimeStyle {
    /// `HH:MM`
    HourMinute,
    /// `HH:MM:SS` (default)
    #[default]
    HourMinuteSecond,
}

impl ClockTime {
    pub fn format(&self, style: TimeStyle) -> TimeString {
        let mut out = TimeString::new();
        // every field is reduced to two digits, the buffer cannot overflow
        let written = match style {
            TimeStyle::HourMinute => {
                write!(out, "{:02}:{:02}", self.hour % 100, self.minute % 100)
            }
            TimeStyle::HourMinuteSecond => write!(
                out,
                "{:02}:{:02}:{:02}",
                self.hour % 100,
                self.minute % 100,
                self.second % 100
            ),
        };
        debug_assert!(written.is_ok());
        out
    }
}

impl CalendarDate {
    pub fn format(&self, style: DateStyle) -> DateString {
        let mut out = DateString::new();
        let (day, month, year) = (self.day % 100, self.month % 100, self.year % 100);
        let century = self.century.prefix();
        let written = match style {
            DateStyle::Asia => write!(out, "{century}{year:02}-{month:02}-{day:02}"),
            DateStyle::Us => write!(out, "{month:02}/{day:02}/{century}{year:02}"),
            DateStyle::World => write!(out, "{day:02}-{month:02}-{century}{year:02}"),
        };
        debug_assert!(written.is_ok());
        out
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(TimeStyle::default()))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DateStyle::default()))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::Century;
    use std::string::ToString;

    #[test]
    fn date_styles() {
        let date = CalendarDate::new(5, 2, 3, Century::Y2000, 24);
        assert_eq!(date.format(DateStyle::Asia), "2024-03-05");
        assert_eq!(date.format(DateStyle::Us), "03/05/2024");
        assert_eq!(date.format(DateStyle::World), "05-03-2024");
    }

    #[test]
    fn nineteenth_century_prefix() {
        let date = CalendarDate::new(31, 0, 12, Century::Y1900, 99);
        assert_eq!(date.format(DateStyle::Asia), "1999-12-31");
    }

    #[test]
    fn time_styles() {
        let time = ClockTime::new(9, 5, 30);
        assert_eq!(time.format(TimeStyle::HourMinute), "09:05");
        assert_eq!(time.format(TimeStyle::HourMinuteSecond), "09:05:30");
    }

    #[test]
    fn out_of_range_fields_keep_fixed_width() {
        let time = ClockTime::new(165, 165, 165);
        assert_eq!(time.format(TimeStyle::HourMinuteSecond).len(), 8);
        let date = CalendarDate::new(165, 0, 165, Century::Y2000, 165);
        assert_eq!(date.format(DateStyle::World).len(), 10);
    }

    #[test]
    fn display_uses_default_styles() {
        assert_eq!(ClockTime::new(23, 59, 1).to_string(), "23:59:01");
        assert_eq!(
            CalendarDate::new(1, 1, 1, Century::Y2000, 0).to_string(),
            "01-01-2000"
        );
    }
}
