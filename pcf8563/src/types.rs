//! Register snapshots

use crate::codec::AlarmField;
use crate::{BitFlags, NO_ALARM};

/// Time of day, 24-hour
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

impl ClockTime {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        ClockTime {
            hour,
            minute,
            second,
        }
    }

    /// Whether every field is within its register range.
    pub fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60 && self.second < 60
    }
}

/// Century selected by the top bit of the month register
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Century {
    /// Years 2000-2099 (bit clear)
    #[default]
    Y2000,
    /// Years 1900-1999 (bit set)
    Y1900,
}

impl Century {
    pub const fn base_year(self) -> u16 {
        match self {
            Century::Y2000 => 2000,
            Century::Y1900 => 1900,
        }
    }

    /// First two digits of a four-digit year in this century.
    pub const fn prefix(self) -> &'static str {
        match self {
            Century::Y2000 => "20",
            Century::Y1900 => "19",
        }
    }

    /// Split a full year into century and two-digit year.
    ///
    /// Returns `None` outside 1900-2099.
    pub fn split_year(year: i32) -> Option<(Century, u8)> {
        match year {
            1900..=1999 => Some((Century::Y1900, (year - 1900) as u8)),
            2000..=2099 => Some((Century::Y2000, (year - 2000) as u8)),
            _ => None,
        }
    }
}

/// Calendar date as stored by the chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    /// 1-31
    pub day: u8,
    /// 0-6, the chip does not assign names to weekdays
    pub weekday: u8,
    /// 1-12
    pub month: u8,
    pub century: Century,
    /// 0-99
    pub year: u8,
}

impl CalendarDate {
    pub const fn new(day: u8, weekday: u8, month: u8, century: Century, year: u8) -> Self {
        CalendarDate {
            day,
            weekday,
            month,
            century,
            year,
        }
    }

    /// Four-digit year.
    pub fn full_year(&self) -> u16 {
        self.century.base_year() + u16::from(self.year)
    }

    /// Whether every field is within its register range.
    pub fn is_valid(&self) -> bool {
        (1..=31).contains(&self.day)
            && self.weekday <= 6
            && (1..=12).contains(&self.month)
            && self.year <= 99
    }
}

/// Alarm match values. `None` disables matching on that field.
///
/// The alarm fires when every armed field matches the current time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AlarmSetting {
    pub minute: Option<u8>,
    pub hour: Option<u8>,
    pub day: Option<u8>,
    pub weekday: Option<u8>,
}

impl AlarmSetting {
    /// Create an alarm, clamping each armed field to its valid range.
    pub fn new(minute: Option<u8>, hour: Option<u8>, day: Option<u8>, weekday: Option<u8>) -> Self {
        AlarmSetting {
            minute: minute.map(|v| AlarmField::Minute.clamp(v)),
            hour: hour.map(|v| AlarmField::Hour.clamp(v)),
            day: day.map(|v| AlarmField::Day.clamp(v)),
            weekday: weekday.map(|v| AlarmField::Weekday.clamp(v)),
        }
    }

    /// Alarm with every field disabled.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Build an alarm from plain values where exactly [`NO_ALARM`] (99)
    /// disables a field. Any other value is armed and clamped.
    pub fn from_sentinels(minute: u8, hour: u8, day: u8, weekday: u8) -> Self {
        let armed = |v: u8| if v == NO_ALARM { None } else { Some(v) };
        Self::new(armed(minute), armed(hour), armed(day), armed(weekday))
    }

    /// Plain values with [`NO_ALARM`] for disabled fields, minute first.
    pub fn to_sentinels(&self) -> [u8; 4] {
        [self.minute, self.hour, self.day, self.weekday].map(|v| v.unwrap_or(NO_ALARM))
    }

    pub fn is_disabled(&self) -> bool {
        *self == Self::disabled()
    }
}

/// Contents of the two control/status registers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusFlags {
    pub control_status_1: u8,
    pub control_status_2: u8,
}

impl StatusFlags {
    /// AIE: an alarm match drives the interrupt pin.
    pub fn alarm_interrupt_enabled(&self) -> bool {
        self.control_status_2 & BitFlags::ALARM_INT_EN != 0
    }

    /// AF: the alarm has matched since the flag was last cleared.
    pub fn alarm_flag(&self) -> bool {
        self.control_status_2 & BitFlags::ALARM_FLAG != 0
    }

    pub fn timer_interrupt_enabled(&self) -> bool {
        self.control_status_2 & BitFlags::TIMER_INT_EN != 0
    }

    pub fn timer_flag(&self) -> bool {
        self.control_status_2 & BitFlags::TIMER_FLAG != 0
    }

    /// STOP: the clock prescaler is halted.
    pub fn clock_stopped(&self) -> bool {
        self.control_status_1 & BitFlags::STOP != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_99_disables_only_on_exact_match() {
        let alarm = AlarmSetting::from_sentinels(120, 99, 0, 98);
        assert_eq!(alarm.minute, Some(59));
        assert_eq!(alarm.hour, None);
        assert_eq!(alarm.day, Some(1));
        assert_eq!(alarm.weekday, Some(6));
        assert_eq!(alarm.to_sentinels(), [59, 99, 1, 6]);
    }

    #[test]
    fn disabled_alarm_reports_all_sentinels() {
        assert!(AlarmSetting::disabled().is_disabled());
        assert_eq!(AlarmSetting::disabled().to_sentinels(), [NO_ALARM; 4]);
    }

    #[test]
    fn century_maps_to_epoch_base() {
        assert_eq!(Century::Y2000.base_year(), 2000);
        assert_eq!(Century::Y1900.base_year(), 1900);
        assert_eq!(Century::split_year(1999), Some((Century::Y1900, 99)));
        assert_eq!(Century::split_year(2024), Some((Century::Y2000, 24)));
        assert_eq!(Century::split_year(2100), None);
        assert_eq!(Century::split_year(1899), None);
    }

    #[test]
    fn validity_checks_register_ranges() {
        assert!(ClockTime::new(23, 59, 59).is_valid());
        assert!(!ClockTime::new(24, 0, 0).is_valid());
        assert!(!ClockTime::new(0, 60, 0).is_valid());
        assert!(CalendarDate::new(31, 6, 12, Century::Y1900, 99).is_valid());
        assert!(!CalendarDate::new(0, 0, 1, Century::Y2000, 0).is_valid());
        assert!(!CalendarDate::new(1, 7, 1, Century::Y2000, 0).is_valid());
        assert!(!CalendarDate::new(1, 0, 13, Century::Y2000, 0).is_valid());
    }

    #[test]
    fn status_bits() {
        let status = StatusFlags {
            control_status_1: 0b0010_0000,
            control_status_2: 0b0000_1010,
        };
        assert!(status.clock_stopped());
        assert!(status.alarm_flag());
        assert!(status.alarm_interrupt_enabled());
        assert!(!status.timer_flag());
        assert!(!status.timer_interrupt_enabled());
    }
}
