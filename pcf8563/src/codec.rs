//! Conversions between register bytes and calendar values.
//!
//! All time and date registers hold packed BCD with some control bits mixed
//! in; those bits are masked off before a value is decoded.

use crate::{AlarmSetting, BitFlags, CalendarDate, Century, ClockTime};

const SECONDS_MASK: u8 = 0x7F;
const MINUTES_MASK: u8 = 0x7F;
const HOURS_MASK: u8 = 0x3F;
const DAY_MASK: u8 = 0x3F;
const WEEKDAY_MASK: u8 = 0x07;
const MONTH_MASK: u8 = 0x1F;

/// One of the four alarm registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmField {
    Minute,
    Hour,
    Day,
    Weekday,
}

impl AlarmField {
    /// Inclusive range of values the field can be armed with.
    pub const fn range(self) -> (u8, u8) {
        match self {
            AlarmField::Minute => (0, 59),
            AlarmField::Hour => (0, 23),
            AlarmField::Day => (1, 31),
            AlarmField::Weekday => (0, 6),
        }
    }

    /// Bits of the register that carry the BCD value.
    pub const fn value_mask(self) -> u8 {
        match self {
            AlarmField::Minute => MINUTES_MASK,
            AlarmField::Hour => HOURS_MASK,
            AlarmField::Day => DAY_MASK,
            AlarmField::Weekday => WEEKDAY_MASK,
        }
    }

    pub fn clamp(self, value: u8) -> u8 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }
}

/// Pack a decimal value (0-99) into BCD.
pub const fn bcd_encode(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Unpack a BCD byte. Non-value bits must already be masked off.
pub const fn bcd_decode(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

pub fn encode_month(month: u8, century: Century) -> u8 {
    let month = bcd_encode(month) & !BitFlags::CENTURY;
    match century {
        Century::Y2000 => month,
        Century::Y1900 => month | BitFlags::CENTURY,
    }
}

/// Split the month register into the month and the century it encodes.
pub fn decode_month(data: u8) -> (u8, Century) {
    let century = if data & BitFlags::CENTURY != 0 {
        Century::Y1900
    } else {
        Century::Y2000
    };
    (bcd_decode(data & MONTH_MASK), century)
}

/// Encode an alarm register. `None` disables the field; armed values are
/// clamped to the field's range first.
pub fn encode_alarm(field: AlarmField, value: Option<u8>) -> u8 {
    match value {
        Some(value) => bcd_encode(field.clamp(value)) & !BitFlags::ALARM_DISABLED,
        None => BitFlags::ALARM_DISABLED,
    }
}

pub fn decode_alarm(field: AlarmField, data: u8) -> Option<u8> {
    if data & BitFlags::ALARM_DISABLED != 0 {
        None
    } else {
        Some(bcd_decode(data & field.value_mask()))
    }
}

/// Seconds, minutes and hours registers, in register order.
pub fn encode_time(time: &ClockTime) -> [u8; 3] {
    [
        bcd_encode(time.second),
        bcd_encode(time.minute),
        bcd_encode(time.hour),
    ]
}

pub fn decode_time(data: &[u8; 3]) -> ClockTime {
    ClockTime {
        second: bcd_decode(data[0] & SECONDS_MASK),
        minute: bcd_decode(data[1] & MINUTES_MASK),
        hour: bcd_decode(data[2] & HOURS_MASK),
    }
}

/// Day, weekday, century/month and year registers, in register order.
pub fn encode_date(date: &CalendarDate) -> [u8; 4] {
    [
        bcd_encode(date.day),
        bcd_encode(date.weekday),
        encode_month(date.month, date.century),
        bcd_encode(date.year),
    ]
}

pub fn decode_date(data: &[u8; 4]) -> CalendarDate {
    let (month, century) = decode_month(data[2]);
    CalendarDate {
        day: bcd_decode(data[0] & DAY_MASK),
        weekday: bcd_decode(data[1] & WEEKDAY_MASK),
        month,
        century,
        year: bcd_decode(data[3]),
    }
}

/// The four alarm registers, minute first.
pub fn encode_alarm_setting(alarm: &AlarmSetting) -> [u8; 4] {
    [
        encode_alarm(AlarmField::Minute, alarm.minute),
        encode_alarm(AlarmField::Hour, alarm.hour),
        encode_alarm(AlarmField::Day, alarm.day),
        encode_alarm(AlarmField::Weekday, alarm.weekday),
    ]
}

pub fn decode_alarm_setting(data: &[u8; 4]) -> AlarmSetting {
    AlarmSetting {
        minute: decode_alarm(AlarmField::Minute, data[0]),
        hour: decode_alarm(AlarmField::Hour, data[1]),
        day: decode_alarm(AlarmField::Day, data[2]),
        weekday: decode_alarm(AlarmField::Weekday, data[3]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: [AlarmField; 4] = [
        AlarmField::Minute,
        AlarmField::Hour,
        AlarmField::Day,
        AlarmField::Weekday,
    ];

    #[test]
    fn bcd_matches_known_values() {
        assert_eq!(bcd_encode(0), 0x00);
        assert_eq!(bcd_encode(23), 0x23);
        assert_eq!(bcd_encode(59), 0x59);
        assert_eq!(bcd_encode(99), 0x99);
        assert_eq!(bcd_decode(0x23), 23);
        assert_eq!(bcd_decode(0x59), 59);
    }

    #[test]
    fn bcd_round_trips_every_two_digit_value() {
        for value in 0..=99 {
            assert_eq!(bcd_decode(bcd_encode(value)), value);
        }
    }

    #[test]
    fn month_keeps_century_apart_from_value() {
        for month in 1..=12 {
            for century in [Century::Y2000, Century::Y1900] {
                assert_eq!(decode_month(encode_month(month, century)), (month, century));
            }
        }
        assert_eq!(encode_month(12, Century::Y1900), 0x92);
        assert_eq!(encode_month(12, Century::Y2000), 0x12);
    }

    #[test]
    fn alarm_round_trips_range_and_disabled() {
        for field in FIELDS {
            let (min, max) = field.range();
            for value in min..=max {
                assert_eq!(decode_alarm(field, encode_alarm(field, Some(value))), Some(value));
            }
            assert_eq!(decode_alarm(field, encode_alarm(field, None)), None);
        }
    }

    #[test]
    fn disabled_alarm_has_only_the_top_bit() {
        for field in FIELDS {
            assert_eq!(encode_alarm(field, None), 0x80);
        }
    }

    #[test]
    fn armed_alarm_is_clamped_into_range() {
        assert_eq!(encode_alarm(AlarmField::Minute, Some(120)), 0x59);
        assert_eq!(encode_alarm(AlarmField::Hour, Some(30)), 0x23);
        assert_eq!(encode_alarm(AlarmField::Day, Some(0)), 0x01);
        assert_eq!(encode_alarm(AlarmField::Weekday, Some(9)), 0x06);
    }

    #[test]
    fn decoding_ignores_control_bits() {
        // VL bit on seconds, unused top bits on hours and weekday
        let time = decode_time(&[0x80 | 0x45, 0x12, 0xC0 | 0x21]);
        assert_eq!(time, ClockTime::new(21, 12, 45));

        let date = decode_date(&[0xC0 | 0x31, 0xF8 | 0x06, 0x80 | 0x60 | 0x11, 0x99]);
        assert_eq!(date.day, 31);
        assert_eq!(date.weekday, 6);
        assert_eq!(date.month, 11);
        assert_eq!(date.century, Century::Y1900);
        assert_eq!(date.year, 99);
    }

    #[test]
    fn time_registers_are_seconds_first() {
        assert_eq!(encode_time(&ClockTime::new(9, 5, 30)), [0x30, 0x05, 0x09]);
    }

    #[test]
    fn date_registers_are_day_first() {
        let date = CalendarDate::new(5, 2, 3, Century::Y2000, 24);
        assert_eq!(encode_date(&date), [0x05, 0x02, 0x03, 0x24]);
        assert_eq!(decode_date(&encode_date(&date)), date);
    }
}
