use clock::ClockSettings;
use pcf8563::{DateStyle, TimeStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bus: BusConfig,
    pub location: LocationConfig,
    pub display: DisplayConfig,
    pub startup: StartupConfig,
    pub alarm: Option<AlarmConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusConfig {
    /// Linux I2C bus number, `/dev/i2c-<number>`
    pub number: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub timezone_offset_hours: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub date_style: DateFormat,
    pub time_style: TimeFormat,
    pub poll_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupConfig {
    pub sync_from_system: bool,
    pub reset_on_power_loss: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlarmConfig {
    pub hour: u8,
    pub minute: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    Asia,
    Us,
    World,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    Hm,
    Hms,
}

impl From<DateFormat> for DateStyle {
    fn from(format: DateFormat) -> Self {
        match format {
            DateFormat::Asia => DateStyle::Asia,
            DateFormat::Us => DateStyle::Us,
            DateFormat::World => DateStyle::World,
        }
    }
}

impl From<TimeFormat> for TimeStyle {
    fn from(format: TimeFormat) -> Self {
        match format {
            TimeFormat::Hm => TimeStyle::HourMinute,
            TimeFormat::Hms => TimeStyle::HourMinuteSecond,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        // Try external file first
        if Path::new("config.toml").exists() {
            let config_content = fs::read_to_string("config.toml")?;
            let config: Config = toml::from_str(&config_content)?;
            log::info!("Loaded configuration from file");
            Ok(config)
        } else {
            // Fallback to embedded defaults
            let config_content = include_str!("../config.toml.example");
            let config: Config = toml::from_str(config_content)?;
            log::warn!("Using embedded default configuration");
            Ok(config)
        }
    }
}

// Helper functions for easy access
impl Config {
    pub fn get_bus_number(&self) -> u8 {
        self.bus.number
    }

    pub fn get_timezone_offset(&self) -> i32 {
        self.location.timezone_offset_hours
    }

    pub fn get_poll_interval(&self) -> u64 {
        self.display.poll_interval_secs.max(1)
    }

    pub fn clock_settings(&self) -> ClockSettings {
        ClockSettings {
            utc_offset_hours: self.location.timezone_offset_hours,
            date_style: self.display.date_style.into(),
            time_style: self.display.time_style.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_parse() {
        let config: Config = toml::from_str(include_str!("../config.toml.example")).unwrap();
        assert_eq!(config.get_bus_number(), 1);
        assert_eq!(config.clock_settings(), ClockSettings::default());
        assert!(config.alarm.is_none());
    }

    #[test]
    fn styles_and_alarm_are_read() {
        let config: Config = toml::from_str(
            r#"
            [bus]
            number = 0

            [location]
            timezone_offset_hours = -5

            [display]
            date_style = "asia"
            time_style = "hm"
            poll_interval_secs = 0

            [startup]
            sync_from_system = false
            reset_on_power_loss = true

            [alarm]
            hour = 6
            minute = 30
            "#,
        )
        .unwrap();
        let settings = config.clock_settings();
        assert_eq!(settings.utc_offset_hours, -5);
        assert_eq!(settings.date_style, DateStyle::Asia);
        assert_eq!(settings.time_style, TimeStyle::HourMinute);
        assert_eq!(config.get_poll_interval(), 1);
        let alarm = config.alarm.unwrap();
        assert_eq!((alarm.hour, alarm.minute), (6, 30));
    }

    #[test]
    fn unknown_style_is_rejected() {
        let result: Result<DisplayConfig, _> = toml::from_str(
            r#"
            date_style = "martian"
            time_style = "hms"
            poll_interval_secs = 60
            "#,
        );
        assert!(result.is_err());
    }
}
