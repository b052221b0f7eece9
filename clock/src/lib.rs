pub mod clock {
    use anyhow::{Context, Result};
    use chrono::{DateTime, FixedOffset, NaiveDateTime};
    use log::{debug, info, warn};
    use pcf8563::{AlarmSetting, DateStyle, DateTimeAccess, Pcf8563, TimeStyle};

    /// How the clock presents its time
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ClockSettings {
        /// Offset of the wall-clock time held by the RTC from UTC
        pub utc_offset_hours: i32,
        pub date_style: DateStyle,
        pub time_style: TimeStyle,
    }

    /// Wall clock backed by a PCF8563.
    ///
    /// Every getter reads the chip; nothing is served from a cache.
    pub struct Clock<I2C> {
        rtc: Pcf8563<I2C>,
        settings: ClockSettings,
    }

    impl<I2C> Clock<I2C>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        // Constructor for Clock
        pub fn new(i2c: I2C, settings: ClockSettings) -> Clock<I2C> {
            Clock {
                rtc: Pcf8563::new(i2c),
                settings,
            }
        }

        /// Give the bus back.
        pub fn release(self) -> I2C {
            self.rtc.destroy()
        }

        pub fn settings(&self) -> ClockSettings {
            self.settings
        }

        /// Method to get the hours
        pub fn get_hour(&mut self) -> Result<u8> {
            Ok(self.rtc.time().context("reading RTC time")?.hour)
        }

        /// Method to get the minutes
        pub fn get_minutes(&mut self) -> Result<u8> {
            Ok(self.rtc.time().context("reading RTC time")?.minute)
        }

        /// Method to get the seconds
        pub fn get_seconds(&mut self) -> Result<u8> {
            Ok(self.rtc.time().context("reading RTC time")?.second)
        }

        /// Method to get the day of the month
        pub fn get_day(&mut self) -> Result<u8> {
            Ok(self.rtc.date().context("reading RTC date")?.day)
        }

        /// Method to get the weekday, 0-6
        pub fn get_weekday(&mut self) -> Result<u8> {
            Ok(self.rtc.date().context("reading RTC date")?.weekday)
        }

        /// Method to get the month
        pub fn get_month(&mut self) -> Result<u8> {
            Ok(self.rtc.date().context("reading RTC date")?.month)
        }

        /// Method to get the four-digit year
        pub fn get_year(&mut self) -> Result<u16> {
            Ok(self.rtc.date().context("reading RTC date")?.full_year())
        }

        /// Method for setting the date and time
        pub fn set_date_time(&mut self, date_time: &NaiveDateTime) -> Result<()> {
            self.rtc
                .set_datetime(date_time)
                .with_context(|| format!("setting RTC to {date_time}"))?;
            info!("RTC set to {}", date_time);
            Ok(())
        }

        /// Method for returning the date and time held by the RTC
        pub fn get_date_time(&mut self) -> Result<NaiveDateTime> {
            self.rtc.datetime().context("reading RTC date/time")
        }

        /// RTC date and time with the configured UTC offset attached
        pub fn local_date_time(&mut self) -> Result<DateTime<FixedOffset>> {
            let offset = self.offset()?;
            self.get_date_time()?
                .and_local_timezone(offset)
                .single()
                .context("RTC time does not map to a single instant")
        }

        ///Returns a unix timestamp based on the current date time provided
        pub fn datetime_to_unix_timestamp(&mut self) -> Result<i64> {
            Ok(self.local_date_time()?.timestamp())
        }

        /// Current time in the configured style
        pub fn time_string(&mut self) -> Result<String> {
            let time = self
                .rtc
                .format_time(self.settings.time_style)
                .context("reading RTC time")?;
            Ok(time.as_str().to_owned())
        }

        /// Current date in the configured style
        pub fn date_string(&mut self) -> Result<String> {
            let date = self
                .rtc
                .format_date(self.settings.date_style)
                .context("reading RTC date")?;
            Ok(date.as_str().to_owned())
        }

        /// Alarm every day at `hour:minute`.
        ///
        /// The timer bits in status2 are kept.
        pub fn set_daily_alarm(&mut self, hour: u8, minute: u8) -> Result<()> {
            let alarm = AlarmSetting::new(Some(minute), Some(hour), None, None);
            self.rtc.read_status().context("reading RTC status")?;
            self.rtc.set_alarm(&alarm).context("programming RTC alarm")?;
            info!(
                "Daily alarm set for {:02}:{:02}",
                alarm.hour.unwrap_or_default(),
                alarm.minute.unwrap_or_default()
            );
            Ok(())
        }

        /// Current alarm match values
        pub fn alarm(&mut self) -> Result<AlarmSetting> {
            self.rtc.alarm().context("reading RTC alarm")
        }

        /// Disable every alarm field and the alarm interrupt.
        pub fn cancel_alarm(&mut self) -> Result<()> {
            self.rtc.read_status().context("reading RTC status")?;
            self.rtc.disable_alarm().context("disabling RTC alarm")?;
            info!("Alarm cancelled");
            Ok(())
        }

        /// Acknowledge a fired alarm.
        ///
        /// Returns true when the alarm flag was set. The flag is cleared and
        /// the interrupt stays armed for the next match.
        pub fn take_alarm(&mut self) -> Result<bool> {
            let status = self.rtc.read_status().context("reading RTC status")?;
            if !status.alarm_flag() {
                return Ok(false);
            }
            self.rtc.reset_alarm().context("resetting RTC alarm")?;
            debug!("Alarm acknowledged");
            Ok(true)
        }

        /// Reset the RTC if its supply dropped out.
        ///
        /// Returns true when a reset was needed; the time must be set again.
        pub fn recover_power_loss(&mut self) -> Result<bool> {
            if !self.rtc.voltage_low().context("reading RTC voltage flag")? {
                return Ok(false);
            }
            warn!("RTC reports low voltage, clock integrity lost; resetting");
            self.rtc.init_clock().context("resetting RTC")?;
            Ok(true)
        }

        fn offset(&self) -> Result<FixedOffset> {
            FixedOffset::east_opt(self.settings.utc_offset_hours * 3600)
                .with_context(|| format!("invalid UTC offset {}h", self.settings.utc_offset_hours))
        }
    }
}

pub use clock::{Clock, ClockSettings};
