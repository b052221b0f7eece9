use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Utc};
use clock::Clock;
use log::*;
use rppal::i2c::I2c;

mod config;

use config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize logger, RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
    info!("PCF8563 clock, driver v{}", pcf8563::VERSION);

    let config = Config::load()?;

    // I2C bus, the RTC is its only user
    let i2c = I2c::with_bus(config.get_bus_number())
        .with_context(|| format!("opening /dev/i2c-{}", config.get_bus_number()))?;
    let mut clock = Clock::new(i2c, config.clock_settings());

    if config.startup.reset_on_power_loss && clock.recover_power_loss()? {
        warn!("RTC was reset after a power loss");
    }

    if config.startup.sync_from_system {
        let offset = FixedOffset::east_opt(config.get_timezone_offset() * 3600)
            .context("timezone offset out of range")?;
        let local_time: DateTime<FixedOffset> = Utc::now().with_timezone(&offset);
        info!("Syncing RTC from system time {}", local_time.format("%d/%m/%Y %H:%M:%S"));
        clock.set_date_time(&local_time.naive_local())?;
    }

    match config.alarm {
        Some(alarm) => clock.set_daily_alarm(alarm.hour, alarm.minute)?,
        None => clock.cancel_alarm()?,
    }

    let poll_interval = Duration::from_secs(config.get_poll_interval());
    loop {
        match read_now(&mut clock) {
            Ok((date, time)) => info!("{} {}", date, time),
            Err(e) => error!("Failed to read RTC: {:#}", e),
        }

        match clock.take_alarm() {
            Ok(true) => info!("Alarm fired"),
            Ok(false) => {}
            Err(e) => error!("Failed to check RTC alarm: {:#}", e),
        }

        thread::sleep(poll_interval);
    }
}

fn read_now(clock: &mut Clock<I2c>) -> anyhow::Result<(String, String)> {
    Ok((clock.date_string()?, clock.time_string()?))
}
