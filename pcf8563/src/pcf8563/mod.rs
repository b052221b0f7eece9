mod alarm;
mod configuration;
mod datetime;
mod status;
