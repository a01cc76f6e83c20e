//! Sensor subsystem — the brightness potentiometer sampler and the pure
//! duty-split math the modulation engine runs on its readings.

pub mod pot;
