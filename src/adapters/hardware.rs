//! Hardware adapter — bridges real peripherals to the port traits.
//!
//! Owns the [`PotSampler`] and maps channel ids to LED GPIOs, exposing
//! them through [`SensorPort`], [`ChannelOutputPort`], and [`DelayPort`].
//! This is the only module in the system that touches actual hardware.
//! On non-espidf targets, the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::ports::{ChannelOutputPort, DelayPort, SensorPort};
use crate::drivers::{delay, hw_init};
use crate::pins;
use crate::sensors::pot::PotSampler;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    pot: PotSampler,
}

impl HardwareAdapter {
    pub fn new(pot: PotSampler) -> Self {
        Self { pot }
    }
}

impl SensorPort for HardwareAdapter {
    fn read_level(&mut self) -> u16 {
        self.pot.read()
    }
}

impl ChannelOutputPort for HardwareAdapter {
    fn set_channel(&mut self, channel: usize) {
        hw_init::gpio_write(pins::LED_GPIOS[channel], true);
    }

    fn clear_channel(&mut self, channel: usize) {
        hw_init::gpio_write(pins::LED_GPIOS[channel], false);
    }
}

impl DelayPort for HardwareAdapter {
    fn busy_wait_us(&mut self, us: u32) {
        delay::busy_wait_us(us);
    }
}
