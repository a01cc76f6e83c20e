//! Brightness potentiometer sampler.
//!
//! Reads the pot wiper voltage through an ESP32-S3 ADC channel and scales
//! it to the 10-bit `[0, 1023]` level range the duty-split math expects.
//! One blocking conversion per call — no retries, no averaging, no error
//! path; the oneshot conversion is bounded by the ADC clock, not by a
//! software timeout.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH4 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` for injection.

use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// Full-scale sampler reading.
pub const LEVEL_MAX: u16 = 1023;

static SIM_POT_ADC: AtomicU16 = AtomicU16::new(0);

/// Inject a raw 12-bit ADC value for host-side tests and simulation.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_pot_adc(raw: u16) {
    SIM_POT_ADC.store(raw, Ordering::Relaxed);
}

pub struct PotSampler {
    _adc_gpio: i32,
}

impl PotSampler {
    pub fn new(adc_gpio: i32) -> Self {
        Self {
            _adc_gpio: adc_gpio,
        }
    }

    /// One blocking conversion, scaled to `[0, LEVEL_MAX]`.
    pub fn read(&mut self) -> u16 {
        // The S3 oneshot unit converts at 12-bit width; the level contract
        // is 10-bit, so drop the two low bits.
        (self.read_adc() >> 2).min(LEVEL_MAX)
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(hw_init::ADC1_CH_POT)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_POT_ADC.load(Ordering::Relaxed)
    }
}

// ── Duty-split math ───────────────────────────────────────────

/// One period's on/off partition, recomputed from scratch every period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutySplit {
    pub on_us: u32,
    pub off_us: u32,
}

/// Split a modulation period proportionally to the sampled level.
///
/// `duty = level / 1023`; the on-time is `period_us * duty` rounded
/// half-up, and the off-time is the exact integer remainder, so
/// `on_us + off_us == period_us` always holds and no rounding drift can
/// accumulate across periods.
pub fn duty_split(level: u16, period_us: u32) -> DutySplit {
    let duty = f64::from(level.min(LEVEL_MAX)) / f64::from(LEVEL_MAX);
    let on_us = (f64::from(period_us) * duty + 0.5) as u32;
    DutySplit {
        on_us,
        off_us: period_us - on_us,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_level_is_fully_off() {
        let split = duty_split(0, 1000);
        assert_eq!(split, DutySplit { on_us: 0, off_us: 1000 });
    }

    #[test]
    fn full_level_is_fully_on() {
        let split = duty_split(LEVEL_MAX, 1000);
        assert_eq!(split, DutySplit { on_us: 1000, off_us: 0 });
    }

    #[test]
    fn midpoint_levels_round_to_half_period() {
        // 511/1023 and 512/1023 both land on 500 µs after half-up rounding.
        assert_eq!(duty_split(511, 1000).on_us, 500);
        assert_eq!(duty_split(512, 1000).on_us, 500);
    }

    #[test]
    fn three_quarter_level() {
        // 768/1023 = 0.75073…, ×1000 + 0.5 truncates to 751.
        let split = duty_split(768, 1000);
        assert_eq!(split.on_us, 751);
        assert_eq!(split.off_us, 249);
    }

    #[test]
    fn partition_is_exact() {
        for level in [0u16, 1, 100, 511, 512, 767, 1022, 1023] {
            for period in [1u32, 3, 1000, 20_000] {
                let split = duty_split(level, period);
                assert_eq!(split.on_us + split.off_us, period);
                assert!(split.on_us <= period);
            }
        }
    }

    #[test]
    fn out_of_range_level_clamps_to_full_scale() {
        assert_eq!(duty_split(4095, 1000).on_us, 1000);
    }

    #[cfg(not(target_os = "espidf"))]
    #[test]
    fn sampler_scales_raw_to_ten_bits() {
        let mut pot = PotSampler::new(5);
        sim_set_pot_adc(0);
        assert_eq!(pot.read(), 0);
        sim_set_pot_adc(2048);
        assert_eq!(pot.read(), 512);
        sim_set_pot_adc(4095);
        assert_eq!(pot.read(), 1023);
    }
}
