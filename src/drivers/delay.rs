//! Busy-wait microsecond delay.
//!
//! The modulation loop times its on/off phases by actively occupying the
//! main context — there is no timer peripheral involved.  A hardware
//! interrupt may preempt the spin and stretch the wall-clock duration;
//! the elapsed count is never reset to compensate, so period jitter under
//! interrupt load is bounded and accepted.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: the ROM's calibrated per-microsecond spin.
//! On host/test: a `std::time::Instant` spin loop.

/// Occupy the calling context for approximately `us` microseconds.
#[cfg(target_os = "espidf")]
pub fn busy_wait_us(us: u32) {
    // SAFETY: esp_rom_delay_us is a pure CPU spin with no shared state;
    // safe to call from the main context at any time.
    unsafe { esp_idf_svc::sys::esp_rom_delay_us(us) };
}

/// Occupy the calling context for approximately `us` microseconds.
#[cfg(not(target_os = "espidf"))]
pub fn busy_wait_us(us: u32) {
    let deadline = std::time::Instant::now() + std::time::Duration::from_micros(u64::from(us));
    while std::time::Instant::now() < deadline {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
#[cfg(not(target_os = "espidf"))]
mod tests {
    use super::*;

    #[test]
    fn waits_at_least_the_requested_duration() {
        let start = std::time::Instant::now();
        busy_wait_us(500);
        assert!(start.elapsed() >= std::time::Duration::from_micros(500));
    }

    #[test]
    fn zero_duration_returns_immediately() {
        busy_wait_us(0);
    }
}
