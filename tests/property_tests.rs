//! Property tests for the duty-split math, the enable flags, and the
//! button-bank scan.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32
//! targets.  On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use lightbar::channels::EnableFlags;
use lightbar::drivers::buttons::{BankButton, service_bank};
use lightbar::sensors::pot::{LEVEL_MAX, duty_split};
use proptest::prelude::*;

proptest! {
    /// The on/off split partitions the period exactly for every level and
    /// period length — no drift can accumulate across periods.
    #[test]
    fn split_partitions_period_exactly(
        level in 0u16..=1023,
        period in 1u32..=1_000_000,
    ) {
        let split = duty_split(level, period);
        prop_assert_eq!(split.on_us + split.off_us, period);
        prop_assert!(split.on_us <= period);
    }

    /// The float path agrees with exact rational round-half-up:
    /// `on = floor((2·period·level + 1023) / 2046)`.
    #[test]
    fn split_matches_rational_half_up_reference(
        level in 0u16..=1023,
        period in 1u32..=1_000_000,
    ) {
        let split = duty_split(level, period);
        let max = u64::from(LEVEL_MAX);
        let reference =
            (2 * u64::from(period) * u64::from(level) + max) / (2 * max);
        prop_assert_eq!(u64::from(split.on_us), reference);
    }

    /// A flag ends up set iff its channel was toggled an odd number of
    /// times — covers both double-toggle idempotence and cross-channel
    /// isolation for arbitrary press sequences.
    #[test]
    fn toggle_parity(ops in prop::collection::vec(0usize..5, 0..50)) {
        let flags = EnableFlags::<5>::new();
        for &channel in &ops {
            flags.toggle(channel);
        }
        for channel in 0..5 {
            let odd = ops.iter().filter(|&&c| c == channel).count() % 2 == 1;
            prop_assert_eq!(flags.is_enabled(channel), odd);
        }
    }

    /// One interrupt delivery toggles at most one channel, and always the
    /// highest-priority (first-scanned) pressed button.
    #[test]
    fn bank_scan_toggles_at_most_one(mask in 0u8..32) {
        let bank: [BankButton; 5] = core::array::from_fn(|i| BankButton {
            gpio: 100 + i as i32,
            channel: i,
        });
        let flags = EnableFlags::<5>::new();

        let toggled = service_bank(
            &bank,
            |gpio| (mask >> ((gpio - 100) as u32)) & 1 != 0,
            &flags,
        );

        let enabled = (0..5).filter(|&c| flags.is_enabled(c)).count();
        prop_assert!(enabled <= 1);
        match toggled {
            Some(channel) => {
                prop_assert_eq!(channel, mask.trailing_zeros() as usize);
                prop_assert!(flags.is_enabled(channel));
            }
            None => prop_assert_eq!(mask, 0),
        }
    }
}

// ── Exact boundary behaviour ──────────────────────────────────

#[test]
fn boundary_levels() {
    for period in [1u32, 1000, 999_983] {
        assert_eq!(duty_split(0, period).on_us, 0);
        assert_eq!(duty_split(LEVEL_MAX, period).on_us, period);
    }
}
