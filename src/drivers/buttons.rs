//! Button-bank toggle dispatch.
//!
//! The five toggle buttons are grouped into two banks, following the two
//! wiring harnesses on the board: bank A covers channels 0-1, bank B
//! covers channels 2-4.  Each bank is serviced by a single GPIO interrupt
//! handler.
//!
//! On delivery the handler scans its bank's buttons in fixed priority
//! order and toggles the channel of the *first* pressed button only.
//! Near-simultaneous presses within one bank during one interrupt window
//! therefore register at most one toggle — deliberate: one toggle per
//! delivery, not per-pin edge detection.
//!
//! The scan itself is a pure function over an injected pin-level probe so
//! it runs on the host; the ISRs in `hw_init` wrap it with a real GPIO
//! read.

use crate::channels::EnableFlags;
use crate::pins;

/// One bank entry: a button GPIO and the channel it toggles.
#[derive(Debug, Clone, Copy)]
pub struct BankButton {
    pub gpio: i32,
    pub channel: usize,
}

/// Bank A — one ISR, scanned highest-priority first.
pub const BANK_A: [BankButton; 2] = [
    BankButton { gpio: pins::BUTTON1_GPIO, channel: 0 },
    BankButton { gpio: pins::BUTTON2_GPIO, channel: 1 },
];

/// Bank B — one ISR, scanned highest-priority first.
pub const BANK_B: [BankButton; 3] = [
    BankButton { gpio: pins::BUTTON3_GPIO, channel: 2 },
    BankButton { gpio: pins::BUTTON4_GPIO, channel: 3 },
    BankButton { gpio: pins::BUTTON5_GPIO, channel: 4 },
];

/// Scan `bank` in priority order and toggle the first pressed button's
/// channel.  Returns the toggled channel, if any.
///
/// ISR contract: bounded work — one fixed-length scan, one atomic flip, no
/// blocking calls, no sensor reads, no allocation.
pub fn service_bank<const N: usize>(
    bank: &[BankButton],
    is_pressed: impl Fn(i32) -> bool,
    flags: &EnableFlags<N>,
) -> Option<usize> {
    for button in bank {
        if is_pressed(button.gpio) {
            flags.toggle(button.channel);
            return Some(button.channel);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pressed_pin_means_no_toggle() {
        let flags = EnableFlags::<5>::new();
        assert_eq!(service_bank(&BANK_B, |_| false, &flags), None);
        for ch in 0..5 {
            assert!(!flags.is_enabled(ch));
        }
    }

    #[test]
    fn single_press_toggles_its_channel() {
        let flags = EnableFlags::<5>::new();
        let toggled = service_bank(&BANK_A, |gpio| gpio == pins::BUTTON2_GPIO, &flags);
        assert_eq!(toggled, Some(1));
        assert!(flags.is_enabled(1));
        assert!(!flags.is_enabled(0));
    }

    #[test]
    fn simultaneous_presses_toggle_only_highest_priority() {
        let flags = EnableFlags::<5>::new();
        // All three bank-B buttons held down during one delivery.
        let toggled = service_bank(&BANK_B, |_| true, &flags);
        assert_eq!(toggled, Some(2));
        assert!(flags.is_enabled(2));
        assert!(!flags.is_enabled(3));
        assert!(!flags.is_enabled(4));
    }

    #[test]
    fn second_delivery_toggles_back() {
        let flags = EnableFlags::<5>::new();
        let pressed = |gpio| gpio == pins::BUTTON4_GPIO;
        service_bank(&BANK_B, pressed, &flags);
        assert!(flags.is_enabled(3));
        service_bank(&BANK_B, pressed, &flags);
        assert!(!flags.is_enabled(3));
    }
}
