//! Per-channel enable flags shared between ISR and modulation loop.
//!
//! The one shared-mutable resource in the firmware.  Writers are the two
//! button-bank ISRs (one flag flip per delivery); the only reader is the
//! modulation engine, once per channel per period.  Each flag is an
//! independent `AtomicBool`, so no lock or critical section is needed —
//! a toggle and a concurrent read interleave at a single indivisible
//! store/load.
//!
//! ```text
//! ┌─────────────┐  toggle(ch)   ┌──────────────┐  is_enabled(ch)  ┌────────┐
//! │ Bank A ISR  │──────────────▶│              │                  │        │
//! │ Bank B ISR  │──────────────▶│ EnableFlags  │─────────────────▶│ Engine │
//! └─────────────┘               └──────────────┘   once / period  └────────┘
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

use crate::pins::CHANNEL_COUNT;

/// Fixed-size set of per-channel enable flags, all `false` at boot.
pub struct EnableFlags<const N: usize> {
    flags: [AtomicBool; N],
}

/// The board's channel flags.  Kept in a static so the GPIO ISR callbacks
/// can reach it without carrying state through the C callback argument.
pub static ENABLE_FLAGS: EnableFlags<CHANNEL_COUNT> = EnableFlags::new();

impl<const N: usize> EnableFlags<N> {
    pub const fn new() -> Self {
        Self {
            flags: [const { AtomicBool::new(false) }; N],
        }
    }

    /// Flip one channel's flag.  Lock-free — safe to call from interrupt
    /// context.  `channel` must be a valid id (< N); the bank tables that
    /// drive the ISRs only hold valid ids.
    pub fn toggle(&self, channel: usize) {
        self.flags[channel].fetch_xor(true, Ordering::Release);
    }

    /// Read-only snapshot of one channel's flag.
    pub fn is_enabled(&self, channel: usize) -> bool {
        self.flags[channel].load(Ordering::Acquire)
    }

    /// Number of channels in the set.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for EnableFlags<N> {
    fn default() -> Self {
        Self::new()
    }
}
