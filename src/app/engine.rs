//! Duty-cycle modulation engine.
//!
//! The main execution context runs this loop for the lifetime of the
//! powered system.  Every period it samples the brightness pot once,
//! splits the period into on/off time proportional to the reading, drives
//! the enabled channels high for the on-time, then drives *every* channel
//! low for the off-time.
//!
//! ## Period anatomy
//!
//! 1. **Sample** — one blocking pot read, one duty split.
//! 2. **OnPhase** — channels 0..N-1 in order: read the enable flag fresh
//!    (once, right here) and assert the output if it is set.  Disabled
//!    channels are left untouched.  Busy-wait the on-time.
//! 3. **OffPhase** — unconditionally de-assert every channel, enabled or
//!    not, so nothing stays lit across a period boundary even if its
//!    button was pressed mid-period.  Busy-wait the off-time.
//!
//! A toggle that lands mid-period is picked up by the next period's
//! OnPhase read — the engine never re-checks flags inside a period.  A
//! toggle landing between the channel-k and channel-k+1 reads is visible
//! to k+1 but not k for that period; the engine never needs a consistent
//! snapshot across the whole set.

use log::debug;

use crate::app::events::EngineEvent;
use crate::app::ports::{ChannelOutputPort, DelayPort, EventSink, SensorPort};
use crate::channels::EnableFlags;
use crate::config::ModulationConfig;
use crate::sensors::pot::duty_split;

/// Modulation engine over `N` channels.
///
/// Holds a shadow of the previous period's enable snapshot so flag
/// transitions can be reported without extra atomic reads.
pub struct ModulationEngine<'a, const N: usize> {
    config: ModulationConfig,
    flags: &'a EnableFlags<N>,
    prev_enabled: [bool; N],
}

impl<'a, const N: usize> ModulationEngine<'a, N> {
    pub fn new(config: ModulationConfig, flags: &'a EnableFlags<N>) -> Self {
        Self {
            config,
            flags,
            prev_enabled: [false; N],
        }
    }

    /// Announce the engine through the event sink.  Call once before the
    /// first period.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&EngineEvent::Started {
            period_us: self.config.period_us,
        });
    }

    /// Execute exactly one modulation period.
    pub fn run_period<H>(&mut self, hw: &mut H, sink: &mut impl EventSink)
    where
        H: SensorPort + ChannelOutputPort + DelayPort,
    {
        // Sample.
        let level = hw.read_level();
        let split = duty_split(level, self.config.period_us);

        // OnPhase: snapshot each flag in channel order, asserting as we go.
        let mut enabled = [false; N];
        for (channel, slot) in enabled.iter_mut().enumerate() {
            let on = self.flags.is_enabled(channel);
            *slot = on;
            if on {
                hw.set_channel(channel);
            }
        }
        hw.busy_wait_us(split.on_us);

        // OffPhase: every channel low, independent of its enable flag.
        for channel in 0..N {
            hw.clear_channel(channel);
        }
        hw.busy_wait_us(split.off_us);

        // Report enable transitions against the snapshot that actually
        // drove this period — no second flag read.
        for (channel, (&now, &prev)) in
            enabled.iter().zip(self.prev_enabled.iter()).enumerate()
        {
            if now != prev {
                debug!("engine: channel {} -> {}", channel, now);
                sink.emit(&EngineEvent::EnableChanged {
                    channel,
                    enabled: now,
                });
            }
        }
        self.prev_enabled = enabled;
    }

    /// Run the modulation loop forever.  There is no pause or stop
    /// operation; the loop ends at power-off.
    pub fn run<H>(&mut self, hw: &mut H, sink: &mut impl EventSink) -> !
    where
        H: SensorPort + ChannelOutputPort + DelayPort,
    {
        loop {
            self.run_period(hw, sink);
        }
    }
}
