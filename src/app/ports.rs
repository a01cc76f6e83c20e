//! Port traits — the hexagonal boundary between the modulation core and
//! the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ModulationEngine (domain)
//! ```
//!
//! The [`ModulationEngine`](super::engine::ModulationEngine) consumes these
//! via generics, so the core never touches hardware directly.  The
//! production adapter wires them to the ESP-IDF drivers; test mocks record
//! the call timeline instead.

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one blocking brightness-level conversion.
pub trait SensorPort {
    /// Sample the brightness input.  Returns a level in `[0, 1023]`.
    /// Blocks the calling context until the conversion completes; never
    /// fails on functioning hardware.
    fn read_level(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Channel output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: assert / de-assert one indicator output line.
/// Both operations always succeed; there is no readback.
pub trait ChannelOutputPort {
    /// Drive channel `channel`'s output line high.
    fn set_channel(&mut self, channel: usize);

    /// Drive channel `channel`'s output line low.
    fn clear_channel(&mut self, channel: usize);
}

// ───────────────────────────────────────────────────────────────
// Delay port (the timing mechanism itself)
// ───────────────────────────────────────────────────────────────

/// Busy-wait for approximately `us` microseconds.
///
/// Blocking is the point: this *is* the modulation clock, not a side
/// effect to avoid.  Interrupt preemption may stretch the wall-clock
/// duration; the spin count is never reset to compensate.
pub trait DelayPort {
    fn busy_wait_us(&mut self, us: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The engine emits structured [`EngineEvent`](super::events::EngineEvent)s
/// through this port.  Adapters decide where they go (serial log today;
/// a telemetry channel would implement the same trait).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::EngineEvent);
}
