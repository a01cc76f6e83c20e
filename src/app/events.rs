//! Outbound application events.
//!
//! The [`ModulationEngine`](super::engine::ModulationEngine) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — today they go to the
//! serial log.

/// Structured events emitted by the modulation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The engine has started (carries the configured period length).
    Started { period_us: u32 },

    /// A channel's enable flag changed between one period's snapshot and
    /// the next — i.e. a button toggle became visible to the engine.
    EnableChanged { channel: usize, enabled: bool },
}
