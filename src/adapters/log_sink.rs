//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured engine events to the
//! ESP-IDF logger (which goes to UART / USB-CDC in production).  A
//! telemetry adapter would implement the same trait.

use log::info;

use crate::app::events::EngineEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`EngineEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::Started { period_us } => {
                info!("START | period={}us", period_us);
            }
            EngineEvent::EnableChanged { channel, enabled } => {
                info!(
                    "CHAN  | {} -> {}",
                    channel,
                    if *enabled { "on" } else { "off" }
                );
            }
        }
    }
}
