//! Lightbar Firmware — Main Entry Point
//!
//! Hexagonal architecture around a busy-wait modulation loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter                  LogEventSink                 │
//! │  (Sensor+ChannelOutput+Delay)     (EventSink)                  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            ModulationEngine (pure logic)               │    │
//! │  │  sample · duty split · on-phase · off-phase            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Bank ISRs ──▶ EnableFlags atomics ──▶ engine polls per period │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
mod channels;
mod config;
mod pins;

mod adapters;
mod app;
mod drivers;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::{error, info};

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use app::engine::ModulationEngine;
use channels::ENABLE_FLAGS;
use config::ModulationConfig;
use sensors::pot::PotSampler;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("lightbar v{}", env!("CARGO_PKG_VERSION"));

    let config = ModulationConfig::default();
    config.validate().map_err(anyhow::Error::msg)?;

    // ── 2. Hardware bring-up (exactly once, before the loop) ──
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = drivers::hw_init::init_isr_service() {
        error!("ISR service init failed: {} — buttons inoperative", e);
    }

    // ── 3. Sensor warm-up ─────────────────────────────────────
    // Discarded conversions settle the ADC front-end before the first
    // real sample.
    let mut pot = PotSampler::new(pins::POT_ADC_GPIO);
    for _ in 0..config.warmup_reads {
        let _ = pot.read();
    }

    // ── 4. Construct adapters + engine ────────────────────────
    let mut hw = HardwareAdapter::new(pot);
    let mut sink = LogEventSink::new();
    let mut engine = ModulationEngine::new(config, &ENABLE_FLAGS);
    engine.start(&mut sink);

    info!("System ready. Entering modulation loop.");

    // ── 5. Modulation loop (never returns) ────────────────────
    engine.run(&mut hw, &mut sink)
}
