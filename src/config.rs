//! System configuration parameters
//!
//! All tunable parameters for the Lightbar modulation loop.  There is no
//! persistence: enable flags and configuration reset to these values on
//! every boot.

use serde::{Deserialize, Serialize};

/// Core modulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulationConfig {
    /// Total modulation period length (microseconds)
    pub period_us: u32,
    /// Discarded ADC conversions run at bring-up to settle the analog
    /// front-end before the first real sample
    pub warmup_reads: u8,
}

impl Default for ModulationConfig {
    fn default() -> Self {
        Self {
            period_us: 1000, // 1 kHz modulation
            warmup_reads: 1,
        }
    }
}

impl ModulationConfig {
    /// Range-check the configuration.  Invalid values are rejected, not
    /// silently clamped.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.period_us == 0 {
            return Err("period_us must be non-zero");
        }
        if self.period_us > 1_000_000 {
            return Err("period_us above one second is not a modulation period");
        }
        Ok(())
    }
}
