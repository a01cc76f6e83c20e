//! GPIO / peripheral pin assignments for the Lightbar main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

/// Number of indicator channels on the board.
pub const CHANNEL_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Indicator outputs
// ---------------------------------------------------------------------------

/// Channel 0 indicator LED (active HIGH, driven through a low-side FET).
pub const LED1_GPIO: i32 = 11;
/// Channel 1 indicator LED.
pub const LED2_GPIO: i32 = 12;
/// Channel 2 indicator LED.
pub const LED3_GPIO: i32 = 13;
/// Channel 3 indicator LED.
pub const LED4_GPIO: i32 = 14;
/// Channel 4 indicator LED.
pub const LED5_GPIO: i32 = 17;

/// Indicator GPIOs indexed by channel id.
pub const LED_GPIOS: [i32; CHANNEL_COUNT] =
    [LED1_GPIO, LED2_GPIO, LED3_GPIO, LED4_GPIO, LED5_GPIO];

// ---------------------------------------------------------------------------
// Toggle buttons (active-low momentary switches, internal pull-ups)
// ---------------------------------------------------------------------------

/// Channel 0 toggle button — bank A.
pub const BUTTON1_GPIO: i32 = 16;
/// Channel 1 toggle button — bank A.
pub const BUTTON2_GPIO: i32 = 18;
/// Channel 2 toggle button — bank B.
pub const BUTTON3_GPIO: i32 = 35;
/// Channel 3 toggle button — bank B.
pub const BUTTON4_GPIO: i32 = 36;
/// Channel 4 toggle button — bank B.
pub const BUTTON5_GPIO: i32 = 37;

// ---------------------------------------------------------------------------
// Brightness potentiometer — Analog (ADC1)
// ---------------------------------------------------------------------------

/// 10 kΩ potentiometer wiper — analog voltage via resistive divider.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const POT_ADC_GPIO: i32 = 5;
