// Board wiring that is not part of `toaster.toml`.
// Also included by build.rs, which checks it against the configured pins.

/// Start/reset button, active low
pub const START_BUTTON_PIN: u8 = 14;

/// Threshold up button, active low
pub const UP_BUTTON_PIN: u8 = 15;

/// Threshold down button, active low
pub const DOWN_BUTTON_PIN: u8 = 16;

/// All button pins with their names
pub const BUTTON_PINS: [(&str, u8); 3] = [
    ("start button", START_BUTTON_PIN),
    ("up button", UP_BUTTON_PIN),
    ("down button", DOWN_BUTTON_PIN),
];
