//! Luxafor USB identifiers and wire constants.
//!
//! The Flag enumerates as a Microchip-VID HID device with a single output
//! report. Every command is written as a 9-byte buffer whose first byte is the
//! (unused) report ID `0x00`.

/// Luxafor USB vendor ID (Microchip Technology).
pub const LUXAFOR_VENDOR_ID: u16 = 0x04D8;

/// Luxafor Flag product ID.
pub const LUXAFOR_FLAG_PRODUCT_ID: u16 = 0xF372;

/// Leading report ID byte carried by every output report.
pub const REPORT_ID: u8 = 0x00;

/// Command codes carried in byte 1 of every output report.
pub mod command_codes {
    /// Set a static color immediately.
    pub const STATIC_COLOR: u8 = 0x01;
    /// Fade to a color.
    pub const FADE_COLOR: u8 = 0x02;
    /// Blink a color.
    pub const BLINK: u8 = 0x03;
    /// Run a wave animation over the whole device.
    pub const WAVE: u8 = 0x04;
    /// Run one of the built-in patterns.
    pub const PATTERN: u8 = 0x06;
}

/// Address bytes selecting which LEDs a command affects.
pub mod addresses {
    /// Every LED on both sides.
    pub const ALL_LEDS: u8 = 0xFF;
    /// Every LED on the front panel.
    pub const ALL_FRONT_SIDE: u8 = 0x41;
    /// Every LED on the back panel.
    pub const ALL_BACK_SIDE: u8 = 0x42;
    /// Highest addressable single-LED index.
    pub const MAX_LED_INDEX: u8 = 8;
}
