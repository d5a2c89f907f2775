//! Luxafor HID protocol: LED addressing, color values and command encoding.
//!
//! This crate is intentionally I/O-free and allocation-free. It provides pure
//! functions and types that can be tested without hardware or OS-level HID
//! plumbing; dispatching the encoded reports is left to the `luxafor` crate.
//!
//! ## Addressing
//!
//! Target-based commands carry one address byte: `0xFF` for every LED,
//! `0x41` for the front panel, `0x42` for the back panel, or `0x00`–`0x08`
//! for a single LED.
//!
//! ## Example
//!
//! ```
//! use luxafor_hid_protocol::{Color, Command, LedTarget};
//!
//! let command = Command::set_color(LedTarget::AllLeds, Color::new(0xC8, 0x14, 0x2A), 0);
//! assert_eq!(command.encode(), [0x00, 0x01, 0xFF, 0xC8, 0x14, 0x2A, 0x00, 0x00, 0x00]);
//! ```

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod ids;
pub mod output;
pub mod types;

pub use ids::{
    LUXAFOR_FLAG_PRODUCT_ID, LUXAFOR_VENDOR_ID, REPORT_ID, addresses, command_codes,
};
pub use output::{Command, OutputReport, REPORT_LEN, RawReport, format_report};
pub use types::{Color, LedIndex, LedTarget, PatternType, WaveType};

#[cfg(test)]
mod tests;
