//! Luxafor HID output report encoding.
//!
//! All functions are pure and allocation-free.
//!
//! Every command is a 9-byte output report:
//! - Byte 0: `0x00` (report ID)
//! - Byte 1: command code
//! - Bytes 2–8: command-specific fields, left-packed, unused bytes zero
//!
//! | Kind   | Code | B2      | B3     | B4 | B5 | B6    | B7     | B8     |
//! |--------|------|---------|--------|----|----|-------|--------|--------|
//! | Static | 0x01 | address | R      | G  | B  | 0     | 0      | 0      |
//! | Fade   | 0x02 | address | R      | G  | B  | speed | 0      | 0      |
//! | Blink  | 0x03 | address | R      | G  | B  | speed | 0      | repeat |
//! | Wave   | 0x04 | wave    | R      | G  | B  | 0     | repeat | speed  |
//! | Pattern| 0x06 | pattern | repeat | 0  | 0  | 0     | 0      | 0      |
//!
//! Wave puts its speed in the last byte, after the repeat count. The other
//! animated kinds put speed in byte 6.

use crate::ids::{REPORT_ID, command_codes};
use crate::types::{Color, LedTarget, PatternType, WaveType};

/// Wire size of every Luxafor output report.
pub const REPORT_LEN: usize = 9;

/// Anything that can be written to the device as a single output report.
///
/// [`Command`] covers the documented command set; implement this trait to
/// send custom reports through the same dispatch path.
pub trait OutputReport {
    /// Serialize into the 9-byte wire form.
    fn to_report(&self) -> [u8; REPORT_LEN];
}

/// A Luxafor command. Immutable once built; encoding never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Set a color immediately.
    StaticColor { target: LedTarget, color: Color },
    /// Fade to a color at `speed`.
    FadeColor {
        target: LedTarget,
        color: Color,
        speed: u8,
    },
    /// Blink a color. A `repeat` of 0 sets no explicit repeat limit.
    Blink {
        target: LedTarget,
        color: Color,
        speed: u8,
        repeat: u8,
    },
    /// Run a wave animation across the whole device.
    Wave {
        wave: WaveType,
        color: Color,
        speed: u8,
        repeat: u8,
    },
    /// Run a built-in pattern.
    Pattern { pattern: PatternType, repeat: u8 },
}

impl Command {
    /// Pick the static or fading command for a color change.
    ///
    /// A `fade_speed` of 0 means "set immediately".
    pub const fn set_color(target: LedTarget, color: Color, fade_speed: u8) -> Self {
        if fade_speed == 0 {
            Self::StaticColor { target, color }
        } else {
            Self::FadeColor {
                target,
                color,
                speed: fade_speed,
            }
        }
    }

    pub const fn blink(target: LedTarget, color: Color, speed: u8, repeat: u8) -> Self {
        Self::Blink {
            target,
            color,
            speed,
            repeat,
        }
    }

    pub const fn wave(wave: WaveType, color: Color, speed: u8, repeat: u8) -> Self {
        Self::Wave {
            wave,
            color,
            speed,
            repeat,
        }
    }

    pub const fn pattern(pattern: PatternType, repeat: u8) -> Self {
        Self::Pattern { pattern, repeat }
    }

    /// Command code written into byte 1.
    pub const fn code(&self) -> u8 {
        match self {
            Self::StaticColor { .. } => command_codes::STATIC_COLOR,
            Self::FadeColor { .. } => command_codes::FADE_COLOR,
            Self::Blink { .. } => command_codes::BLINK,
            Self::Wave { .. } => command_codes::WAVE,
            Self::Pattern { .. } => command_codes::PATTERN,
        }
    }

    /// LED target, for the kinds that address one.
    ///
    /// Wave and pattern commands always affect the whole device.
    pub const fn target(&self) -> Option<LedTarget> {
        match self {
            Self::StaticColor { target, .. }
            | Self::FadeColor { target, .. }
            | Self::Blink { target, .. } => Some(*target),
            Self::Wave { .. } | Self::Pattern { .. } => None,
        }
    }

    /// Encode into the 9-byte wire form.
    pub const fn encode(&self) -> [u8; REPORT_LEN] {
        let code = self.code();
        match *self {
            Self::StaticColor { target, color } => {
                let [r, g, b] = color.channels();
                [REPORT_ID, code, target.address_byte(), r, g, b, 0, 0, 0]
            }
            Self::FadeColor {
                target,
                color,
                speed,
            } => {
                let [r, g, b] = color.channels();
                [REPORT_ID, code, target.address_byte(), r, g, b, speed, 0, 0]
            }
            Self::Blink {
                target,
                color,
                speed,
                repeat,
            } => {
                let [r, g, b] = color.channels();
                [
                    REPORT_ID,
                    code,
                    target.address_byte(),
                    r,
                    g,
                    b,
                    speed,
                    0,
                    repeat,
                ]
            }
            Self::Wave {
                wave,
                color,
                speed,
                repeat,
            } => {
                let [r, g, b] = color.channels();
                [REPORT_ID, code, wave.code(), r, g, b, 0, repeat, speed]
            }
            Self::Pattern { pattern, repeat } => {
                [REPORT_ID, code, pattern.code(), repeat, 0, 0, 0, 0, 0]
            }
        }
    }
}

impl OutputReport for Command {
    fn to_report(&self) -> [u8; REPORT_LEN] {
        self.encode()
    }
}

/// Caller-assembled report bytes, sent verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawReport(pub [u8; REPORT_LEN]);

impl OutputReport for RawReport {
    fn to_report(&self) -> [u8; REPORT_LEN] {
        self.0
    }
}

impl From<Command> for RawReport {
    fn from(command: Command) -> Self {
        Self(command.encode())
    }
}

/// Format a report as colon-separated uppercase hex, e.g. `00:01:FF:...`.
pub fn format_report(report: &[u8]) -> String {
    report
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(":")
}
