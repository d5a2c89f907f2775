//! Value types addressed by Luxafor commands: colors, LED targets and the
//! device's built-in animation tables.

use core::fmt;
use core::str::FromStr;

use luxafor_errors::ValidationError;

use crate::ids::addresses;

/// An RGB color. Each channel is a full byte, so every `Color` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// All channels off.
    pub const OFF: Self = Self::new(0x00, 0x00, 0x00);
    /// Full white.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    /// Full red.
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    /// Full green.
    pub const GREEN: Self = Self::new(0x00, 0xFF, 0x00);
    /// Full blue.
    pub const BLUE: Self = Self::new(0x00, 0x00, 0xFF);
    /// Red and green.
    pub const YELLOW: Self = Self::new(0xFF, 0xFF, 0x00);
    /// Green and blue.
    pub const CYAN: Self = Self::new(0x00, 0xFF, 0xFF);
    /// Red and blue.
    pub const MAGENTA: Self = Self::new(0xFF, 0x00, 0xFF);

    /// Largest value accepted by [`Color::from_rgb_u32`].
    pub const MAX_RGB_U32: u32 = 0x00FF_FFFF;

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `value` has bits set above
    /// the low 24.
    pub fn from_rgb_u32(value: u32) -> Result<Self, ValidationError> {
        if value > Self::MAX_RGB_U32 {
            return Err(ValidationError::out_of_range(
                "rgb",
                value,
                0,
                Self::MAX_RGB_U32,
            ));
        }
        let [_, red, green, blue] = value.to_be_bytes();
        Ok(Self::new(red, green, blue))
    }

    /// Pack the color as `0xRRGGBB`.
    pub const fn to_rgb_u32(self) -> u32 {
        u32::from_be_bytes([0, self.red, self.green, self.blue])
    }

    pub const fn red(self) -> u8 {
        self.red
    }

    pub const fn green(self) -> u8 {
        self.green
    }

    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Channels in wire order.
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

/// Parses `RRGGBB` or `#RRGGBB` (case-insensitive).
impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::invalid_format(
                "color",
                format!("expected 6 hex digits, got '{s}'"),
            ));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|e| ValidationError::invalid_format("color", e.to_string()))?;
        Self::from_rgb_u32(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Index of a single LED, guaranteed to lie in `0..=MAX_LED_INDEX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedIndex(u8);

impl LedIndex {
    /// Validate a single-LED index.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `index` exceeds
    /// [`addresses::MAX_LED_INDEX`].
    pub fn new(index: u8) -> Result<Self, ValidationError> {
        if index > addresses::MAX_LED_INDEX {
            return Err(ValidationError::out_of_range(
                "led index",
                index,
                0,
                addresses::MAX_LED_INDEX,
            ));
        }
        Ok(Self(index))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LedIndex {
    type Error = ValidationError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

/// Which LEDs a command affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedTarget {
    /// Every LED on the device (`0xFF`).
    AllLeds,
    /// Every LED on the front panel (`0x41`).
    AllFrontSide,
    /// Every LED on the back panel (`0x42`).
    AllBackSide,
    /// One LED, addressed by its index.
    Single(LedIndex),
}

impl LedTarget {
    /// Target a single LED by index.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `index` is greater than 8.
    pub fn of_index(index: u8) -> Result<Self, ValidationError> {
        LedIndex::new(index).map(Self::Single)
    }

    /// The address byte written into target-based commands.
    pub const fn address_byte(self) -> u8 {
        match self {
            Self::AllLeds => addresses::ALL_LEDS,
            Self::AllFrontSide => addresses::ALL_FRONT_SIDE,
            Self::AllBackSide => addresses::ALL_BACK_SIDE,
            Self::Single(index) => index.get(),
        }
    }

    /// Resolve an address byte back to its target.
    ///
    /// Returns `None` for bytes that address nothing.
    pub fn from_address_byte(address: u8) -> Option<Self> {
        match address {
            addresses::ALL_LEDS => Some(Self::AllLeds),
            addresses::ALL_FRONT_SIDE => Some(Self::AllFrontSide),
            addresses::ALL_BACK_SIDE => Some(Self::AllBackSide),
            index => LedIndex::new(index).ok().map(Self::Single),
        }
    }
}

impl From<LedIndex> for LedTarget {
    fn from(index: LedIndex) -> Self {
        Self::Single(index)
    }
}

/// Wave animation styles understood by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WaveType {
    Short = 1,
    Long = 2,
    OverlappingShort = 3,
    OverlappingLong = 4,
}

impl WaveType {
    /// Every wave type, in code order.
    pub const ALL: [Self; 4] = [
        Self::Short,
        Self::Long,
        Self::OverlappingShort,
        Self::OverlappingLong,
    ];

    /// Wire code written into byte 2 of a wave command.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `None` for codes the device does not define.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|wave| wave.code() == code)
    }
}

/// Built-in animation patterns stored in the device firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PatternType {
    TrafficLights = 1,
    Random1 = 2,
    Random2 = 3,
    Random3 = 4,
    Police = 5,
    Random4 = 6,
    Random5 = 7,
    RainbowWave = 8,
}

impl PatternType {
    /// Every pattern, in code order.
    pub const ALL: [Self; 8] = [
        Self::TrafficLights,
        Self::Random1,
        Self::Random2,
        Self::Random3,
        Self::Police,
        Self::Random4,
        Self::Random5,
        Self::RainbowWave,
    ];

    /// Wire code written into byte 2 of a pattern command.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `None` for codes the device does not define.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|pattern| pattern.code() == code)
    }
}
