use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Channel, ColorError};

/// Number of hex digits in an encoded color (two per channel).
const HEX_LEN: usize = 6;

/// RGB color with integer channels.
///
/// Channels are conceptually in `0..=255` but are not clamped: values built
/// from floats are truncated toward zero and stored as-is, so out-of-range
/// channels survive construction. Use [`Color::is_byte_range`] or
/// [`Color::try_as_hex`] where a byte-sized color is required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    r: i64,
    g: i64,
    b: i64,
}

impl Color {
    /// Create a color from three numbers, truncating each toward zero.
    ///
    /// `Color::new(127.9, -0.5, 300.0)` stores `127, 0, 300`. NaN becomes 0
    /// and infinities saturate.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r as i64,
            g: g as i64,
            b: b as i64,
        }
    }

    pub const fn from_rgb(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0] as i64,
            g: rgb[1] as i64,
            b: rgb[2] as i64,
        }
    }

    pub fn r(&self) -> i64 {
        self.r
    }

    pub fn g(&self) -> i64 {
        self.g
    }

    pub fn b(&self) -> i64 {
        self.b
    }

    pub fn rgb(&self) -> [i64; 3] {
        [self.r, self.g, self.b]
    }

    pub fn channel(&self, channel: Channel) -> i64 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Whether every channel fits in one byte.
    pub fn is_byte_range(&self) -> bool {
        self.rgb().iter().all(|v| (0..=255).contains(v))
    }

    /// Decode a color from exactly six hex digits, e.g. `"ff8000"`.
    ///
    /// Upper and lower case digits are accepted. A `#` prefix, whitespace or
    /// sign characters are rejected.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        if hex.len() != HEX_LEN {
            log::debug!("Rejected hex color {:?}: length {}", hex, hex.len());
            return Err(ColorError::invalid_format(hex, "expected exactly six hex digits"));
        }

        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            log::debug!("Rejected hex color {:?}: non-hex digit", hex);
            return Err(ColorError::invalid_format(hex, "contains non-hex characters"));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorError::invalid_format(hex, "contains non-hex characters"))
        };

        Ok(Self::from_rgb([byte(0)?, byte(2)?, byte(4)?]))
    }

    /// Encode as lowercase hex, two digits per channel.
    ///
    /// Channels outside `0..=255` are not clamped: a channel above 255 takes
    /// more than two digits and a negative channel is written as `-` and its
    /// zero-padded magnitude. The result is then no longer six characters and
    /// will not decode with [`Color::from_hex`].
    pub fn as_hex(&self) -> String {
        if !self.is_byte_range() {
            log::warn!("Hex encoding {} with channels outside 0..=255", self);
        }

        self.rgb()
            .iter()
            .map(|&v| {
                if v < 0 {
                    format!("-{:02x}", v.unsigned_abs())
                } else {
                    format!("{:02x}", v)
                }
            })
            .collect()
    }

    /// Encode as lowercase hex, failing if any channel is outside `0..=255`.
    pub fn try_as_hex(&self) -> Result<String, ColorError> {
        for channel in Channel::ALL {
            let value = self.channel(channel);
            if !(0..=255).contains(&value) {
                return Err(ColorError::ChannelOutOfRange { channel, value });
            }
        }
        Ok(format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Color {}, {}, {}>", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb([r, g, b])
    }
}

/// Parses the [`Color::from_hex`] format, allowing one leading `#`.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.strip_prefix('#').unwrap_or(s))
    }
}

/// Serializes as six hex digits; channels outside `0..=255` are an error so
/// that every serialized color deserializes again.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let hex = self.try_as_hex().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&hex)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
