use thiserror::Error;

/// Errors produced when encoding or decoding colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidFormat { input: String, reason: &'static str },

    #[error("{channel} channel {value} does not fit in one byte")]
    ChannelOutOfRange { channel: Channel, value: i64 },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str, reason: &'static str) -> Self {
        ColorError::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }
}

/// One of the three components of an RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
