//! RGB colors, hex encoding and evenly spaced color ranges.

pub use color::Color;
pub use config::{
    ConfigError, ConfigFile, ConfigManager, OutputFormat, Settings, DEFAULT_CONFIG_FILE,
};
pub use distribute::{distribute, Distribute};
pub use error::{Channel, ColorError};
pub use range::{color_range, ColorRange};

mod color;
mod config;
mod distribute;
mod error;
mod range;
