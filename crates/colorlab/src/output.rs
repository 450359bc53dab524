use anyhow::Result;
use colorlab_core::{Color, OutputFormat, Settings};

/// Turns colors into the text printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    pub format: OutputFormat,
    pub hex_prefix: bool,
    pub strict_hex: bool,
}

impl Renderer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            format: settings.format,
            hex_prefix: settings.hex_prefix,
            strict_hex: settings.strict_hex,
        }
    }

    /// Apply command-line options on top of the configured values. Switches
    /// can only turn an option on.
    pub fn with_overrides(
        self,
        format: Option<OutputFormat>,
        hex_prefix: bool,
        strict_hex: bool,
    ) -> Self {
        Self {
            format: format.unwrap_or(self.format),
            hex_prefix: self.hex_prefix || hex_prefix,
            strict_hex: self.strict_hex || strict_hex,
        }
    }

    fn hex(&self, color: &Color) -> Result<String> {
        let hex = if self.strict_hex {
            color.try_as_hex()?
        } else {
            color.as_hex()
        };

        if self.hex_prefix {
            Ok(format!("#{}", hex))
        } else {
            Ok(hex)
        }
    }

    /// Render a single color on one line.
    pub fn render(&self, color: &Color) -> Result<String> {
        match self.format {
            OutputFormat::Hex => self.hex(color),
            OutputFormat::Rgb => Ok(format!("{} {} {}", color.r(), color.g(), color.b())),
            OutputFormat::Display => Ok(color.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(color)?),
        }
    }

    /// Render a sequence of colors; JSON becomes a single array, everything
    /// else one color per line.
    pub fn render_all(&self, colors: impl IntoIterator<Item = Color>) -> Result<Vec<String>> {
        let colors: Vec<Color> = colors.into_iter().collect();

        if self.format == OutputFormat::Json {
            return Ok(vec![serde_json::to_string(&colors)?]);
        }

        colors.iter().map(|color| self.render(color)).collect()
    }
}

#[cfg(test)]
mod tests {
    use colorlab_core::color_range;

    use super::*;

    fn renderer(format: OutputFormat) -> Renderer {
        Renderer::from_settings(&Settings {
            format,
            ..Settings::default()
        })
    }

    #[test]
    fn test_render_formats() {
        let color = Color::from_rgb([255, 128, 0]);

        assert_eq!(renderer(OutputFormat::Hex).render(&color).unwrap(), "ff8000");
        assert_eq!(renderer(OutputFormat::Rgb).render(&color).unwrap(), "255 128 0");
        assert_eq!(
            renderer(OutputFormat::Display).render(&color).unwrap(),
            "<Color 255, 128, 0>"
        );
        assert_eq!(
            renderer(OutputFormat::Json).render(&color).unwrap(),
            "\"ff8000\""
        );
    }

    #[test]
    fn test_hex_prefix() {
        let renderer = Renderer {
            hex_prefix: true,
            ..renderer(OutputFormat::Hex)
        };
        assert_eq!(
            renderer.render(&Color::from_rgb([1, 2, 3])).unwrap(),
            "#010203"
        );
    }

    #[test]
    fn test_strict_hex_rejects_overflow() {
        let color = Color::new(300.0, 0.0, 0.0);

        assert_eq!(renderer(OutputFormat::Hex).render(&color).unwrap(), "12c0000");

        let strict = Renderer {
            strict_hex: true,
            ..renderer(OutputFormat::Hex)
        };
        assert!(strict.render(&color).is_err());
        let strict_json = Renderer {
            format: OutputFormat::Json,
            ..strict
        };
        assert!(strict_json.render(&color).is_err());
        // rgb output is unaffected by hex strictness
        let strict_rgb = Renderer {
            format: OutputFormat::Rgb,
            ..strict
        };
        assert!(strict_rgb.render(&color).is_ok());
    }

    #[test]
    fn test_json_rejects_overflow_without_strict() {
        let json = renderer(OutputFormat::Json);
        assert!(json.render(&Color::new(0.0, -5.0, 0.0)).is_err());

        let range = color_range(Color::default(), Color::new(0.0, 0.0, 300.0), 3);
        assert!(json.render_all(range).is_err());
    }

    #[test]
    fn test_overrides_replace_configured_values() {
        let configured = Renderer::from_settings(&Settings {
            format: OutputFormat::Display,
            hex_prefix: false,
            strict_hex: true,
            ..Settings::default()
        });

        let merged = configured.with_overrides(Some(OutputFormat::Hex), true, false);
        assert_eq!(merged.format, OutputFormat::Hex);
        assert!(merged.hex_prefix);
        // a switch left off keeps the configured value
        assert!(merged.strict_hex);

        let untouched = configured.with_overrides(None, false, false);
        assert_eq!(untouched, configured);
    }

    #[test]
    fn test_render_all_lines() {
        let range = color_range(Color::default(), Color::from_rgb([10, 20, 30]), 3);
        let lines = renderer(OutputFormat::Rgb).render_all(range).unwrap();
        assert_eq!(lines, vec!["0 0 0", "5 10 15", "10 20 30"]);
    }

    #[test]
    fn test_render_all_json_array() {
        let range = color_range(Color::from_rgb([255, 255, 255]), Color::default(), 3);
        let lines = renderer(OutputFormat::Json).render_all(range).unwrap();
        assert_eq!(lines, vec![r#"["ffffff","7f7f7f","000000"]"#]);
    }
}
