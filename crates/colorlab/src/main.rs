use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colorlab_core::{color_range, Color, ConfigManager, OutputFormat, Settings};

mod output;

use output::Renderer;

/// Evenly spaced RGB color ranges and hex conversion.
#[derive(Parser, Debug)]
#[command(name = "colorlab")]
#[command(about = "RGB color ranges and hex conversion")]
struct Args {
    /// Configuration file (default: colorlab.json, used only if it exists)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: hex, rgb, display or json
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Prefix hex output with '#'
    #[arg(long, global = true)]
    hex_prefix: bool,

    /// Fail instead of widening hex output for channels outside 0-255
    #[arg(long, global = true)]
    strict_hex: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print colors from START to END, both inclusive
    Range {
        /// Start color as hex, e.g. ffffff or #ffffff
        #[arg(value_parser = parse_color)]
        start: Color,

        /// End color as hex
        #[arg(value_parser = parse_color)]
        end: Color,

        /// Number of colors to print, including both ends
        #[arg(short = 'n', long)]
        steps: Option<usize>,
    },

    /// Hex encode a color given as three numbers (fractions are truncated)
    #[command(allow_negative_numbers = true)]
    Hex { r: f64, g: f64, b: f64 },

    /// Decode a hex color and print its channels
    Rgb {
        #[arg(value_parser = parse_color)]
        hex: Color,
    },

    /// Show the active configuration
    Config {
        /// Write default settings back to the configuration file
        #[arg(long)]
        reset: bool,
    },
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse().map_err(|e| format!("Invalid color: {}", e))
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

/// Read settings from the config file. Unless the path was given explicitly,
/// a missing file means defaults and nothing is written.
fn load_settings(manager: &mut ConfigManager, explicit: bool) -> Result<Settings> {
    if !explicit && !manager.config_path().exists() {
        return Ok(Settings::default());
    }

    manager
        .load()
        .with_context(|| format!("loading {}", manager.config_path().display()))
}

/// Output format for a command. `--format` always wins. `hex` and `rgb`
/// convert into the format they are named after, so only `range` falls back
/// to the configured format.
fn output_format(
    command: &Command,
    flag: Option<OutputFormat>,
    settings: &Settings,
) -> OutputFormat {
    match (flag, command) {
        (Some(format), _) => format,
        (None, Command::Hex { .. }) => OutputFormat::Hex,
        (None, Command::Rgb { .. }) => OutputFormat::Rgb,
        (None, _) => settings.format,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = ConfigManager::new(args.config.clone());
    let settings = load_settings(&mut config, args.config.is_some())?;
    log::debug!("Settings: {:?}", settings);

    let format = output_format(&args.command, args.format, &settings);
    let renderer = Renderer::from_settings(&settings).with_overrides(
        Some(format),
        args.hex_prefix,
        args.strict_hex,
    );

    match args.command {
        Command::Range { start, end, steps } => {
            let steps = steps.unwrap_or(settings.default_steps);
            for line in renderer.render_all(color_range(start, end, steps))? {
                println!("{}", line);
            }
        }
        Command::Hex { r, g, b } => {
            println!("{}", renderer.render(&Color::new(r, g, b))?);
        }
        Command::Rgb { hex } => {
            println!("{}", renderer.render(&hex)?);
        }
        Command::Config { reset } => {
            if reset {
                config
                    .reset_to_defaults()
                    .with_context(|| format!("resetting {}", config.config_path().display()))?;
                println!("Reset {}", config.config_path().display());
            }

            let path = config.config_path();
            if path.exists() {
                println!("Config: {}", path.display());
            } else {
                println!("Config: {} (not found, using defaults)", path.display());
            }
            println!("{}", serde_json::to_string_pretty(config.settings())?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_config(path: &std::path::Path, settings: &Settings) {
        let mut manager = ConfigManager::new(Some(path.to_path_buf()));
        manager.update_settings(settings.clone()).unwrap();
    }

    #[test]
    fn test_missing_default_config_is_not_created() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("colorlab.json");

        let mut manager = ConfigManager::new(Some(config_path.clone()));
        let settings = load_settings(&mut manager, false).unwrap();

        assert_eq!(settings, Settings::default());
        assert!(!config_path.exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_explicit_config_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.json");

        let mut manager = ConfigManager::new(Some(config_path.clone()));
        let settings = load_settings(&mut manager, true).unwrap();

        assert_eq!(settings, Settings::default());
        assert!(config_path.exists());
    }

    #[test]
    fn test_existing_default_config_is_read() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("colorlab.json");
        let stored = Settings {
            default_steps: 9,
            format: OutputFormat::Display,
            ..Settings::default()
        };
        write_config(&config_path, &stored);

        let mut manager = ConfigManager::new(Some(config_path));
        assert_eq!(load_settings(&mut manager, false).unwrap(), stored);
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("colorlab.json");
        write_config(
            &config_path,
            &Settings {
                format: OutputFormat::Rgb,
                hex_prefix: false,
                ..Settings::default()
            },
        );

        let args = Args::try_parse_from([
            "colorlab",
            "--config",
            config_path.to_str().unwrap(),
            "--format",
            "hex",
            "--hex-prefix",
            "range",
            "000000",
            "ffffff",
        ])
        .unwrap();

        let mut manager = ConfigManager::new(args.config.clone());
        let settings = load_settings(&mut manager, true).unwrap();
        assert_eq!(settings.format, OutputFormat::Rgb);

        let format = output_format(&args.command, args.format, &settings);
        let renderer = Renderer::from_settings(&settings).with_overrides(
            Some(format),
            args.hex_prefix,
            args.strict_hex,
        );
        assert_eq!(renderer.format, OutputFormat::Hex);
        assert_eq!(renderer.render(&Color::from_rgb([255, 0, 16])).unwrap(), "#ff0010");
    }

    #[test]
    fn test_output_format_per_command() {
        let settings = Settings {
            format: OutputFormat::Display,
            ..Settings::default()
        };
        let range = Command::Range {
            start: Color::default(),
            end: Color::default(),
            steps: None,
        };
        let hex = Command::Hex {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        };
        let rgb = Command::Rgb {
            hex: Color::default(),
        };

        assert_eq!(output_format(&range, None, &settings), OutputFormat::Display);
        assert_eq!(output_format(&hex, None, &settings), OutputFormat::Hex);
        assert_eq!(output_format(&rgb, None, &settings), OutputFormat::Rgb);
        assert_eq!(
            output_format(&hex, Some(OutputFormat::Json), &settings),
            OutputFormat::Json
        );
    }
}
