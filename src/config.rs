//! Command line configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::constants::{surface, REDRAW_DELAY};

/// Runtime options for the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Delay between the end of a frame and the next redraw
    pub redraw_delay: Duration,
    /// Display density applied to the numeral font size
    pub density: f64,
    /// Virtual surface pixels per Braille dot
    pub pixels_per_dot: f64,
    /// Where to write logs, if anywhere
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redraw_delay: REDRAW_DELAY,
            density: surface::DEFAULT_DENSITY,
            pixels_per_dot: surface::DEFAULT_PIXELS_PER_DOT,
            log_file: None,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

/// Parses command line arguments (without the program name).
///
/// Supports:
/// - `-i <MS>` or `--interval <MS>` for the redraw delay
/// - `-d <N>` or `--density <N>` for the display density
/// - `-s <N>` or `--scale <N>` for pixels per Braille dot
/// - `--log-file <PATH>` to enable logging
/// - `-h` or `--help` to show usage
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut args_iter = args.into_iter();

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-i" | "--interval" => {
                let value = required_value(&mut args_iter, &arg)?;
                let millis: u64 = value
                    .parse()
                    .with_context(|| format!("Invalid interval '{}'", value))?;
                if millis == 0 {
                    bail!("--interval must be at least 1 millisecond");
                }
                config.redraw_delay = Duration::from_millis(millis);
            }
            "-d" | "--density" => {
                config.density = positive_number(&required_value(&mut args_iter, &arg)?, &arg)?;
            }
            "-s" | "--scale" => {
                config.pixels_per_dot =
                    positive_number(&required_value(&mut args_iter, &arg)?, &arg)?;
            }
            "--log-file" => {
                config.log_file = Some(PathBuf::from(required_value(&mut args_iter, &arg)?));
            }
            "-h" | "--help" => return Ok(Command::Help),
            other => bail!("Unknown argument '{}'. Use --help for usage information", other),
        }
    }

    Ok(Command::Run(config))
}

fn required_value<I>(args: &mut I, flag: &str) -> Result<String>
where
    I: Iterator<Item = String>,
{
    match args.next() {
        Some(value) => Ok(value),
        None => bail!("{} requires a value", flag),
    }
}

fn positive_number(value: &str, flag: &str) -> Result<f64> {
    let number: f64 = value
        .parse()
        .with_context(|| format!("Invalid value '{}' for {}", value, flag))?;
    if !number.is_finite() || number <= 0.0 {
        bail!("{} must be a positive number, got {}", flag, value);
    }
    Ok(number)
}

/// Prints usage information to stdout.
pub fn print_usage() {
    println!("analog-clock - An analog clock in your terminal");
    println!();
    println!("Usage: analog-clock [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -i, --interval <MS>    Redraw delay in milliseconds (default 500)");
    println!("  -d, --density <N>      Display density for the numerals (default 1.0)");
    println!("  -s, --scale <N>        Virtual pixels per Braille dot (default 6)");
    println!("      --log-file <PATH>  Write logs to PATH (filter with RUST_LOG)");
    println!("  -h, --help             Show this help message");
    println!();
    println!("Press q, Esc or Ctrl+C to quit, r to redraw immediately.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_gives_defaults() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(Config::default()));
        assert_eq!(Config::default().redraw_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_all_options() {
        let command = parse(&[
            "--interval",
            "250",
            "-d",
            "2",
            "--scale",
            "4.5",
            "--log-file",
            "/tmp/clock.log",
        ])
        .unwrap();

        assert_eq!(
            command,
            Command::Run(Config {
                redraw_delay: Duration::from_millis(250),
                density: 2.0,
                pixels_per_dot: 4.5,
                log_file: Some(PathBuf::from("/tmp/clock.log")),
            })
        );
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-i", "100", "--help"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_missing_value() {
        let err = parse(&["--interval"]).unwrap_err();
        assert!(err.to_string().contains("requires a value"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse(&["-i", "abc"]).is_err());
        assert!(parse(&["-i", "0"]).is_err());
        assert!(parse(&["-d", "-1"]).is_err());
        assert!(parse(&["-s", "0"]).is_err());
        assert!(parse(&["-s", "NaN"]).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse(&["--timezone", "UTC"]).unwrap_err();
        assert!(err.to_string().contains("--timezone"));
    }
}
