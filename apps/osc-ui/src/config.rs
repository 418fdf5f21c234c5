//! Command-line configuration.

use clap::Parser;
use osc_core::ensure_positive;

use crate::error::ConfigError;

#[derive(Parser, Debug, Clone)]
#[command(name = "osc-ui")]
#[command(about = "Interactive damped-oscillator playground", long_about = None)]
pub struct Args {
    /// Initial window width in points
    #[arg(long, default_value_t = 1200.0)]
    pub width: f32,
    /// Initial window height in points
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,
    /// Target simulation frames per second (one physics step per frame)
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,
}

/// Validated front-end settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiConfig {
    pub width: f32,
    pub height: f32,
    pub fps: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            fps: 60.0,
        }
    }
}

fn positive(value: f64, what: &'static str) -> Result<f64, ConfigError> {
    ensure_positive(value, what).map_err(|source| ConfigError::Invalid { what, source })
}

impl TryFrom<Args> for UiConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Ok(Self {
            width: positive(args.width as f64, "window width")? as f32,
            height: positive(args.height as f64, "window height")? as f32,
            fps: positive(args.fps, "frame rate")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_argument_defaults() {
        let args = Args::parse_from(["osc-ui"]);
        assert_eq!(UiConfig::try_from(args).unwrap(), UiConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let args = Args::parse_from(["osc-ui", "--width", "800", "--fps", "30"]);
        let config = UiConfig::try_from(args).unwrap();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 800.0);
        assert_eq!(config.fps, 30.0);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let args = Args::parse_from(["osc-ui", "--fps", "0"]);
        let err = UiConfig::try_from(args).unwrap_err();
        assert!(err.to_string().contains("frame rate"));

        let args = Args::parse_from(["osc-ui", "--height=-5"]);
        assert!(UiConfig::try_from(args).is_err());
    }
}
