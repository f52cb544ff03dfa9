//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::ResampleFilter;

/// Parse and validate threshold (0-255)
pub fn parse_threshold(s: &str) -> Result<i64, String> {
    let value: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid integer", s.trim()))?;
    if !(0..=255).contains(&value) {
        return Err(format!("Threshold must be between 0 and 255, got {}", value));
    }
    Ok(value)
}

/// Parse and validate maximum width (> 0)
pub fn parse_max_width(s: &str) -> Result<i64, String> {
    let value: i64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid integer", s))?;
    if value <= 0 {
        return Err(format!("Max width must be greater than 0, got {}", value));
    }
    Ok(value)
}

/// Parse and validate correction factor (> 0)
pub fn parse_correction_factor(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("Correction factor must be positive, got {}", value));
    }
    Ok(value)
}

/// Turn an image into text art written with your own message
#[derive(Parser, Debug)]
#[command(name = "bitmap-message")]
#[command(version, about = "Fill an image's silhouette with a repeating message", long_about = None)]
#[command(subcommand_negates_reqs = true)]
#[command(after_help = "EXAMPLES:
    # Prompt for threshold and message, print to the terminal
    bitmap-message cat.png

    # Everything on the command line, saved to a file
    bitmap-message cat.png -t 120 -m \"meow \" -o cat.txt

    # Narrower output and a look at the raw bitmap
    bitmap-message cat.png -t 120 -w 80 --bitmap")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to convert (PNG, JPEG, BMP, ...)
    #[arg(required = true)]
    pub image: Option<PathBuf>,

    /// Pixels darker than this (0-255) are left blank
    #[arg(long, short, value_parser = parse_threshold)]
    pub threshold: Option<i64>,

    /// Message repeated over the light pixels
    #[arg(long, short)]
    pub message: Option<String>,

    /// Maximum output width; wider images are shrunk [default: 1000]
    #[arg(long, short = 'w', value_parser = parse_max_width)]
    pub max_width: Option<i64>,

    /// Height scale for tall monospace glyphs [default: 0.55]
    #[arg(long, value_parser = parse_correction_factor)]
    pub correction_factor: Option<f64>,

    /// Resampling filter used when shrinking [default: lanczos3]
    #[arg(long)]
    pub filter: Option<ResampleFilter>,

    /// Print the intermediate '*'/space bitmap instead of the message art
    #[arg(long)]
    pub bitmap: bool,

    /// Write the result to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
    /// Print the default config file location
    Path,
}
