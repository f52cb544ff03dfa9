//! Subcommand handlers: rendering an image and config actions.

use std::error::Error as StdError;
use std::io;
use std::path::{Path, PathBuf};

use bitmap_message::ascii::{
    compose_message, rasterize_with, Filter, ImageSource, Message, RasterOptions,
};
use bitmap_message::config::{default_path, Config, DEFAULT_CONFIG_TEMPLATE};
use bitmap_message::error::Error;

use super::args::{parse_threshold, Args, ConfigAction};
use super::prompt;

type CmdResult = Result<(), Box<dyn StdError>>;

/// Settings after merging flags over the config file.
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub threshold: Option<i64>,
    pub message: Option<String>,
    pub max_width: i64,
    pub correction_factor: f64,
    pub filter: Filter,
}

impl Settings {
    /// Command-line flags win over the config file, which wins over defaults.
    pub fn merge(args: &Args, config: &Config) -> Self {
        Self {
            threshold: args.threshold.or(config.raster.threshold),
            message: args.message.clone().or_else(|| config.compose.message.clone()),
            max_width: args.max_width.unwrap_or(config.raster.max_width),
            correction_factor: args
                .correction_factor
                .unwrap_or(config.raster.correction_factor),
            filter: args.filter.map(Filter::from).unwrap_or(config.raster.filter),
        }
    }
}

/// Render the image named in `args` and write it out.
pub fn render(args: &Args, config: &Config) -> CmdResult {
    let image = args
        .image
        .as_deref()
        .ok_or_else(|| Error::InvalidInput("no image given".to_string()))?;
    let settings = Settings::merge(args, config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt_out = io::stderr();

    let threshold = match settings.threshold {
        Some(t) => t,
        None => prompt::ask(
            &mut input,
            &mut prompt_out,
            "Input a threshold for black and white pixels: ",
            parse_threshold,
        )?,
    };

    let options = RasterOptions::new(threshold, settings.max_width)?
        .with_correction_factor(settings.correction_factor)?
        .with_filter(settings.filter);

    let message = if args.bitmap {
        None
    } else {
        let text = match settings.message {
            Some(m) => m,
            None => prompt::ask(
                &mut input,
                &mut prompt_out,
                "Enter the message to display with the bitmap: ",
                |s| Ok(s.to_string()),
            )?,
        };
        Some(Message::new(&text)?)
    };

    let bitmap = rasterize_with(&ImageSource::from(image), &options)?;

    let text = match message {
        Some(message) => compose_message(&bitmap, &message).into_text(),
        None => bitmap.to_string(),
    };

    write_output(args.output.as_deref(), &text)?;
    Ok(())
}

/// Write the art to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<(), Error> {
    match path {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            log::info!("Wrote {} bytes to {}", text.len(), path.display());
            eprintln!("File saved to {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) -> CmdResult {
    let path: PathBuf = config_path.map(PathBuf::from).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(&path))?;
            println!("Current configuration:");
            match config.raster.threshold {
                Some(t) => println!("  Threshold: {}", t),
                None => println!("  Threshold: (prompt)"),
            }
            println!("  Max width: {}", config.raster.max_width);
            println!("  Correction factor: {}", config.raster.correction_factor);
            println!("  Filter: {}", config.raster.filter.name());
            match &config.compose.message {
                Some(m) => println!("  Message: {:?}", m),
                None => println!("  Message: (prompt)"),
            }
            println!();

            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
        }
        ConfigAction::Init => {
            if path.exists() {
                return Err(format!(
                    "Config file already exists: {}\nUse 'bitmap-message config show' to view current settings.",
                    path.display()
                )
                .into());
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
            println!("Created config file: {}", path.display());
        }
        ConfigAction::Path => println!("{}", path.display()),
    }

    Ok(())
}
