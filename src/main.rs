mod cli;

use bitmap_message::config::Config;
use clap::Parser;
use cli::{handle_config_action, render, Args, Command};

/// Initialize logging: warn by default, raised by -v, overridden by RUST_LOG.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Some(Command::Config { ref action }) => {
            handle_config_action(action.clone(), args.config.as_deref())
        }
        None => match Config::load(args.config.as_deref()) {
            Ok(config) => render(&args, &config),
            Err(e) => Err(e.into()),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
