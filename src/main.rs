use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tagnamer::{run, Config};

/// Assign unique `name` attributes to XML elements, by tag.
///
/// Reads a TOML configuration file naming the input files, the output
/// directory, and the tags to treat, then writes converted copies of
/// every input to the output directory.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the TOML configuration file.
    config: PathBuf,
    /// Write outputs here instead of the configured output_dir.
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let text = match std::fs::read_to_string(&cli.config) {
        Ok(text) => text,
        Err(e) => {
            log::error!("{}: {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let mut config: Config = match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}: {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
