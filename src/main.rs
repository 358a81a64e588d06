use std::path::PathBuf;

use clap::Parser;
use validtab::io_utils::{io_cli_error, validtab_cli_error, CliError};
use validtab::{generate, Config, Format, ValidtabError};

/// Print the key/locale byte classification table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output language: c, rust or json.
    #[arg(long, default_value = "c")]
    format: Format,

    /// Write to this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    log_level: log::LevelFilter,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .init();

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config {
        format: args.format,
        output: args.output,
    };
    log::debug!("{config:?}");

    generate(&config).map_err(|err| match (err, &config.output) {
        (ValidtabError::Io(e), Some(path)) => io_cli_error("writing", path, e),
        (err, _) => validtab_cli_error("failed to emit table", err),
    })
}
