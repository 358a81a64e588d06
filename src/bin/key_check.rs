use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use validtab::io_utils::{io_cli_error, simple_cli_error, CliError};
use validtab::{classify_line, LineKind};

/// Check key names and locales in a desktop-entry style file.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to scan. Reads standard input when omitted.
    file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    log_level: log::LevelFilter,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|e| io_cli_error("opening", path, e))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut section: Option<String> = None;
    let mut entries = 0usize;
    let mut errors = 0usize;

    // Split on raw bytes; legacy-encoded files are not UTF-8.
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| CliError {
            msg: format!("Error reading line {}: {}", idx + 1, e),
            source: Some(Box::new(e)),
        })?;
        let line_nr = idx + 1;
        match classify_line(&line) {
            Ok(LineKind::Section(name)) => {
                log::debug!("line {line_nr}: section [{name}]");
                section = Some(name.to_string());
            }
            Ok(LineKind::Entry(kl)) => {
                log::debug!(
                    "line {line_nr}: key={} locale={:?} value={:?}",
                    kl.key,
                    kl.locale,
                    String::from_utf8_lossy(kl.value)
                );
                entries += 1;
            }
            Ok(LineKind::Blank) | Ok(LineKind::Comment) => {}
            Err(e) => {
                errors += 1;
                match &section {
                    Some(s) => eprintln!("Error in section {s} at line {line_nr}: {e}"),
                    None => eprintln!("Error at line {line_nr}: {e}"),
                }
            }
        }
    }

    println!("{entries} entries, {errors} errors");
    if errors > 0 {
        return Err(simple_cli_error(&format!("{errors} invalid line(s)")));
    }
    Ok(())
}
