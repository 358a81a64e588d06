//! Byte classification table for desktop-entry keys and locales.
//!
//! Every byte value maps to a two-bit mask: [`VALID_KEY_CHAR`] marks bytes
//! allowed in a key name and [`VALID_LOCALE_CHAR`] marks bytes allowed in a
//! `[locale]` suffix. The table is computed at compile time and can be
//! rendered as a C, Rust or JSON fragment with [`write_table`].

mod charclass;
pub mod config;
mod emit;
mod error;
pub mod io_utils;
mod key;
mod table;

pub use charclass::{
    classify, is_key_char, is_locale_char, TABLE_LEN, VALID, VALID_KEY_CHAR, VALID_LOCALE_CHAR,
};
pub use config::Config;
pub use emit::{render, write_table, Format};
pub use error::ValidtabError;
pub use key::{classify_line, parse_key_line, KeyError, KeyLine, LineKind};
pub use table::{Table, ROW_WIDTH};

use std::fs::File;
use std::io::{self, BufWriter};

/// Generate the table and write it where `config` points.
pub fn generate(config: &Config) -> Result<(), ValidtabError> {
    let table = Table::generate();
    log::debug!("mask histogram (0..=3): {:?}", table.histogram());
    match &config.output {
        Some(path) => {
            log::info!("writing {} table to {}", config.format, path.display());
            let mut out = BufWriter::new(File::create(path)?);
            write_table(&mut out, &table, config.format)
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_table(&mut out, &table, config.format)
        }
    }
}
