//! Text renderings of the classification table.
//!
//! The C rendering reproduces the legacy fragment byte for byte, including
//! its padding: every entry is written as ` 0xN ,` and each row opens with
//! ` \n  `. Consumers diff against that text, so keep it stable.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::table::{Table, ROW_WIDTH};
use crate::ValidtabError;

/// Output language for the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `#define` constants and a `guchar valid[256]` initializer.
    #[default]
    C,
    /// `pub const` items and a `static VALID: [u8; 256]`.
    Rust,
    /// Pretty-printed JSON object.
    Json,
}

impl FromStr for Format {
    type Err = ValidtabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Format::C),
            "rust" | "rs" => Ok(Format::Rust),
            "json" => Ok(Format::Json),
            other => Err(ValidtabError::Config(format!(
                "unknown format '{other}' (expected c, rust or json)"
            ))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::C => "c",
            Format::Rust => "rust",
            Format::Json => "json",
        };
        f.write_str(name)
    }
}

/// Write `table` to `out` in the requested format.
pub fn write_table<W: Write>(out: &mut W, table: &Table, format: Format) -> Result<(), ValidtabError> {
    log::debug!("emitting table as {format}");
    match format {
        Format::C => write_c(out, table)?,
        Format::Rust => write_rust(out, table)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, table)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Render `table` into a `String`.
pub fn render(table: &Table, format: Format) -> Result<String, ValidtabError> {
    let mut buf = Vec::with_capacity(2048);
    write_table(&mut buf, table, format)?;
    String::from_utf8(buf).map_err(|e| ValidtabError::Config(e.to_string()))
}

fn write_c<W: Write>(out: &mut W, table: &Table) -> std::io::Result<()> {
    writeln!(out, "#define VALID_KEY_CHAR {}", table.valid_key_char)?;
    writeln!(out, "#define VALID_LOCALE_CHAR {}", table.valid_locale_char)?;
    write!(out, "guchar valid[{}] = {{", table.valid.len())?;
    for (i, mask) in table.valid.iter().enumerate() {
        if i % ROW_WIDTH == 0 {
            write!(out, " \n  ")?;
        }
        write!(out, " {:#x} ,", mask)?;
    }
    write!(out, " \n}};\n")
}

fn write_rust<W: Write>(out: &mut W, table: &Table) -> std::io::Result<()> {
    writeln!(out, "pub const VALID_KEY_CHAR: u8 = {};", table.valid_key_char)?;
    writeln!(out, "pub const VALID_LOCALE_CHAR: u8 = {};", table.valid_locale_char)?;
    writeln!(out, "pub static VALID: [u8; {}] = [", table.valid.len())?;
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(|m| format!("{:#x},", m)).collect();
        writeln!(out, "    {}", cells.join(" "))?;
    }
    writeln!(out, "];")
}
