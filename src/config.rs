use std::path::PathBuf;

use crate::emit::Format;

/// Runtime options for the table generator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output language of the generated fragment.
    pub format: Format,
    /// Destination file. `None` writes to standard output.
    pub output: Option<PathBuf>,
}
