use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidtabError {
    /// JSON rendering failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown output format or other bad option.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
