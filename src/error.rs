use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Please enter both item name and date")]
    Validation,

    #[error("No item selected")]
    NoSelection,

    #[error("No row \"{input}\" in the current listing")]
    InvalidRow { input: String },

    #[error("Invalid item \"{input}\" (expected NAME@YYYY-MM-DD)")]
    InvalidSeed { input: String },

    #[error("Unknown command: {input}")]
    UnknownCommand { input: String },

    #[error("Failed to read config {path}: {source}")]
    Config {
        path: String,
        source: std::io::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
