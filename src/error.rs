use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Shift value must be a non-negative integer. (got {0})")]
    NegativeShift(i64),

    #[error("Invalid shift value: {0:?}")]
    InvalidShift(String),

    #[error("Nothing to transform: the message is empty")]
    EmptyInput,

    #[error("Unknown command: {0} (type :help for a list)")]
    UnknownCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
