use std::{io, num::ParseIntError, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Invalid order {value:?} for key {key:?}: {source}")]
    InvalidOrder {
        key: String,
        value: String,
        source: ParseIntError,
    },

    #[error("Stored {what} is not valid UTF-8: {source}")]
    Decode {
        what: &'static str,
        source: FromUtf8Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
