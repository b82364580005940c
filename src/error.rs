//! @ai:module:intent Define error types for the listing sync
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all sync operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing Etsy credentials: {}. Please set ETSY_API_KEY, ETSY_SHOP_ID, ETSY_ACCESS_TOKEN.", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Row {row}: missing field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("Row {row}: field '{field}' is not an integer: {value:?}")]
    ValueFormat {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Etsy API error ({status}): {body}")]
    Remote { status: u16, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to write config file: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
