use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid item id: {0:?}")]
    InvalidItemId(String),

    #[error("invalid name for item {id}: {reason}")]
    InvalidItemName { id: String, reason: String },

    #[error("duplicate item id: {0}")]
    DuplicateItemId(String),

    #[error("malformed catalog: {0}")]
    MalformedCatalog(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
