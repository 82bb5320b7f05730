use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypeError {
    #[error("Expected a JSON object for {0}")]
    NotAnObject(&'static str),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid JSON value: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot determine home directory")]
    HomeDirNotFound,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
