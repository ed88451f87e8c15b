use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocboardError {
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL operation '{operation}' failed: {errors}")]
    GraphQl { operation: String, errors: String },

    #[error("GraphQL response contained no data")]
    NoResponseData,

    #[error("field '{0}' not found in project metadata")]
    UnknownField(String),

    #[error("option '{option}' not found on field '{field}'")]
    UnknownOption { field: String, option: String },

    #[error("unexpected response shape: {0}")]
    MissingData(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocboardError>;
