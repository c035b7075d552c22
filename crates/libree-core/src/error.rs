use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid service URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service password not set; export LIBREE_COUCHDB_PASS")]
    MissingPassword,
}
