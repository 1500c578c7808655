use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Selector error: {0}")]
    SelectorError(String),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
