use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not write ranking CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Bad weights or ranking JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid generator input: {0}")]
    Range(String),
}

pub type ProbeResult<T> = Result<T, ProbeError>;
