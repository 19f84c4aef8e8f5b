use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
    #[error("invalid rgb()/rgba() color '{0}'")]
    InvalidRgb(String),
    #[error("unrecognized color '{0}'")]
    Unrecognized(String),
    #[error("invalid palette options: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ColorError>;
