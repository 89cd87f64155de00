use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BackdropError {
    #[error("invalid viewport {width}x{height} @ dpr {dpr}")]
    InvalidViewport { width: f64, height: f64, dpr: f64 },
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, BackdropError>;
