use thiserror::Error;

pub type TurtleResult<T> = Result<T, TurtleError>;

#[derive(Debug, Error)]
pub enum TurtleError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("drawing surface failure: {0}")]
    Surface(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
