use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArcwayError {
    #[error("Control point error: {0}")]
    ControlPoint(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Tolerance violation: {0}")]
    Tolerance(String),
}

pub type Result<T> = std::result::Result<T, ArcwayError>;
