use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RouteError {
    #[error("invalid route: {reason}")]
    InvalidRoute { reason: String },
    #[error("point set is empty")]
    EmptyPointSet,
    #[error("start index {start} is out of range for {len} points")]
    StartOutOfRange { start: u32, len: usize },
    #[error("cannot compute improvement against a zero-length baseline")]
    DivisionByZero,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;

impl RouteError {
    pub fn invalid_route(reason: impl Into<String>) -> Self {
        Self::InvalidRoute {
            reason: reason.into(),
        }
    }
}
