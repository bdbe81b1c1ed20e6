use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #rrggbb or #rrggbbaa")]
    Color(String),

    #[error("{field} must be finite and non-negative (got {value})")]
    InvalidValue { field: &'static str, value: f64 },
}
