use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unknown sampling method: {0}")]
    UnknownMethod(String),

    #[error("rater sequences differ in length ({left} vs {right})")]
    RaterLengthMismatch { left: usize, right: usize },

    #[error("no ratings supplied")]
    NoRatings,

    #[error("invalid configuration value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
