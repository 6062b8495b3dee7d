use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route pattern is empty")]
    EmptyPattern,
}

pub type PatternResult<T> = Result<T, PatternError>;
