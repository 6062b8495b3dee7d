use crate::pattern::PatternError;
use crate::router::DispatchError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl RouterError {
    /// The HTTP status the host layer should render when dispatch surfaces
    /// this error. Registration-time errors have no wire mapping and render
    /// as a plain 500.
    pub fn status(&self) -> u16 {
        match self {
            Self::Dispatch(err) => err.status(),
            Self::Pattern(_) => 500,
        }
    }
}

pub type RouterResult<T> = Result<T, RouterError>;
