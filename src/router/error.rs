use thiserror::Error;

use crate::method::HttpMethod;

/// The two expected dispatch outcomes besides a handler invocation. Neither
/// is logged by the core; the host layer renders them as 404 and 405.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no registered pattern matches path '{path}'")]
    RouteNotFound { path: String },
    #[error("path '{path}' matched but method {method} is not registered for it")]
    MethodNotAllowed { path: String, method: HttpMethod },
}

impl DispatchError {
    /// The HTTP status the host layer should render for this outcome.
    pub fn status(&self) -> u16 {
        match self {
            Self::RouteNotFound { .. } => 404,
            Self::MethodNotAllowed { .. } => 405,
        }
    }
}
