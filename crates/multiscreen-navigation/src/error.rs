use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("no registered route matches `{route}`")]
    RouteNotFound { route: String },
    #[error("cannot pop the root entry of the back stack")]
    EmptyStack,
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },
    #[error("route pattern `{pattern}` is already registered")]
    DuplicatePattern { pattern: String },
}
