use thiserror::Error;

/// Failure to read a domain value from user-supplied text (CLI args, config).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown role '{0}' (expected doctor or student)")]
    UnknownRole(String),
    #[error("unknown view '{0}' (expected feed, upload, profile or auth)")]
    UnknownView(String),
    #[error("unknown gender '{0}'")]
    UnknownGender(String),
}
