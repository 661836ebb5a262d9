use thiserror::Error;

/// Errors produced by the domain, service and repository layers
///
/// Every variant displays the literal underlying message so the HTTP layer can
/// hand it to clients unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required field is missing or empty
    #[error("{0}")]
    Validation(String),

    /// A path identifier is not a structurally valid document identifier
    #[error("{0}")]
    InvalidIdentifier(String),

    /// The document store rejected or failed an operation
    #[error("{0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
