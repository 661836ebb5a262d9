use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::DomainError;

/// Message returned when a string cannot be read as a document identifier
pub const INVALID_ID_MESSAGE: &str = "the provided hex string is not a valid ObjectID";

const ID_LENGTH: usize = 24;

/// Identifier assigned by the document store
///
/// Wraps the store's 12-byte object identifier in its hex form. The value is
/// validated once on construction and always held in lowercase, so the layers
/// above the repository never see the store-native type.
///
/// # Example
/// ```
/// use sc_internacional_api::domain::DocumentId;
///
/// let id = DocumentId::parse("670A95A8C135EF7C3D61F3B5").expect("valid id");
/// assert_eq!(id.as_str(), "670a95a8c135ef7c3d61f3b5");
/// assert!(DocumentId::parse("1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    /// Parses a 24-character hex string
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.len() != ID_LENGTH || !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::invalid_identifier(INVALID_ID_MESSAGE));
        }

        Ok(Self(value.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}
