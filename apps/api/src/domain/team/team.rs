use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::document_id::DocumentId;
use crate::domain::errors::DomainError;

/// Seconds between 0001-01-01T00:00:00Z and the Unix epoch
const ZERO_TIMESTAMP_SECS: i64 = -62_135_596_800;

/// The zero value of a timestamp field, 0001-01-01T00:00:00Z
pub fn zero_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_TIMESTAMP_SECS, 0).unwrap_or_default()
}

/// A football team record
///
/// Value type exchanged between the HTTP layer and the document store. The
/// identifier is absent until the store assigns one on creation.
///
/// # Invariants
/// - Name, full name and website are non-empty for teams built through [`Team::new`]
/// - `id` is only ever set by a repository
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use sc_internacional_api::domain::team::Team;
///
/// let team = Team::new(
///     "Internacional",
///     "Sport Club Internacional",
///     "internacional.com.br",
///     Utc.with_ymd_and_hms(1909, 4, 4, 0, 0, 0).unwrap(),
/// )
/// .expect("valid team");
///
/// assert!(team.id().is_none());
/// assert!(!team.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<DocumentId>,
    name: String,
    full_name: String,
    website: String,
    foundation_date: DateTime<Utc>,
}

impl Team {
    /// Creates an unpersisted team
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - naming the first empty required field
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        website: impl Into<String>,
        foundation_date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let team = Self {
            id: None,
            name: name.into(),
            full_name: full_name.into(),
            website: website.into(),
            foundation_date,
        };

        team.validate()?;

        Ok(team)
    }

    /// Checks required-field presence
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if self.full_name.is_empty() {
            return Err(DomainError::validation("fullName is required"));
        }
        if self.website.is_empty() {
            return Err(DomainError::validation("website is required"));
        }
        if self.foundation_date == zero_timestamp() {
            return Err(DomainError::validation("foundationDate is required"));
        }

        Ok(())
    }

    /// True when every field holds its zero value
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_empty()
            && self.full_name.is_empty()
            && self.website.is_empty()
            && self.foundation_date == zero_timestamp()
    }

    /// Returns the team with the store-assigned identifier attached
    pub fn with_id(mut self, id: DocumentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Drops any identifier, e.g. before handing the team to the store for insertion
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    // ===== Getters =====

    pub fn id(&self) -> Option<&DocumentId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn foundation_date(&self) -> DateTime<Utc> {
        self.foundation_date
    }

    /// Reconstructs a Team from stored data without validation
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: Option<DocumentId>,
        name: String,
        full_name: String,
        website: String,
        foundation_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            full_name,
            website,
            foundation_date,
        }
    }
}

impl Default for Team {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            full_name: String::new(),
            website: String::new(),
            foundation_date: zero_timestamp(),
        }
    }
}
