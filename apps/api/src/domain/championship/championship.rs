use serde::{Deserialize, Serialize};

use crate::domain::document_id::DocumentId;
use crate::domain::errors::DomainError;
use crate::domain::team::Team;

/// A championship season with its participating teams embedded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Championship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<DocumentId>,
    name: String,
    season: String,
    teams: Vec<Team>,
}

impl Championship {
    /// Creates an unpersisted championship
    pub fn new(
        name: impl Into<String>,
        season: impl Into<String>,
        teams: Vec<Team>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let season = season.into();

        if name.is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if season.is_empty() {
            return Err(DomainError::validation("season is required"));
        }

        Ok(Self {
            id: None,
            name,
            season,
            teams,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_empty() && self.season.is_empty() && self.teams.is_empty()
    }

    pub fn with_id(mut self, id: DocumentId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    pub fn id(&self) -> Option<&DocumentId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn season(&self) -> &str {
        &self.season
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Reconstructs a Championship from stored data without validation
    pub fn from_persistence(
        id: Option<DocumentId>,
        name: String,
        season: String,
        teams: Vec<Team>,
    ) -> Self {
        Self {
            id,
            name,
            season,
            teams,
        }
    }
}
