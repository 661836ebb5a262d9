use async_trait::async_trait;

use crate::domain::document_id::DocumentId;
use crate::domain::errors::DomainResult;
use crate::domain::team::Team;

/// Read capability over stored teams
#[async_trait]
pub trait TeamReader: Send + Sync {
    /// Find a team by its identifier, `None` when no document matches
    async fn get_team(&self, id: &DocumentId) -> DomainResult<Option<Team>>;

    /// All stored teams in store iteration order
    async fn get_all_teams(&self) -> DomainResult<Vec<Team>>;
}

/// Write capability over stored teams
#[async_trait]
pub trait TeamWriter: Send + Sync {
    /// Insert a team and return it with the store-assigned identifier
    async fn create_team(&self, team: Team) -> DomainResult<Team>;
}

/// Full repository contract for the Team entity
///
/// Implementations should handle database-specific details, including
/// translating between [`DocumentId`] and the store-native identifier.
pub trait TeamRepository: TeamReader + TeamWriter {}

impl<T: TeamReader + TeamWriter> TeamRepository for T {}
