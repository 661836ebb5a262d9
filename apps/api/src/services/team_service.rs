//! Team service consumed by the HTTP handlers

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;
use crate::domain::{DocumentId, DomainResult};

/// Team operations available to the transport layer
#[async_trait]
pub trait TeamService: Send + Sync {
    /// Persist a new team, returning it with its assigned identifier
    async fn create_team(&self, team: Team) -> DomainResult<Team>;

    /// Look up a team by the raw identifier received from the client
    ///
    /// Fails with `DomainError::InvalidIdentifier` when `id` is not a valid
    /// document identifier; `Ok(None)` means no team has that identifier.
    async fn get_team(&self, id: &str) -> DomainResult<Option<Team>>;

    /// All teams, empty when none are stored
    async fn get_all_teams(&self) -> DomainResult<Vec<Team>>;
}

/// Pass-through service over a [`TeamRepository`]
///
/// Errors from the repository are returned unchanged.
pub struct DefaultTeamService<R: TeamRepository> {
    repository: Arc<R>,
}

impl<R: TeamRepository> DefaultTeamService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TeamRepository> TeamService for DefaultTeamService<R> {
    async fn create_team(&self, team: Team) -> DomainResult<Team> {
        info!(name = %team.name(), "Creating team");

        let created = self.repository.create_team(team).await?;

        if let Some(id) = created.id() {
            info!(%id, "Team created");
        }

        Ok(created)
    }

    async fn get_team(&self, id: &str) -> DomainResult<Option<Team>> {
        debug!(id, "Fetching team");

        let id = DocumentId::parse(id)?;
        self.repository.get_team(&id).await
    }

    async fn get_all_teams(&self) -> DomainResult<Vec<Team>> {
        let teams = self.repository.get_all_teams().await?;
        debug!(count = teams.len(), "Fetched teams");

        Ok(teams)
    }
}
