use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::object_id::from_object_id;
use crate::domain::repositories::{TeamReader, TeamWriter};
use crate::domain::team::Team;
use crate::domain::{DocumentId, DomainResult};

/// In-memory team repository
///
/// Keeps teams in insertion order and hands out ObjectId-shaped identifiers,
/// so it can stand in for the MongoDB repository in tests.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<Vec<Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamWriter for InMemoryTeamRepository {
    async fn create_team(&self, team: Team) -> DomainResult<Team> {
        let created = team.with_id(from_object_id(ObjectId::new())?);
        self.teams.write().await.push(created.clone());

        Ok(created)
    }
}

#[async_trait]
impl TeamReader for InMemoryTeamRepository {
    async fn get_team(&self, id: &DocumentId) -> DomainResult<Option<Team>> {
        let teams = self.teams.read().await;
        Ok(teams.iter().find(|team| team.id() == Some(id)).cloned())
    }

    async fn get_all_teams(&self) -> DomainResult<Vec<Team>> {
        Ok(self.teams.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn team(name: &str) -> Team {
        Team::new(
            name,
            format!("{name} FC"),
            format!("{}.com", name.to_lowercase()),
            Utc.with_ymd_and_hms(1909, 4, 4, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let repo = InMemoryTeamRepository::new();

        let first = repo.create_team(team("Internacional")).await.unwrap();
        let second = repo.create_team(team("Gremio")).await.unwrap();

        assert!(first.id().is_some());
        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn get_all_keeps_insertion_order() {
        let repo = InMemoryTeamRepository::new();
        assert!(repo.get_all_teams().await.unwrap().is_empty());

        repo.create_team(team("Internacional")).await.unwrap();
        repo.create_team(team("Gremio")).await.unwrap();

        let names: Vec<_> = repo
            .get_all_teams()
            .await
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, ["Internacional", "Gremio"]);
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let repo = InMemoryTeamRepository::new();
        let id = DocumentId::parse("670a95a8c135ef7c3d61f3b5").unwrap();

        assert_eq!(repo.get_team(&id).await.unwrap(), None);
    }
}
