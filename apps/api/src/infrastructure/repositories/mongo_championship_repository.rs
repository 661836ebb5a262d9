use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use super::mongo_team_repository::TeamDocument;
use super::object_id::{from_object_id, to_object_id};
use crate::domain::championship::Championship;
use crate::domain::repositories::ChampionshipRepository;
use crate::domain::{DocumentId, DomainError, DomainResult};

pub const CHAMPIONSHIPS_COLLECTION: &str = "championships";

/// Stored shape of a championship; teams are embedded documents
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChampionshipDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    season: String,
    #[serde(default)]
    teams: Vec<TeamDocument>,
}

impl ChampionshipDocument {
    fn from_championship(championship: &Championship) -> DomainResult<Self> {
        Ok(Self {
            id: championship.id().map(to_object_id).transpose()?,
            name: championship.name().to_string(),
            season: championship.season().to_string(),
            teams: championship
                .teams()
                .iter()
                .map(TeamDocument::from_team)
                .collect::<DomainResult<_>>()?,
        })
    }

    fn into_championship(self) -> DomainResult<Championship> {
        let teams = self
            .teams
            .into_iter()
            .map(TeamDocument::into_team)
            .collect::<DomainResult<_>>()?;

        Ok(Championship::from_persistence(
            self.id.map(from_object_id).transpose()?,
            self.name,
            self.season,
            teams,
        ))
    }
}

/// MongoDB implementation of ChampionshipRepository
#[derive(Clone)]
pub struct MongoChampionshipRepository {
    collection: Collection<ChampionshipDocument>,
}

impl MongoChampionshipRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(CHAMPIONSHIPS_COLLECTION),
        }
    }
}

#[async_trait]
impl ChampionshipRepository for MongoChampionshipRepository {
    async fn create_championship(&self, championship: Championship) -> DomainResult<Championship> {
        let championship = championship.without_id();
        let document = ChampionshipDocument::from_championship(&championship)?;

        let result = self
            .collection
            .insert_one(document, None)
            .await
            .map_err(|e| DomainError::persistence(e.to_string()))?;

        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DomainError::persistence("inserted id is not an ObjectID"))?;

        Ok(championship.with_id(from_object_id(oid)?))
    }

    async fn get_championship(&self, id: &DocumentId) -> DomainResult<Option<Championship>> {
        let oid = to_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": oid }, None)
            .await
            .map_err(|e| DomainError::persistence(e.to_string()))?
            .map(ChampionshipDocument::into_championship)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::Team;
    use chrono::{TimeZone, Utc};
    use mongodb::bson;

    #[test]
    fn embedded_teams_keep_their_ids() {
        let team_id = DocumentId::parse("670a95a8c135ef7c3d61f3b5").unwrap();
        let team = Team::new(
            "Grêmio",
            "Grêmio Foot-Ball Porto Alegrense",
            "gremio.net",
            Utc.with_ymd_and_hms(1903, 9, 15, 0, 0, 0).unwrap(),
        )
        .unwrap()
        .with_id(team_id.clone());
        let championship = Championship::new("Gauchão", "2024", vec![team]).unwrap();

        let document = ChampionshipDocument::from_championship(&championship).unwrap();
        let stored = bson::to_document(&document).unwrap();
        assert!(!stored.contains_key("_id"));

        let decoded: ChampionshipDocument = bson::from_document(stored).unwrap();
        let restored = decoded.into_championship().unwrap();
        assert_eq!(restored.teams()[0].id(), Some(&team_id));
        assert_eq!(restored, championship);
    }
}
