use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use super::object_id::{from_object_id, to_object_id};
use crate::domain::repositories::{TeamReader, TeamWriter};
use crate::domain::team::Team;
use crate::domain::{DocumentId, DomainError, DomainResult};

pub const TEAMS_COLLECTION: &str = "teams";

/// Stored shape of a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TeamDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub full_name: String,
    pub website: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub foundation_date: DateTime<Utc>,
}

impl TeamDocument {
    pub fn from_team(team: &Team) -> DomainResult<Self> {
        Ok(Self {
            id: team.id().map(to_object_id).transpose()?,
            name: team.name().to_string(),
            full_name: team.full_name().to_string(),
            website: team.website().to_string(),
            foundation_date: team.foundation_date(),
        })
    }

    pub fn into_team(self) -> DomainResult<Team> {
        Ok(Team::from_persistence(
            self.id.map(from_object_id).transpose()?,
            self.name,
            self.full_name,
            self.website,
            self.foundation_date,
        ))
    }
}

/// MongoDB implementation of the team repository
///
/// Stores teams in the `teams` collection with the store-assigned ObjectId as `_id`.
#[derive(Clone)]
pub struct MongoTeamRepository {
    collection: Collection<TeamDocument>,
}

impl MongoTeamRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(TEAMS_COLLECTION),
        }
    }
}

#[async_trait]
impl TeamWriter for MongoTeamRepository {
    async fn create_team(&self, team: Team) -> DomainResult<Team> {
        let team = team.without_id();
        let document = TeamDocument::from_team(&team)?;

        let result = self
            .collection
            .insert_one(document, None)
            .await
            .map_err(|e| DomainError::persistence(e.to_string()))?;

        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DomainError::persistence("inserted id is not an ObjectID"))?;

        Ok(team.with_id(from_object_id(oid)?))
    }
}

#[async_trait]
impl TeamReader for MongoTeamRepository {
    async fn get_team(&self, id: &DocumentId) -> DomainResult<Option<Team>> {
        let oid = to_object_id(id)?;

        let document = self
            .collection
            .find_one(doc! { "_id": oid }, None)
            .await
            .map_err(|e| DomainError::persistence(e.to_string()))?;

        document.map(TeamDocument::into_team).transpose()
    }

    async fn get_all_teams(&self) -> DomainResult<Vec<Team>> {
        let cursor = self
            .collection
            .find(doc! {}, None)
            .await
            .map_err(|e| DomainError::persistence(e.to_string()))?;

        let documents: Vec<TeamDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| DomainError::persistence(e.to_string()))?;

        documents.into_iter().map(TeamDocument::into_team).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mongodb::bson::{self, Bson};

    fn internacional() -> Team {
        Team::new(
            "Internacional",
            "Sport Club Internacional",
            "internacional.com.br",
            Utc.with_ymd_and_hms(1909, 4, 4, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn unpersisted_team_has_no_id_field() {
        let document = TeamDocument::from_team(&internacional()).unwrap();
        let stored = bson::to_document(&document).unwrap();

        assert!(!stored.contains_key("_id"));
        assert_eq!(stored.get_str("fullName").unwrap(), "Sport Club Internacional");
        assert!(matches!(stored.get("foundationDate"), Some(Bson::DateTime(_))));
    }

    #[test]
    fn stored_document_decodes_into_team() {
        let oid = ObjectId::parse_str("670a95a8c135ef7c3d61f3b5").unwrap();
        let stored = doc! {
            "_id": oid,
            "name": "Internacional",
            "fullName": "Sport Club Internacional",
            "website": "internacional.com.br",
            "foundationDate": bson::DateTime::from_chrono(
                Utc.with_ymd_and_hms(1909, 4, 4, 0, 0, 0).unwrap()
            ),
        };

        let document: TeamDocument = bson::from_document(stored).unwrap();
        let team = document.into_team().unwrap();

        let expected = internacional().with_id(DocumentId::parse("670a95a8c135ef7c3d61f3b5").unwrap());
        assert_eq!(team, expected);
    }
}
