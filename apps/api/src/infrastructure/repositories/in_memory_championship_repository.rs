use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::object_id::from_object_id;
use crate::domain::championship::Championship;
use crate::domain::repositories::ChampionshipRepository;
use crate::domain::{DocumentId, DomainResult};

/// In-memory championship repository for tests
#[derive(Debug, Default)]
pub struct InMemoryChampionshipRepository {
    championships: RwLock<Vec<Championship>>,
}

impl InMemoryChampionshipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChampionshipRepository for InMemoryChampionshipRepository {
    async fn create_championship(&self, championship: Championship) -> DomainResult<Championship> {
        let created = championship.with_id(from_object_id(ObjectId::new())?);
        self.championships.write().await.push(created.clone());

        Ok(created)
    }

    async fn get_championship(&self, id: &DocumentId) -> DomainResult<Option<Championship>> {
        let championships = self.championships.read().await;
        Ok(championships.iter().find(|c| c.id() == Some(id)).cloned())
    }
}
