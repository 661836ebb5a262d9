use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::championship::Championship;
use crate::domain::repositories::ChampionshipRepository;
use crate::domain::{DocumentId, DomainResult};

/// Championship operations available to the transport layer
#[async_trait]
pub trait ChampionshipService: Send + Sync {
    async fn create_championship(&self, championship: Championship) -> DomainResult<Championship>;

    async fn get_championship(&self, id: &str) -> DomainResult<Option<Championship>>;
}

pub struct DefaultChampionshipService<R: ChampionshipRepository> {
    repository: Arc<R>,
}

impl<R: ChampionshipRepository> DefaultChampionshipService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ChampionshipRepository> ChampionshipService for DefaultChampionshipService<R> {
    async fn create_championship(&self, championship: Championship) -> DomainResult<Championship> {
        info!(
            name = %championship.name(),
            season = %championship.season(),
            teams = championship.teams().len(),
            "Creating championship"
        );

        self.repository.create_championship(championship).await
    }

    async fn get_championship(&self, id: &str) -> DomainResult<Option<Championship>> {
        debug!(id, "Fetching championship");

        let id = DocumentId::parse(id)?;
        self.repository.get_championship(&id).await
    }
}
