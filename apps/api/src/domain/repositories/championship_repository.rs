use async_trait::async_trait;

use crate::domain::championship::Championship;
use crate::domain::document_id::DocumentId;
use crate::domain::errors::DomainResult;

/// Repository trait for championships
#[async_trait]
pub trait ChampionshipRepository: Send + Sync {
    /// Insert a championship and return it with the store-assigned identifier
    async fn create_championship(&self, championship: Championship) -> DomainResult<Championship>;

    /// Find a championship by its identifier
    async fn get_championship(&self, id: &DocumentId) -> DomainResult<Option<Championship>>;
}
