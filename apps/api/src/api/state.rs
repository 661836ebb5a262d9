use mongodb::Database;
use std::sync::Arc;

use crate::infrastructure::repositories::{
    InMemoryChampionshipRepository, InMemoryTeamRepository, MongoChampionshipRepository,
    MongoTeamRepository,
};
use crate::services::{
    ChampionshipService, DefaultChampionshipService, DefaultTeamService, TeamService,
};

/// Services shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<dyn TeamService>,
    pub championships: Arc<dyn ChampionshipService>,
}

impl AppState {
    pub fn new(teams: Arc<dyn TeamService>, championships: Arc<dyn ChampionshipService>) -> Self {
        Self {
            teams,
            championships,
        }
    }

    /// Wires the services to MongoDB-backed repositories
    pub fn with_mongo(database: &Database) -> Self {
        Self::new(
            Arc::new(DefaultTeamService::new(Arc::new(MongoTeamRepository::new(
                database,
            )))),
            Arc::new(DefaultChampionshipService::new(Arc::new(
                MongoChampionshipRepository::new(database),
            ))),
        )
    }

    /// Wires the services to empty in-memory repositories
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(DefaultTeamService::new(Arc::new(
                InMemoryTeamRepository::new(),
            ))),
            Arc::new(DefaultChampionshipService::new(Arc::new(
                InMemoryChampionshipRepository::new(),
            ))),
        )
    }
}
