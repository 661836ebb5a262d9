// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_championship_repository;
pub mod in_memory_team_repository;
pub mod mongo_championship_repository;
pub mod mongo_team_repository;
mod object_id;

pub use in_memory_championship_repository::InMemoryChampionshipRepository;
pub use in_memory_team_repository::InMemoryTeamRepository;
pub use mongo_championship_repository::MongoChampionshipRepository;
pub use mongo_team_repository::MongoTeamRepository;
