// Repository contracts (ports)
// Implemented by adapters in the infrastructure layer

pub mod championship_repository;
pub mod team_repository;

pub use championship_repository::ChampionshipRepository;
pub use team_repository::{TeamReader, TeamRepository, TeamWriter};
